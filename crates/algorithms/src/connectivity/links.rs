//! Dispersal link discovery
//!
//! Finds unordered pairs of patches that could exchange dispersers: both
//! patches must meet a minimum size, and some pair of their cells must fall
//! within a square search window derived from the dispersal distance.

use crate::connectivity::patch_sizes;
use crate::maybe_rayon::*;
use patchlink_core::grid::{Grid, Neighborhood};
use patchlink_core::{Algorithm, Error, Result};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Parameters for link discovery
#[derive(Debug, Clone, Default)]
pub struct LinkParams {
    /// Minimum patch size (cell count) required to participate in links
    pub min_habitat: usize,
    /// Maximum dispersal distance in cells. Two patches are linkable when
    /// the matrix gap between them is at most this many cells, i.e. the
    /// search window half-width is `max_disp_dist + 1`.
    pub max_disp_dist: usize,
}

/// Link discovery algorithm
#[derive(Debug, Clone, Default)]
pub struct PatchLinks;

impl Algorithm for PatchLinks {
    type Input = Grid<u32>;
    type Output = BTreeSet<(u32, u32)>;
    type Params = LinkParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "PatchLinks"
    }

    fn description(&self) -> &'static str {
        "Find dispersal links between habitat patches under size and distance thresholds"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        Ok(patch_links(&input, params))
    }
}

/// Find all dispersal links in a labeled grid.
///
/// Computes the size index from the labels, then delegates to
/// [`patch_links_with_sizes`].
pub fn patch_links(labels: &Grid<u32>, params: LinkParams) -> BTreeSet<(u32, u32)> {
    let sizes = patch_sizes(labels);
    patch_links_with_sizes(labels, &sizes, params)
}

/// Find all dispersal links in a labeled grid, given its size index.
///
/// Every cell of a qualifying patch scans the square window of half-width
/// `max_disp_dist + 1` around itself; any in-bounds cell of a different
/// qualifying patch yields a link. Pairs are stored with the smaller ID
/// first, so each unordered pair appears at most once and the result is
/// independent of scan order.
///
/// # Arguments
/// * `labels` - Label grid (0 = matrix, positive = patch ID)
/// * `sizes` - Patch size index for `labels`
/// * `params` - Link parameters (minimum size, dispersal distance)
///
/// # Returns
/// Set of canonical `(a, b)` pairs with `a < b`
pub fn patch_links_with_sizes(
    labels: &Grid<u32>,
    sizes: &HashMap<u32, usize>,
    params: LinkParams,
) -> BTreeSet<(u32, u32)> {
    let (rows, cols) = labels.shape();
    let window = Neighborhood::Square(params.max_disp_dist + 1);
    let offsets = window.offsets_no_center();

    let qualifies =
        |id: u32| -> bool { sizes.get(&id).is_some_and(|&size| size >= params.min_habitat) };

    // Each row's pairs are collected independently, then merged into the set
    let pairs: Vec<(u32, u32)> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_pairs: Vec<(u32, u32)> = Vec::new();

            for col in 0..cols {
                let id = unsafe { labels.get_unchecked(row, col) };
                if id == 0 || !qualifies(id) {
                    continue;
                }

                for &(dr, dc) in &offsets {
                    let Some((nr, nc)) = labels.neighbor(row, col, dr, dc) else {
                        continue;
                    };

                    let other = unsafe { labels.get_unchecked(nr, nc) };
                    if other == 0 || other == id || !qualifies(other) {
                        continue;
                    }

                    row_pairs.push((id.min(other), id.max(other)));
                }
            }

            row_pairs
        })
        .collect();

    let links: BTreeSet<(u32, u32)> = pairs.into_iter().collect();

    debug!(
        links = links.len(),
        min_habitat = params.min_habitat,
        max_disp_dist = params.max_disp_dist,
        "discovered dispersal links"
    );

    links
}
