//! Habitat patch labeling
//!
//! Identifies contiguous groups of habitat cells ("patches") and assigns
//! each group a unique positive ID. Labeling is non-destructive: the input
//! habitat grid is left untouched and a fresh label grid is returned.

use ndarray::Array2;
use patchlink_core::grid::{Grid, Neighborhood};
use patchlink_core::{Algorithm, Error, Result};
use std::collections::VecDeque;
use tracing::debug;

/// Cell adjacency used when growing patches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Orthogonal neighbors only
    Four,
    /// Orthogonal and diagonal neighbors
    #[default]
    Eight,
}

impl Connectivity {
    fn neighborhood(self) -> Neighborhood {
        match self {
            Connectivity::Four => Neighborhood::Rook3x3,
            Connectivity::Eight => Neighborhood::Queen3x3,
        }
    }
}

/// Parameters for patch labeling
#[derive(Debug, Clone, Default)]
pub struct LabelParams {
    /// Adjacency rule for merging habitat cells into one patch
    pub connectivity: Connectivity,
}

/// Patch labeling algorithm
#[derive(Debug, Clone, Default)]
pub struct LabelPatches;

impl Algorithm for LabelPatches {
    type Input = Grid<u8>;
    type Output = Grid<u32>;
    type Params = LabelParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "LabelPatches"
    }

    fn description(&self) -> &'static str {
        "Label contiguous habitat cells into uniquely numbered patches"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        Ok(label_patches(&input, params))
    }
}

/// Label contiguous habitat cells into patches.
///
/// Scans cells in row-major order; each not-yet-labeled habitat cell seeds
/// a breadth-first flood fill over the configured neighborhood, and every
/// cell reached gets the current patch ID. IDs are contiguous from 1 in
/// seed-discovery order.
///
/// An empty or all-matrix grid yields a grid of zeros.
///
/// # Arguments
/// * `habitat` - Habitat grid (0 = matrix, nonzero = habitat)
/// * `params` - Labeling parameters (connectivity)
///
/// # Returns
/// Label grid of the same shape (0 = matrix, positive = patch ID)
pub fn label_patches(habitat: &Grid<u8>, params: LabelParams) -> Grid<u32> {
    let (rows, cols) = habitat.shape();
    let offsets = params.connectivity.neighborhood().offsets_no_center();
    let mut labels = Array2::<u32>::zeros((rows, cols));
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut patch_id: u32 = 0;

    for row in 0..rows {
        for col in 0..cols {
            let cell = unsafe { habitat.get_unchecked(row, col) };
            if cell == 0 || labels[(row, col)] != 0 {
                continue;
            }

            // New patch: grow it with an explicit work queue
            patch_id += 1;
            labels[(row, col)] = patch_id;
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                for &(dr, dc) in &offsets {
                    let Some((nr, nc)) = habitat.neighbor(r, c, dr, dc) else {
                        continue;
                    };

                    if labels[(nr, nc)] != 0 {
                        continue;
                    }

                    let neighbor = unsafe { habitat.get_unchecked(nr, nc) };
                    if neighbor == 0 {
                        continue;
                    }

                    labels[(nr, nc)] = patch_id;
                    queue.push_back((nr, nc));
                }
            }
        }
    }

    debug!(patches = patch_id, rows, cols, "labeled habitat grid");

    Grid::from_array(labels)
}
