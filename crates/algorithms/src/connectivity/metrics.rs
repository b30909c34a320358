//! Scalar connectivity metrics
//!
//! Derives landscape-level summary values from a link set and size index.
//! Every division is guarded: degenerate inputs yield 0.0, never an error.

use crate::connectivity::component_areas;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Link density of the patch network.
///
/// `L / (n * (n - 1) / 2)` where `L` is the link count and `n` the number
/// of distinct patches appearing in any link. Returns 0.0 when fewer than
/// two patches are linked.
pub fn link_density(links: &BTreeSet<(u32, u32)>) -> f64 {
    let nodes: BTreeSet<u32> = links.iter().flat_map(|&(a, b)| [a, b]).collect();
    let n = nodes.len();

    if n < 2 {
        return 0.0;
    }

    let possible = (n * (n - 1)) as f64 / 2.0;
    links.len() as f64 / possible
}

/// Area fraction of the largest link-graph component.
///
/// `max(component areas) / total qualifying area`, where the denominator
/// sums the sizes of **all** patches meeting `min_habitat`, including
/// patches with no links, which can never appear in the numerator (see
/// [`component_areas`]). Returns 0.0 when there are no links or no
/// qualifying patches.
pub fn largest_component_fraction(
    links: &BTreeSet<(u32, u32)>,
    sizes: &HashMap<u32, usize>,
    min_habitat: usize,
) -> f64 {
    let total: usize = sizes.values().filter(|&&size| size >= min_habitat).sum();
    if total == 0 {
        return 0.0;
    }

    let largest = component_areas(links, sizes).into_iter().max().unwrap_or(0);
    largest as f64 / total as f64
}

/// Summary of one connectivity query against a patch network.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityReport {
    /// Number of patches in the landscape (before size filtering)
    pub patch_count: usize,
    /// Number of dispersal links found
    pub link_count: usize,
    /// Link density in [0, 1]
    pub link_density: f64,
    /// Largest-component area fraction in [0, 1]
    pub largest_component_fraction: f64,
    /// Habitat area of each link-graph component
    pub component_areas: Vec<usize>,
}
