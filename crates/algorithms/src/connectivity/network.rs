//! Cached patch-network analysis surface
//!
//! `PatchNetwork` labels a habitat grid once and answers repeated
//! connectivity queries against the cached label grid and size index.
//! Queries take `&self`, so a constructed network can be shared freely.

use crate::connectivity::{
    component_areas, label_patches, largest_component_fraction, link_density, patch_links_with_sizes,
    patch_sizes, ConnectivityReport, LabelParams, LinkParams,
};
use patchlink_core::{Error, Grid, Result};
use std::collections::{BTreeSet, HashMap};

/// A labeled habitat landscape ready for connectivity queries.
#[derive(Debug, Clone)]
pub struct PatchNetwork {
    labels: Grid<u32>,
    sizes: HashMap<u32, usize>,
}

impl PatchNetwork {
    /// Build a network from raw row-major habitat cells.
    ///
    /// Fails fast when the declared dimensions do not match the number of
    /// supplied cells.
    pub fn new(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or(Error::InvalidParameter {
            name: "dimensions",
            value: format!("{rows} x {cols}"),
            reason: "cell count overflows usize".to_string(),
        })?;
        if cells.len() != expected {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                len: cells.len(),
            });
        }

        let habitat = Grid::from_vec(cells, rows, cols)?;
        Ok(Self::from_grid(&habitat))
    }

    /// Build a network from a habitat grid with default labeling (8-connectivity).
    pub fn from_grid(habitat: &Grid<u8>) -> Self {
        Self::with_params(habitat, LabelParams::default())
    }

    /// Build a network with explicit labeling parameters.
    pub fn with_params(habitat: &Grid<u8>, params: LabelParams) -> Self {
        let labels = label_patches(habitat, params);
        let sizes = patch_sizes(&labels);
        Self { labels, sizes }
    }

    /// Number of patches in the landscape
    pub fn patch_count(&self) -> usize {
        self.sizes.len()
    }

    /// Patch-ID → cell-count index
    pub fn sizes(&self) -> &HashMap<u32, usize> {
        &self.sizes
    }

    /// The cached label grid (0 = matrix, positive = patch ID)
    pub fn labels(&self) -> &Grid<u32> {
        &self.labels
    }

    /// Dispersal links for the given thresholds
    pub fn links(&self, min_habitat: usize, max_disp_dist: usize) -> BTreeSet<(u32, u32)> {
        patch_links_with_sizes(
            &self.labels,
            &self.sizes,
            LinkParams {
                min_habitat,
                max_disp_dist,
            },
        )
    }

    /// Link density for the given thresholds, in [0, 1]
    pub fn link_density(&self, min_habitat: usize, max_disp_dist: usize) -> f64 {
        link_density(&self.links(min_habitat, max_disp_dist))
    }

    /// Largest-component area fraction for the given thresholds, in [0, 1]
    pub fn largest_component_fraction(&self, min_habitat: usize, max_disp_dist: usize) -> f64 {
        largest_component_fraction(
            &self.links(min_habitat, max_disp_dist),
            &self.sizes,
            min_habitat,
        )
    }

    /// Habitat area of each link-graph component for the given thresholds
    pub fn component_areas(&self, min_habitat: usize, max_disp_dist: usize) -> Vec<usize> {
        component_areas(&self.links(min_habitat, max_disp_dist), &self.sizes)
    }

    /// Full connectivity summary for the given thresholds
    pub fn report(&self, min_habitat: usize, max_disp_dist: usize) -> ConnectivityReport {
        let links = self.links(min_habitat, max_disp_dist);
        let areas = component_areas(&links, &self.sizes);
        let total: usize = self
            .sizes
            .values()
            .filter(|&&size| size >= min_habitat)
            .sum();
        let largest = areas.iter().copied().max().unwrap_or(0);

        ConnectivityReport {
            patch_count: self.patch_count(),
            link_count: links.len(),
            link_density: link_density(&links),
            largest_component_fraction: if total == 0 {
                0.0
            } else {
                largest as f64 / total as f64
            },
            component_areas: areas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_rejects_dimension_mismatch() {
        let result = PatchNetwork::new(3, 3, vec![1u8; 8]);
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions { rows: 3, cols: 3, len: 8 })
        ));
    }

    #[test]
    fn test_network_degenerate_landscape() {
        // All-matrix grid: zero everything, metrics defined as 0.0
        let network = PatchNetwork::new(4, 6, vec![0u8; 24]).unwrap();

        assert_eq!(network.patch_count(), 0);
        assert!(network.sizes().is_empty());
        assert!(network.links(1, 1).is_empty());
        assert_eq!(network.link_density(1, 1), 0.0);
        assert_eq!(network.largest_component_fraction(1, 1), 0.0);
    }

    #[test]
    fn test_network_queries_are_repeatable() {
        let cells = vec![
            1u8, 0, 1, 0, 0,
            0, 0, 0, 0, 1,
            1, 1, 0, 0, 1,
        ];
        let network = PatchNetwork::new(3, 5, cells).unwrap();

        let first = network.links(1, 1);
        let second = network.links(1, 1);
        assert_eq!(first, second);

        let report_a = network.report(1, 2);
        let report_b = network.report(1, 2);
        assert_eq!(report_a.link_count, report_b.link_count);
        assert_eq!(report_a.component_areas, report_b.component_areas);
    }

    #[test]
    fn test_network_report_consistency() {
        let cells = vec![
            1u8, 0, 1,
            0, 0, 0,
            1, 0, 0,
        ];
        let network = PatchNetwork::new(3, 3, cells).unwrap();
        let report = network.report(1, 1);

        assert_eq!(report.patch_count, network.patch_count());
        assert_eq!(report.link_count, network.links(1, 1).len());
        assert!((report.link_density - network.link_density(1, 1)).abs() < 1e-12);
        assert!(
            (report.largest_component_fraction - network.largest_component_fraction(1, 1)).abs()
                < 1e-12
        );
    }
}
