//! Patch size accounting
//!
//! Frequency-counts positive labels into a patch-ID → cell-count index.

use patchlink_core::grid::Grid;
use std::collections::HashMap;

/// Compute the cell count of every patch in a label grid.
///
/// Matrix cells (label 0) are skipped. An all-matrix grid yields an empty
/// map; every patch present has size >= 1.
pub fn patch_sizes(labels: &Grid<u32>) -> HashMap<u32, usize> {
    let mut sizes: HashMap<u32, usize> = HashMap::new();

    for &label in labels.iter() {
        if label == 0 {
            continue;
        }
        *sizes.entry(label).or_insert(0) += 1;
    }

    sizes
}

/// Number of patches in a label grid.
///
/// Labels are contiguous from 1, so the count equals the maximum label.
pub fn patch_count(labels: &Grid<u32>) -> usize {
    labels.iter().copied().max().unwrap_or(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::{label_patches, LabelParams};

    #[test]
    fn test_sizes_full_grid() {
        let habitat = Grid::from_vec(vec![1u8; 9], 3, 3).unwrap();
        let labels = label_patches(&habitat, LabelParams::default());

        let sizes = patch_sizes(&labels);
        assert_eq!(sizes.len(), 1);
        assert_eq!(sizes.get(&1), Some(&9));
        assert_eq!(patch_count(&labels), 1);
    }

    #[test]
    fn test_sizes_sum_equals_habitat_cells() {
        let cells = vec![
            1u8, 1, 0, 1,
            0, 0, 0, 0,
            1, 0, 1, 1,
        ];
        let habitat = Grid::from_vec(cells, 3, 4).unwrap();
        let labels = label_patches(&habitat, LabelParams::default());

        let sizes = patch_sizes(&labels);
        let total: usize = sizes.values().sum();
        assert_eq!(total, habitat.count_nonzero());
        assert!(sizes.values().all(|&s| s >= 1));
    }

    #[test]
    fn test_sizes_all_matrix() {
        let labels: Grid<u32> = Grid::new(5, 5);
        assert!(patch_sizes(&labels).is_empty());
        assert_eq!(patch_count(&labels), 0);
    }
}
