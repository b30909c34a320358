//! End-to-end tests for the connectivity pipeline
//!
//! Each test drives the full chain (habitat grid, labeling, size index,
//! links, components, metrics) through the `PatchNetwork` surface.

use patchlink_algorithms::connectivity::{
    label_patches, patch_count, patch_sizes, LabelParams, PatchNetwork,
};
use patchlink_core::Grid;
use std::collections::BTreeSet;

#[test]
fn full_habitat_block_is_one_patch() {
    // 3x3 of solid habitat: one patch of size 9
    let network = PatchNetwork::new(3, 3, vec![1u8; 9]).unwrap();

    assert_eq!(network.patch_count(), 1);
    assert_eq!(network.sizes().get(&1), Some(&9));
}

#[test]
fn diagonal_cells_merge_under_eight_connectivity() {
    let mut cells = vec![0u8; 16];
    cells[0] = 1; // (0, 0)
    cells[5] = 1; // (1, 1)
    let network = PatchNetwork::new(4, 4, cells).unwrap();

    assert_eq!(network.patch_count(), 1);
    assert_eq!(network.sizes().get(&1), Some(&2));
}

#[test]
fn one_cell_gap_is_bridged_by_unit_dispersal_distance() {
    // Patches at (0,0) and (0,2): the gap of one matrix cell sits inside
    // the window of half-width max_disp_dist + 1 = 2
    let network = PatchNetwork::new(1, 3, vec![1u8, 0, 1]).unwrap();

    assert_eq!(network.patch_count(), 2);
    assert_eq!(network.links(1, 1), BTreeSet::from([(1, 2)]));
}

#[test]
fn all_matrix_landscape_yields_zero_metrics() {
    let network = PatchNetwork::new(8, 8, vec![0u8; 64]).unwrap();

    assert_eq!(network.patch_count(), 0);
    assert!(network.links(1, 1).is_empty());
    assert_eq!(network.link_density(1, 1), 0.0);
    assert_eq!(network.largest_component_fraction(1, 1), 0.0);
}

#[test]
fn distant_blocks_stay_unlinked() {
    // Two 2x2 blocks with a gap far beyond the search window
    let rows = 4;
    let cols = 20;
    let mut cells = vec![0u8; rows * cols];
    for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        cells[r * cols + c] = 1;
    }
    for (r, c) in [(2, 18), (2, 19), (3, 18), (3, 19)] {
        cells[r * cols + c] = 1;
    }
    let network = PatchNetwork::new(rows, cols, cells).unwrap();

    assert_eq!(network.patch_count(), 2);
    assert!(network.links(1, 2).is_empty());
    assert_eq!(network.link_density(1, 2), 0.0);
}

#[test]
fn sizes_sum_matches_habitat_cell_count() {
    // Pseudo-random but deterministic habitat pattern
    let rows = 17;
    let cols = 23;
    let cells: Vec<u8> = (0..rows * cols)
        .map(|i| u8::from((i * 7 + 3) % 5 == 0))
        .collect();
    let habitat = Grid::from_vec(cells, rows, cols).unwrap();
    let labels = label_patches(&habitat, LabelParams::default());
    let sizes = patch_sizes(&labels);

    let total: usize = sizes.values().sum();
    assert_eq!(total, habitat.count_nonzero());

    // IDs are contiguous from 1 to the patch count
    let count = patch_count(&labels);
    assert_eq!(sizes.len(), count);
    for id in 1..=count as u32 {
        assert!(sizes.contains_key(&id), "missing patch ID {id}");
    }
}

#[test]
fn metrics_stay_in_unit_range() {
    let rows = 12;
    let cols = 12;
    let cells: Vec<u8> = (0..rows * cols)
        .map(|i| u8::from((i * 11 + 5) % 3 == 0))
        .collect();
    let network = PatchNetwork::new(rows, cols, cells).unwrap();

    for min_habitat in [1, 2, 4] {
        for max_disp_dist in [0, 1, 3] {
            let density = network.link_density(min_habitat, max_disp_dist);
            let fraction = network.largest_component_fraction(min_habitat, max_disp_dist);

            assert!((0.0..=1.0).contains(&density), "density {density} out of range");
            assert!(
                (0.0..=1.0).contains(&fraction),
                "fraction {fraction} out of range"
            );

            for &(a, b) in &network.links(min_habitat, max_disp_dist) {
                assert!(a < b, "pair ({a}, {b}) not canonical");
            }
        }
    }
}

#[test]
fn component_areas_never_exceed_qualifying_total() {
    let rows = 10;
    let cols = 15;
    let cells: Vec<u8> = (0..rows * cols)
        .map(|i| u8::from((i * 13 + 1) % 4 == 0))
        .collect();
    let network = PatchNetwork::new(rows, cols, cells).unwrap();

    let min_habitat = 2;
    let total: usize = network
        .sizes()
        .values()
        .filter(|&&size| size >= min_habitat)
        .sum();

    for area in network.component_areas(min_habitat, 2) {
        assert!(area <= total, "component area {area} exceeds total {total}");
    }
}

#[test]
fn report_serializes_with_stable_field_names() {
    let network = PatchNetwork::new(1, 3, vec![1u8, 0, 1]).unwrap();
    let report = network.report(1, 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["patch_count"], 2);
    assert_eq!(json["link_count"], 1);
    assert!(json["link_density"].is_number());
    assert!(json["largest_component_fraction"].is_number());
    assert_eq!(json["component_areas"], serde_json::json!([2]));
}
