//! # PatchLink Algorithms
//!
//! Landscape-connectivity analysis for PatchLink.
//!
//! The `connectivity` module implements the patch-network pipeline:
//! habitat labeling, patch size accounting, dispersal-link discovery,
//! component aggregation and scalar connectivity metrics.

pub mod connectivity;

pub(crate) mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::connectivity::{
        component_areas, components, label_patches, largest_component_fraction, link_density,
        patch_count, patch_links, patch_sizes, Connectivity, ConnectivityReport, LabelParams,
        LabelPatches, LinkParams, PatchLinks, PatchNetwork,
    };
    pub use patchlink_core::prelude::*;
}
