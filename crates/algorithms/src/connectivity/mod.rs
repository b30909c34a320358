//! Landscape-connectivity pipeline
//!
//! Analyses a habitat raster as a patch network. Stages, in dependency order:
//! - **label**: flood-fill contiguous habitat cells into numbered patches
//! - **size**: per-patch cell counts
//! - **links**: potential dispersal links between patches under size and
//!   distance thresholds
//! - **components**: connected components of the link graph
//! - **metrics**: link density and largest-component area fraction
//! - **network**: `PatchNetwork`, the label-once/query-many surface

mod components;
mod label;
mod links;
mod metrics;
mod network;
mod size;

pub use components::{component_areas, components};
pub use label::{label_patches, Connectivity, LabelParams, LabelPatches};
pub use links::{patch_links, patch_links_with_sizes, LinkParams, PatchLinks};
pub use metrics::{largest_component_fraction, link_density, ConnectivityReport};
pub use network::PatchNetwork;
pub use size::{patch_count, patch_sizes};
