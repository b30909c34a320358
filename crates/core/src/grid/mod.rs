//! Grid data structures and adjacency patterns

mod dense;
mod element;
mod neighborhood;

pub use dense::Grid;
pub use element::GridElement;
pub use neighborhood::Neighborhood;
