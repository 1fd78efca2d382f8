//! # Stores
//!
//! The arenas a [`crate::Network`] is made of.
//!
//! | Store | Module | Indexed by |
//! |-------|--------|------------|
//! | `NodeStore` | `nodes` | ward identifier |
//! | `LinkStore` | `links` | 1-based position in the link file |
//!
//! Both keep slot 0 as an unused sentinel so that identifiers and line
//! positions can be used as indices directly.
//!
//! ## Limitations
//!
//! - **Capacity is fixed up front**: identifiers above `max_nodes` and link
//!   files longer than `max_links` are rejected, not grown into. Below the
//!   bound, slots are allocated as they are first used.
//! - **No removal**: slots are only ever added or updated in place.

pub mod nodes;
pub mod links;

pub use nodes::NodeStore;
pub use links::LinkStore;

/// A deserialized store whose slots break the sentinel layout.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("store has no sentinel slot")]
    MissingSentinel,

    #[error("sentinel slot 0 holds a real entry")]
    OccupiedSentinel,

    #[error("{count} entries exceed the store capacity of {max}")]
    OverCapacity { count: usize, max: usize },
}
