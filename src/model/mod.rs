//! # Ward Network Model
//!
//! Plain data for wards and the links between them. These types are what
//! the downstream simulation reads out of a built [`crate::Network`].
//!
//! Design rule: no I/O and no store logic here. This module is pure data.

pub mod node;
pub mod link;

pub use node::{Node, NodeId};
pub use link::{Layer, ToLink};
