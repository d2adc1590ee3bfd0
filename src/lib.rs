//! Rebuilds a project skeleton from a declarative [`layout::Layout`].
//!
//! A run is split in two: [`plan::plan`] turns the layout into an in-memory [`vfs::VirtualFS`],
//! and [`apply::apply`] replaces the root on disk with it.
pub mod api;
pub mod apply;
pub mod content;
pub mod defaults;
pub mod errors;
pub mod layout;
pub mod plan;
pub mod preview;
pub mod transactions;
pub mod tree;
pub mod utils;
pub mod vfs;
