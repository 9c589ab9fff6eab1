//! Dataset manifest and load-once surface store.
//!
//! The manifest ([`DatasetConfig`]) names the table files, their dataset
//! groups, display labels, and the figures to build from them. The store
//! ([`SurfaceStore`]) loads everything at startup, computes render
//! properties and difference surfaces once, and serves figures from the
//! immutable result.

pub mod config;
pub mod store;

pub use config::{
    ColorscaleStyle, ComparisonSpec, DatasetConfig, DiffConfig, DiffPairSpec, SurfaceEntry,
};
pub use store::SurfaceStore;
