//! countrydb-rs
//! ============
//!
//! Workspace host crate. It re-exports [`countrydb_core`] so the demos in
//! `demos/` can be run from the workspace root:
//!
//! ```text
//! cargo run --example basic_usage
//! COUNTRYDB_TRACE_LEVEL=debug cargo run --example advanced_filtering
//! cargo run --example error_handling
//! ```
pub use countrydb_core::*;
