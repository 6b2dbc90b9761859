//! Operations module for creating release bundles
//!
//! - CreateOperation: locate, materialize and patch a new versioned bundle
//!
//! The operation coordinates with:
//! - Layout: fixed repository locations (from layout module)
//! - Bundle: template copy and overwrite handling (from bundle module)
//! - Manifest: annotations and CSV patching (from manifest module)
//! - UI: status reporting (from ui module)

pub mod create;

pub use create::{CreateOperation, CreateOptions};
