//! Command implementations for the addon-bundle CLI

pub mod create;
