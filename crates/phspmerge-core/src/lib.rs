//! phspmerge-core - Core library for phspmerge
//!
//! This crate provides the core functionality for phspmerge, including:
//! - Configuration file parsing (`phspmerge.toml`)
//! - IAEA phase-space header discovery (`.IAEAheader` files)
//! - CMake/Make build orchestration for the merger project
//! - Merger invocation and exit-status handling

pub mod builder;
pub mod config;
pub mod discover;
pub mod error;
pub mod merge;
pub mod runner;

pub use error::{Error, Result};
