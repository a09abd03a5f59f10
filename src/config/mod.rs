// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cklint.
//!
//! This module handles parsing lint documents, resolving their `extends`
//! presets, and merging rule overrides.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{merge_configs, resolve_config};
pub use schema::*;
