//! Configuration module for CCRM
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The instructor roster

pub mod paths;
pub mod settings;

pub use paths::CcrmPaths;
pub use settings::{DataFiles, Settings};
