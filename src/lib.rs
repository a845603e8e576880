//! CCRM - Campus Course & Records Manager
//!
//! This library provides the core functionality for the CCRM command line
//! tool. It keeps student, course and enrollment records in memory, enforces
//! the enrollment rules (no duplicate enrollments, at most 18 credits per
//! semester), computes credit-weighted GPAs and persists everything as CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Core data models (students, courses, enrollments, grades)
//! - `services`: Enrollment rules and GPA calculation
//! - `storage`: In-memory stores and the CSV import/export layer
//! - `backup`: Data directory backups
//! - `reports`: Transcripts and GPA distribution
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ccrm::config::{CcrmPaths, Settings};
//! use ccrm::storage::Storage;
//!
//! let paths = CcrmPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CcrmError, CcrmResult};
