//! Relink - CLI tool for rewriting relative import paths after a module reorganization.
//!
//! This library provides the core functionality for relink, including:
//! - Rule file parsing and the built-in rule table
//! - Compiling and applying the ordered rule table
//! - Walking the source tree for candidate files
//! - Rewriting files atomically and summarizing the run
//!
//! # Example
//!
//! ```no_run
//! use import_relink::config::default_rules;
//! use import_relink::rewrite::WriteMode;
//! use import_relink::rules::RuleTable;
//! use import_relink::run::{RunOptions, run};
//! use std::path::PathBuf;
//!
//! let table = RuleTable::compile(&default_rules()).unwrap();
//! let options = RunOptions {
//!     root: PathBuf::from("src/modules"),
//!     extension: ".ts".to_string(),
//!     mode: WriteMode::Apply,
//! };
//!
//! let summary = run(&options, &table, |report| {
//!     if report.outcome.is_changed() {
//!         println!("changed: {}", report.relative.display());
//!     }
//! })
//! .unwrap();
//! println!("{}", summary.summary_line());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod rewrite;
pub mod rules;
pub mod run;
pub mod walk;

pub use error::{RelinkError, Result};
