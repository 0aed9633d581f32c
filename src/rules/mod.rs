//! Rule compilation and application for relink.
//!
//! This module handles:
//! - Compiling rule specs into regexes
//! - Applying the ordered rule table to file text

pub mod rule;
pub mod table;

pub use rule::Rule;
pub use table::RuleTable;
