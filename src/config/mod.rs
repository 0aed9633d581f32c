//! Rule file loading and settings resolution for relink.
//!
//! This module handles:
//! - TOML rule file parsing
//! - The built-in rule table and defaults
//! - Merging CLI flags, rule file and defaults into effective settings

pub mod defaults;
pub mod discovery;
pub mod parser;
pub mod types;

pub use defaults::{
	DEFAULT_EXTENSION, DEFAULT_ROOT, default_rules, generate_init_template, render_rule_file,
};
pub use discovery::{RULE_FILE_NAME, discover_rule_file, load_settings, resolve_settings};
pub use parser::{parse_rule_file, parse_rule_str};
pub use types::{LoadedRuleFile, Overrides, RuleFile, RuleSource, RuleSpec, Settings};
