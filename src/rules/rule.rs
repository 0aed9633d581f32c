use crate::config::types::RuleSpec;
use crate::error::{RelinkError, Result};
use regex::Regex;
use std::borrow::Cow;

/// A compiled rewrite rule.
#[derive(Debug, Clone)]
pub struct Rule {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template.
	pub replacement: String,
}

impl Rule {
	/// Compile a rule from its spec.
	pub fn compile(spec: &RuleSpec) -> Result<Self> {
		let pattern = Regex::new(&spec.pattern).map_err(|source| RelinkError::InvalidRegex {
			pattern: spec.pattern.clone(),
			source,
		})?;

		Ok(Rule {
			pattern,
			replacement: spec.replacement.clone(),
		})
	}

	/// Replace every match in `input`. Borrows when nothing matched.
	pub fn apply<'t>(&self, input: &'t str) -> Cow<'t, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}
