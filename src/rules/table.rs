use crate::config::types::RuleSpec;
use crate::error::Result;
use crate::rules::rule::Rule;
use std::borrow::Cow;

/// The ordered list of rules applied to every candidate file.
///
/// Every rule runs on the output of the previous one, whether or not
/// earlier rules matched. The table is never mutated after compilation.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
	rules: Vec<Rule>,
}

impl RuleTable {
	/// Compile all specs, keeping their order. Fails on the first bad regex.
	pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
		let rules = specs.iter().map(Rule::compile).collect::<Result<Vec<_>>>()?;
		Ok(RuleTable { rules })
	}

	/// Apply every rule in table order.
	pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
		let mut current = Cow::Borrowed(text);
		for rule in &self.rules {
			let rewritten = match rule.apply(current.as_ref()) {
				Cow::Owned(rewritten) => Some(rewritten),
				Cow::Borrowed(_) => None,
			};
			if let Some(rewritten) = rewritten {
				current = Cow::Owned(rewritten);
			}
		}
		current
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}
