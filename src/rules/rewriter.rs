use crate::error::{MigrateError, Result};
use crate::rules::types::{ReplacementRule, RuleKind};
use regex::{NoExpand, Regex, RegexBuilder};

/// How a compiled rule finds its pattern.
#[derive(Debug)]
enum Matcher {
	Literal(&'static str),
	Regex(Regex),
}

/// A rule ready to be applied.
#[derive(Debug)]
pub struct CompiledRule {
	/// The original rule.
	pub rule: ReplacementRule,

	matcher: Matcher,
}

impl CompiledRule {
	/// Compile a single rule.
	pub fn new(rule: &ReplacementRule) -> Result<Self> {
		if rule.pattern.is_empty() {
			return Err(MigrateError::EmptyPattern {
				rule: rule.name.to_string(),
			});
		}

		let matcher = match rule.kind {
			RuleKind::Literal => Matcher::Literal(rule.pattern),
			RuleKind::Regex => Matcher::Regex(compile_regex(rule)?),
		};

		Ok(CompiledRule {
			rule: *rule,
			matcher,
		})
	}

	/// Apply this rule to `input`, returning the new text and the number of replacements.
	pub fn apply(&self, input: &str) -> (String, usize) {
		if self.skips(input) {
			return (input.to_string(), 0);
		}

		let limit = if self.rule.once { 1 } else { 0 };

		match &self.matcher {
			Matcher::Literal(pattern) => {
				let pattern = *pattern;
				let found = input.matches(pattern).count();
				let count = if limit == 0 { found } else { found.min(limit) };
				let output = if limit == 0 {
					input.replace(pattern, self.rule.replacement)
				} else {
					input.replacen(pattern, self.rule.replacement, limit)
				};
				(output, count)
			}
			Matcher::Regex(regex) => {
				let found = regex.find_iter(input).count();
				let count = if limit == 0 { found } else { found.min(limit) };
				let output = regex
					.replacen(input, limit, NoExpand(self.rule.replacement))
					.into_owned();
				(output, count)
			}
		}
	}

	/// Whether `unless_present` would skip this rule for `input`.
	fn skips(&self, input: &str) -> bool {
		self.rule
			.unless_present
			.is_some_and(|marker| input.contains(marker))
	}
}

/// Compile a regex rule with its line-spanning behavior.
fn compile_regex(rule: &ReplacementRule) -> Result<Regex> {
	RegexBuilder::new(rule.pattern)
		.multi_line(rule.multiline)
		.dot_matches_new_line(rule.multiline)
		.build()
		.map_err(|source| MigrateError::InvalidRegex {
			rule: rule.name.to_string(),
			pattern: rule.pattern.to_string(),
			source,
		})
}

/// Compile a rule table, checking that every `after` dependency runs earlier.
pub fn compile_rules(rules: &[ReplacementRule]) -> Result<Vec<CompiledRule>> {
	for (index, rule) in rules.iter().enumerate() {
		for dependency in rule.after {
			if !rules[..index].iter().any(|earlier| earlier.name == *dependency) {
				return Err(MigrateError::RuleOrder {
					rule: rule.name.to_string(),
					dependency: dependency.to_string(),
				});
			}
		}
	}

	rules.iter().map(CompiledRule::new).collect()
}

/// What one rule did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
	pub name: &'static str,
	pub replacements: usize,
	pub skipped: bool,
}

/// The rewritten buffer plus a per-rule report.
#[derive(Debug, Clone)]
pub struct Rewrite {
	pub text: String,
	pub outcomes: Vec<RuleOutcome>,
}

impl Rewrite {
	/// Rules that ran and replaced nothing.
	pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
		self.outcomes
			.iter()
			.filter(|outcome| outcome.replacements == 0 && !outcome.skipped)
	}

	/// Total number of replacements across all rules.
	pub fn total_replacements(&self) -> usize {
		self.outcomes.iter().map(|o| o.replacements).sum()
	}
}

/// Apply compiled rules to `buffer` strictly in table order.
pub fn apply_compiled(buffer: String, rules: &[CompiledRule]) -> Rewrite {
	let mut text = buffer;
	let mut outcomes = Vec::with_capacity(rules.len());

	for rule in rules {
		let skipped = rule.skips(&text);
		let (next, replacements) = rule.apply(&text);
		text = next;
		outcomes.push(RuleOutcome {
			name: rule.rule.name,
			replacements,
			skipped,
		});
	}

	Rewrite { text, outcomes }
}

/// Compile `rules` and apply them to `buffer`.
pub fn apply(buffer: &str, rules: &[ReplacementRule]) -> Result<String> {
	let compiled = compile_rules(rules)?;
	Ok(apply_compiled(buffer.to_string(), &compiled).text)
}
