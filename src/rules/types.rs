/// How a rule's pattern is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
	/// Exact substring match.
	Literal,

	/// Regular expression match.
	Regex,
}

/// A single find/replace step of the migration.
///
/// Rules are plain static data. They are built with the `const` constructors
/// below so the whole table can live in a `&'static [ReplacementRule]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRule {
	/// Short identifier used in reports and in `after` references.
	pub name: &'static str,

	/// Whether `pattern` is a literal or a regex.
	pub kind: RuleKind,

	/// The exact substring or regular expression to match.
	pub pattern: &'static str,

	/// Fixed replacement text. `$` is never expanded.
	pub replacement: &'static str,

	/// Let a regex span lines (`.` matches `\n`, `^`/`$` match per line).
	pub multiline: bool,

	/// Replace only the first occurrence.
	pub once: bool,

	/// Rules whose effects this rule depends on. They must run earlier.
	pub after: &'static [&'static str],

	/// Skip the rule when the buffer already contains this marker.
	pub unless_present: Option<&'static str>,
}

impl ReplacementRule {
	/// A literal, global replacement.
	pub const fn literal(
		name: &'static str,
		pattern: &'static str,
		replacement: &'static str,
	) -> Self {
		Self {
			name,
			kind: RuleKind::Literal,
			pattern,
			replacement,
			multiline: false,
			once: false,
			after: &[],
			unless_present: None,
		}
	}

	/// A regex, global replacement.
	pub const fn regex(
		name: &'static str,
		pattern: &'static str,
		replacement: &'static str,
	) -> Self {
		Self {
			kind: RuleKind::Regex,
			..Self::literal(name, pattern, replacement)
		}
	}

	pub const fn multiline(self) -> Self {
		Self {
			multiline: true,
			..self
		}
	}

	pub const fn once(self) -> Self {
		Self { once: true, ..self }
	}

	pub const fn after(self, after: &'static [&'static str]) -> Self {
		Self { after, ..self }
	}

	pub const fn unless_present(self, marker: &'static str) -> Self {
		Self {
			unless_present: Some(marker),
			..self
		}
	}
}
