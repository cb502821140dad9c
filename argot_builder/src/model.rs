/// The number of values a `Specification` may receive during one parse.
///
/// Scalar fields are always `Fixed(1)` and switches `Fixed(0)`; sequences
/// choose their own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Precisely `n` values.
    Fixed(u8),
    /// At least `min` values, unbounded above.
    AtLeast(u8),
    /// Between `min` and `max` values, inclusive on both ends.
    Between(u8, u8),
}

impl Cardinality {
    pub(crate) fn minimum(&self) -> u8 {
        match self {
            Cardinality::Fixed(n) => *n,
            Cardinality::AtLeast(min) => *min,
            Cardinality::Between(min, _) => *min,
        }
    }

    pub(crate) fn maximum(&self) -> Option<u8> {
        match self {
            Cardinality::Fixed(n) => Some(*n),
            Cardinality::AtLeast(_) => None,
            Cardinality::Between(_, max) => Some(*max),
        }
    }

    /// Whether a specification holding `count` values may accept one more.
    /// Counts are unbounded; only the declared maximum is byte-sized.
    pub(crate) fn accepts(&self, count: usize) -> bool {
        match self.maximum() {
            Some(max) => count < max as usize,
            None => true,
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The identity of a `Specification`: a short name, a long name, or both.
///
/// There is no empty variant, so every specification carries at least one
/// name by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Names {
    /// Single-character name, supplied as `-c`.
    Short(char),
    /// Multi-character name, supplied as `--name`.
    Long(String),
    /// Both forms refer to the same specification.
    Both(char, String),
}

impl Names {
    /// Build a `Long` from anything string-like.
    pub fn long(name: impl Into<String>) -> Self {
        Names::Long(name.into())
    }

    /// Build a `Both` from a short name and anything string-like.
    pub fn both(short: char, name: impl Into<String>) -> Self {
        Names::Both(short, name.into())
    }

    pub(crate) fn short_name(&self) -> Option<char> {
        match self {
            Names::Short(c) | Names::Both(c, _) => Some(*c),
            Names::Long(_) => None,
        }
    }

    pub(crate) fn long_name(&self) -> Option<&str> {
        match self {
            Names::Long(name) | Names::Both(_, name) => Some(name.as_str()),
            Names::Short(_) => None,
        }
    }
}

impl std::fmt::Display for Names {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Names::Short(c) => write!(f, "-{c}"),
            Names::Long(name) => write!(f, "--{name}"),
            Names::Both(c, name) => write!(f, "-{c}/--{name}"),
        }
    }
}
