/// One classified unit of command-line input.
/// Tokens preserve the order of the arguments they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A recognized option name.
    Name {
        /// The name text, without its dash prefix.
        text: String,
        /// Whether the name was supplied in `--long` form (vs `-s` short form).
        long_form: bool,
    },
    /// A plain value: an option's payload or a positional value.
    Value {
        /// The raw text.
        text: String,
        /// Whether the value was joined to a name (`--name=value`, `-nVALUE`)
        /// rather than supplied as its own argument.
        attached: bool,
    },
}

/// The result of a name-recognition query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRecognition {
    /// The name is not part of the specification table.
    Unknown,
    /// The name is known and takes no value.
    Flag,
    /// The name is known and takes at least one value.
    Valued,
}

/// Name-recognition predicate consulted by the tokenizer.
///
/// The predicate is arity-aware so the tokenizer can decide how much of a
/// short cluster (ex: `-vob`) belongs to the final name's value.
pub trait NameLookup {
    /// Recognize a `--INITIAL` long name (queried without the dash prefix).
    fn long(&self, name: &str) -> NameRecognition;

    /// Recognize a `-c` short name.
    fn short(&self, name: char) -> NameRecognition;
}

/// The result of a front-end tokenizer claiming leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    /// Tokens emitted for the claimed arguments.
    pub tokens: Vec<Token>,
    /// How many leading arguments were claimed.
    pub consumed: usize,
}
