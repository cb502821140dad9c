use std::collections::HashSet;

use crate::api::parameter::{SpecClass, Specification};
use crate::binder::{
    Binder, BlackHole, ConfigError, GeneralParser, OptionBind, OptionSpec, PositionalBind,
};
use crate::constant::{HELP_MESSAGE, HELP_NAME, HELP_SHORT};
use crate::model::{Cardinality, Names};
use crate::render::{HelpDraft, HelpEntry, HelpText};

/// The declarative command-line parser builder.
///
/// Collects [`Specification`]s into the table, validates it, and produces a
/// [`GeneralParser`] ready to run.  Configuration mistakes surface as
/// [`ConfigError`]s from [`CommandParser::build`], never at parse time.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{CommandParser, Scalar, Specification};
///
/// let mut a: u32 = 0;
/// let mut b: u32 = 0;
/// let parser = CommandParser::new("program")
///     .add(Specification::positional(Scalar::new(&mut a), "a"))
///     .add(Specification::positional(Scalar::new(&mut b), "b"))
///     .build()
///     .unwrap();
///
/// let outcome = parser.parse_tokens(vec!["1", "2"].as_slice());
/// assert_eq!(outcome.exit_code(), 0);
/// assert_eq!(a, 1);
/// assert_eq!(b, 2);
/// ```
pub struct CommandParser<'a> {
    program: String,
    about: Option<String>,
    option_entries: Vec<HelpEntry>,
    positional_entries: Vec<HelpEntry>,
    options: Vec<OptionBind<'a>>,
    positionals: Vec<PositionalBind<'a>>,
    ignore_unknown: bool,
    positional_autoindex: usize,
    deferred_error: Option<ConfigError>,
}

impl<'a> CommandParser<'a> {
    /// Create a command parser for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            option_entries: Vec::default(),
            positional_entries: Vec::default(),
            options: Vec::default(),
            positionals: Vec::default(),
            ignore_unknown: false,
            positional_autoindex: 0,
            deferred_error: None,
        }
    }

    /// Document the about message for this parser.
    /// If repeated, only the final message applies.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Silently drop tokens that match no specification and no positional
    /// slot, instead of accumulating `Unknown` errors.
    pub fn ignore_unknown(mut self) -> Self {
        self.ignore_unknown = true;
        self
    }

    /// Add a specification to the table.
    ///
    /// The declaration order of positionals is their slot order during
    /// parsing (unless pinned via `Specification::index`); the order of
    /// options does not affect the parser semantics.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{CommandParser, Names, Specification, Switch};
    ///
    /// let mut verbose: bool = false;
    /// let parser = CommandParser::new("program")
    ///     .add(Specification::option(
    ///         Switch::new(&mut verbose, true),
    ///         Names::both('v', "verbose"),
    ///     ))
    ///     .build()
    ///     .unwrap();
    ///
    /// let outcome = parser.parse_tokens(vec!["-v"].as_slice());
    /// assert_eq!(outcome.exit_code(), 0);
    /// assert!(verbose);
    /// ```
    pub fn add<T>(mut self, specification: Specification<'a, T>) -> Self {
        let mut inner = specification.consume();

        if inner.help.is_some() && inner.help_resource.is_some() {
            self.deferred_error
                .get_or_insert(ConfigError::ConflictingHelp(inner.identity()));
        }

        match inner.class {
            SpecClass::Opt => {
                self.option_entries.push(HelpEntry::from(&inner));
                self.options.push(OptionBind::from(inner));
            }
            SpecClass::Pos | SpecClass::Remaining => {
                if inner.index.is_none() {
                    inner.index = Some(self.positional_autoindex);
                }

                self.positional_autoindex += 1;
                self.positional_entries.push(HelpEntry::from(&inner));
                self.positionals.push(PositionalBind::from(inner));
            }
        }

        self
    }

    /// Finalize the table into a [`GeneralParser`].
    ///
    /// Injects the built-in `-h`/`--help` specification and fail-fast
    /// validates the table; see [`ConfigError`] for the rejected shapes.
    pub fn build(self) -> Result<GeneralParser<'a>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        let mut options: Vec<OptionBind<'a>> = vec![(
            OptionSpec {
                names: Names::both(HELP_SHORT, HELP_NAME),
                cardinality: Cardinality::Fixed(0),
                required: false,
                has_default: false,
                exclusive_set: None,
                separator: None,
            },
            Box::new(BlackHole::default()),
        )];
        options.extend(self.options);

        let mut option_entries = vec![HelpEntry::new(
            false,
            format!("[-{HELP_SHORT}]"),
            format!("-{HELP_SHORT}, --{HELP_NAME}"),
            Some(HelpText::Literal(HELP_MESSAGE.to_string())),
        )];
        let mut declared_entries = self.option_entries;
        declared_entries.sort_by_key(|entry| entry.listing.trim_start_matches('-').to_string());
        option_entries.extend(declared_entries);

        let mut shorts: HashSet<char> = HashSet::default();
        let mut longs: HashSet<String> = HashSet::default();

        for (specification, _) in &options {
            if let Some(short) = specification.names.short_name() {
                if short.is_ascii_digit() || short == '-' || short == '.' || short.is_whitespace()
                {
                    return Err(ConfigError::InvalidShortName(short));
                }

                if !shorts.insert(short) {
                    return Err(ConfigError::DuplicateName(format!("-{short}")));
                }
            }

            if let Some(long) = specification.names.long_name() {
                if long.is_empty()
                    || long.starts_with('-')
                    || long.contains('=')
                    || long.contains(char::is_whitespace)
                {
                    return Err(ConfigError::InvalidLongName(long.to_string()));
                }

                if !longs.insert(long.to_string()) {
                    return Err(ConfigError::DuplicateName(format!("--{long}")));
                }
            }

            if specification.cardinality.maximum() == Some(0) && specification.required {
                return Err(ConfigError::UnsatisfiableBounds(specification.names.clone()));
            }

            check_bounds(&specification.cardinality, specification.names.clone())?;
        }

        let mut indices: HashSet<usize> = HashSet::default();
        let mut remaining: Option<&str> = None;

        for (specification, _) in &self.positionals {
            if specification.remaining {
                if remaining.is_some() {
                    return Err(ConfigError::MultipleRemaining(specification.name.clone()));
                }

                remaining = Some(&specification.name);
            } else if !indices.insert(specification.index) {
                return Err(ConfigError::DuplicatePositionalIndex(specification.index));
            }

            check_bounds(&specification.cardinality, specification.identity())?;
        }

        // Usage order: the collector trails the indexed slots.
        let mut order: Vec<usize> = (0..self.positionals.len()).collect();
        order.sort_by_key(|&i| {
            let specification = &self.positionals[i].0;
            (specification.remaining, specification.index)
        });
        let positional_entries: Vec<HelpEntry> = order
            .into_iter()
            .map(|i| self.positional_entries[i].clone())
            .collect();

        let mut entries = option_entries;
        entries.extend(positional_entries);
        let draft = HelpDraft::new(self.program, self.about, entries);
        let binder = Binder::new(options, self.positionals, self.ignore_unknown);
        Ok(GeneralParser::new(binder, draft))
    }
}

fn check_bounds(cardinality: &Cardinality, names: Names) -> Result<(), ConfigError> {
    if let Cardinality::Between(min, max) = cardinality {
        if min > max {
            return Err(ConfigError::InvertedBounds {
                names,
                min: *min,
                max: *max,
            });
        }
    }

    Ok(())
}
