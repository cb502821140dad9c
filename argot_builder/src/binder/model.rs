use thiserror::Error;

use crate::api::InvalidBind;
use crate::model::{Cardinality, Names};
use crate::render::HelpFormat;

/// One validation failure from a binding pass.
///
/// Every variant except `Unknown` carries the offending specification's
/// names, so a report always points back at a declared option.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The specification received a malformed value, a wrong value count, or
    /// was supplied more than once.
    #[error("{specification} option violates format.")]
    BadFormat {
        /// The offending specification's names.
        specification: Names,
        /// The token that could not be bound (empty for count violations).
        token: String,
    },
    /// A required specification with no default received no input.
    #[error("{specification} required option is missing.")]
    MissingRequired {
        /// The offending specification's names.
        specification: Names,
    },
    /// More than one member of a mutually exclusive set was supplied.
    #[error("{specification} option violates mutual exclusiveness.")]
    ViolatesMutualExclusiveness {
        /// The offending specification's names.
        specification: Names,
        /// The exclusive set both offenders belong to.
        set: String,
    },
    /// A token matched no specification and no positional slot.
    #[error("'{token}' unknown option.")]
    Unknown {
        /// The unrecognized token.
        token: String,
    },
}

/// The category of a [`BindingError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed value, wrong value count, or duplicate supply.
    BadFormat,
    /// Required specification received no input.
    MissingRequired,
    /// Mutually exclusive set supplied more than once.
    ViolatesMutualExclusiveness,
    /// Token matched nothing.
    Unknown,
}

impl BindingError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BindingError::BadFormat { .. } => ErrorKind::BadFormat,
            BindingError::MissingRequired { .. } => ErrorKind::MissingRequired,
            BindingError::ViolatesMutualExclusiveness { .. } => {
                ErrorKind::ViolatesMutualExclusiveness
            }
            BindingError::Unknown { .. } => ErrorKind::Unknown,
        }
    }
}

/// A mistake in the specification table itself, reported by
/// `CommandParser::build` before any input is consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A short or long name appears on more than one specification.
    #[error("duplicate name '{0}'.")]
    DuplicateName(String),
    /// A short name is a digit, a dash, a dot, or whitespace.
    #[error("invalid short name '{0}'.")]
    InvalidShortName(char),
    /// A long name is empty, starts with a dash, or embeds `=`/whitespace.
    #[error("invalid long name '{0}'.")]
    InvalidLongName(String),
    /// Both literal help text and a help resource were declared.
    #[error("{0} declares both literal help text and a help resource.")]
    ConflictingHelp(Names),
    /// A specification that binds no values cannot be required.
    #[error("{0} takes no values but is marked required.")]
    UnsatisfiableBounds(Names),
    /// The cardinality minimum exceeds its maximum.
    #[error("{names} cardinality minimum {min} exceeds maximum {max}.")]
    InvertedBounds {
        /// The offending specification's names.
        names: Names,
        /// The declared minimum.
        min: u8,
        /// The declared maximum.
        max: u8,
    },
    /// Two positionals resolved to the same index.
    #[error("duplicate positional index {0}.")]
    DuplicatePositionalIndex(usize),
    /// More than one remaining-values collector was declared.
    #[error("'{0}' declares a second remaining-values collector.")]
    MultipleRemaining(String),
}

/// The read-only outcome of one binding pass.
///
/// Accumulates [`BindingError`]s during the pass; afterwards the caller's
/// fields hold their bound-so-far values regardless of success.
#[derive(Debug, Default)]
pub struct ParserState {
    errors: Vec<BindingError>,
}

impl ParserState {
    pub(crate) fn new(errors: Vec<BindingError>) -> Self {
        Self { errors }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Construct a state carrying `errors`, for testing host code that
    /// consumes a [`ParseOutcome`](super::ParseOutcome).
    #[cfg(feature = "unit_test")]
    pub fn test_dummy(errors: Vec<BindingError>) -> Self {
        Self::new(errors)
    }

    /// Whether the pass completed without any errors.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every error the pass accumulated, in detection order.
    pub fn errors(&self) -> &[BindingError] {
        &self.errors
    }

    /// Render the accumulated errors through `format`.
    pub fn render(&self, format: &impl HelpFormat) -> Vec<String> {
        format.render_errors(&self.errors)
    }
}

/// Type-erased view of a field, so the binder can drive heterogeneous
/// captures through one walk.
pub(crate) trait AnonymousBindable {
    fn matched(&mut self);
    fn capture(&mut self, token: &str) -> Result<(), InvalidBind>;
    fn settle(&mut self);
}

/// A bindable that swallows everything (backs the built-in help flag).
#[derive(Debug, Default)]
pub(crate) struct BlackHole {}

impl AnonymousBindable for BlackHole {
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidBind> {
        Ok(())
    }

    fn settle(&mut self) {
        // Do nothing.
    }
}

/// The declarative metadata of one named option, detached from its field.
#[derive(Debug, Clone)]
pub(crate) struct OptionSpec {
    pub(crate) names: Names,
    pub(crate) cardinality: Cardinality,
    pub(crate) required: bool,
    pub(crate) has_default: bool,
    pub(crate) exclusive_set: Option<String>,
    pub(crate) separator: Option<char>,
}

/// The declarative metadata of one positional slot or the remaining-values
/// collector.
#[derive(Debug, Clone)]
pub(crate) struct PositionalSpec {
    pub(crate) name: String,
    pub(crate) index: usize,
    pub(crate) cardinality: Cardinality,
    pub(crate) required: bool,
    pub(crate) has_default: bool,
    pub(crate) remaining: bool,
}

impl PositionalSpec {
    /// Positionals report under their long-style name.
    pub(crate) fn identity(&self) -> Names {
        Names::Long(self.name.clone())
    }
}

pub(crate) type OptionBind<'a> = (OptionSpec, Box<dyn AnonymousBindable + 'a>);
pub(crate) type PositionalBind<'a> = (PositionalSpec, Box<dyn AnonymousBindable + 'a>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_error_display() {
        assert_eq!(
            BindingError::BadFormat {
                specification: Names::both('f', "file"),
                token: "blue".to_string(),
            }
            .to_string(),
            "-f/--file option violates format."
        );
        assert_eq!(
            BindingError::MissingRequired {
                specification: Names::long("input"),
            }
            .to_string(),
            "--input required option is missing."
        );
        assert_eq!(
            BindingError::ViolatesMutualExclusiveness {
                specification: Names::Short('a'),
                set: "reading".to_string(),
            }
            .to_string(),
            "-a option violates mutual exclusiveness."
        );
        assert_eq!(
            BindingError::Unknown {
                token: "--moot".to_string(),
            }
            .to_string(),
            "'--moot' unknown option."
        );
    }

    #[test]
    fn binding_error_kind() {
        assert_eq!(
            BindingError::BadFormat {
                specification: Names::Short('f'),
                token: String::default(),
            }
            .kind(),
            ErrorKind::BadFormat
        );
        assert_eq!(
            BindingError::MissingRequired {
                specification: Names::Short('f'),
            }
            .kind(),
            ErrorKind::MissingRequired
        );
        assert_eq!(
            BindingError::ViolatesMutualExclusiveness {
                specification: Names::Short('f'),
                set: "x".to_string(),
            }
            .kind(),
            ErrorKind::ViolatesMutualExclusiveness
        );
        assert_eq!(
            BindingError::Unknown {
                token: "x".to_string(),
            }
            .kind(),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::DuplicateName("--file".to_string()).to_string(),
            "duplicate name '--file'."
        );
        assert_eq!(
            ConfigError::InvalidShortName('7').to_string(),
            "invalid short name '7'."
        );
        assert_eq!(
            ConfigError::InvertedBounds {
                names: Names::long("items"),
                min: 4,
                max: 2,
            }
            .to_string(),
            "--items cardinality minimum 4 exceeds maximum 2."
        );
    }

    #[test]
    #[cfg(feature = "unit_test")]
    fn parser_state_test_dummy() {
        let state = ParserState::test_dummy(vec![BindingError::Unknown {
            token: "x".to_string(),
        }]);

        assert!(!state.success());
        assert_eq!(state.errors().len(), 1);
    }

    #[test]
    fn parser_state_success() {
        assert!(ParserState::new(Vec::default()).success());
        assert!(!ParserState::new(vec![BindingError::Unknown {
            token: "x".to_string(),
        }])
        .success());
    }
}
