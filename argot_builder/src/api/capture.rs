use thiserror::Error;

use crate::model::Cardinality;

/// Marker trait for fields that can formulate an option (ex: `--verbose`).
pub trait OptionField {}

/// Marker trait for fields that can formulate a positional value or a
/// remaining-values collector.
pub trait PositionalField {}

/// A token could not be converted into the field's type.
#[derive(Debug, Error)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidBind {
    pub(crate) token: String,
    pub(crate) type_name: &'static str,
}

/// Behaviour to bind an explicit generic type T from input `&str` tokens.
///
/// We use this at the bottom of the parser object graph so the compiler can
/// maintain each field's type.
#[doc(hidden)]
pub trait GenericBindable<'a, T> {
    /// Declare that the field has been matched against the input.
    fn matched(&mut self);

    /// Bind a single token into the generic type T for this field.
    fn capture(&mut self, token: &str) -> Result<(), InvalidBind>;

    /// Finish the binding pass, applying the declared default (if any) when
    /// the field went unmatched.
    fn settle(&mut self);

    /// Get the `Cardinality` for this implementation.
    fn cardinality(&self) -> Cardinality;

    /// Whether the field declares a default value.
    fn has_default(&self) -> bool {
        false
    }
}
