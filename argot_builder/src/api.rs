mod capture;
mod core;
mod field;
mod parameter;

pub use self::core::CommandParser;
pub use capture::{GenericBindable, InvalidBind, OptionField, PositionalField};
pub use field::{Optional, Scalar, Sequence, Switch};
pub use parameter::Specification;
