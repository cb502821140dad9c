mod core;
mod middleware;
mod model;

pub use middleware::{GeneralParser, ParseOutcome};
pub use model::{BindingError, ConfigError, ErrorKind, ParserState};

pub(crate) use self::core::{BindOutcome, Binder};
pub(crate) use model::{
    AnonymousBindable, BlackHole, OptionBind, OptionSpec, PositionalBind, PositionalSpec,
};
