//! Builder module for `argot`.
//! See [documentation root](https://docs.rs/argot/latest/argot/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod binder;
mod constant;
mod model;
mod render;
mod split;
mod tokens;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use binder::{BindingError, ConfigError, ErrorKind, GeneralParser, ParseOutcome, ParserState};
pub use model::*;
pub use render::*;
pub use split::*;
pub use tokens::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
