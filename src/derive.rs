//! Derive Api for `argot` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(ArgotOptions)]`.
//! This will generate a function `S::parse() -> S` which parses the Cli parameters fitting `S`.
//! `argot` will do its best to infer the intended Cli from the parameter structure `S`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ### Parameter Configuration
//! The implicit Cli inference uses the following rules:
//! ```console
//! Type        | Specification
//! -----------------------------------
//! Option<T>   | Specification::option(Optional::new(..), ..)
//! Vec<T>      | Specification::positional(Sequence::new(.., Cardinality::AtLeast(1)), ..)
//! HashSet<T>  | Specification::positional(Sequence::new(.., Cardinality::AtLeast(1)), ..)
//! bool        | Specification::option(Switch::new(..), ..)
//! T           | Specification::positional(Scalar::new(..), ..)
//! ```
//!
//! Notice, these implicit rules do not capture all possible `argot` configurations.
//! Therefore, we provide the additional explicit configuration field attributes, which may be combined as necessary.
//! * `#[argot(option)]`, `#[argot(positional)]`, or `#[argot(remaining)]` to explicitly select the specification class.
//! Only one of these may be used on the same field.
//! * `#[argot(short = C)]` to explicitly set the short name for an option specification.
//! `C` must be a char value (ex: `'c'`).
//! * `#[argot(cardinality = N)]` to explicitly control the [Cardinality](../enum.Cardinality.html) of a sequence field.
//! * `#[argot(help = "..")]` defines the help message for the specification.
//!
//! The struct itself may be instrumented with `#[argot(program = "..", about = "..")]` to name and describe the generated parser.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, ArgotOptions)]
//! #[argot(program = "quick")]
//! struct Parameters {
//!     quick: usize,
//!     // the above generates:
//!     //  .add(Specification::positional(Scalar::new(&mut parameters.quick), "quick"))
//!
//!     #[argot(option)]
//!     brown: usize,
//!     // the above generates:
//!     //  .add(Specification::option(Scalar::new(&mut parameters.brown), Names::long("brown")))
//!
//!     #[argot(option, short = 'f')]
//!     fox: usize,
//!     // the above generates:
//!     //  .add(Specification::option(Scalar::new(&mut parameters.fox), Names::both('f', "fox")))
//!
//!     #[argot(cardinality = Cardinality::Fixed(2))]
//!     jumps: Vec<usize>,
//!     // the above generates:
//!     //  .add(Specification::positional(Sequence::new(&mut parameters.jumps, Cardinality::Fixed(2)), "jumps"))
//!
//!     #[argot(remaining)]
//!     over: Vec<String>,
//!     // the above generates:
//!     //  .add(Specification::remaining(Sequence::new(&mut parameters.over, Cardinality::AtLeast(0)), "over"))
//! }
//! ```

pub use argot_derive::*;
