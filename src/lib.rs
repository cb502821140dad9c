//! `argot` is a declarative command line parser for Rust, with command-line
//! string splitting.
//!
//! Although other crates provide command line parser functionality, we have found they prioritize different concerns than those we are interested in.
//! `argot` attempts to prioritize the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! All type `T` parsing is controlled by [`std::str::FromStr`].
//! * *Declarative specification table*:
//! The Cli is described up front as a table of [`Specification`]s; the table is validated in one shot before any input is touched.
//! * *Positional vs. option paradigm*:
//! Positional values are bound by order/index, options via `--..` or `-..` syntax.
//! * *Error accumulation*:
//! A failed parse reports every problem in the input, not just the first one.
//! * *Host-controlled process*:
//! `argot` never calls `process::exit`; the [`ParseOutcome`] hands the conventional exit code to the host.
//! * *Command-line string splitting*:
//! For single-string entry points (shells-within-programs, remote commands), [`SplitGrammar`] turns one string into an argument vector under either of two quoting grammars.
//!
//! # Usage
//! This page includes a few demos on using `argot`.
//! More examples are outlined in [the source](https://github.com/sawatzkylindsey/argot/tree/main/demos).
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_build.rs")]
//! ```
//!
//! # Builder Api
//! Configure `argot` by starting with a [`CommandParser`] and `add`ing specifications.
//! There are three classes of specification: [`Specification::option`], [`Specification::positional`], and [`Specification::remaining`].
//!
//! Each specification takes a *field* which serves to specify the following aspects on the Cli:
//! * The underlying type `T` of the specification (ex: `u32`).
//! * Whether `T` is wrapped in a container type `C` (ex: `Vec<T>` or `Option<T>`).
//! * The [`Cardinality`] of the specification (ex: 0, 1, at least 1, between 2 and 4).
//!
//! ### Fields
//! * [`Scalar`]: a single-value field (positional or option).
//! This is the most common field to use in your Cli.
//! * [`Sequence`]: a multi-value field (positional or option) for any collection that implements [Collectable](./prelude/trait.Collectable.html).
//! `argot` provides the `Collectable` implementations for `Vec<T>` and `HashSet<T>`.
//! * [`Switch`]: a no-value option, used when specifying Cli *flags* (ex: `--verbose`).
//! Note that `Switch` may apply to any type `T` (not restricted to just `bool`).
//! * [`Optional`]: an option field used exclusively to specify an `Option<T>` type.
//!
//! ### Splitting
//! Single-string entry points split the command line first:
//! ```no_run
#![doc = include_str!("../demos/demo_split.rs")]
//! ```
#![deny(missing_docs)]

pub mod derive;

pub use argot_builder::*;
