use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

/// A raw attribute value, kept as tokens so literals, paths, and expressions
/// all pass through to the generated code unchanged.
#[derive(Debug)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The `#[argot(..)]` arguments in flat form: bare words and `key = value`
/// assignments (repeatable keys collect in declaration order).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

/// The specification shape inferred for one struct field.
#[derive(Debug, PartialEq, Eq)]
pub enum ParameterType {
    ScalarPositional,
    SequencePositional {
        cardinality: DeriveValue,
    },
    Remaining {
        cardinality: DeriveValue,
    },
    ScalarOption {
        short: Option<DeriveValue>,
    },
    OptionalOption {
        short: Option<DeriveValue>,
    },
    SequenceOption {
        cardinality: DeriveValue,
        short: Option<DeriveValue>,
    },
    Switch {
        short: Option<DeriveValue>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub parameter_type: ParameterType,
    pub help: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program_name: DeriveValue,
    pub about: Option<DeriveValue>,
    pub parameters: Vec<DeriveParameter>,
}
