use crate::api::capture::{GenericBindable, InvalidBind, OptionField, PositionalField};
use crate::binder::{AnonymousBindable, OptionBind, OptionSpec, PositionalBind, PositionalSpec};
use crate::model::{Cardinality, Names};
use crate::render::{HelpEntry, HelpText};

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericBindable<'a, T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl GenericBindable<'a, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousBindable for AnonymousCapture<'a, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidBind> {
        self.field.capture(token)
    }

    fn settle(&mut self) {
        self.field.settle();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SpecClass {
    Opt,
    Pos,
    Remaining,
}

pub(super) struct SpecificationInner<'a, T> {
    pub(super) class: SpecClass,
    pub(super) field: AnonymousCapture<'a, T>,
    pub(super) cardinality: Cardinality,
    pub(super) has_default: bool,
    pub(super) names: Option<Names>,
    pub(super) name: String,
    pub(super) index: Option<usize>,
    pub(super) required: bool,
    pub(super) exclusive_set: Option<String>,
    pub(super) separator: Option<char>,
    pub(super) help: Option<String>,
    pub(super) help_resource: Option<(String, String)>,
    pub(super) meta: Option<String>,
}

impl<'a, T> std::fmt::Debug for SpecificationInner<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.class {
            SpecClass::Opt => "Opt",
            SpecClass::Pos => "Pos",
            SpecClass::Remaining => "Remaining",
        };
        let identity = match &self.names {
            Some(names) => names.to_string(),
            None => self.name.clone(),
        };

        write!(
            f,
            "{class}[{t}, {cardinality}, {identity}]",
            t = std::any::type_name::<T>(),
            cardinality = self.cardinality,
        )
    }
}

impl<'a, T> SpecificationInner<'a, T> {
    pub(super) fn identity(&self) -> Names {
        match &self.names {
            Some(names) => names.clone(),
            None => Names::Long(self.name.clone()),
        }
    }

    fn meta(&self) -> String {
        match &self.meta {
            Some(meta) => meta.clone(),
            None => {
                let name = match &self.names {
                    Some(names) => match names.long_name() {
                        Some(long) => long.to_string(),
                        None => match names.short_name() {
                            Some(short) => short.to_string(),
                            None => unreachable!("internal error - names must carry a name"),
                        },
                    },
                    None => self.name.clone(),
                };
                name.to_ascii_uppercase().replace('-', "_")
            }
        }
    }

    fn help_text(&self) -> Option<HelpText> {
        match (&self.help, &self.help_resource) {
            (Some(help), _) => Some(HelpText::Literal(help.clone())),
            (None, Some((container, name))) => Some(HelpText::Resource {
                container: container.clone(),
                name: name.clone(),
            }),
            (None, None) => None,
        }
    }

    pub(super) fn listing(&self) -> String {
        match &self.names {
            Some(names) => {
                let grammar = grammar(&self.cardinality, &self.meta());
                match names {
                    Names::Short(short) => format!("-{short}{grammar}"),
                    Names::Long(long) => format!("--{long}{grammar}"),
                    Names::Both(short, long) => format!("-{short}{grammar}, --{long}{grammar}"),
                }
            }
            None => self.meta(),
        }
    }

    pub(super) fn summary(&self) -> String {
        match &self.names {
            Some(names) => {
                let grammar = grammar(&self.cardinality, &self.meta());
                let name = match names.short_name() {
                    Some(short) => format!("-{short}"),
                    None => match names.long_name() {
                        Some(long) => format!("--{long}"),
                        None => unreachable!("internal error - names must carry a name"),
                    },
                };
                format!("[{name}{grammar}]")
            }
            None => {
                let meta = self.meta();
                match (self.cardinality.minimum(), self.cardinality.maximum()) {
                    (0, Some(0)) => String::default(),
                    (minimum, Some(maximum)) if minimum == maximum => {
                        vec![meta; minimum as usize].join(" ")
                    }
                    (0, _) => format!("[{meta} ...]"),
                    (minimum, _) => {
                        let fixed = vec![meta; minimum as usize].join(" ");
                        format!("{fixed} [...]")
                    }
                }
            }
        }
    }
}

// The value grammar trailing an option name in usage text.
fn grammar(cardinality: &Cardinality, meta: &str) -> String {
    match (cardinality.minimum(), cardinality.maximum()) {
        (0, Some(0)) => String::default(),
        (minimum, Some(maximum)) if minimum == maximum => {
            let copies = vec![meta; minimum as usize].join(" ");
            format!(" {copies}")
        }
        (0, _) => format!(" [{meta} ...]"),
        (minimum, _) => {
            let copies = vec![meta; minimum as usize].join(" ");
            format!(" {copies} [...]")
        }
    }
}

impl<'a, T> From<&SpecificationInner<'a, T>> for OptionSpec {
    fn from(value: &SpecificationInner<'a, T>) -> Self {
        let names = match &value.names {
            Some(names) => names.clone(),
            None => unreachable!("internal error - an option must carry names"),
        };
        OptionSpec {
            names,
            cardinality: value.cardinality,
            required: value.required,
            has_default: value.has_default,
            exclusive_set: value.exclusive_set.clone(),
            separator: value.separator,
        }
    }
}

impl<'a, T> From<SpecificationInner<'a, T>> for OptionBind<'a> {
    fn from(value: SpecificationInner<'a, T>) -> Self {
        let specification = OptionSpec::from(&value);
        let SpecificationInner { field, .. } = value;
        (specification, Box::new(field))
    }
}

impl<'a, T> From<SpecificationInner<'a, T>> for PositionalBind<'a> {
    fn from(value: SpecificationInner<'a, T>) -> Self {
        let specification = PositionalSpec {
            name: value.name.clone(),
            index: value.index.unwrap_or(0),
            cardinality: value.cardinality,
            required: value.required,
            has_default: value.has_default,
            remaining: matches!(value.class, SpecClass::Remaining),
        };
        let SpecificationInner { field, .. } = value;
        (specification, Box::new(field))
    }
}

impl<'a, T> From<&SpecificationInner<'a, T>> for HelpEntry {
    fn from(value: &SpecificationInner<'a, T>) -> Self {
        HelpEntry::new(
            !matches!(value.class, SpecClass::Opt),
            value.summary(),
            value.listing(),
            value.help_text(),
        )
    }
}

/// One declared bindable option or positional value.
/// Used with [`CommandParser::add`](./struct.CommandParser.html#method.add).
pub struct Specification<'a, T>(SpecificationInner<'a, T>);

impl<'a, T> Specification<'a, T> {
    /// Declare a named option.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Names, Specification, Switch};
    ///
    /// let mut verbose: bool = false;
    /// Specification::option(Switch::new(&mut verbose, true), Names::both('v', "verbose"));
    /// ```
    pub fn option(field: impl GenericBindable<'a, T> + OptionField + 'a, names: Names) -> Self {
        let cardinality = field.cardinality();
        let has_default = field.has_default();
        Self(SpecificationInner {
            class: SpecClass::Opt,
            field: AnonymousCapture::bind(field),
            cardinality,
            has_default,
            name: match names.long_name() {
                Some(long) => long.to_string(),
                None => names
                    .short_name()
                    .map(|short| short.to_string())
                    .unwrap_or_default(),
            },
            names: Some(names),
            index: None,
            required: false,
            exclusive_set: None,
            separator: None,
            help: None,
            help_resource: None,
            meta: None,
        })
    }

    /// Declare a positional value, bound by order rather than by name.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Scalar, Specification};
    ///
    /// let mut source: String = String::default();
    /// Specification::positional(Scalar::new(&mut source), "source");
    /// ```
    pub fn positional(
        field: impl GenericBindable<'a, T> + PositionalField + 'a,
        name: impl Into<String>,
    ) -> Self {
        let cardinality = field.cardinality();
        let has_default = field.has_default();
        Self(SpecificationInner {
            class: SpecClass::Pos,
            field: AnonymousCapture::bind(field),
            cardinality,
            has_default,
            names: None,
            name: name.into(),
            index: None,
            required: true,
            exclusive_set: None,
            separator: None,
            help: None,
            help_resource: None,
            meta: None,
        })
    }

    /// Declare the remaining-values collector: the positional sequence that
    /// absorbs values once every indexed slot is filled.  At most one per
    /// parser.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Cardinality, Sequence, Specification};
    ///
    /// let mut rest: Vec<String> = Vec::default();
    /// Specification::remaining(Sequence::new(&mut rest, Cardinality::AtLeast(0)), "rest");
    /// ```
    pub fn remaining(
        field: impl GenericBindable<'a, T> + PositionalField + 'a,
        name: impl Into<String>,
    ) -> Self {
        let cardinality = field.cardinality();
        let has_default = field.has_default();
        Self(SpecificationInner {
            class: SpecClass::Remaining,
            field: AnonymousCapture::bind(field),
            cardinality,
            has_default,
            names: None,
            name: name.into(),
            index: None,
            required: false,
            exclusive_set: None,
            separator: None,
            help: None,
            help_resource: None,
            meta: None,
        })
    }

    /// Mark this specification as required.  Positionals are required by
    /// default; options are not.
    pub fn required(self) -> Self {
        let mut inner = self.0;
        inner.required = true;
        Self(inner)
    }

    /// Place this specification in a mutually exclusive set: of all the
    /// specifications sharing `set`, at most one may be supplied per parse.
    /// The empty set name maps to the shared set `"default"`.
    pub fn exclusive_set(self, set: impl Into<String>) -> Self {
        let mut inner = self.0;
        let set: String = set.into();
        inner.exclusive_set = Some(if set.is_empty() {
            "default".to_string()
        } else {
            set
        });
        Self(inner)
    }

    /// Document the help message for this specification.
    /// If repeated, only the final message applies.
    pub fn help(self, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.help = Some(description.into());
        Self(inner)
    }

    /// Point the help message at an external resource.  Declaring both this
    /// and [`Specification::help`] is a configuration error.
    pub fn help_resource(self, container: impl Into<String>, name: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.help_resource = Some((container.into(), name.into()));
        Self(inner)
    }

    /// Replace the upper-cased name as the value placeholder in usage text.
    pub fn meta(self, hint: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.meta = Some(hint.into());
        Self(inner)
    }

    /// Declare a list separator: a single supplied value splits into multiple
    /// values on this character.  Only meaningful on sequence options.
    pub fn separator(self, separator: char) -> Self {
        let mut inner = self.0;
        inner.separator = Some(separator);
        Self(inner)
    }

    /// Pin this positional to an explicit slot index.  Defaults to
    /// declaration order.
    pub fn index(self, index: usize) -> Self {
        let mut inner = self.0;
        inner.index = Some(index);
        Self(inner)
    }

    pub(super) fn consume(self) -> SpecificationInner<'a, T> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Scalar, Sequence, Switch};
    use rstest::rstest;

    #[test]
    fn option() {
        let mut flag: bool = false;
        let option =
            Specification::option(Switch::new(&mut flag, true), Names::long("flag")).consume();

        assert_eq!(option.class, SpecClass::Opt);
        assert_eq!(option.names, Some(Names::long("flag")));
        assert_eq!(option.cardinality, Cardinality::Fixed(0));
        assert!(!option.required);
        assert_eq!(option.exclusive_set, None);
        assert_eq!(option.help, None);
        assert_eq!(option.help_resource, None);
        assert_eq!(option.meta, None);
    }

    #[test]
    fn option_builders() {
        let mut file: String = String::default();
        let option = Specification::option(Scalar::new(&mut file), Names::both('f', "file"))
            .required()
            .exclusive_set("io")
            .help("the file to convert")
            .meta("PATH")
            .consume();

        assert_eq!(option.class, SpecClass::Opt);
        assert!(option.required);
        assert_eq!(option.exclusive_set, Some("io".to_string()));
        assert_eq!(option.help, Some("the file to convert".to_string()));
        assert_eq!(option.meta, Some("PATH".to_string()));
    }

    #[test]
    fn option_empty_exclusive_set() {
        let mut flag: bool = false;
        let option = Specification::option(Switch::new(&mut flag, true), Names::Short('a'))
            .exclusive_set("")
            .consume();

        assert_eq!(option.exclusive_set, Some("default".to_string()));
    }

    #[test]
    fn option_help_resource() {
        let mut flag: bool = false;
        let option = Specification::option(Switch::new(&mut flag, true), Names::long("flag"))
            .help_resource("Resources", "FlagHelp")
            .consume();

        assert_eq!(
            option.help_resource,
            Some(("Resources".to_string(), "FlagHelp".to_string()))
        );
        assert_eq!(
            option.help_text(),
            Some(HelpText::Resource {
                container: "Resources".to_string(),
                name: "FlagHelp".to_string(),
            })
        );
    }

    #[test]
    fn positional() {
        let mut source: String = String::default();
        let positional = Specification::positional(Scalar::new(&mut source), "source").consume();

        assert_eq!(positional.class, SpecClass::Pos);
        assert_eq!(positional.names, None);
        assert_eq!(positional.name, "source");
        assert!(positional.required);
        assert_eq!(positional.index, None);
    }

    #[test]
    fn positional_index() {
        let mut source: String = String::default();
        let positional = Specification::positional(Scalar::new(&mut source), "source")
            .index(2)
            .consume();

        assert_eq!(positional.index, Some(2));
    }

    #[test]
    fn remaining() {
        let mut rest: Vec<String> = Vec::default();
        let collector =
            Specification::remaining(Sequence::new(&mut rest, Cardinality::AtLeast(0)), "rest")
                .consume();

        assert_eq!(collector.class, SpecClass::Remaining);
        assert!(!collector.required);
    }

    #[rstest]
    #[case(Cardinality::Fixed(0), "")]
    #[case(Cardinality::Fixed(1), " ITEM")]
    #[case(Cardinality::Fixed(2), " ITEM ITEM")]
    #[case(Cardinality::AtLeast(0), " [ITEM ...]")]
    #[case(Cardinality::AtLeast(1), " ITEM [...]")]
    #[case(Cardinality::Between(0, 4), " [ITEM ...]")]
    #[case(Cardinality::Between(2, 4), " ITEM ITEM [...]")]
    fn option_grammar(#[case] cardinality: Cardinality, #[case] expected: &str) {
        assert_eq!(grammar(&cardinality, "ITEM"), expected.to_string());
    }

    #[test]
    fn option_listing() {
        let mut file: String = String::default();
        let option =
            Specification::option(Scalar::new(&mut file), Names::both('f', "file")).consume();

        assert_eq!(option.listing(), "-f FILE, --file FILE");
        assert_eq!(option.summary(), "[-f FILE]");
    }

    #[test]
    fn option_listing_long_only() {
        let mut flag: bool = false;
        let option =
            Specification::option(Switch::new(&mut flag, true), Names::long("dry-run")).consume();

        assert_eq!(option.listing(), "--dry-run");
        assert_eq!(option.summary(), "[--dry-run]");
    }

    #[test]
    fn positional_summary() {
        let mut items: Vec<u32> = Vec::default();
        let positional = Specification::positional(
            Sequence::new(&mut items, Cardinality::AtLeast(1)),
            "item",
        )
        .consume();

        assert_eq!(positional.listing(), "ITEM");
        assert_eq!(positional.summary(), "ITEM [...]");
    }

    #[test]
    fn positional_summary_any() {
        let mut items: Vec<u32> = Vec::default();
        let positional = Specification::positional(
            Sequence::new(&mut items, Cardinality::AtLeast(0)),
            "item",
        )
        .consume();

        assert_eq!(positional.summary(), "[ITEM ...]");
    }

    #[test]
    fn meta_from_name() {
        let mut file: String = String::default();
        let option =
            Specification::option(Scalar::new(&mut file), Names::long("input-file")).consume();

        assert_eq!(option.meta(), "INPUT_FILE");
    }

    #[test]
    fn conversion_to_option_spec() {
        let mut items: Vec<u32> = Vec::default();
        let inner = Specification::option(
            Sequence::new(&mut items, Cardinality::AtLeast(0)),
            Names::long("item"),
        )
        .separator(',')
        .consume();
        let specification = OptionSpec::from(&inner);

        assert_eq!(specification.names, Names::long("item"));
        assert_eq!(specification.cardinality, Cardinality::AtLeast(0));
        assert_eq!(specification.separator, Some(','));
    }

    #[test]
    fn conversion_to_positional_spec() {
        let mut rest: Vec<String> = Vec::default();
        let inner =
            Specification::remaining(Sequence::new(&mut rest, Cardinality::AtLeast(0)), "rest")
                .index(3)
                .consume();
        let (specification, _) = PositionalBind::from(inner);

        assert_eq!(specification.name, "rest");
        assert_eq!(specification.index, 3);
        assert!(specification.remaining);
    }

    #[test]
    fn conversion_to_help_entry() {
        let mut flag: bool = false;
        let inner = Specification::option(Switch::new(&mut flag, true), Names::both('v', "verbose"))
            .help("more output")
            .consume();
        let entry = HelpEntry::from(&inner);

        assert!(!entry.positional);
        assert_eq!(entry.summary, "[-v]");
        assert_eq!(entry.listing, "-v, --verbose");
        assert_eq!(entry.help, Some(HelpText::Literal("more output".to_string())));
    }
}
