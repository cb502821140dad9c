use std::collections::{HashMap, HashSet};

use crate::binder::model::*;
use crate::constant::{HELP_NAME, HELP_SHORT};
use crate::tokens::{NameLookup, NameRecognition, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The result of one binding pass.
#[derive(Debug)]
pub(crate) enum BindOutcome {
    /// The walk completed; fields hold their bound-so-far values.
    Bound(ParserState),
    /// The built-in help specification matched; the walk stopped.
    HelpRequested,
}

/// Matches tokens against the specification table and drives values into the
/// caller's fields, accumulating errors instead of raising them.
pub(crate) struct Binder<'a> {
    options: Vec<OptionBind<'a>>,
    positionals: Vec<PositionalBind<'a>>,
    ignore_unknown: bool,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(
        options: Vec<OptionBind<'a>>,
        mut positionals: Vec<PositionalBind<'a>>,
        ignore_unknown: bool,
    ) -> Self {
        // Indexed slots fill in ascending order; the collector comes last.
        positionals.sort_by_key(|(specification, _)| (specification.remaining, specification.index));
        Self {
            options,
            positionals,
            ignore_unknown,
        }
    }

    /// The list separator declared by the named specification, if any.
    pub(crate) fn separator_of(&self, text: &str, long_form: bool) -> Option<char> {
        self.find_option(text, long_form)
            .and_then(|index| self.options[index].0.separator)
    }

    fn find_option(&self, text: &str, long_form: bool) -> Option<usize> {
        self.options.iter().position(|(specification, _)| {
            if long_form {
                specification.names.long_name() == Some(text)
            } else {
                let mut characters = text.chars();
                specification.names.short_name() == characters.next()
                    && characters.next().is_none()
            }
        })
    }

    /// Walk the tokens left to right, populating fields and collecting
    /// errors; the built-in help specification short circuits the walk.
    pub(crate) fn bind(mut self, tokens: Vec<Token>) -> BindOutcome {
        let mut errors: Vec<BindingError> = Vec::default();
        let mut option_counts: Vec<usize> = vec![0; self.options.len()];
        let mut option_supplied: Vec<bool> = vec![false; self.options.len()];
        let mut positional_counts: Vec<usize> = vec![0; self.positionals.len()];
        let mut bad_options: HashSet<usize> = HashSet::default();
        let mut bad_positionals: HashSet<usize> = HashSet::default();
        let mut open: Option<usize> = None;
        let mut last_flag: Option<usize> = None;
        let mut positional_cursor: usize = 0;
        let mut eat_unknown_value = false;

        for token in tokens.into_iter() {
            match token {
                Token::Name { text, long_form } => {
                    eat_unknown_value = false;
                    open = None;
                    last_flag = None;

                    if (long_form && text == HELP_NAME)
                        || (!long_form && text.chars().eq([HELP_SHORT]))
                    {
                        #[cfg(feature = "tracing_debug")]
                        debug!("Help requested; stopping the walk.");
                        return BindOutcome::HelpRequested;
                    }

                    let index = match self.find_option(&text, long_form) {
                        Some(index) => index,
                        None => unreachable!("internal error - token must name a specification"),
                    };
                    let (specification, capture) = &mut self.options[index];

                    if option_supplied[index] {
                        // One report per specification, however often it repeats.
                        if bad_options.insert(index) {
                            errors.push(BindingError::BadFormat {
                                specification: specification.names.clone(),
                                token: String::default(),
                            });
                        }
                    } else {
                        option_supplied[index] = true;
                        capture.matched();
                    }

                    if specification.cardinality.maximum() == Some(0) {
                        last_flag = Some(index);
                    } else {
                        open = Some(index);
                    }
                }
                Token::Value { text, attached } => {
                    if eat_unknown_value && !attached {
                        // Claimed by the unknown option that preceded it.
                        eat_unknown_value = false;
                        continue;
                    }

                    eat_unknown_value = false;

                    if !attached && dash_shaped(&text) {
                        // The recognition predicate refused this name.
                        open = None;
                        last_flag = None;
                        eat_unknown_value = !text.contains('=');

                        if !self.ignore_unknown {
                            errors.push(BindingError::Unknown { token: text });
                        }

                        continue;
                    }

                    if let Some(index) = open {
                        let (specification, capture) = &mut self.options[index];

                        if specification.cardinality.accepts(option_counts[index]) {
                            option_counts[index] += 1;

                            if capture.capture(&text).is_err() && bad_options.insert(index) {
                                errors.push(BindingError::BadFormat {
                                    specification: specification.names.clone(),
                                    token: text,
                                });
                            }
                        } else {
                            // Consume and discard past the maximum; report once.
                            if bad_options.insert(index) {
                                errors.push(BindingError::BadFormat {
                                    specification: specification.names.clone(),
                                    token: text,
                                });
                            }
                        }

                        // A single-valued option closes on its value; sequences
                        // stay open until the next name.
                        if specification.cardinality.maximum() == Some(1) {
                            open = None;
                        }

                        continue;
                    }

                    if attached {
                        let index = match last_flag {
                            Some(index) => index,
                            None => {
                                unreachable!("internal error - attached value must follow a name")
                            }
                        };

                        // A flag takes no value; `--flag=x` is malformed.
                        if bad_options.insert(index) {
                            errors.push(BindingError::BadFormat {
                                specification: self.options[index].0.names.clone(),
                                token: text,
                            });
                        }

                        continue;
                    }

                    while positional_cursor < self.positionals.len()
                        && !self.positionals[positional_cursor]
                            .0
                            .cardinality
                            .accepts(positional_counts[positional_cursor])
                    {
                        positional_cursor += 1;
                    }

                    if positional_cursor < self.positionals.len() {
                        let (specification, capture) = &mut self.positionals[positional_cursor];

                        if positional_counts[positional_cursor] == 0 {
                            capture.matched();
                        }

                        positional_counts[positional_cursor] += 1;

                        if capture.capture(&text).is_err()
                            && bad_positionals.insert(positional_cursor)
                        {
                            errors.push(BindingError::BadFormat {
                                specification: specification.identity(),
                                token: text,
                            });
                        }
                    } else if !self.ignore_unknown {
                        errors.push(BindingError::Unknown { token: text });
                    }
                }
            }
        }

        // Under-minimum checks are deferred until the walk completes.
        for (index, (specification, capture)) in self.options.iter_mut().enumerate() {
            if option_supplied[index] {
                if option_counts[index] < specification.cardinality.minimum() as usize
                    && bad_options.insert(index)
                {
                    errors.push(BindingError::BadFormat {
                        specification: specification.names.clone(),
                        token: String::default(),
                    });
                }
            } else {
                if specification.required && !specification.has_default {
                    errors.push(BindingError::MissingRequired {
                        specification: specification.names.clone(),
                    });
                }

                capture.settle();
            }
        }

        for (index, (specification, capture)) in self.positionals.iter_mut().enumerate() {
            if positional_counts[index] == 0 {
                // Zero values satisfy a minimum of zero, required or not.
                if specification.required
                    && !specification.has_default
                    && specification.cardinality.minimum() > 0
                {
                    errors.push(BindingError::MissingRequired {
                        specification: specification.identity(),
                    });
                }

                capture.settle();
            } else if positional_counts[index] < specification.cardinality.minimum() as usize
                && bad_positionals.insert(index)
            {
                errors.push(BindingError::BadFormat {
                    specification: specification.identity(),
                    token: String::default(),
                });
            }
        }

        let mut set_members: HashMap<&str, usize> = HashMap::default();

        for (index, (specification, _)) in self.options.iter().enumerate() {
            if option_supplied[index] {
                if let Some(set) = &specification.exclusive_set {
                    *set_members.entry(set.as_str()).or_default() += 1;
                }
            }
        }

        for (index, (specification, _)) in self.options.iter().enumerate() {
            if option_supplied[index] {
                if let Some(set) = &specification.exclusive_set {
                    if set_members[set.as_str()] > 1 {
                        errors.push(BindingError::ViolatesMutualExclusiveness {
                            specification: specification.names.clone(),
                            set: set.clone(),
                        });
                    }
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            let error_count = errors.len();
            debug!("Binding pass completed with {error_count} error(s).");
        }

        BindOutcome::Bound(ParserState::new(errors))
    }
}

// The captures are type-erased closures over caller borrows; show the
// specification table instead.
impl<'a> std::fmt::Debug for Binder<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let options: Vec<&OptionSpec> = self.options.iter().map(|(s, _)| s).collect();
        let positionals: Vec<&PositionalSpec> = self.positionals.iter().map(|(s, _)| s).collect();
        f.debug_struct("Binder")
            .field("options", &options)
            .field("positionals", &positionals)
            .field("ignore_unknown", &self.ignore_unknown)
            .finish()
    }
}

impl<'a> NameLookup for Binder<'a> {
    fn long(&self, name: &str) -> NameRecognition {
        match self.find_option(name, true) {
            Some(index) => recognition(&self.options[index].0),
            None => NameRecognition::Unknown,
        }
    }

    fn short(&self, name: char) -> NameRecognition {
        let text = name.to_string();
        match self.find_option(&text, false) {
            Some(index) => recognition(&self.options[index].0),
            None => NameRecognition::Unknown,
        }
    }
}

fn recognition(specification: &OptionSpec) -> NameRecognition {
    if specification.cardinality.maximum() == Some(0) {
        NameRecognition::Flag
    } else {
        NameRecognition::Valued
    }
}

fn dash_shaped(text: &str) -> bool {
    text.len() > 1 && text.starts_with('-') && text.parse::<f64>().is_err()
}
