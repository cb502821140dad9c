use crate::tokens::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Classify the argument strings into `Name`/`Value` tokens.
///
/// Classification never fails: an argument that cannot be recognized under
/// `lookup` passes through unchanged as a single `Value`, and the binder
/// decides what to make of it.
///
/// ### Example
/// ```
/// use argot_builder::{tokenize, NameLookup, NameRecognition, Token};
///
/// struct Lookup;
///
/// impl NameLookup for Lookup {
///     fn long(&self, name: &str) -> NameRecognition {
///         match name {
///             "verbose" => NameRecognition::Flag,
///             _ => NameRecognition::Unknown,
///         }
///     }
///
///     fn short(&self, _: char) -> NameRecognition {
///         NameRecognition::Unknown
///     }
/// }
///
/// let tokens = tokenize(&["--verbose", "a.txt"], &Lookup {});
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Name {
///             text: "verbose".to_string(),
///             long_form: true,
///         },
///         Token::Value {
///             text: "a.txt".to_string(),
///             attached: false,
///         },
///     ]
/// );
/// ```
pub fn tokenize<S: AsRef<str>>(arguments: &[S], lookup: &impl NameLookup) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::default();

    for argument in arguments {
        classify(argument.as_ref(), lookup, &mut tokens);
    }

    #[cfg(feature = "tracing_debug")]
    {
        let argument_count = arguments.len();
        let token_count = tokens.len();
        debug!("Tokenized {argument_count} argument(s) into {token_count} token(s).");
    }

    tokens
}

fn classify(argument: &str, lookup: &impl NameLookup, tokens: &mut Vec<Token>) {
    if let Some(name) = argument.strip_prefix("--") {
        let (name, joined) = split_equals_delimiter(name);

        if name.is_empty() || matches!(lookup.long(name), NameRecognition::Unknown) {
            tokens.push(Token::Value {
                text: argument.to_string(),
                attached: false,
            });
            return;
        }

        tokens.push(Token::Name {
            text: name.to_string(),
            long_form: true,
        });

        if let Some(value) = joined {
            tokens.push(Token::Value {
                text: value.to_string(),
                attached: true,
            });
        }
    } else if let Some(cluster) = argument.strip_prefix('-') {
        // A lone dash carries no name to recognize.
        if cluster.is_empty() {
            tokens.push(Token::Value {
                text: argument.to_string(),
                attached: false,
            });
            return;
        }

        // Negative numbers are values, not short clusters.
        if cluster.parse::<f64>().is_ok() {
            tokens.push(Token::Value {
                text: argument.to_string(),
                attached: false,
            });
            return;
        }

        let (cluster, joined) = split_equals_delimiter(cluster);
        let mut exploded: Vec<Token> = Vec::default();
        let mut remainder_value: Option<String> = None;
        let characters: Vec<char> = cluster.chars().collect();

        for (index, c) in characters.iter().enumerate() {
            match lookup.short(*c) {
                NameRecognition::Unknown => {
                    // One unrecognized character fails the whole cluster.
                    tokens.push(Token::Value {
                        text: argument.to_string(),
                        attached: false,
                    });
                    return;
                }
                NameRecognition::Flag => {
                    exploded.push(Token::Name {
                        text: c.to_string(),
                        long_form: false,
                    });
                }
                NameRecognition::Valued => {
                    // A value-taking name claims the rest of the cluster as its value.
                    exploded.push(Token::Name {
                        text: c.to_string(),
                        long_form: false,
                    });
                    let remainder: String = characters[index + 1..].iter().collect();

                    if !remainder.is_empty() {
                        remainder_value.replace(remainder);
                    }

                    break;
                }
            }
        }

        tokens.extend(exploded);

        if let Some(value) = remainder_value {
            tokens.push(Token::Value {
                text: value,
                attached: true,
            });
        }

        if let Some(value) = joined {
            tokens.push(Token::Value {
                text: value.to_string(),
                attached: true,
            });
        }
    } else {
        tokens.push(Token::Value {
            text: argument.to_string(),
            attached: false,
        });
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

/// Run a caller-supplied front end over the leading arguments, then classify
/// the rest with [`tokenize`].
///
/// The front end may claim a prefix of the argument vector and emit tokens
/// for it; claims beyond the argument count are clamped.  Front tokens
/// precede main-pass tokens and relative order is preserved throughout.
pub fn preprocess<S, F>(arguments: &[S], front: F, lookup: &impl NameLookup) -> Vec<Token>
where
    S: AsRef<str>,
    F: FnOnce(&[S]) -> Preamble,
{
    let Preamble {
        mut tokens,
        consumed,
    } = front(arguments);
    let consumed = std::cmp::min(consumed, arguments.len());
    tokens.extend(tokenize(&arguments[consumed..], lookup));
    tokens
}

/// Expand the single `Value` immediately following a `Name` whose
/// specification declares a list separator into adjacent `Value` tokens.
///
/// `separator_of` is queried with the name text and its long/short form.
/// Values not immediately preceded by a separator-declaring `Name` pass
/// through untouched.
pub fn explode_option_list<F>(tokens: Vec<Token>, separator_of: F) -> Vec<Token>
where
    F: Fn(&str, bool) -> Option<char>,
{
    let mut exploded: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut pending_separator: Option<char> = None;

    for token in tokens.into_iter() {
        match token {
            Token::Name { ref text, long_form } => {
                pending_separator = separator_of(text, long_form);
                exploded.push(token);
            }
            Token::Value { text, attached } => match pending_separator.take() {
                Some(separator) => {
                    for piece in text.split(separator) {
                        exploded.push(Token::Value {
                            text: piece.to_string(),
                            attached,
                        });
                    }
                }
                None => {
                    exploded.push(Token::Value { text, attached });
                }
            },
        }
    }

    exploded
}
