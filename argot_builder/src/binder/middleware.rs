use crate::binder::core::{BindOutcome, Binder};
use crate::binder::model::ParserState;
use crate::render::{HelpDraft, HelpFormat, UserInterface};
use crate::split::{SplitError, SplitGrammar};
use crate::tokens::{explode_option_list, preprocess, Preamble};

/// The built parser, ready to run against input.
///
/// Holds exclusive borrows of every declared field, so it is consumed by the
/// parse call; build a fresh one per parse.
#[derive(Debug)]
pub struct GeneralParser<'a> {
    binder: Binder<'a>,
    draft: HelpDraft,
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(binder: Binder<'a>, draft: HelpDraft) -> Self {
        Self { binder, draft }
    }

    /// Run the parser against an explicit argument vector (without the
    /// program name).
    pub fn parse_tokens<S: AsRef<str>>(self, arguments: &[S]) -> ParseOutcome {
        self.parse_tokens_with_front(arguments, |_| Preamble {
            tokens: Vec::default(),
            consumed: 0,
        })
    }

    /// Run the parser against an explicit argument vector, letting `front`
    /// claim leading arguments before classification (ex: a verb prefix
    /// handled outside the specification table).
    pub fn parse_tokens_with_front<S, F>(self, arguments: &[S], front: F) -> ParseOutcome
    where
        S: AsRef<str>,
        F: FnOnce(&[S]) -> Preamble,
    {
        let GeneralParser { binder, draft } = self;
        let tokens = preprocess(arguments, front, &binder);
        let tokens =
            explode_option_list(tokens, |text, long_form| binder.separator_of(text, long_form));

        match binder.bind(tokens) {
            BindOutcome::Bound(state) => ParseOutcome::Bound(state),
            BindOutcome::HelpRequested => ParseOutcome::Help(draft),
        }
    }

    /// Run the parser against the process arguments.
    pub fn parse(self) -> ParseOutcome {
        let arguments: Vec<String> = std::env::args().skip(1).collect();
        self.parse_tokens(&arguments)
    }

    /// Split a single command-line string under `grammar`, then run the
    /// parser against the resulting argument vector.
    pub fn parse_line(
        self,
        grammar: SplitGrammar,
        command_line: &str,
    ) -> Result<ParseOutcome, SplitError> {
        let arguments = grammar.split(command_line)?;
        Ok(self.parse_tokens(&arguments))
    }
}

/// What a parse call produced.
///
/// The library never terminates the process; the host applies the exit code.
#[derive(Debug)]
pub enum ParseOutcome {
    /// The binding pass ran; fields hold their bound-so-far values.
    Bound(ParserState),
    /// The built-in help specification matched.
    Help(HelpDraft),
}

impl ParseOutcome {
    /// The conventional exit code: `0` for success or help, `2` for a parse
    /// failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseOutcome::Bound(state) if !state.success() => 2,
            _ => 0,
        }
    }

    /// Render this outcome through `format` onto `interface`: the help
    /// document on help, nothing on success, the error report on failure.
    pub fn deliver(
        self,
        format: &dyn HelpFormat,
        interface: &dyn UserInterface,
    ) -> Result<(), i32> {
        match self {
            ParseOutcome::Help(draft) => {
                for line in format.render_help(&draft) {
                    interface.print(line);
                }

                Ok(())
            }
            ParseOutcome::Bound(state) => {
                if state.success() {
                    Ok(())
                } else {
                    for line in format.render_errors(state.errors()) {
                        interface.print_error(line);
                    }

                    Err(2)
                }
            }
        }
    }
}
