use thiserror::Error;

use crate::split::escaped;
use crate::split::windows;

/// Error from splitting a command-line string.
///
/// Splitting aborts at the first violation; no partial argument vector is
/// produced.  Offsets are byte positions into the input string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// End of input was reached inside an open, non-empty quoted region.
    #[error("unterminated quoted region starting at offset {0}.")]
    UnterminatedString(usize),
    /// End of input was reached while reading an escape sequence.
    #[error("unterminated escape sequence at offset {0}.")]
    UnterminatedEscape(usize),
    /// The character(s) following a backslash do not form a known escape.
    #[error("unrecognized escape sequence at offset {0}.")]
    UnrecognizedEscapeSequence(usize),
    /// A quote appeared without whitespace separating it from other content.
    #[error("quote not delimited by whitespace at offset {0}.")]
    UnquotedQuote(usize),
}

/// The quoting grammar used to split a command-line string into arguments.
///
/// Both grammars are deterministic, single-pass, left-to-right.
///
/// ### Example
/// ```
/// use argot_builder::SplitGrammar;
///
/// let arguments = SplitGrammar::Windows.split(r#"convert "my file.txt" out.txt"#).unwrap();
/// assert_eq!(arguments, vec!["convert".to_string(), "my file.txt".to_string(), "out.txt".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitGrammar {
    /// Backslash-escape grammar: `"..."` quoting with C-string style escape
    /// sequences (`\\`, `\"`, `\xHH`, `\uHHHH`, ..).  Strict about quote
    /// placement and escape well-formedness.
    Escaped,
    /// The native Windows argv convention (`CommandLineToArgvW`):
    /// backslash runs count only before quotes, doubled quotes embed a
    /// literal quote, and an unterminated trailing quote is accepted.
    Windows,
}

impl SplitGrammar {
    /// Split `command_line` into an argument vector under this grammar.
    ///
    /// Empty or all-whitespace input yields zero arguments.  The `Windows`
    /// grammar never fails; the signature is shared across grammars.
    pub fn split(&self, command_line: &str) -> Result<Vec<String>, SplitError> {
        match self {
            SplitGrammar::Escaped => escaped::split(command_line),
            SplitGrammar::Windows => windows::split(command_line),
        }
    }
}
