use crate::split::model::SplitError;

/// Split under the native Windows argv convention (`CommandLineToArgvW`).
///
/// 2n backslashes before a quote collapse to n backslashes with the quote
/// toggling the quoted range; 2n+1 backslashes collapse to n backslashes with
/// a literal quote.  Backslashes not followed by a quote pass through as-is.
/// An unterminated trailing quote is accepted.  The result is always `Ok`;
/// the signature is shared across grammars.
pub(crate) fn split(command_line: &str) -> Result<Vec<String>, SplitError> {
    let mut arguments: Vec<String> = Vec::default();
    let mut current = String::default();
    let mut quoting = false;
    // A closed quoted range makes even a zero length argument count.
    let mut empty_is_an_argument = false;
    let mut last = '\0';

    for c in command_line.chars() {
        if c == '"' {
            let backslashes = current.chars().rev().take_while(|t| *t == '\\').count();

            if backslashes % 2 == 0 {
                current.truncate(current.len() - backslashes / 2);
                quoting = !quoting;
                empty_is_an_argument = true;

                if quoting && last == '"' {
                    // A doubled quote inside a quoted range embeds a literal quote.
                    current.push(c);
                    last = '\0';
                    continue;
                }
            } else {
                current.truncate(current.len() - backslashes / 2 - 1);
                current.push(c);
            }
        } else if !quoting && c.is_whitespace() {
            if !current.is_empty() || empty_is_an_argument {
                arguments.push(std::mem::take(&mut current));
            }

            empty_is_an_argument = false;
        } else {
            current.push(c);
        }

        last = c;
    }

    if !current.is_empty() || empty_is_an_argument {
        arguments.push(current);
    }

    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("test", vec!["test"])]
    #[case("test test", vec!["test", "test"])]
    #[case(r#"test "test""#, vec!["test", "test"])]
    #[case(r#"test "te"s"t""#, vec!["test", "test"])]
    #[case(r#"test "te""""s"t""#, vec!["test", "te\"\"st"])]
    #[case(r#""abc" d e"#, vec!["abc", "d", "e"])]
    #[case(r#"a\\b d"e f"g h"#, vec![r"a\\b", "de fg", "h"])]
    #[case(r#"a\\\"b c d"#, vec![r#"a\"b"#, "c", "d"])]
    #[case(r#"a\\\\"b c" d e"#, vec![r"a\\b c", "d", "e"])]
    fn split_arguments(#[case] command_line: &str, #[case] expected: Vec<&str>) {
        // Execute
        let arguments = split(command_line).unwrap();

        // Verify
        assert_eq!(
            arguments,
            expected
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<String>>()
        );
    }

    #[rstest]
    #[case(r#""""#, vec![""])]
    #[case(r#"a """#, vec!["a", ""])]
    #[case(r#""" b"#, vec!["", "b"])]
    fn split_empty_argument(#[case] command_line: &str, #[case] expected: Vec<&str>) {
        // Execute
        let arguments = split(command_line).unwrap();

        // Verify
        assert_eq!(
            arguments,
            expected
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<String>>()
        );
    }

    #[rstest]
    #[case(r#""a""b""#, vec![r#"a"b"#])]
    #[case(r#"""""#, vec![r#"""#])]
    fn split_doubled_quote(#[case] command_line: &str, #[case] expected: Vec<&str>) {
        // Execute
        let arguments = split(command_line).unwrap();

        // Verify
        assert_eq!(
            arguments,
            expected
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<String>>()
        );
    }

    // Quote an argument so the grammar reads it back verbatim: backslash runs
    // against a quote are doubled, the quote itself escaped.
    fn quote(argument: &str) -> String {
        let mut quoted = String::from('"');
        let mut backslashes = 0;

        for c in argument.chars() {
            if c == '\\' {
                backslashes += 1;
            } else {
                if c == '"' {
                    quoted.extend(std::iter::repeat('\\').take(backslashes + 1));
                }

                backslashes = 0;
            }

            quoted.push(c);
        }

        quoted.extend(std::iter::repeat('\\').take(backslashes));
        quoted.push('"');
        quoted
    }

    #[rstest]
    #[case(r#"convert "my file.txt" out.txt"#)]
    #[case(r#"a\\\"b c d"#)]
    #[case(r#"a\\b d"e f"g h"#)]
    #[case(r#"a "" b"#)]
    fn split_requoted_stable(#[case] command_line: &str) {
        // Setup
        let arguments = split(command_line).unwrap();

        // Execute
        let requoted = arguments
            .iter()
            .map(|argument| quote(argument))
            .collect::<Vec<String>>()
            .join(" ");
        let arguments_again = split(&requoted).unwrap();

        // Verify
        assert_eq!(arguments_again, arguments);
    }

    #[test]
    fn split_unterminated_quote_accepted() {
        // Execute
        let arguments = split(r#""abc d e"#).unwrap();

        // Verify
        assert_eq!(arguments, vec!["abc d e".to_string()]);
    }
}
