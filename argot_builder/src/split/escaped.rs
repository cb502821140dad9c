use crate::split::model::SplitError;

/// Split under the backslash-escape grammar.
///
/// Escape sequences produce literal content: an escaped quote never opens or
/// closes a quoted region, and the `\n`/`\r` escapes flatten into plain
/// spaces which never terminate an argument.
pub(crate) fn split(command_line: &str) -> Result<Vec<String>, SplitError> {
    let characters: Vec<(usize, char)> = command_line.char_indices().collect();
    let mut arguments: Vec<String> = Vec::default();
    let mut current = String::default();
    let mut quoting = false;
    let mut quote_offset = 0;
    let mut index = 0;

    while index < characters.len() {
        let (offset, c) = characters[index];

        if c == '\\' {
            let (unescaped, length) = escape_sequence(&characters, index, offset)?;
            current.push(unescaped);
            index += length;
        } else if c == '"' {
            if quoting {
                // The closing quote must sit against whitespace or the end of input.
                if let Some((_, follower)) = characters.get(index + 1) {
                    if !follower.is_whitespace() {
                        return Err(SplitError::UnquotedQuote(offset));
                    }
                }

                // A closed quoted region always produces an argument, even when empty.
                arguments.push(std::mem::take(&mut current));
                quoting = false;
                // Consume the quote together with its single trailing whitespace character.
                index += 2;
            } else {
                if !current.is_empty() {
                    return Err(SplitError::UnquotedQuote(offset));
                }

                quoting = true;
                quote_offset = offset;
                index += 1;
            }
        } else if c.is_whitespace() && !quoting {
            if !current.is_empty() {
                arguments.push(std::mem::take(&mut current));
            }

            index += 1;
        } else {
            current.push(c);
            index += 1;
        }
    }

    if quoting && !current.is_empty() {
        return Err(SplitError::UnterminatedString(quote_offset));
    }

    if !current.is_empty() {
        arguments.push(current);
    }

    Ok(arguments)
}

/// Resolve the escape sequence starting at `index` (which holds the backslash).
/// Returns the resolved character and the total number of characters consumed.
fn escape_sequence(
    characters: &[(usize, char)],
    index: usize,
    offset: usize,
) -> Result<(char, usize), SplitError> {
    let designator = match characters.get(index + 1) {
        Some((_, designator)) => *designator,
        None => return Err(SplitError::UnterminatedEscape(offset)),
    };

    match designator {
        '\'' => Ok(('\'', 2)),
        '"' => Ok(('"', 2)),
        '\\' => Ok(('\\', 2)),
        '0' => Ok(('\0', 2)),
        'a' => Ok(('\u{07}', 2)),
        'b' => Ok(('\u{08}', 2)),
        'f' => Ok(('\u{0c}', 2)),
        'n' | 'r' => Ok((' ', 2)),
        't' => Ok(('\t', 2)),
        'v' => Ok(('\u{0b}', 2)),
        'x' => {
            if index + 2 >= characters.len() {
                return Err(SplitError::UnterminatedEscape(offset));
            }

            // Greedy: one up to four hexadecimal digits.
            let digits: Vec<u32> = characters[index + 2..]
                .iter()
                .take(4)
                .map_while(|(_, c)| c.to_digit(16))
                .collect();

            if digits.is_empty() {
                return Err(SplitError::UnrecognizedEscapeSequence(offset));
            }

            let unescaped =
                char_from_digits(&digits).ok_or(SplitError::UnrecognizedEscapeSequence(offset))?;
            Ok((unescaped, 2 + digits.len()))
        }
        'u' => Ok((fixed_width_sequence(characters, index, offset, 4)?, 6)),
        'U' => Ok((fixed_width_sequence(characters, index, offset, 8)?, 10)),
        _ => Err(SplitError::UnrecognizedEscapeSequence(offset)),
    }
}

/// Resolve a `\uHHHH` or `\UHHHHHHHH` sequence of exactly `width` hexadecimal digits.
fn fixed_width_sequence(
    characters: &[(usize, char)],
    index: usize,
    offset: usize,
    width: usize,
) -> Result<char, SplitError> {
    if index + 2 + width > characters.len() {
        return Err(SplitError::UnterminatedEscape(offset));
    }

    let digits: Vec<u32> = characters[index + 2..index + 2 + width]
        .iter()
        .map_while(|(_, c)| c.to_digit(16))
        .collect();

    if digits.len() < width {
        return Err(SplitError::UnrecognizedEscapeSequence(offset));
    }

    char_from_digits(&digits).ok_or(SplitError::UnrecognizedEscapeSequence(offset))
}

/// Fold hexadecimal digits into a character.
/// Values above `0xffff` and surrogate code points have no character form.
fn char_from_digits(digits: &[u32]) -> Option<char> {
    let value = digits
        .iter()
        .fold(0u32, |value, digit| (value << 4) | digit);

    if value > 0xffff {
        None
    } else {
        char::from_u32(value)
    }
}
