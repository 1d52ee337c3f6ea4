//! Parser for the `.properties` text format.
//!
//! Responsibilities:
//! - Parse property text (`key=value` lines) into a string map.
//! - Handle the standard conventions: `#`/`!` comments, `=`/`:`/whitespace
//!   separators, backslash line continuations, and escape sequences
//!   (`\t \n \r \f \\ \uXXXX`, identity-escape for anything else).
//!
//! Does NOT handle:
//! - File I/O or merging into the store (see properties.rs).
//!
//! Invariants:
//! - Duplicate keys within one resource: the last occurrence wins.
//! - A malformed `\uXXXX` escape is a parse error carrying the 1-based
//!   number of the line where the logical line started.

use std::collections::HashMap;

/// Parse failure with the 1-based line number of the offending entry.
#[derive(Debug)]
pub(crate) struct FormatError {
    pub line: usize,
    pub message: String,
}

/// Parse properties text into a key/value map.
pub(crate) fn parse(text: &str) -> Result<HashMap<String, String>, FormatError> {
    let mut map = HashMap::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let first = raw.trim_start();
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let start_line = index + 1;
        let mut logical = String::from(first);
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, continuation)) => logical.push_str(continuation.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical).map_err(|message| FormatError {
            line: start_line,
            message,
        })?;
        map.insert(key, value);
    }

    Ok(map)
}

/// An odd run of trailing backslashes marks a continuation; an even run is
/// literal escaped backslashes.
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split one logical line into an unescaped key and value.
fn split_entry(line: &str) -> Result<(String, String), String> {
    let mut chars = line.chars().peekable();
    let mut key = String::new();
    let mut terminated_by_whitespace = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => key.push(unescape(&mut chars)?),
            '=' | ':' => break,
            c if c.is_whitespace() => {
                terminated_by_whitespace = true;
                break;
            }
            c => key.push(c),
        }
    }

    // A whitespace terminator may be followed by one explicit separator.
    if terminated_by_whitespace {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        if matches!(chars.peek(), Some(&'=') | Some(&':')) {
            chars.next();
        }
    }
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }

    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.push(unescape(&mut chars)?),
            c => value.push(c),
        }
    }

    Ok((key, value))
}

/// Decode the escape sequence following a backslash.
fn unescape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<char, String> {
    match chars.next() {
        Some('t') => Ok('\t'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('f') => Ok('\u{000C}'),
        Some('u') => {
            let mut code = 0u32;
            for _ in 0..4 {
                let digit = chars
                    .next()
                    .and_then(|c| c.to_digit(16))
                    .ok_or_else(|| "malformed \\uXXXX escape".to_string())?;
                code = code * 16 + digit;
            }
            char::from_u32(code).ok_or_else(|| format!("invalid \\uXXXX code point {code:#06x}"))
        }
        Some(c) => Ok(c),
        None => Err("dangling escape at end of line".to_string()),
    }
}
