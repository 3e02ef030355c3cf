//! Escaping of grammar literals and code points for generated source.
//!
//! Grammar literals are single-quoted (`'a\n"'`); the generated target uses
//! double-quoted strings (`"a\n\""`).
//!
//! Library API for downstream emitters that write grammar literals into
//! generated parser sources; record declarations never contain literals.

/// Error during literal or character encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("cannot encode the specified value: {0}")]
    Unencodable(u32),
}

/// Translate a single-quoted grammar literal into a target string literal.
///
/// The outer quotes of `literal` are dropped. Escapes the target shares
/// (`\" \n \r \t \b \f \\`) pass through, `\u` is doubled so the target keeps
/// it as text, and any other escape loses its backslash (`\'` becomes `'`).
/// A bare `"` gets escaped.
///
/// ```
/// use shapegen_compiler::escape::string_literal;
///
/// assert_eq!(string_literal(r#"'a\n"'"#, true), r#""a\n\"""#);
/// assert_eq!(string_literal(r"'it\'s'", false), "it's");
/// ```
pub fn string_literal(literal: &str, add_quotes: bool) -> String {
    let chars: Vec<char> = literal.chars().collect();
    let end = chars.len().saturating_sub(1);
    let mut out = String::with_capacity(literal.len() + 2);

    if add_quotes {
        out.push('"');
    }

    let mut i = 1;
    while i < end {
        match chars[i] {
            '\\' => {
                match chars.get(i + 1) {
                    Some('"' | 'n' | 'r' | 't' | 'b' | 'f' | '\\') => out.push('\\'),
                    Some('u') => out.push_str("\\\\"),
                    _ => {}
                }
                i += 1;
            }
            '"' => out.push('\\'),
            _ => {}
        }
        if let Some(&c) = chars.get(i) {
            out.push(c);
        }
        i += 1;
    }

    if add_quotes {
        out.push('"');
    }
    out
}

/// Encode a code point as a target character escape.
///
/// Printable ASCII is emitted as is, except digits `0`-`7` which would read
/// as part of a preceding octal escape. Other ASCII uses octal escapes, and
/// the rest of the BMP uses `\uXXXX`. Values above `0xFFFF` are rejected.
pub fn char_escape(value: u32) -> Result<String, EscapeError> {
    let ch = match char::from_u32(value) {
        Some(ch) if value <= 0xFFFF => ch,
        // Surrogates are still encodable as \u escapes.
        None if (0xD800..=0xDFFF).contains(&value) => return Ok(format!("\\u{value:04x}")),
        _ => return Err(EscapeError::Unencodable(value)),
    };

    if let Some(esc) = table_escape(ch) {
        return Ok(esc.to_string());
    }
    if (0x20..0x7F).contains(&value) && (!ch.is_ascii_digit() || ch == '8' || ch == '9') {
        return Ok(ch.to_string());
    }
    if value <= 0x7F {
        return Ok(format!("\\{value:o}"));
    }
    Ok(format!("\\u{value:04x}"))
}

fn table_escape(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        '\u{8}' => "\\b",
        '\u{c}' => "\\f",
        '\\' => "\\\\",
        '\'' => "\\'",
        '"' => "\\\"",
        _ => return None,
    })
}

/// Keep `\u` sequences in generated text from being read as unicode escapes
/// by the target compiler.
pub fn guard_unicode_escapes(text: &str) -> String {
    text.replace("\\u", "\\u005Cu")
}
