//! Identifier case conversion for generated type and field names.

/// Convert snake_case or kebab-case to PascalCase.
///
/// Normalizes words separated by `_`, `-`, or `.`. If the input is already
/// PascalCase (starts uppercase, no separators), it is returned unchanged.
/// Leading underscores of hidden tree-sitter rules are dropped.
///
/// # Examples
/// ```
/// use shapegen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("binary_expression"), "BinaryExpression");
/// assert_eq!(to_pascal_case("_statement"), "Statement");
/// assert_eq!(to_pascal_case("ParserRule"), "ParserRule");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.')
    }

    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    // camelCase keeps its inner humps: only the first letter changes.
    if !has_separator && has_lowercase && s.chars().any(|c| c.is_ascii_uppercase()) {
        let mut chars = s.chars();
        return match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Convert PascalCase, camelCase or SCREAMING_CASE to snake_case.
///
/// A word starts at an uppercase letter following a lowercase letter or digit,
/// and at the last capital of an acronym followed by lowercase (`HTTPServer`
/// becomes `http_server`). `-` and `.` become `_`.
///
/// # Examples
/// ```
/// use shapegen_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("parserRule"), "parser_rule");
/// assert_eq!(to_snake_case("LINE_COMMENT"), "line_comment");
/// assert_eq!(to_snake_case("expr_list"), "expr_list");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | '.') {
            if !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if !c.is_ascii_uppercase() {
            result.push(c);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1);
        let after_word = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        let acronym_end = prev.is_some_and(|p| p.is_ascii_uppercase())
            && next.is_some_and(|n| n.is_ascii_lowercase());
        if (after_word || acronym_end) && !result.ends_with('_') {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}
