//! Text helpers shared by answer comparison and rendering.

/// Collapse whitespace runs to a single space, trim, and lowercase.
///
/// Used to compare learner answers with server answers, so it must stay idempotent.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Compare two answers under [`normalize`].
#[must_use]
pub fn answers_match(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}

/// Escape the five markup-significant characters.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Resolve a correct-answer descriptor against the question options.
///
/// A single letter `A`-`D` (any case) picks the option at that ordinal, a leading
/// integer picks the option at that index, and anything else is returned trimmed.
/// Letters or indexes with no matching non-empty option fall back to the literal.
#[must_use]
pub fn resolve_correct_answer(descriptor: &str, options: &[String]) -> String {
    let literal = descriptor.trim();
    if literal.is_empty() {
        return String::new();
    }

    if let Some(index) = letter_index(literal) {
        return option_at(options, index).unwrap_or(literal).to_string();
    }

    if let Some(index) = leading_index(literal) {
        if let Some(option) = option_at(options, index) {
            return option.to_string();
        }
    }

    literal.to_string()
}

fn letter_index(value: &str) -> Option<usize> {
    let mut chars = value.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match first.to_ascii_uppercase() {
        letter @ 'A'..='D' => Some(usize::from(letter as u8 - b'A')),
        _ => None,
    }
}

/// Parse the leading integer of `value`, ignoring any trailing text.
///
/// Negative numbers never address an option.
fn leading_index(value: &str) -> Option<usize> {
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    if unsigned.starts_with('-') {
        return None;
    }
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn option_at(options: &[String], index: usize) -> Option<&str> {
    options
        .get(index)
        .map(String::as_str)
        .filter(|option| !option.is_empty())
}

/// Parse a leading positive integer the way a form field is read, or fall back.
///
/// Zero and unparsable input both yield `fallback`.
#[must_use]
pub fn parse_count_or(input: &str, fallback: u32) -> u32 {
    leading_index(input.trim())
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| *value > 0)
        .unwrap_or(fallback)
}
