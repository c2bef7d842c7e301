/// Returns whether `word` has identifier syntax: `[a-zA-Z_]\w*`.
///
/// This is a purely lexical check; whether the identifier names a defined
/// variable is a separate question answered by the environment.
pub(in crate::interpreter::parser) fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();

    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns whether `word` lexically matches a signed float literal:
/// `-?digits(.digits)?`.
///
/// Deliberately stricter than `f64::from_str`: no exponents, no leading or
/// trailing dot, no `inf`/`NaN` spellings. Every word accepted here parses
/// cleanly as an `f64`.
pub(in crate::interpreter::parser) fn is_number_literal(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);

    let (integral, fractional) = match digits.split_once('.') {
        Some((integral, fractional)) => (integral, Some(fractional)),
        None => (digits, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(integral) && fractional.is_none_or(all_digits)
}
