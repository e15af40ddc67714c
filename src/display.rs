// Derived display values, kept free of any rendering concerns

/// Number of leading characters a masked key keeps
const MASK_PREFIX: usize = 8;
/// Number of trailing characters a masked key keeps
const MASK_SUFFIX: usize = 4;
const MASK: &str = "••••••••••••";

/// Hide the middle of a credential: first 8 chars, bullets, last 4 chars
///
/// Keys too short to keep both ends without overlapping are fully masked.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= MASK_PREFIX + MASK_SUFFIX {
        return MASK.to_string();
    }

    let head: String = chars[..MASK_PREFIX].iter().collect();
    let tail: String = chars[chars.len() - MASK_SUFFIX..].iter().collect();
    format!("{}{}{}", head, MASK, tail)
}

/// Two-letter initials: first and last word, or the first two letters of a single word
pub fn initials(full_name: &str) -> String {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    let letters: String = match words.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    letters.to_uppercase()
}

/// Split a full name into a first name and the remainder
pub fn split_name(full_name: &str) -> (Option<String>, Option<String>) {
    let mut words = full_name.split_whitespace();
    let first = words.next().map(str::to_string);
    let rest = words.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() { None } else { Some(rest) };
    (first, last)
}

/// "45ms" below one second, "1.2s" above, "-" when unknown
pub fn format_duration(duration_ms: Option<u64>) -> String {
    match duration_ms {
        None => "-".to_string(),
        Some(ms) if ms < 1000 => format!("{}ms", ms),
        Some(ms) => format!("{:.1}s", ms as f64 / 1000.0),
    }
}
