//! Character pools and character-class counting for password generation.

/// Specials injected to meet the special-character minimum, indexed 0-9.
pub const SPECIAL_POOL: [char; 10] = ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

/// Anything outside `[0-9A-Za-z]` counts as special, including spaces and
/// non-ASCII letters.
#[inline]
pub fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

pub fn count_special(s: &str) -> usize {
    s.chars().filter(|&c| is_special(c)).count()
}

pub fn count_digits(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

pub fn count_lowercase(s: &str) -> usize {
    s.chars().filter(char::is_ascii_lowercase).count()
}

#[cfg(test)]
pub fn count_uppercase(s: &str) -> usize {
    s.chars().filter(char::is_ascii_uppercase).count()
}
