//! Dice-indexed wordlist.
//!
//! Each entry maps a five-digit key (every digit 1-6) to a word. The text
//! format is one `NNNNN word` pair per line; anything else in the file
//! (PGP armour, blank lines, comments) is skipped.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;

/// Number of dice rolled per word.
pub const DICE_PER_WORD: usize = 5;

/// Faces on each die.
pub const DIE_FACES: u32 = 6;

/// Returns true if `key` is five decimal digits each in `1..=6`.
pub fn is_dice_key(key: u32) -> bool {
    if !(11111..=66666).contains(&key) {
        return false;
    }
    let mut rest = key;
    for _ in 0..DICE_PER_WORD {
        let digit = rest % 10;
        if digit == 0 || digit > DIE_FACES {
            return false;
        }
        rest /= 10;
    }
    true
}

#[derive(Debug, Clone)]
pub struct Wordlist {
    entries: HashMap<u32, String>,
}

impl Wordlist {
    /// Build a table from already-parsed pairs. Later duplicates replace
    /// earlier ones. Entries with an invalid key or an empty word are dropped.
    pub fn from_entries<I>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        let mut table = HashMap::new();
        let mut dropped = 0usize;

        for (key, word) in entries {
            if is_dice_key(key) && !word.is_empty() {
                table.insert(key, word);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            warn!(dropped, "discarded wordlist entries with invalid keys or empty words");
        }
        if table.is_empty() {
            return Err(LoadError::Empty);
        }

        debug!(entries = table.len(), "wordlist ready");
        Ok(Self { entries: table })
    }

    /// Parse the diceware text format.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Self::from_entries(text.lines().filter_map(parse_line))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read wordlist");
        Self::parse(&text)
    }

    pub fn get(&self, key: u32) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.values().any(|w| w == word)
    }
}

/// A relevant line is five ASCII digits, whitespace, then at least one more
/// character. Key is the first token, word the second.
fn parse_line(line: &str) -> Option<(u32, String)> {
    let bytes = line.as_bytes();
    if bytes.len() < DICE_PER_WORD + 2 {
        return None;
    }
    if !bytes[..DICE_PER_WORD].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let rest = &line[DICE_PER_WORD..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let key = tokens.next()?.parse().ok()?;
    let word = tokens.next()?;
    Some((key, word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dice_keys() {
        assert!(is_dice_key(11111));
        assert!(is_dice_key(66666));
        assert!(is_dice_key(35162));
        assert!(!is_dice_key(11110));
        assert!(!is_dice_key(11117));
        assert!(!is_dice_key(1111));
        assert!(!is_dice_key(111111));
        assert!(!is_dice_key(70000));
    }

    #[test]
    fn parse_skips_armour_and_junk() {
        let text = "-----BEGIN PGP SIGNED MESSAGE-----\n\
                    Hash: SHA1\n\
                    \n\
                    11111\ta\n\
                    11112 a&p\n\
                    1234 short\n\
                    11113   \n\
                    abcde word\n\
                    11114  aaa extra tokens\n\
                    -----BEGIN PGP SIGNATURE-----\n";
        let list = Wordlist::parse(text).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(11111), Some("a"));
        assert_eq!(list.get(11112), Some("a&p"));
        assert_eq!(list.get(11114), Some("aaa"));
        assert_eq!(list.get(11113), None);
    }

    #[test]
    fn parse_drops_keys_outside_dice_range() {
        let list = Wordlist::parse("11111 ok\n70000 bad\n12340 bad\n").unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.contains_word("ok"));
        assert!(!list.contains_word("bad"));
    }

    #[test]
    fn duplicate_keys_keep_last() {
        let list = Wordlist::parse("11111 first\n11111 second\n").unwrap();
        assert_eq!(list.get(11111), Some("second"));
    }

    #[test]
    fn empty_or_invalid_is_error() {
        assert!(matches!(Wordlist::parse(""), Err(LoadError::Empty)));
        assert!(matches!(
            Wordlist::parse("no entries here\n99999 nine\n"),
            Err(LoadError::Empty)
        ));
        assert!(matches!(
            Wordlist::from_entries([(11111, String::new())]),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "11111 apple").unwrap();
        writeln!(file, "66666 zebra").unwrap();
        let list = Wordlist::load(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(66666), Some("zebra"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.asc");
        match Wordlist::load(&path) {
            Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
