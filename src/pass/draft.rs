//! Per-call working state: drawn words, running class totals and the
//! injections queued against them.

use zeroize::Zeroize;

use super::charset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// A character waiting to be attached to one word of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Injection {
    pub index: usize,
    pub side: Side,
    pub ch: char,
}

#[derive(Debug, Default)]
pub struct PasswordDraft {
    words: Vec<String>,
    length: usize,
    specials: usize,
    digits: usize,
}

impl PasswordDraft {
    pub fn push(&mut self, word: &str) {
        self.length += word.chars().count();
        self.specials += charset::count_special(word);
        self.digits += charset::count_digits(word);
        self.words.push(word.to_string());
    }

    /// Total characters across all words, separators excluded.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn specials(&self) -> usize {
        self.specials
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn apply(&mut self, injection: &Injection) {
        let word = &mut self.words[injection.index];
        match injection.side {
            Side::Before => word.insert(0, injection.ch),
            Side::After => word.push(injection.ch),
        }
    }

    pub fn join(&self) -> String {
        self.words.join(" ")
    }
}

impl Drop for PasswordDraft {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}
