//! Password generation.

use rand::Rng;
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::charset::{self, SPECIAL_POOL};
use super::config::GeneratorConfig;
use super::draft::{Injection, PasswordDraft, Side};
use crate::error::{ConstraintError, Error, LoadError, Result};
use crate::wordlist::{DICE_PER_WORD, DIE_FACES, Wordlist};

/// Builds passwords from dice-selected words.
///
/// Holds only read-only state; every `generate` call starts from a fresh
/// draft and draws from the random source it is given.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    words: Wordlist,
    config: GeneratorConfig,
}

impl PasswordGenerator {
    pub fn new(words: Wordlist, config: GeneratorConfig) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::Load(LoadError::Empty));
        }
        config.validate()?;
        debug!(words = words.len(), ?config, "generator ready");
        Ok(Self { words, config })
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.words
    }

    /// Generate one password.
    ///
    /// Words are drawn until their combined length plus the capital count
    /// reaches the minimum. Missing specials and digits are then attached
    /// to random words, the words are joined with spaces, and finally random
    /// positions are uppercased.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ConstraintError> {
        let cfg = &self.config;
        let mut draft = PasswordDraft::default();

        while draft.length() + cfg.capitals < cfg.min_length {
            draft.push(self.random_word(rng));
        }

        let specials = plan(
            rng,
            &draft,
            cfg.specials.saturating_sub(draft.specials()),
            "special characters",
            |rng| SPECIAL_POOL[rng.random_range(0..SPECIAL_POOL.len())],
        )?;
        let digits = plan(
            rng,
            &draft,
            cfg.digits.saturating_sub(draft.digits()),
            "digits",
            |rng| char::from(b'0' + rng.random_range(0..=9u8)),
        )?;

        for injection in digits.iter().chain(&specials) {
            draft.apply(injection);
        }
        let mut password = draft.join();
        trace!(words = draft.word_count(), len = password.chars().count(), "draft joined");

        if let Some(max_length) = cfg.max_length {
            let lowercase = charset::count_lowercase(&password);
            if cfg.capitals > max_length || cfg.capitals > lowercase {
                password.zeroize();
                return Err(ConstraintError::TooManyCapitals {
                    capitals: cfg.capitals,
                    max_length,
                    lowercase,
                });
            }
        }

        if cfg.capitals > 0 {
            capitalize(&mut password, cfg.capitals, rng)?;
        }
        Ok(password)
    }

    /// Roll five dice into a key and look it up. Sparse tables are handled
    /// by rolling again until a present key comes up.
    fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        loop {
            if let Some(word) = self.words.get(roll_key(rng)) {
                return word;
            }
        }
    }
}

fn roll_key<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (0..DICE_PER_WORD).fold(0, |key, _| key * 10 + rng.random_range(1..=DIE_FACES))
}

/// Queue `missing` injections, each on a random word and side.
fn plan<R, F>(
    rng: &mut R,
    draft: &PasswordDraft,
    missing: usize,
    step: &'static str,
    mut pick: F,
) -> Result<Vec<Injection>, ConstraintError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> char,
{
    if missing == 0 {
        return Ok(Vec::new());
    }
    if draft.is_empty() {
        return Err(ConstraintError::EmptyDraft { step });
    }

    let mut queued = Vec::with_capacity(missing);
    for _ in 0..missing {
        let ch = pick(rng);
        let index = rng.random_range(0..draft.word_count());
        let side = if rng.random_range(0..2) == 0 {
            Side::Before
        } else {
            Side::After
        };
        queued.push(Injection { index, side, ch });
    }
    Ok(queued)
}

/// Uppercase `attempts` randomly chosen positions. A position may be chosen
/// twice, and spaces, digits and symbols stay as they are, so fewer than
/// `attempts` characters can end up changed.
fn capitalize<R: Rng + ?Sized>(
    password: &mut String,
    attempts: usize,
    rng: &mut R,
) -> Result<(), ConstraintError> {
    let mut chars: Vec<char> = password.chars().collect();
    if chars.is_empty() {
        return Err(ConstraintError::EmptyDraft {
            step: "capital letters",
        });
    }

    for _ in 0..attempts {
        let pos = rng.random_range(0..chars.len());
        let upper: Vec<char> = chars[pos].to_uppercase().collect();
        chars.splice(pos..=pos, upper);
    }

    password.zeroize();
    *password = chars.iter().collect();
    chars.zeroize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "abbey", "cab", "dote", "fig", "glib", "hymn", "jade", "knack", "lute", "mirth", "nook",
        "oaf", "plum", "quip", "rook", "sly", "tusk", "urge", "vex", "wisp",
    ];

    fn full_wordlist() -> Wordlist {
        let mut entries = Vec::new();
        let mut i = 0;
        for a in 1..=6u32 {
            for b in 1..=6 {
                for c in 1..=6 {
                    for d in 1..=6 {
                        for e in 1..=6 {
                            let key = (((a * 10 + b) * 10 + c) * 10 + d) * 10 + e;
                            entries.push((key, WORDS[i % WORDS.len()].to_string()));
                            i += 1;
                        }
                    }
                }
            }
        }
        Wordlist::from_entries(entries).unwrap()
    }

    fn single(word: &str) -> Wordlist {
        Wordlist::from_entries([(11111, word.to_string())]).unwrap()
    }

    #[test]
    fn single_entry_is_deterministic() {
        let pw_gen = PasswordGenerator::new(single("abc"), GeneratorConfig::new(3)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pw_gen.generate(&mut rng).unwrap(), "abc");
        }
    }

    #[test]
    fn words_accumulate_until_min_length() {
        let pw_gen = PasswordGenerator::new(single("abc"), GeneratorConfig::new(7)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pw_gen.generate(&mut rng).unwrap(), "abc abc abc");
    }

    #[test]
    fn capitals_reserve_length() {
        // 3 + 2 >= 4 after one word, so only one word is drawn.
        let cfg = GeneratorConfig::new(4).capitals(2);
        let pw_gen = PasswordGenerator::new(single("abc"), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let pw = pw_gen.generate(&mut rng).unwrap();
        assert_eq!(pw.len(), 3);
        assert_eq!(pw.to_lowercase(), "abc");
    }

    #[test]
    fn too_many_capitals_for_max_length() {
        let cfg = GeneratorConfig::new(1).max_length(Some(1)).capitals(2);
        let pw_gen = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            pw_gen.generate(&mut rng),
            Err(ConstraintError::TooManyCapitals { capitals: 2, max_length: 1, .. })
        ));
    }

    #[test]
    fn too_many_capitals_for_available_letters() {
        // 0 + 5 < 8 draws one word, 3 + 5 >= 8 stops.
        let cfg = GeneratorConfig::new(8).max_length(Some(50)).capitals(5);
        let pw_gen = PasswordGenerator::new(single("ab1"), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pw_gen.generate(&mut rng),
            Err(ConstraintError::TooManyCapitals {
                capitals: 5,
                max_length: 50,
                lowercase: 2,
            })
        );
    }

    #[test]
    fn max_length_never_truncates() {
        let cfg = GeneratorConfig::new(20).max_length(Some(5));
        let pw_gen = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let pw = pw_gen.generate(&mut rng).unwrap();
        assert!(pw.chars().filter(|c| *c != ' ').count() >= 20);
    }

    #[test]
    fn empty_draft_cannot_take_injections() {
        let cfg = GeneratorConfig::new(2).capitals(2).digits(1);
        let pw_gen = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pw_gen.generate(&mut rng),
            Err(ConstraintError::EmptyDraft { step: "digits" })
        );

        let cfg = GeneratorConfig::new(2).capitals(2);
        let pw_gen = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        assert_eq!(
            pw_gen.generate(&mut rng),
            Err(ConstraintError::EmptyDraft { step: "capital letters" })
        );
    }

    #[test]
    fn minimums_hold_across_seeds() {
        let cfg = GeneratorConfig::new(15).capitals(2).specials(2).digits(3);
        let pw_gen = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..2_000 {
            let pw = pw_gen.generate(&mut rng).unwrap();
            assert!(pw.chars().count() >= 15, "{pw}");
            // Separators count as specials, so strip them first.
            let specials = charset::count_special(&pw) - pw.matches(' ').count();
            assert!(specials >= 2, "{pw}");
            assert!(charset::count_digits(&pw) >= 3, "{pw}");
            assert!(charset::count_uppercase(&pw) <= 2, "{pw}");
        }
    }

    #[test]
    fn capital_reselection_can_change_fewer() {
        // Seven single-letter words joined by six spaces; three attempts.
        let cfg = GeneratorConfig::new(10).capitals(3);
        let pw_gen = PasswordGenerator::new(single("a"), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let realized: Vec<usize> = (0..200)
            .map(|_| charset::count_uppercase(&pw_gen.generate(&mut rng).unwrap()))
            .collect();
        assert!(realized.iter().all(|&n| n <= 3));
        assert!(realized.iter().any(|&n| n < 3));
        assert!(realized.iter().any(|&n| n > 0));
    }

    #[test]
    fn same_seed_same_password() {
        let cfg = GeneratorConfig::new(15).capitals(1).specials(1).digits(1);
        let a = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let b = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let mut rng_a = StdRng::seed_from_u64(2024);
        let mut rng_b = StdRng::seed_from_u64(2024);
        for _ in 0..50 {
            assert_eq!(a.generate(&mut rng_a), b.generate(&mut rng_b));
        }
    }

    #[test]
    fn lengths_cluster_near_minimum() {
        let cfg = GeneratorConfig::new(15)
            .max_length(Some(15))
            .capitals(1)
            .specials(1)
            .digits(1);
        let pw_gen = PasswordGenerator::new(full_wordlist(), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let mut total = 0;
        for _ in 0..1_000 {
            let len = pw_gen.generate(&mut rng).unwrap().chars().count();
            // 14..=18 letters, at most 4 spaces, 2 injected.
            assert!((15..=25).contains(&len), "{len}");
            total += len;
        }
        let mean = total as f64 / 1_000.0;
        assert!(mean > 16.0 && mean < 23.0, "{mean}");
    }

    #[test]
    fn tokens_come_from_wordlist() {
        let cfg = GeneratorConfig::new(20).capitals(3).specials(3).digits(3);
        let list = full_wordlist();
        let pw_gen = PasswordGenerator::new(list.clone(), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(77);

        for _ in 0..500 {
            let pw = pw_gen.generate(&mut rng).unwrap();
            for token in pw.split(' ') {
                let core = token
                    .trim_matches(|c: char| c.is_ascii_digit() || SPECIAL_POOL.contains(&c))
                    .to_lowercase();
                assert!(list.contains_word(&core), "{token} in {pw}");
            }
        }
    }

    #[test]
    fn existing_specials_and_digits_count() {
        // "a&1" already carries one special and one digit.
        let cfg = GeneratorConfig::new(3).specials(1).digits(1);
        let pw_gen = PasswordGenerator::new(single("a&1"), cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(pw_gen.generate(&mut rng).unwrap(), "a&1");
    }

    #[test]
    fn rolled_keys_are_dice_keys() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1_000 {
            assert!(crate::wordlist::is_dice_key(roll_key(&mut rng)));
        }
    }

    #[test]
    fn digits_sit_inside_specials_on_same_side() {
        let cfg = GeneratorConfig::new(3).specials(1).digits(1);
        let pw_gen = PasswordGenerator::new(single("abc"), cfg).unwrap();
        let (mut after, mut before) = (0, 0);
        for seed in 0..200 {
            let pw = pw_gen.generate(&mut StdRng::seed_from_u64(seed)).unwrap();
            let chars: Vec<char> = pw.chars().collect();
            assert_eq!(chars.len(), 5, "{pw}");
            if pw.starts_with("abc") {
                assert!(chars[3].is_ascii_digit() && charset::is_special(chars[4]), "{pw}");
                after += 1;
            } else if pw.ends_with("abc") {
                assert!(charset::is_special(chars[0]) && chars[1].is_ascii_digit(), "{pw}");
                before += 1;
            }
        }
        assert!(after > 0 && before > 0);
    }

    #[test]
    fn injection_draws_follow_fixed_order() {
        // Specials draw (char, word, side) before digits do; digits are
        // attached first.
        let list = full_wordlist();
        let cfg = GeneratorConfig::new(1).specials(1).digits(1);
        let pw_gen = PasswordGenerator::new(list.clone(), cfg).unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut replay = rng.clone();

            let mut expected = list.get(roll_key(&mut replay)).unwrap().to_string();
            let special = SPECIAL_POOL[replay.random_range(0..SPECIAL_POOL.len())];
            assert_eq!(replay.random_range(0..1usize), 0);
            let special_before = replay.random_range(0..2) == 0;
            let digit = char::from(b'0' + replay.random_range(0..=9u8));
            assert_eq!(replay.random_range(0..1usize), 0);
            let digit_before = replay.random_range(0..2) == 0;

            for (ch, before) in [(digit, digit_before), (special, special_before)] {
                if before {
                    expected.insert(0, ch);
                } else {
                    expected.push(ch);
                }
            }
            assert_eq!(pw_gen.generate(&mut rng).unwrap(), expected, "seed {seed}");
        }
    }
}
