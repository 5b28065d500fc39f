use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Diceware password generator
#[derive(Debug, Default, Parser)]
#[command(name = "dicepass", version, about = "Diceware password generator")]
pub struct CliFlags {
    /// Diceware wordlist (lines of `NNNNN word`, digits 1-6)
    #[arg(short, long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Minimum password length
    #[arg(short = 'l', long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum password length; only limits how many capitals may be requested
    #[arg(short = 'm', long, value_name = "N", conflicts_with = "no_max")]
    pub max_length: Option<usize>,

    /// Drop any saved or default maximum length
    #[arg(long)]
    pub no_max: bool,

    /// Minimum number of capital letters
    #[arg(short, long, value_name = "N")]
    pub capitals: Option<usize>,

    /// Minimum number of special characters
    #[arg(short, long, value_name = "N")]
    pub specials: Option<usize>,

    /// Minimum number of digits
    #[arg(short, long, value_name = "N")]
    pub digits: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Generate RUNS passwords and print a histogram of their lengths
    #[arg(long, value_name = "RUNS", num_args = 0..=1, default_missing_value = "100000")]
    pub stress: Option<usize>,

    /// Seed the random source for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Use the CPU cycle counter as the random source
    #[arg(long)]
    pub hw: bool,

    /// Copy passwords to the clipboard instead of printing them
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Start from the saved settings
    #[arg(long, conflicts_with = "default")]
    pub saved: bool,

    /// Start from the built-in defaults, ignoring saved settings
    #[arg(long)]
    pub default: bool,

    /// Save the effective settings for later runs
    #[arg(long)]
    pub save: bool,

    /// Only print passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_requirements() {
        let flags = CliFlags::try_parse_from([
            "dicepass", "-l", "20", "-m", "30", "-c", "2", "-s", "1", "-d", "3", "-n", "4",
        ])
        .unwrap();
        assert_eq!(flags.min_length, Some(20));
        assert_eq!(flags.max_length, Some(30));
        assert_eq!(flags.capitals, Some(2));
        assert_eq!(flags.specials, Some(1));
        assert_eq!(flags.digits, Some(3));
        assert_eq!(flags.number, Some(4));
    }

    #[test]
    fn stress_defaults_to_100k() {
        let flags = CliFlags::try_parse_from(["dicepass", "--stress"]).unwrap();
        assert_eq!(flags.stress, Some(100_000));
        let flags = CliFlags::try_parse_from(["dicepass", "--stress", "500"]).unwrap();
        assert_eq!(flags.stress, Some(500));
    }

    #[test]
    fn conflicting_flags_rejected() {
        assert!(CliFlags::try_parse_from(["dicepass", "-m", "5", "--no-max"]).is_err());
        assert!(CliFlags::try_parse_from(["dicepass", "--saved", "--default"]).is_err());
        assert!(CliFlags::try_parse_from(["dicepass", "-l", "x"]).is_err());
    }
}
