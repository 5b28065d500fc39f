//! Settings file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::Settings;

const FIELDS: usize = 7;

pub fn save(settings: &Settings, path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let wordlist_str = settings
        .wordlist_path
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<Vec<String>>()
        .join("");

    // Unbounded max length is stored as -1.
    let max_length = settings
        .max_length
        .map_or_else(|| "-1".to_string(), |n| n.to_string());

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        wordlist_str,
        settings.min_length,
        max_length,
        settings.capitals,
        settings.specials,
        settings.digits,
        settings.number_of_passwords,
    );

    file.write_all(data.as_bytes())?;
    debug!(path, "saved settings");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &str) -> std::io::Result<()> {
    if !Path::new(path).exists() {
        debug!(path, "no settings file, using current values");
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Ok(());
    }

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() != FIELDS {
        warn!(path, fields = parts.len(), "malformed settings file, using defaults");
        *settings = Settings::default();
        return Ok(());
    }

    settings.wordlist_path = parts[0].clone();
    settings.min_length = parts[1].parse().unwrap_or(settings.min_length);
    settings.max_length = match parts[2].parse::<i64>() {
        Ok(-1) => None,
        Ok(n) if n >= 0 => Some(n as usize),
        _ => settings.max_length,
    };
    settings.capitals = parts[3].parse().unwrap_or(settings.capitals);
    settings.specials = parts[4].parse().unwrap_or(settings.specials);
    settings.digits = parts[5].parse().unwrap_or(settings.digits);
    settings.number_of_passwords = parts[6].parse().unwrap_or(settings.number_of_passwords);

    debug!(path, "loaded settings");
    Ok(())
}

#[inline]
pub fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/dicepass/settings", home)
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
