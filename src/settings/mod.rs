//! Password generation settings.

mod file;

use crate::pass::GeneratorConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub wordlist_path: String,
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub capitals: usize,
    pub specials: usize,
    pub digits: usize,
    pub number_of_passwords: usize,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &file::get_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &file::get_path())
    }

    pub fn has_saved_file() -> bool {
        std::path::Path::new(&file::get_path()).exists()
    }

    pub fn path() -> String {
        file::get_path()
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.min_length)
            .max_length(self.max_length)
            .capitals(self.capitals)
            .specials(self.specials)
            .digits(self.digits)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wordlist_path: String::from("diceware-word-list/diceware.wordlist.asc"),
            min_length: 15,
            max_length: Some(15),
            capitals: 1,
            specials: 1,
            digits: 1,
            number_of_passwords: 1,
        }
    }
}
