use crate::config::{Field, IdentifierSplit, RuleConfig};
use crate::rules::{self, capitalize};
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PersonalData {
    given_name: Option<String>,
    family_name: Option<String>,
    identifier: Option<String>,
    pet_name: Option<String>,
    postal_code: Option<String>,
}

impl PersonalData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn given_name(mut self, value: impl Into<String>) -> Self {
        self.given_name = Some(value.into());
        self
    }

    pub fn family_name(mut self, value: impl Into<String>) -> Self {
        self.family_name = Some(value.into());
        self
    }

    pub fn identifier(mut self, value: impl Into<String>) -> Self {
        self.identifier = Some(value.into());
        self
    }

    pub fn pet_name(mut self, value: impl Into<String>) -> Self {
        self.pet_name = Some(value.into());
        self
    }

    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    pub fn given_name_str(&self) -> &str {
        self.given_name.as_deref().unwrap_or_default()
    }

    pub fn family_name_str(&self) -> &str {
        self.family_name.as_deref().unwrap_or_default()
    }

    pub fn identifier_str(&self) -> &str {
        self.identifier.as_deref().unwrap_or_default()
    }

    pub fn pet_name_str(&self) -> &str {
        self.pet_name.as_deref().unwrap_or_default()
    }

    pub fn postal_code_str(&self) -> &str {
        self.postal_code.as_deref().unwrap_or_default()
    }
}

pub fn normalize_input(s: &str) -> String {
    s.trim().nfc().collect()
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct NormalizedProfile {
    name: String,
    name_capitalized: String,
    identifier: String,
    identifier_digits: String,
    identifier_letters: String,
    pet: String,
    postal: String,
    initials: String,
    initials_capitalized: String,
    trailing_digits: String,
    year: String,
}

impl NormalizedProfile {
    pub fn from_data(data: &PersonalData, config: &RuleConfig) -> Self {
        let full_name = Zeroizing::new(format!(
            "{} {}",
            normalize_input(data.given_name_str()),
            normalize_input(data.family_name_str())
        ));
        let words: Vec<&str> = full_name.split_whitespace().collect();

        let name = words.concat().to_lowercase();
        let name_capitalized = words.iter().map(|w| capitalize(w)).collect::<String>();

        let token: Zeroizing<String> = Zeroizing::new(
            normalize_input(data.identifier_str())
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect(),
        );

        let (identifier, identifier_digits, identifier_letters) = match config.identifier_split {
            IdentifierSplit::Opaque => {
                let digits = token.chars().filter(|c| c.is_ascii_digit()).collect();
                (token.as_str().to_owned(), digits, String::new())
            }
            IdentifierSplit::NumberAndLetter => {
                let lowered = token.to_lowercase();
                let digits: String = lowered.chars().take_while(|c| c.is_ascii_digit()).collect();
                let letters = lowered[digits.len()..].to_uppercase();
                (lowered, digits, letters)
            }
        };

        let (pet, postal) = if config.include_pet_and_postal_rules {
            (
                strip_whitespace(&normalize_input(data.pet_name_str())).to_lowercase(),
                strip_whitespace(&normalize_input(data.postal_code_str())),
            )
        } else {
            (String::new(), String::new())
        };

        let (initials, initials_capitalized) = if config.include_initials_rule && words.len() > 1 {
            let lower = rules::initials(&words).to_lowercase();
            let capitalized = capitalize(&lower);
            (lower, capitalized)
        } else {
            (String::new(), String::new())
        };

        let identifier_len = identifier.chars().count();
        let trailing_digits = if identifier_len >= 4 {
            identifier.chars().skip(identifier_len - 4).collect()
        } else {
            String::new()
        };

        let year = config
            .year
            .as_deref()
            .map(strip_whitespace)
            .unwrap_or_default();

        Self {
            name,
            name_capitalized,
            identifier,
            identifier_digits,
            identifier_letters,
            pet,
            postal,
            initials,
            initials_capitalized,
            trailing_digits,
            year,
        }
    }

    // Empty when the field is absent or disabled by the configuration.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::NameCapitalized => &self.name_capitalized,
            Field::Identifier => &self.identifier,
            Field::IdentifierDigits => &self.identifier_digits,
            Field::IdentifierLetters => &self.identifier_letters,
            Field::Pet => &self.pet,
            Field::Postal => &self.postal,
            Field::Initials => &self.initials,
            Field::InitialsCapitalized => &self.initials_capitalized,
            Field::TrailingDigits => &self.trailing_digits,
            Field::Year => &self.year,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.identifier.is_empty()
            && self.pet.is_empty()
            && self.postal.is_empty()
    }
}
