use crate::config::{IdentifierSplit, Variant};
use crate::profile::{PersonalData, normalize_input};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

static DNI_PATTERN: OnceLock<Regex> = OnceLock::new();

fn dni_pattern() -> &'static Regex {
    DNI_PATTERN.get_or_init(|| Regex::new(r"^\d{8}[A-Za-z]$").expect("DNI pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Missing { field: &'static str },

    #[error("{field} cannot contain digits")]
    NameHasDigits { field: &'static str },

    #[error("identifier must be exactly 8 digits followed by a single letter (e.g. 12345678A)")]
    IdentifierShape,

    #[error("identifier must contain at least one letter or digit")]
    IdentifierEmpty,
}

pub fn validate_name(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NameHasDigits { field });
    }
    Ok(())
}

pub fn validate_required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if normalize_input(value).is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

pub fn validate_identifier(value: &str, split: IdentifierSplit) -> Result<(), ValidationError> {
    let value = normalize_input(value);
    match split {
        IdentifierSplit::NumberAndLetter => {
            if !dni_pattern().is_match(&value) {
                return Err(ValidationError::IdentifierShape);
            }
        }
        IdentifierSplit::Opaque => {
            if !value.chars().any(|c| c.is_alphanumeric()) {
                return Err(ValidationError::IdentifierEmpty);
            }
        }
    }
    Ok(())
}

pub fn validate(data: &PersonalData, variant: Variant) -> Result<(), ValidationError> {
    if variant.splits_name() {
        validate_name(data.given_name_str(), "name")?;
        validate_name(data.family_name_str(), "surname")?;
    } else {
        validate_required(data.given_name_str(), "name")?;
        validate_name(data.given_name_str(), "name")?;
        validate_name(data.family_name_str(), "name")?;
    }

    validate_identifier(data.identifier_str(), variant.identifier_split())?;

    if variant.requires_pet_and_postal() {
        validate_required(data.pet_name_str(), "pet name")?;
        validate_required(data.postal_code_str(), "postal code")?;
    }

    Ok(())
}
