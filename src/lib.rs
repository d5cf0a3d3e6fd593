pub mod config;
pub mod error;
pub mod generator;
pub mod profile;
pub mod rules;
pub mod validation;

pub use config::{DEFAULT_YEAR, RuleConfig, Variant};
pub use error::{Error, Result};
pub use generator::{generate, generate_checked};
pub use profile::PersonalData;
pub use validation::{ValidationError, validate};
