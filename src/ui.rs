use anyhow::{Context, Result};
use console::{Style, Term};
use crib::Variant;
use crib::profile::{PersonalData, normalize_input};
use crib::validation::{self, ValidationError};
use rpassword::read_password;
use std::io::{self, Write};
use tracing::debug;
use zeroize::Zeroizing;

const RULE: &str = "--------------------------------------------------------";

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_warning_symbol(unicode_support: bool) -> &'static str {
    if unicode_support { "⚠" } else { "!" }
}

fn read_line_checked(label: &str) -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        anyhow::bail!("Input closed before {} was entered", label.to_lowercase());
    }
    Ok(input)
}

/// Asks for a field until `check` accepts it.
fn prompt_field<F>(label: &str, hidden: bool, check: F) -> Result<Zeroizing<String>>
where
    F: Fn(&str) -> std::result::Result<(), ValidationError>,
{
    let term = Term::stderr();

    loop {
        term.write_str(&format!("{}: ", label))?;
        term.flush()?;

        let raw = if hidden {
            Zeroizing::new(read_password().with_context(|| format!("Failed to read {}", label))?)
        } else {
            read_line_checked(label)?
        };

        let value = Zeroizing::new(normalize_input(&raw));

        if value.chars().any(char::is_control) {
            term.write_line(&format!("{} contains control characters", label))?;
            continue;
        }

        match check(&value) {
            Ok(()) => return Ok(value),
            Err(e) => {
                debug!(field = label, "rejected prompted value");
                term.write_line(&format!("{}", e))?;
            }
        }
    }
}

pub fn collect_personal_data(
    variant: Variant,
    provided: PersonalData,
    hidden: bool,
) -> Result<PersonalData> {
    let mut data = provided;

    if variant.splits_name() {
        if data.given_name_str().is_empty() {
            let value = prompt_field("Name", false, |v| validation::validate_name(v, "name"))?;
            data = data.given_name(value.as_str());
        }
        if data.family_name_str().is_empty() {
            let value =
                prompt_field("Surname", false, |v| validation::validate_name(v, "surname"))?;
            data = data.family_name(value.as_str());
        }
    } else if data.given_name_str().is_empty() {
        let value = prompt_field("Full name (e.g. Juan Perez)", false, |v| {
            validation::validate_required(v, "name")?;
            validation::validate_name(v, "name")
        })?;
        data = data.given_name(value.as_str());
    }

    if data.identifier_str().is_empty() {
        let split = variant.identifier_split();
        let label = match split {
            crib::config::IdentifierSplit::NumberAndLetter => "DNI (8 digits + 1 letter)",
            crib::config::IdentifierSplit::Opaque => "ID number",
        };
        let value = prompt_field(label, hidden, |v| validation::validate_identifier(v, split))?;
        data = data.identifier(value.as_str());
    }

    if variant.requires_pet_and_postal() {
        if data.pet_name_str().is_empty() {
            let value =
                prompt_field("Pet name", false, |v| validation::validate_required(v, "pet name"))?;
            data = data.pet_name(value.as_str());
        }
        if data.postal_code_str().is_empty() {
            let value = prompt_field("Postal code", false, |v| {
                validation::validate_required(v, "postal code")
            })?;
            data = data.postal_code(value.as_str());
        }
    }

    Ok(data)
}

pub fn render_candidates<W: Write>(
    out: &mut W,
    candidates: &[String],
    advisory: &str,
    options: &DisplayOptions,
) -> io::Result<()> {
    if options.quiet {
        for candidate in candidates {
            writeln!(out, "{}", candidate)?;
        }
        return Ok(());
    }

    let warn_style = if options.color_support {
        Style::new().red()
    } else {
        Style::new()
    };

    if candidates.is_empty() {
        writeln!(
            out,
            "{}",
            warn_style.apply_to("No valid candidates could be generated. Check the inputs.")
        )?;
        return Ok(());
    }

    writeln!(out, "--- Generated candidates: {} ---", candidates.len())?;
    writeln!(out, "{}", RULE)?;

    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(out, "{:03}. {}", i + 1, candidate)?;
    }

    writeln!(out, "{}", RULE)?;

    let symbol = get_warning_symbol(options.unicode_support);
    writeln!(
        out,
        "{}",
        warn_style.apply_to(format!("{} {} {}", symbol, advisory, symbol))
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> DisplayOptions {
        DisplayOptions {
            unicode_support: false,
            color_support: false,
            quiet: false,
        }
    }

    fn render(candidates: &[String], options: &DisplayOptions) -> String {
        let mut out = Vec::new();
        render_candidates(&mut out, candidates, "Use it responsibly.", options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_get_warning_symbol() {
        assert_eq!(get_warning_symbol(true), "⚠");
        assert_eq!(get_warning_symbol(false), "!");
    }

    #[test]
    fn test_render_numbered_list() {
        let candidates = vec!["juanperez".to_string(), "rex11500".to_string()];
        let rendered = render(&candidates, &plain());

        let expected = format!(
            "--- Generated candidates: 2 ---\n{RULE}\n001. juanperez\n002. rex11500\n{RULE}\n! Use it responsibly. !\n"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_index_grows_past_999() {
        let candidates: Vec<String> = (0..1000).map(|i| format!("candidate{:04}", i)).collect();
        let rendered = render(&candidates, &plain());

        assert!(rendered.contains("\n999. candidate0998\n"));
        assert!(rendered.contains("\n1000. candidate0999\n"));
    }

    #[test]
    fn test_render_empty() {
        let rendered = render(&[], &plain());
        assert_eq!(
            rendered,
            "No valid candidates could be generated. Check the inputs.\n"
        );
    }

    #[test]
    fn test_render_quiet() {
        let options = DisplayOptions {
            quiet: true,
            ..plain()
        };
        let candidates = vec!["ana2024".to_string(), "2024ana".to_string()];
        assert_eq!(render(&candidates, &options), "ana2024\n2024ana\n");
        assert_eq!(render(&[], &options), "");
    }

    #[test]
    fn test_render_unicode_symbol() {
        let options = DisplayOptions {
            unicode_support: true,
            ..plain()
        };
        let rendered = render(&["abcdefgh".to_string()], &options);
        assert!(rendered.ends_with("⚠ Use it responsibly. ⚠\n"));
    }

    #[test]
    fn test_collect_keeps_provided_fields() {
        let provided = PersonalData::new()
            .given_name("Juan")
            .family_name("Perez")
            .identifier("12345678A")
            .pet_name("Rex")
            .postal_code("11500");
        let data = collect_personal_data(Variant::Audit, provided.clone(), false).unwrap();
        assert_eq!(data, provided);
    }
}
