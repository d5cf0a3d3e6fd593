mod ui;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crib::{DEFAULT_YEAR, PersonalData, Variant};
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(
    name = "crib",
    version,
    author,
    about = "Password guesses derived from personal data, for security awareness audits"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "audit")]
    variant: Preset,

    #[arg(long)]
    given_name: Option<String>,

    #[arg(long)]
    family_name: Option<String>,

    #[arg(long)]
    identifier: Option<String>,

    #[arg(long)]
    pet_name: Option<String>,

    #[arg(long)]
    postal_code: Option<String>,

    /// Overrides the preset's minimum candidate length
    #[arg(short = 'm', long, value_name = "N")]
    min_length: Option<usize>,

    #[arg(long, env = "CRIB_YEAR", default_value = DEFAULT_YEAR)]
    year: String,

    /// Skip every rule that uses the year token
    #[arg(long)]
    no_year: bool,

    /// Read the identifier without echoing it
    #[arg(long)]
    hidden: bool,

    #[arg(long)]
    no_color: bool,

    /// Print only the candidates, one per line
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Preset {
    Simple,
    Extended,
    Audit,
}

impl From<Preset> for Variant {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Simple => Variant::Simple,
            Preset::Extended => Variant::Extended,
            Preset::Audit => Variant::Audit,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crib=warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();
}

fn provided_data(cli: &Cli) -> PersonalData {
    let mut data = PersonalData::new();
    if let Some(v) = &cli.given_name {
        data = data.given_name(v.as_str());
    }
    if let Some(v) = &cli.family_name {
        data = data.family_name(v.as_str());
    }
    if let Some(v) = &cli.identifier {
        data = data.identifier(v.as_str());
    }
    if let Some(v) = &cli.pet_name {
        data = data.pet_name(v.as_str());
    }
    if let Some(v) = &cli.postal_code {
        data = data.postal_code(v.as_str());
    }
    data
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let variant = Variant::from(cli.variant);

    let mut config = variant.rule_config();
    if let Some(min_length) = cli.min_length {
        config = config.with_min_length(min_length);
    }
    let year = (!cli.no_year).then(|| cli.year.clone());
    config = config.with_year(year);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: !cli.no_color && ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let data = ui::collect_personal_data(variant, provided_data(&cli), cli.hidden)?;
    crib::validate(&data, variant).context("Invalid input")?;

    let candidates = Zeroizing::new(
        crib::generate_checked(&data, &config).context("Candidate generation failed")?,
    );
    info!(%variant, count = candidates.len(), "generated candidates");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ui::render_candidates(&mut out, &candidates, variant.advisory(), &options)?;

    Ok(())
}
