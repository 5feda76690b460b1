use anyhow::{Context, Result};
use celestial_numerology::utils::{logger, validation::Validate};
use celestial_numerology::{
    render, CliConfig, NumerologyError, OutputFormat, ProfileProvider, ReportEngine, TomlProfile,
};
use clap::Parser;

fn main() -> Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let outcome = match &config.profile {
        Some(path) => {
            tracing::info!("📁 Loading profile from: {}", path.display());
            let mut profile = TomlProfile::from_file(path)
                .with_context(|| format!("failed to load profile '{}'", path.display()))?;

            if let Some(as_of) = &config.as_of {
                tracing::info!("🔧 Reference date overridden to: {}", as_of);
                profile.set_as_of(as_of.clone());
            }
            let format = config.format.unwrap_or_else(|| profile.format());
            run_report(profile, format)
        }
        None => {
            let format = config.format.unwrap_or_default();
            run_report(config.clone(), format)
        }
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Report failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

fn run_report<P>(profile: P, format: OutputFormat) -> Result<(), NumerologyError>
where
    P: ProfileProvider + Validate,
{
    profile.validate()?;
    tracing::info!("✅ Input validated");

    let report = ReportEngine::new(profile).run()?;
    println!("{}", render(&report, format)?);

    Ok(())
}
