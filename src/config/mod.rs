pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::ProfileProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "numerology")]
#[command(about = "Pythagorean numerology figures from a name and birth date")]
pub struct CliConfig {
    /// Full birth name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Birth date as YYYY-MM-DD
    #[arg(short, long)]
    pub dob: Option<String>,

    #[arg(long)]
    pub partner_name: Option<String>,

    /// Partner birth date as YYYY-MM-DD, enables the compatibility number
    #[arg(long)]
    pub partner_dob: Option<String>,

    /// House number or street address
    #[arg(long)]
    pub address: Option<String>,

    /// Phone number or business name
    #[arg(long)]
    pub business: Option<String>,

    /// Reference date for personal cycles (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<String>,

    /// Output format (overrides the profile's [report] format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read inputs from a TOML profile instead of flags
    #[arg(short, long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ProfileProvider for CliConfig {
    fn birth_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn birth_date(&self) -> Option<&str> {
        self.dob.as_deref()
    }

    fn partner_name(&self) -> Option<&str> {
        self.partner_name.as_deref()
    }

    fn partner_birth_date(&self) -> Option<&str> {
        self.partner_dob.as_deref()
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn business(&self) -> Option<&str> {
        self.business.as_deref()
    }

    fn as_of(&self) -> Option<&str> {
        self.as_of.as_deref()
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        // inputs come from the profile file instead
        if self.profile.is_some() {
            return Ok(());
        }

        let name = validate_required_field("name", &self.name)?;
        validate_non_empty_string("name", name)?;
        parse_birth_date("dob", validate_required_field("dob", &self.dob)?)?;

        if let Some(partner_dob) = &self.partner_dob {
            parse_birth_date("partner_dob", partner_dob)?;
        }
        if let Some(as_of) = &self.as_of {
            parse_calendar_date("as_of", as_of)?;
        }

        Ok(())
    }
}
