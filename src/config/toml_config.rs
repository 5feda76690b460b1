use crate::app::render::OutputFormat;
use crate::core::ProfileProvider;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

/// A person described in a TOML file.
///
/// ```toml
/// [person]
/// birth_name = "Eric"
/// birth_date = "1990-11-22"
///
/// [partner]
/// name = "Ana"
/// birth_date = "1985-04-04"
///
/// [applied]
/// address = "221B Baker Street"
/// business = "${BUSINESS_PHONE}"
///
/// [report]
/// as_of = "2026-10-19"
/// format = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlProfile {
    pub person: PersonConfig,
    pub partner: Option<PartnerConfig>,
    pub applied: Option<AppliedConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonConfig {
    pub birth_name: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerConfig {
    pub name: Option<String>,
    pub birth_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedConfig {
    pub address: Option<String>,
    pub business: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub as_of: Option<String>,
    pub format: Option<OutputFormat>,
}

impl TomlProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded profile file");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn format(&self) -> OutputFormat {
        self.report
            .as_ref()
            .and_then(|r| r.format)
            .unwrap_or_default()
    }

    /// Command line override for the reference date.
    pub fn set_as_of(&mut self, as_of: String) {
        self.report.get_or_insert_with(ReportConfig::default).as_of = Some(as_of);
    }
}

impl ProfileProvider for TomlProfile {
    fn birth_name(&self) -> Option<&str> {
        Some(&self.person.birth_name)
    }

    fn birth_date(&self) -> Option<&str> {
        Some(&self.person.birth_date)
    }

    fn partner_name(&self) -> Option<&str> {
        self.partner.as_ref().and_then(|p| p.name.as_deref())
    }

    fn partner_birth_date(&self) -> Option<&str> {
        self.partner.as_ref().map(|p| p.birth_date.as_str())
    }

    fn address(&self) -> Option<&str> {
        self.applied.as_ref().and_then(|a| a.address.as_deref())
    }

    fn business(&self) -> Option<&str> {
        self.applied.as_ref().and_then(|a| a.business.as_deref())
    }

    fn as_of(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.as_of.as_deref())
    }
}

impl Validate for TomlProfile {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("person.birth_name", &self.person.birth_name)?;
        parse_birth_date("person.birth_date", &self.person.birth_date)?;

        if let Some(partner) = &self.partner {
            parse_birth_date("partner.birth_date", &partner.birth_date)?;
        }
        if let Some(as_of) = self.as_of() {
            parse_calendar_date("report.as_of", as_of)?;
        }

        Ok(())
    }
}
