use crate::core::calculator::*;
use crate::domain::model::{
    Challenges, InclusionGrid, NumerologyResult, Pinnacles, Planes, ReportRequest,
};
use crate::domain::ports::ProfileProvider;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{
    parse_birth_date, parse_calendar_date, validate_non_empty_string, validate_required_field,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Partner life path and the combined number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    pub partner_life_path: NumerologyResult,
    pub result: NumerologyResult,
}

/// Every figure computed for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    pub birth_name: String,
    pub birth_date: String,
    pub as_of: NaiveDate,
    pub life_path: NumerologyResult,
    pub destiny: NumerologyResult,
    pub soul_urge: NumerologyResult,
    pub personality: NumerologyResult,
    pub birthday: NumerologyResult,
    pub personal_year: NumerologyResult,
    pub personal_month: NumerologyResult,
    pub personal_day: NumerologyResult,
    pub pinnacles: Pinnacles,
    pub challenges: Challenges,
    pub planes: Planes,
    pub inclusion: InclusionGrid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<NumerologyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<NumerologyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Compatibility>,
}

impl NumerologyReport {
    pub fn compute(request: &ReportRequest) -> Result<Self> {
        let name = request.birth_name.as_str();
        let dob = &request.birth_date;

        let target_year =
            u32::try_from(request.as_of.year()).map_err(|_| NumerologyError::InvalidDate {
                field: "as_of".to_string(),
                value: request.as_of.to_string(),
                reason: "year must not be negative".to_string(),
            })?;

        let life_path = calculate_life_path(dob);
        let personal_year = calculate_personal_year(dob, target_year);
        let personal_month = calculate_personal_month(personal_year.value, request.as_of.month());
        let personal_day = calculate_personal_day(personal_month.value, request.as_of.day());

        let compatibility = request.partner_birth_date.as_ref().map(|partner_dob| {
            let partner_life_path = calculate_life_path(partner_dob);
            let result = calculate_compatibility(&life_path, &partner_life_path);
            Compatibility {
                partner_name: request.partner_name.clone(),
                partner_life_path,
                result,
            }
        });

        Ok(Self {
            birth_name: request.birth_name.clone(),
            birth_date: dob.to_string(),
            as_of: request.as_of,
            destiny: calculate_destiny(name),
            soul_urge: calculate_soul_urge(name),
            personality: calculate_personality(name),
            birthday: calculate_birthday_number(dob),
            personal_year,
            personal_month,
            personal_day,
            pinnacles: calculate_pinnacles(dob),
            challenges: calculate_challenges(dob),
            planes: calculate_planes(name),
            inclusion: calculate_inclusion_grid(name),
            address: request.address.as_deref().map(calculate_applied),
            business: request.business.as_deref().map(calculate_applied),
            compatibility,
            life_path,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub struct ReportEngine<P: ProfileProvider> {
    profile: P,
}

impl<P: ProfileProvider> ReportEngine<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Checks and parses the provider's raw strings.
    pub fn request(&self) -> Result<ReportRequest> {
        let birth_name = self.profile.birth_name();
        let birth_name: &str = validate_required_field("birth_name", &birth_name)?;
        validate_non_empty_string("birth_name", birth_name)?;

        let birth_date = self.profile.birth_date();
        let birth_date = parse_birth_date(
            "birth_date",
            validate_required_field("birth_date", &birth_date)?,
        )?;

        let partner_birth_date = match non_empty(self.profile.partner_birth_date()) {
            Some(raw) => Some(parse_birth_date("partner_birth_date", &raw)?),
            None => None,
        };

        let as_of = match non_empty(self.profile.as_of()) {
            Some(raw) => parse_calendar_date("as_of", &raw)?,
            None => Local::now().date_naive(),
        };

        Ok(ReportRequest {
            birth_name: birth_name.to_string(),
            birth_date,
            as_of,
            partner_name: non_empty(self.profile.partner_name()),
            partner_birth_date,
            address: non_empty(self.profile.address()),
            business: non_empty(self.profile.business()),
        })
    }

    pub fn run(&self) -> Result<NumerologyReport> {
        tracing::info!("Preparing numerology report");
        let request = self.request()?;
        tracing::debug!(
            birth_date = %request.birth_date,
            as_of = %request.as_of,
            has_partner = request.partner_birth_date.is_some(),
            "Input validated"
        );

        let report = NumerologyReport::compute(&request)?;
        tracing::info!(
            life_path = report.life_path.value,
            destiny = report.destiny.value,
            "Report computed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StaticProfile {
        name: Option<String>,
        dob: Option<String>,
        partner_dob: Option<String>,
        address: Option<String>,
        as_of: Option<String>,
    }

    impl ProfileProvider for StaticProfile {
        fn birth_name(&self) -> Option<&str> {
            self.name.as_deref()
        }
        fn birth_date(&self) -> Option<&str> {
            self.dob.as_deref()
        }
        fn partner_name(&self) -> Option<&str> {
            None
        }
        fn partner_birth_date(&self) -> Option<&str> {
            self.partner_dob.as_deref()
        }
        fn address(&self) -> Option<&str> {
            self.address.as_deref()
        }
        fn business(&self) -> Option<&str> {
            None
        }
        fn as_of(&self) -> Option<&str> {
            self.as_of.as_deref()
        }
    }

    fn eric() -> StaticProfile {
        StaticProfile {
            name: Some("Eric".to_string()),
            dob: Some("1990-11-22".to_string()),
            as_of: Some("2026-10-19".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_computes_core_numbers() {
        let report = ReportEngine::new(eric()).run().unwrap();
        assert_eq!(report.life_path.value, 7);
        assert_eq!(report.destiny.value, 8);
        assert_eq!(report.soul_urge.value, 5);
        assert_eq!(report.personality.value, 3);
        assert_eq!(report.birthday.value, 22);
        assert_eq!(report.personal_year.value, 7);
        assert_eq!(report.personal_month.value, 8);
        assert_eq!(report.personal_day.value, 9);
        assert!(report.address.is_none());
        assert!(report.compatibility.is_none());
    }

    #[test]
    fn test_blank_optional_inputs_are_skipped() {
        let profile = StaticProfile {
            address: Some("   ".to_string()),
            partner_dob: Some("".to_string()),
            ..eric()
        };
        let report = ReportEngine::new(profile).run().unwrap();
        assert!(report.address.is_none());
        assert!(report.compatibility.is_none());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let profile = StaticProfile {
            name: None,
            ..eric()
        };
        let err = ReportEngine::new(profile).run().unwrap_err();
        assert!(matches!(err, NumerologyError::MissingConfig { field } if field == "birth_name"));
    }

    #[test]
    fn test_malformed_partner_date_is_rejected() {
        let profile = StaticProfile {
            partner_dob: Some("4/4/1985".to_string()),
            ..eric()
        };
        let err = ReportEngine::new(profile).run().unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidDate { field, .. } if field == "partner_birth_date"));
    }

    #[test]
    fn test_default_as_of_is_today() {
        let profile = StaticProfile {
            as_of: None,
            ..eric()
        };
        let request = ReportEngine::new(profile).request().unwrap();
        assert_eq!(request.as_of, Local::now().date_naive());
    }
}
