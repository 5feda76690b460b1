use crate::utils::error::NumerologyError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A reduced number together with the arithmetic that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResult {
    pub value: u32,
    pub math: String,
    pub is_master: bool,
    pub is_karmic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karmic_number: Option<u32>,
}

impl NumerologyResult {
    /// Compatibility numbers never carry master or karmic annotations.
    pub fn compatibility(value: u32, math: String) -> Self {
        Self {
            value,
            math,
            is_master: false,
            is_karmic: false,
            karmic_number: None,
        }
    }

    /// Keeps value and flags, swaps the trace for a fuller one.
    pub fn with_math(self, math: String) -> Self {
        Self { math, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::validation::parse_birth_date("birth_date", s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Which letters of a name take part in a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFilter {
    All,
    Vowels,
    Consonants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    pub total: u32,
    pub breakdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pinnacles {
    pub p1: NumerologyResult,
    pub p2: NumerologyResult,
    pub p3: NumerologyResult,
    pub p4: NumerologyResult,
}

impl Pinnacles {
    pub fn iter(&self) -> impl Iterator<Item = &NumerologyResult> {
        [&self.p1, &self.p2, &self.p3, &self.p4].into_iter()
    }
}

/// Raw digit distance, never reduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub value: u32,
    pub math: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges {
    pub c1: Challenge,
    pub c2: Challenge,
    pub c3: Challenge,
    pub c4: Challenge,
}

impl Challenges {
    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        [&self.c1, &self.c2, &self.c3, &self.c4].into_iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planes {
    pub mental: u32,
    pub physical: u32,
    pub emotional: u32,
    pub intuitive: u32,
}

/// Occurrence count of each digit 1-9 among the letters of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InclusionGrid {
    counts: BTreeMap<u32, u32>,
}

impl InclusionGrid {
    pub fn new() -> Self {
        Self {
            counts: (1..=9).map(|digit| (digit, 0)).collect(),
        }
    }

    pub fn increment(&mut self, digit: u32) {
        if let Some(count) = self.counts.get_mut(&digit) {
            *count += 1;
        }
    }

    pub fn count(&self, digit: u32) -> u32 {
        self.counts.get(&digit).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(digit, count)| (*digit, *count))
    }

    /// Digits that never occur in the name.
    pub fn missing_digits(&self) -> Vec<u32> {
        self.iter()
            .filter(|(_, count)| *count == 0)
            .map(|(digit, _)| digit)
            .collect()
    }
}

impl Default for InclusionGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated input for a full report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub birth_name: String,
    pub birth_date: BirthDate,
    /// Reference date for the personal year, month and day.
    pub as_of: NaiveDate,
    pub partner_name: Option<String>,
    pub partner_birth_date: Option<BirthDate>,
    pub address: Option<String>,
    pub business: Option<String>,
}
