use crate::app::meanings::{generate_summary, get_meaning, Category};
use crate::core::report::NumerologyReport;
use crate::domain::model::NumerologyResult;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &NumerologyReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &NumerologyReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {} ==\n", title.to_uppercase());
}

fn card(out: &mut String, title: &str, result: &NumerologyResult, category: Category) {
    let mut badges = String::new();
    if result.is_master {
        badges.push_str(" [Master]");
    }
    if let Some(karmic) = result.karmic_number.filter(|_| result.is_karmic) {
        let _ = write!(badges, " [Karmic Debt {}]", karmic);
    }

    let _ = writeln!(out, "{}: {}{}", title, result.value, badges);
    let _ = writeln!(out, "  Math: {}", result.math);
    for line in get_meaning(category, result).lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out.push('\n');
}

pub fn render_text(report: &NumerologyReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Numerology report for {} (born {}, cycles as of {})",
        report.birth_name, report.birth_date, report.as_of
    );

    section(&mut out, "Your Numerological Blueprint");
    let _ = writeln!(out, "{}", generate_summary(report));

    section(&mut out, "The Core Numbers");
    card(&mut out, "Life Path Number", &report.life_path, Category::LifePath);
    card(&mut out, "Destiny / Expression", &report.destiny, Category::Destiny);
    card(&mut out, "Soul Urge", &report.soul_urge, Category::SoulUrge);
    card(&mut out, "Personality", &report.personality, Category::Personality);
    card(&mut out, "Birthday Number", &report.birthday, Category::Birthday);

    section(&mut out, "Predictive Cycles");
    card(&mut out, "Personal Year Cycle", &report.personal_year, Category::PersonalYear);
    card(&mut out, "Personal Month", &report.personal_month, Category::PersonalMonth);
    card(&mut out, "Personal Day", &report.personal_day, Category::PersonalDay);
    let ordinals = ["1st", "2nd", "3rd", "4th"];
    for (ordinal, pinnacle) in ordinals.iter().zip(report.pinnacles.iter()) {
        let marker = if pinnacle.is_master { " [Master]" } else { "" };
        let _ = writeln!(
            out,
            "{} Pinnacle: {}{}  ({})",
            ordinal, pinnacle.value, marker, pinnacle.math
        );
    }

    section(&mut out, "Strengths & Challenges");
    for (idx, challenge) in report.challenges.iter().enumerate() {
        let _ = writeln!(
            out,
            "Challenge {}: {}  ({})",
            idx + 1,
            challenge.value,
            challenge.math
        );
    }
    let planes = &report.planes;
    let _ = writeln!(out, "\nPlanes of Expression");
    let _ = writeln!(out, "  Mental:    {}", planes.mental);
    let _ = writeln!(out, "  Physical:  {}", planes.physical);
    let _ = writeln!(out, "  Emotional: {}", planes.emotional);
    let _ = writeln!(out, "  Intuitive: {}", planes.intuitive);

    section(&mut out, "Inclusion Grid");
    let cells: Vec<String> = report
        .inclusion
        .iter()
        .map(|(digit, count)| format!("{}:{:>2}", digit, count))
        .collect();
    for row in cells.chunks(3) {
        let _ = writeln!(out, "  {}", row.join("   "));
    }
    let missing = report.inclusion.missing_digits();
    if !missing.is_empty() {
        let digits: Vec<String> = missing.iter().map(u32::to_string).collect();
        let _ = writeln!(out, "  Absent: {}", digits.join(", "));
    }

    let has_applied =
        report.address.is_some() || report.business.is_some() || report.compatibility.is_some();
    if has_applied {
        section(&mut out, "Applied Numerology");
        if let Some(address) = &report.address {
            card(&mut out, "House / Address Number", address, Category::Address);
        }
        if let Some(business) = &report.business {
            card(&mut out, "Phone / Business Number", business, Category::Business);
        }
        if let Some(compatibility) = &report.compatibility {
            let title = match &compatibility.partner_name {
                Some(name) => format!("Compatibility Number (with {})", name),
                None => "Compatibility Number".to_string(),
            };
            card(&mut out, &title, &compatibility.result, Category::Compatibility);
        }
    }

    out
}
