use crate::core::letters::{calculate_string_value, clean_letters, letter_value};
use crate::core::reducer::reduce;
use crate::domain::model::{
    BirthDate, Challenge, Challenges, InclusionGrid, LetterFilter, NumerologyResult, Pinnacles,
    Planes,
};
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-()]+$").expect("numeric pattern compiles"));

const MENTAL: [char; 7] = ['a', 'g', 'l', 'n', 'p', 's', 'z'];
const PHYSICAL: [char; 7] = ['b', 'e', 'k', 'm', 'r', 't', 'w'];
const EMOTIONAL: [char; 6] = ['c', 'i', 'o', 'q', 'u', 'x'];
const INTUITIVE: [char; 6] = ['d', 'f', 'h', 'j', 'v', 'y'];

/// Month, day and year reduced on their own, the base of the date cycles.
struct ReducedDate {
    month: u32,
    day: u32,
    year: u32,
}

impl ReducedDate {
    fn of(dob: &BirthDate) -> Self {
        Self {
            month: reduce(dob.month).value,
            day: reduce(dob.day).value,
            year: reduce(dob.year).value,
        }
    }
}

/// Reduce-then-add over month, day and a year, shared by life path and
/// personal year.
fn reduce_date_parts(month: u32, day: u32, year: u32, year_label: &str) -> NumerologyResult {
    let m = reduce(month);
    let d = reduce(day);
    let y = reduce(year);

    let total = m.value + d.value + y.value;
    let last = reduce(total);
    let math = format!(
        "Month({}): {} | Day({}): {} | {}({}): {} | Total: {} + {} + {} = {} → {}",
        month, m.math, day, d.math, year_label, year, y.math, m.value, d.value, y.value, total,
        last.math
    );
    last.with_math(math)
}

fn reduce_name(name: &str, filter: LetterFilter) -> NumerologyResult {
    let string_value = calculate_string_value(name, filter);
    let reduced = reduce(string_value.total);
    let math = format!("{} → {}", string_value.breakdown, reduced.math);
    reduced.with_math(math)
}

pub fn calculate_life_path(dob: &BirthDate) -> NumerologyResult {
    let result = reduce_date_parts(dob.month, dob.day, dob.year, "Year");
    tracing::debug!(dob = %dob, value = result.value, "life path");
    result
}

/// Expression number, every letter of the birth name.
pub fn calculate_destiny(name: &str) -> NumerologyResult {
    reduce_name(name, LetterFilter::All)
}

pub fn calculate_soul_urge(name: &str) -> NumerologyResult {
    reduce_name(name, LetterFilter::Vowels)
}

pub fn calculate_personality(name: &str) -> NumerologyResult {
    reduce_name(name, LetterFilter::Consonants)
}

pub fn calculate_birthday_number(dob: &BirthDate) -> NumerologyResult {
    reduce(dob.day)
}

pub fn calculate_personal_year(dob: &BirthDate, target_year: u32) -> NumerologyResult {
    reduce_date_parts(dob.month, dob.day, target_year, "Current Year")
}

pub fn calculate_personal_month(personal_year: u32, target_month: u32) -> NumerologyResult {
    let m = reduce(target_month);
    let total = personal_year + m.value;
    let last = reduce(total);
    let math = format!(
        "Personal Year({}) + Month({}): {} = {} → {}",
        personal_year, target_month, m.math, total, last.math
    );
    last.with_math(math)
}

pub fn calculate_personal_day(personal_month: u32, target_day: u32) -> NumerologyResult {
    let d = reduce(target_day);
    let total = personal_month + d.value;
    let last = reduce(total);
    let math = format!(
        "Personal Month({}) + Day({}): {} = {} → {}",
        personal_month, target_day, d.math, total, last.math
    );
    last.with_math(math)
}

pub fn calculate_pinnacles(dob: &BirthDate) -> Pinnacles {
    let ReducedDate { month, day, year } = ReducedDate::of(dob);

    let p1 = reduce(month + day);
    let p2 = reduce(day + year);
    let p3 = reduce(p1.value + p2.value);
    let p4 = reduce(month + year);

    Pinnacles { p1, p2, p3, p4 }
}

/// Challenges are plain distances between the reduced parts and are not
/// reduced again. A master month, day or year can push them past 9.
pub fn calculate_challenges(dob: &BirthDate) -> Challenges {
    let ReducedDate { month, day, year } = ReducedDate::of(dob);

    let c1 = month.abs_diff(day);
    let c2 = day.abs_diff(year);
    let c3 = c1.abs_diff(c2);
    let c4 = month.abs_diff(year);

    Challenges {
        c1: Challenge {
            value: c1,
            math: format!("|Month({}) - Day({})| = {}", month, day, c1),
        },
        c2: Challenge {
            value: c2,
            math: format!("|Day({}) - Year({})| = {}", day, year, c2),
        },
        c3: Challenge {
            value: c3,
            math: format!("|C1({}) - C2({})| = {}", c1, c2, c3),
        },
        c4: Challenge {
            value: c4,
            math: format!("|Month({}) - Year({})| = {}", month, year, c4),
        },
    }
}

pub fn calculate_planes(name: &str) -> Planes {
    let mut planes = Planes::default();

    for letter in clean_letters(name) {
        if MENTAL.contains(&letter) {
            planes.mental += 1;
        } else if PHYSICAL.contains(&letter) {
            planes.physical += 1;
        } else if EMOTIONAL.contains(&letter) {
            planes.emotional += 1;
        } else if INTUITIVE.contains(&letter) {
            planes.intuitive += 1;
        }
    }

    planes
}

pub fn calculate_inclusion_grid(name: &str) -> InclusionGrid {
    let mut grid = InclusionGrid::new();
    for value in clean_letters(name).filter_map(letter_value) {
        grid.increment(value);
    }
    grid
}

/// Address, phone or business number.
///
/// Only a string made entirely of digits, whitespace, hyphens and parentheses
/// takes the digit path; anything with a letter or other symbol is read as a
/// name.
pub fn calculate_applied(input: &str) -> NumerologyResult {
    if NUMERIC_ONLY.is_match(input) {
        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
        let total: u32 = digits.iter().sum();
        let reduced = reduce(total);
        let joined = digits
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        let math = format!("{} = {} → {}", joined, total, reduced.math);
        tracing::debug!(input, value = reduced.value, "applied number (digits)");
        reduced.with_math(math)
    } else {
        tracing::debug!(input, "applied number (letters)");
        reduce_name(input, LetterFilter::All)
    }
}

/// Combined life path of two people. The flags are always cleared.
pub fn calculate_compatibility(own: &NumerologyResult, partner: &NumerologyResult) -> NumerologyResult {
    let total = own.value + partner.value;
    let reduced = reduce(total);
    NumerologyResult::compatibility(
        reduced.value,
        format!(
            "Your LP({}) + Partner LP({}) = {} → {}",
            own.value, partner.value, total, reduced.value
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob(s: &str) -> BirthDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_life_path_with_masters() {
        let result = calculate_life_path(&dob("1990-11-22"));
        assert_eq!(result.value, 7);
        assert_eq!(
            result.math,
            "Month(11): 11 | Day(22): 22 | Year(1990): 1990 → 19 → 10 → 1 | Total: 11 + 22 + 1 = 34 → 34 → 7"
        );
        // flags come from the final reduction only
        assert!(!result.is_master);
        assert!(!result.is_karmic);
    }

    #[test]
    fn test_life_path_karmic_total() {
        let result = calculate_life_path(&dob("1985-04-04"));
        assert_eq!(result.value, 4);
        assert!(result.is_karmic);
        assert_eq!(result.karmic_number, Some(13));
        assert!(result.math.ends_with("Total: 4 + 4 + 5 = 13 → 13 → 4"));
    }

    #[test]
    fn test_life_path_leading_zeros_in_trace() {
        let result = calculate_life_path(&dob("2001-01-02"));
        assert!(result.math.starts_with("Month(1): 1 | Day(2): 2 | Year(2001): 2001 → 3"));
        assert_eq!(result.value, 6);
    }

    #[test]
    fn test_name_numbers() {
        let destiny = calculate_destiny("Eric");
        assert_eq!(destiny.value, 8);
        assert_eq!(destiny.math, "E(5) + R(9) + I(9) + C(3) = 26 → 26 → 8");
        assert!(!destiny.is_master);

        let soul = calculate_soul_urge("Eric");
        assert_eq!(soul.value, 5);
        assert!(soul.is_karmic);
        assert_eq!(soul.karmic_number, Some(14));
        assert_eq!(soul.math, "E(5) + I(9) = 14 → 14 → 5");

        let personality = calculate_personality("Eric");
        assert_eq!(personality.value, 3);
        assert_eq!(personality.math, "R(9) + C(3) = 12 → 12 → 3");
    }

    #[test]
    fn test_empty_name_reduces_to_zero() {
        let destiny = calculate_destiny("");
        assert_eq!(destiny.value, 0);
        assert_eq!(destiny.math, " = 0 → 0");
    }

    #[test]
    fn test_birthday_number() {
        let result = calculate_birthday_number(&dob("1990-11-29"));
        assert_eq!(result.value, 11);
        assert!(result.is_master);
        assert_eq!(calculate_birthday_number(&dob("1990-11-19")).karmic_number, Some(19));
    }

    #[test]
    fn test_personal_cycles() {
        let birth = dob("1990-11-22");
        let year = calculate_personal_year(&birth, 2026);
        assert_eq!(year.value, 7);
        assert!(year.math.contains("Current Year(2026): 2026 → 10 → 1"));

        let month = calculate_personal_month(year.value, 10);
        assert_eq!(month.value, 8);
        assert_eq!(month.math, "Personal Year(7) + Month(10): 10 → 1 = 8 → 8");

        let day = calculate_personal_day(month.value, 19);
        assert_eq!(day.value, 9);
        assert_eq!(day.math, "Personal Month(8) + Day(19): 19 → 10 → 1 = 9 → 9");
        assert!(!day.is_karmic);
    }

    #[test]
    fn test_pinnacles() {
        let pinnacles = calculate_pinnacles(&dob("2001-01-02"));
        let values: Vec<u32> = pinnacles.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![3, 5, 8, 4]);

        let pinnacles = calculate_pinnacles(&dob("1990-11-22"));
        assert_eq!(pinnacles.p1.value, 33);
        assert!(pinnacles.p1.is_master);
        assert_eq!(pinnacles.p2.value, 5);
        assert_eq!(pinnacles.p3.math, "38 → 11");
        assert_eq!(pinnacles.p4.value, 3);
    }

    #[test]
    fn test_challenges() {
        let challenges = calculate_challenges(&dob("2001-01-02"));
        let values: Vec<u32> = challenges.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![1, 1, 0, 2]);
        assert_eq!(challenges.c1.math, "|Month(1) - Day(2)| = 1");
        assert_eq!(challenges.c2.math, "|Day(2) - Year(3)| = 1");
        assert_eq!(challenges.c3.math, "|C1(1) - C2(1)| = 0");
        assert_eq!(challenges.c4.math, "|Month(1) - Year(3)| = 2");
    }

    #[test]
    fn test_challenges_with_master_parts() {
        let challenges = calculate_challenges(&dob("1990-11-22"));
        let values: Vec<u32> = challenges.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![11, 21, 10, 10]);
    }

    #[test]
    fn test_planes() {
        let planes = calculate_planes("Eric");
        assert_eq!(
            planes,
            Planes {
                mental: 0,
                physical: 2,
                emotional: 2,
                intuitive: 0
            }
        );

        let planes = calculate_planes("Ada Lovelace!");
        assert_eq!(planes.mental, 5);
        assert_eq!(planes.physical, 2);
        assert_eq!(planes.emotional, 2);
        assert_eq!(planes.intuitive, 2);
    }

    #[test]
    fn test_inclusion_grid() {
        let grid = calculate_inclusion_grid("Eric");
        assert_eq!(grid.count(5), 1);
        assert_eq!(grid.count(9), 2);
        assert_eq!(grid.count(3), 1);
        assert_eq!(grid.missing_digits(), vec![1, 2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_applied_numeric() {
        let phone = calculate_applied("555-1234");
        assert_eq!(phone.value, 7);
        assert_eq!(phone.math, "5 + 5 + 5 + 1 + 2 + 3 + 4 = 25 → 25 → 7");

        let formatted = calculate_applied("(555) 123-4567");
        assert_eq!(formatted.value, 7);
    }

    #[test]
    fn test_applied_name() {
        let street = calculate_applied("Main Street");
        assert_eq!(street.value, 7);
        assert!(street.math.starts_with("M(4) + A(1) + I(9) + N(5)"));

        // a single letter sends it down the name path, digits are dropped
        let mixed = calculate_applied("123 Main St");
        assert_eq!(mixed.math, "M(4) + A(1) + I(9) + N(5) + S(1) + T(2) = 22 → 22");
        assert_eq!(mixed.value, 22);
        assert!(mixed.is_master);

        let empty = calculate_applied("");
        assert_eq!(empty.value, 0);
    }

    #[test]
    fn test_compatibility() {
        let own = calculate_life_path(&dob("1990-11-22"));
        let partner = calculate_life_path(&dob("1985-04-04"));
        let result = calculate_compatibility(&own, &partner);
        assert_eq!(result.value, 11);
        assert_eq!(result.math, "Your LP(7) + Partner LP(4) = 11 → 11");
        assert!(!result.is_master);
        assert!(!result.is_karmic);
        assert_eq!(result.karmic_number, None);
    }
}
