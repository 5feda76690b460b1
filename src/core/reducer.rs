use crate::domain::model::NumerologyResult;

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

pub fn is_master_number(num: u32) -> bool {
    MASTER_NUMBERS.contains(&num)
}

pub fn is_karmic_debt_number(num: u32) -> bool {
    KARMIC_DEBT_NUMBERS.contains(&num)
}

pub fn digit_sum(mut num: u32) -> u32 {
    let mut sum = 0;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

fn note(value: u32, is_master: &mut bool, karmic_number: &mut Option<u32>) {
    if is_karmic_debt_number(value) {
        *karmic_number = Some(value);
    }
    if is_master_number(value) {
        *is_master = true;
    }
}

/// Reduces with master numbers preserved.
pub fn reduce(num: u32) -> NumerologyResult {
    reduce_number(num, true)
}

/// Collapses `num` to a single digit, stopping early on 11, 22 or 33 when
/// `preserve_master` is set.
///
/// Every value on the way, the input included, is checked against the master
/// and karmic debt sets. Flags only ever go from false to true.
pub fn reduce_number(num: u32, preserve_master: bool) -> NumerologyResult {
    let mut current = num;
    let mut steps = vec![current.to_string()];
    let mut is_master = false;
    let mut karmic_number = None;

    note(current, &mut is_master, &mut karmic_number);

    while current > 9 {
        if preserve_master && is_master_number(current) {
            break;
        }
        current = digit_sum(current);
        steps.push(current.to_string());
        note(current, &mut is_master, &mut karmic_number);
    }

    tracing::trace!(input = num, value = current, "reduced");

    NumerologyResult {
        value: current,
        math: steps.join(" → "),
        is_master,
        is_karmic: karmic_number.is_some(),
        karmic_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_passes_through() {
        let result = reduce(7);
        assert_eq!(result.value, 7);
        assert_eq!(result.math, "7");
        assert!(!result.is_master);
        assert!(!result.is_karmic);
        assert_eq!(result.karmic_number, None);
    }

    #[test]
    fn test_zero_stays_zero() {
        let result = reduce(0);
        assert_eq!(result.value, 0);
        assert_eq!(result.math, "0");
    }

    #[test]
    fn test_karmic_debt_numbers_flagged() {
        for karmic in KARMIC_DEBT_NUMBERS {
            let result = reduce(karmic);
            assert!(result.is_karmic, "{} should be karmic", karmic);
            assert_eq!(result.karmic_number, Some(karmic));
        }
    }

    #[test]
    fn test_karmic_found_mid_reduction() {
        let result = reduce(49);
        assert_eq!(result.value, 4);
        assert_eq!(result.math, "49 → 13 → 4");
        assert!(result.is_karmic);
        assert_eq!(result.karmic_number, Some(13));
    }

    #[test]
    fn test_master_preserved() {
        for master in MASTER_NUMBERS {
            let result = reduce(master);
            assert_eq!(result.value, master);
            assert!(result.is_master);
            assert_eq!(result.math, master.to_string());
        }

        let result = reduce(38);
        assert_eq!(result.value, 11);
        assert_eq!(result.math, "38 → 11");
        assert!(result.is_master);
    }

    #[test]
    fn test_master_not_preserved_keeps_flag() {
        let result = reduce_number(11, false);
        assert_eq!(result.value, 2);
        assert_eq!(result.math, "11 → 2");
        assert!(result.is_master);

        let result = reduce_number(29, false);
        assert_eq!(result.value, 2);
        assert_eq!(result.math, "29 → 11 → 2");
        assert!(result.is_master);
    }

    #[test]
    fn test_year_reduction_trace() {
        let result = reduce(1990);
        assert_eq!(result.math, "1990 → 19 → 10 → 1");
        assert_eq!(result.value, 1);
        assert_eq!(result.karmic_number, Some(19));
        assert!(!result.is_master);
    }

    #[test]
    fn test_terminal_values_and_idempotence() {
        for n in 0..5000 {
            let result = reduce(n);
            assert!(
                result.value <= 9 || is_master_number(result.value),
                "{} reduced to {}",
                n,
                result.value
            );
            assert_eq!(reduce(result.value).value, result.value);
            assert!(result.math.ends_with(&result.value.to_string()));
            assert_eq!(result.is_karmic, result.karmic_number.is_some());
        }
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(u32::MAX), 4 + 2 + 9 + 4 + 9 + 6 + 7 + 2 + 9 + 5);
    }
}
