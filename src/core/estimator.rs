use crate::domain::model::{BacInput, BacResult, Severity};
use crate::utils::error::{AlcometerError, Result};

/// Volume of one standard bottle, in litres.
pub const LITRES_PER_BOTTLE: f64 = 0.33;
pub const GRAMS_PER_LITRE_FACTOR: f64 = 8.0;
pub const ABV_FACTOR: f64 = 4.5;
/// Grams burned per hour = weight / this.
pub const BURN_RATE_DIVISOR: f64 = 10.0;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Estimate blood alcohol concentration for one set of form inputs.
///
/// Fails only with [`AlcometerError::MissingWeight`]. Negative bottle counts
/// and elapsed times are passed through unchanged; the result never goes below zero
/// (negative zero included). Bottle counts large enough to overflow yield an
/// infinite value, classified as high.
pub fn estimate(input: &BacInput) -> Result<BacResult> {
    let weight = input.weight_kg;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AlcometerError::MissingWeight);
    }

    let bottles = finite_or_zero(input.bottle_count);
    let hours = finite_or_zero(input.hours_since_drinking);

    let litres = bottles * LITRES_PER_BOTTLE;
    let grams = litres * GRAMS_PER_LITRE_FACTOR * ABV_FACTOR;
    let burn_rate = weight / BURN_RATE_DIVISOR;
    let grams_left = grams - burn_rate * hours;
    let raw = grams_left / (weight * input.sex.distribution_ratio());

    // also maps -0.0 and NaN to 0.0
    let value = if raw > 0.0 { raw } else { 0.0 };
    let severity = Severity::classify(value);

    tracing::debug!(
        litres,
        grams,
        burn_rate,
        grams_left,
        value,
        %severity,
        "estimated BAC for {}",
        input.sex
    );

    Ok(BacResult { value, severity })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Sex;

    fn input(weight_kg: f64, bottle_count: f64, hours: f64, sex: Sex) -> BacInput {
        BacInput {
            weight_kg,
            bottle_count,
            hours_since_drinking: hours,
            sex,
        }
    }

    #[test]
    fn test_two_bottles_one_hour_male() {
        let result = estimate(&input(70.0, 2.0, 1.0, Sex::Male)).unwrap();
        assert!((result.value - 16.76 / 49.0).abs() < 1e-9);
        assert_eq!(result.formatted(), "0.34");
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn test_five_bottles_female_no_time() {
        let result = estimate(&input(60.0, 5.0, 0.0, Sex::Female)).unwrap();
        assert!((result.value - 1.65).abs() < 1e-9);
        assert_eq!(result.formatted(), "1.65");
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_fully_burned_off_clamps_to_zero() {
        let result = estimate(&input(80.0, 1.0, 10.0, Sex::Male)).unwrap();
        assert_eq!(result.value, 0.0);
        assert_eq!(result.formatted(), "0.00");
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn test_no_bottles_is_zero() {
        let result = estimate(&input(95.0, 0.0, 0.0, Sex::Female)).unwrap();
        assert_eq!(result.value, 0.0);
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn test_invalid_weight_is_missing_weight() {
        for weight in [0.0, -70.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                estimate(&input(weight, 3.0, 1.0, Sex::Male)),
                Err(AlcometerError::MissingWeight)
            ));
        }
    }

    #[test]
    fn test_negative_hours_are_not_rejected() {
        let later = estimate(&input(70.0, 2.0, 0.0, Sex::Male)).unwrap();
        let earlier = estimate(&input(70.0, 2.0, -1.0, Sex::Male)).unwrap();
        assert!(earlier.value > later.value);
    }

    #[test]
    fn test_negative_zero_bottles_shows_plain_zero() {
        let result = estimate(&input(70.0, -0.0, 0.0, Sex::Male)).unwrap();
        assert!(result.value.is_sign_positive());
        assert_eq!(result.formatted(), "0.00");
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn test_overflowing_bottle_count_is_infinite_and_high() {
        let result = estimate(&input(70.0, 1e308, 0.0, Sex::Male)).unwrap();
        assert!(result.value.is_infinite());
        assert_eq!(result.formatted(), "inf");
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_non_finite_optional_fields_count_as_zero() {
        let result = estimate(&input(70.0, f64::NAN, f64::INFINITY, Sex::Male)).unwrap();
        assert_eq!(result.value, 0.0);
    }
}
