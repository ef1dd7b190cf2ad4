// ============================================================================
// Property Tests
// Algebraic properties of scaling, conversion, division and normalization
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use proptest::prelude::*;
use quickcheck::quickcheck;
use token_units::domain::compute_fee_split;
use token_units::numeric::{
    decimal_to_raw, percent_to_fraction, raw_to_decimal, safe_divide_decimal,
    safe_divide_integer, scale_factor, scale_factor_int,
};
use token_units::utils::normalize_case;

fn big(value: u128) -> BigInt {
    BigInt::from(value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_scale_factor_recurrence(n in 1u32..64) {
        let ten = BigDecimal::from(10);
        prop_assert_eq!(scale_factor(n).unwrap(), scale_factor(n - 1).unwrap() * ten);
        prop_assert_eq!(
            scale_factor_int(n).unwrap(),
            scale_factor_int(n - 1).unwrap() * BigInt::from(10)
        );
    }

    #[test]
    fn prop_zero_decimals_is_identity(amount in any::<u128>()) {
        let raw = big(amount);
        prop_assert_eq!(raw_to_decimal(&raw, 0u8).unwrap(), BigDecimal::from(raw.clone()));
    }

    #[test]
    fn prop_raw_to_decimal_is_division(amount in any::<u64>(), decimals in 1u32..40) {
        let raw = BigInt::from(amount);
        let expected = BigDecimal::from(raw.clone()) / scale_factor(decimals).unwrap();
        prop_assert_eq!(raw_to_decimal(&raw, decimals).unwrap(), expected);
    }

    #[test]
    fn prop_native_and_big_decimals_agree(amount in any::<u128>(), decimals in 0u8..=36) {
        let raw = big(amount);
        prop_assert_eq!(
            raw_to_decimal(&raw, decimals).unwrap(),
            raw_to_decimal(&raw, BigInt::from(decimals)).unwrap()
        );
    }

    #[test]
    fn prop_round_trip_exact_multiples(units in any::<u64>(), decimals in 0u32..30) {
        let raw = BigInt::from(units) * scale_factor_int(decimals).unwrap();
        let value = raw_to_decimal(&raw, decimals).unwrap();
        prop_assert_eq!(decimal_to_raw(&value, decimals).unwrap(), raw);
    }

    #[test]
    fn prop_round_trip_any_amount(amount in any::<u128>(), decimals in 0u32..40) {
        let raw = big(amount);
        let value = raw_to_decimal(&raw, decimals).unwrap();
        prop_assert_eq!(decimal_to_raw(&value, decimals).unwrap(), raw);
    }

    #[test]
    fn prop_safe_divide_decimal_by_zero(numerator in any::<i64>()) {
        let zero = BigDecimal::from(0);
        prop_assert_eq!(safe_divide_decimal(&BigDecimal::from(numerator), &zero), zero);
    }

    #[test]
    fn prop_safe_divide_decimal_exact_quotients(q in any::<i32>(), d in 1i64..1_000_000) {
        // numerator = q * d, so the quotient is exactly q
        let numerator = BigDecimal::from(i64::from(q) * d);
        prop_assert_eq!(
            safe_divide_decimal(&numerator, &BigDecimal::from(d)),
            BigDecimal::from(q)
        );
    }

    #[test]
    fn prop_safe_divide_integer(x in any::<i64>(), y in any::<i64>()) {
        let result = safe_divide_integer(&BigInt::from(x), &BigInt::from(y));
        if y == 0 {
            prop_assert_eq!(result, BigInt::from(0));
        } else {
            let expected = BigInt::from(i128::from(x) / i128::from(y));
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn prop_fee_split_matches_fractions(total in 0u64..1_000_000_000, trading in 0u32..=100, protocol in 0u32..=100) {
        let total = BigDecimal::from(total);
        let split = compute_fee_split(
            &total,
            &BigDecimal::from(trading),
            &BigDecimal::from(protocol),
        );
        prop_assert_eq!(&split.trading_fee, &(&total * percent_to_fraction(&BigDecimal::from(trading))));
        prop_assert_eq!(&split.protocol_fee, &(&total * percent_to_fraction(&BigDecimal::from(protocol))));
    }

    #[test]
    fn prop_normalize_case_idempotent(items in proptest::collection::vec(".{0,12}", 0..8)) {
        let once = normalize_case(items);
        let twice = normalize_case(once.clone());
        prop_assert_eq!(once, twice);
    }
}

quickcheck! {
    fn qc_normalize_case_preserves_length(items: Vec<String>) -> bool {
        let len = items.len();
        normalize_case(items).len() == len
    }

    fn qc_normalize_case_has_no_uppercase_ascii(items: Vec<String>) -> bool {
        normalize_case(items)
            .iter()
            .all(|s| !s.chars().any(|c| c.is_ascii_uppercase()))
    }
}
