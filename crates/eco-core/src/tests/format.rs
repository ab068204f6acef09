use crate::format::{format_cpf, format_phone, is_valid_cpf, is_valid_phone, strip_digits};

use proptest::prelude::*;

#[test]
fn test_format_cpf_progressive() {
    assert_eq!(format_cpf(""), "");
    assert_eq!(format_cpf("123"), "123");
    assert_eq!(format_cpf("1234"), "123.4");
    assert_eq!(format_cpf("123456"), "123.456");
    assert_eq!(format_cpf("1234567"), "123.456.7");
    assert_eq!(format_cpf("123456789"), "123.456.789");
    assert_eq!(format_cpf("1234567890"), "123.456.789-0");
    assert_eq!(format_cpf("12345678901"), "123.456.789-01");
}

#[test]
fn test_format_cpf_truncates_past_eleven_digits() {
    assert_eq!(format_cpf("123456789012345"), "123.456.789-01");
}

#[test]
fn test_format_cpf_strips_existing_separators() {
    assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
    assert_eq!(format_cpf("123abc456"), "123.456");
}

#[test]
fn test_format_phone_progressive() {
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("8"), "(8");
    assert_eq!(format_phone("81"), "(81");
    assert_eq!(format_phone("819"), "(81) 9");
    assert_eq!(format_phone("8199999"), "(81) 99999");
    assert_eq!(format_phone("81999998"), "(81) 99999-8");
    assert_eq!(format_phone("81999998888"), "(81) 99999-8888");
}

#[test]
fn test_format_phone_truncates_past_eleven_digits() {
    assert_eq!(format_phone("819999988889999"), "(81) 99999-8888");
}

#[test]
fn test_strip_digits() {
    assert_eq!(strip_digits("(81) 99999-8888"), "81999998888");
    assert_eq!(strip_digits("123.456.789-01"), "12345678901");
    assert_eq!(strip_digits("abc"), "");
}

#[test]
fn test_is_valid_cpf_length_only() {
    assert!(is_valid_cpf("12345678901"));
    assert!(is_valid_cpf("123.456.789-01"));
    assert!(!is_valid_cpf("1234567890"));
    assert!(!is_valid_cpf(""));
}

#[test]
fn test_is_valid_phone_accepts_ten_or_eleven_digits() {
    assert!(is_valid_phone("8133550000"));
    assert!(is_valid_phone("81999998888"));
    assert!(is_valid_phone("(81) 99999-8888"));
    assert!(!is_valid_phone("819999"));
    assert!(!is_valid_phone("819999988881"));
}

proptest! {
    #[test]
    fn full_cpf_always_formats_with_all_separators(d in "[0-9]{11}") {
        let expected = format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]);
        prop_assert_eq!(format_cpf(&d), expected);
    }

    #[test]
    fn cpf_prefixes_format_to_separated_prefix(d in "[0-9]{11}", len in 0usize..=11) {
        let prefix = &d[..len];
        let formatted = format_cpf(prefix);
        prop_assert_eq!(strip_digits(&formatted), prefix);
        prop_assert!(format_cpf(&d).starts_with(&formatted));
    }

    #[test]
    fn phone_formatting_preserves_digits(d in "[0-9]{0,11}") {
        prop_assert_eq!(strip_digits(&format_phone(&d)), d);
    }

    #[test]
    fn formatters_are_idempotent(d in "[0-9]{0,15}") {
        let cpf = format_cpf(&d);
        prop_assert_eq!(format_cpf(&cpf), cpf.clone());
        let phone = format_phone(&d);
        prop_assert_eq!(format_phone(&phone), phone.clone());
    }
}
