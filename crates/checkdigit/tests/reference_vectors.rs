//! Known-answer tests for base-10 and base-16 check digits.
//!
//! The vectors cover all three input shapes and check that sequences,
//! strings and integers encoding the same number agree.

use checkdigit::{
    Base, CheckDigitError, LuhnModN, MalformedDigit, MalformedDigitKind, append_check_digit,
    append_check_digit_in_base, check_digit, check_digit_in_base, compute_check_digit,
    has_valid_check_digit, has_valid_check_digit_in_base,
};

// ============================================================================
// Base 10
// ============================================================================

#[test]
fn decimal_sequences() {
    assert_eq!(check_digit(&[0u8]), Ok(0));
    assert_eq!(check_digit(&[1u8]), Ok(8));
    assert_eq!(check_digit(&[2u8]), Ok(6));
    assert_eq!(check_digit(&[3u8, 6, 1, 5, 5]), Ok(0));
    assert_eq!(check_digit(&[3u8, 6, 1, 5, 6]), Ok(8));
    assert_eq!(check_digit(&Vec::<u8>::new()), Ok(0));
    assert_eq!(compute_check_digit(&[], 10), Ok(0));
}

#[test]
fn decimal_integers() {
    assert_eq!(check_digit(&36155_u32), Ok(0));
    assert_eq!(check_digit(&36156_i32), Ok(8));
    assert_eq!(check_digit(&36157_u64), Ok(6));
    assert_eq!(check_digit(&7_992_739_871_i64), Ok(3));
}

#[test]
fn decimal_strings() {
    assert_eq!(check_digit("36157"), Ok('6'));
    assert_eq!(check_digit("7992739871"), Ok('3'));
}

#[test]
fn decimal_validation() {
    assert_eq!(has_valid_check_digit(&[3u8, 6, 1, 5, 6, 8]), Ok(true));
    assert_eq!(has_valid_check_digit(&361_568_u32), Ok(true));
    assert_eq!(has_valid_check_digit("361568"), Ok(true));
    assert_eq!(has_valid_check_digit("79927398713"), Ok(true));
    assert_eq!(has_valid_check_digit("79927398710"), Ok(false));
    assert_eq!(has_valid_check_digit(&361_567_u64), Ok(false));
}

#[test]
fn decimal_append() {
    assert_eq!(append_check_digit("36156"), Ok("361568".to_owned()));
    assert_eq!(append_check_digit("7992739871"), Ok("79927398713".to_owned()));
    assert_eq!(append_check_digit(&36156_u32), Ok(361_568));
    assert_eq!(append_check_digit(&[3u8, 6, 1, 5, 6]), Ok(vec![3, 6, 1, 5, 6, 8]));
    assert_eq!(
        append_check_digit(&String::from("7992739871")),
        Ok(String::from("79927398713"))
    );
}

// ============================================================================
// Base 16
// ============================================================================

#[test]
fn hexadecimal_validation() {
    let hex = LuhnModN::HEXADECIMAL;
    assert_eq!(
        hex.has_valid_check_digit(&[3u8, 10, 6, 13, 1, 15, 5, 6, 6]),
        Ok(true)
    );
    assert_eq!(hex.has_valid_check_digit(&0x3_A6D1_F566_u64), Ok(true));

    for value in [
        "3A6D1F566",
        "7A9D9F27398712",
        "499602d2f",
        "0B012722900021AC35B25",
        "22111111111111111111f",
        "211111111111111111111",
    ] {
        assert_eq!(has_valid_check_digit_in_base(value, 16), Ok(true), "{value}");
    }
}

#[test]
fn hexadecimal_append() {
    for (payload, expected) in [
        ("499602d2", "499602d2f"),
        ("3A6D1F56", "3A6D1F566"),
        ("7A9D9F2739871", "7A9D9F27398712"),
        ("0B012722900021AC35B2", "0B012722900021AC35B25"),
        ("22111111111111111111", "22111111111111111111f"),
        ("21111111111111111111", "211111111111111111111"),
    ] {
        assert_eq!(
            append_check_digit_in_base(payload, Base::HEXADECIMAL),
            Ok(expected.to_owned()),
            "{payload}"
        );
    }
}

#[test]
fn hexadecimal_check_digits_render_lowercase() {
    assert_eq!(check_digit_in_base("499602d2", 16), Ok('f'));
    assert_eq!(check_digit_in_base("499602D2", 16), Ok('f'));
    assert_eq!(check_digit_in_base(&0x4996_02D2_u32, 16), Ok(15));
    assert_eq!(append_check_digit_in_base(&0x4996_02D2_u64, 16), Ok(0x4_9960_2D2F));
}

// ============================================================================
// Other bases
// ============================================================================

#[test]
fn small_bases() {
    assert_eq!(check_digit_in_base("1011", 2), Ok('1'));
    assert_eq!(check_digit_in_base(&0b1011_u32, 2), Ok(1));
    assert_eq!(check_digit_in_base("1234", 8), Ok('7'));
    assert_eq!(check_digit_in_base(&0o1234_u32, Base::OCTAL), Ok(7));
    assert_eq!(check_digit_in_base("12", 3), Ok('1'));
}

#[test]
fn boundary_bases_succeed() {
    assert!(append_check_digit_in_base("1", 2).is_ok());
    assert!(append_check_digit_in_base("f", 16).is_ok());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn invalid_bases_are_rejected_for_every_shape() {
    for base in [1_i64, 0, 17, -1, -10] {
        let expected = Err(CheckDigitError::InvalidBase {
            base: i128::from(base),
        });
        assert_eq!(check_digit_in_base("1", base).map(|_| ()), expected);
        assert_eq!(check_digit_in_base(&[1u8], base).map(|_| ()), expected);
        assert_eq!(check_digit_in_base(&1_u32, base).map(|_| ()), expected);
        assert_eq!(append_check_digit_in_base("1", base).map(|_| ()), expected);
        assert_eq!(has_valid_check_digit_in_base(&10_u64, base).map(|_| ()), expected);
    }
}

#[test]
fn malformed_strings_are_rejected() {
    let err = check_digit("12a4").expect_err("a is not decimal");
    assert_eq!(
        err.malformed_digit().map(MalformedDigit::kind),
        Some(MalformedDigitKind::InvalidCharacter {
            character: 'a',
            position: 2,
        })
    );

    assert!(has_valid_check_digit_in_base("0B01G", 16).is_err());
    assert!(append_check_digit_in_base("102", 2).is_err());
}

#[test]
fn negative_integers_are_rejected() {
    let err = check_digit(&-42_i32).expect_err("negative");
    assert_eq!(
        err.malformed_digit().map(MalformedDigit::kind),
        Some(MalformedDigitKind::Negative)
    );
    assert!(has_valid_check_digit(&i64::MIN).is_err());
}

#[test]
fn integer_append_overflow_is_reported() {
    let err = append_check_digit(&u32::MAX).expect_err("overflow");
    assert_eq!(
        err.malformed_digit().map(MalformedDigit::kind),
        Some(MalformedDigitKind::Overflow)
    );
    assert!(append_check_digit(&(u64::MAX / 10)).is_ok());
}
