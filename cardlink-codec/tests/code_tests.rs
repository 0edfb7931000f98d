use cardlink_codec::{ActivationCode, OFFSETS, is_valid_format};
use std::str::FromStr;

// ── Derivation ───────────────────────────────────────────────────

#[test]
fn derives_known_code() {
    let code = ActivationCode::from_phone("9876543210");
    assert_eq!(code.as_str(), "TISRR06045");
}

#[test]
fn derivation_is_deterministic() {
    let a = ActivationCode::from_phone("9876543210");
    let b = ActivationCode::from_phone("9876543210");
    assert_eq!(a, b);
}

#[test]
fn derivation_ignores_phone_formatting() {
    let plain = ActivationCode::from_phone("9876543210");
    let formatted = ActivationCode::from_phone("(987) 654-3210");
    assert_eq!(plain, formatted);
}

#[test]
fn short_phone_left_pads() {
    let padded = ActivationCode::from_phone("12345");
    let explicit = ActivationCode::from_phone("0000012345");
    assert_eq!(padded, explicit);
}

#[test]
fn empty_phone_derives_all_zero_code() {
    // Ten zero digits run through the offset table.
    let code = ActivationCode::from_phone("");
    assert_eq!(code.as_str(), "KALLM63835");
}

#[test]
fn derived_code_always_has_valid_shape() {
    for raw in ["", "1", "9876543210", "+44 20 7946 0958", "no digits"] {
        let code = ActivationCode::from_phone(raw);
        assert!(is_valid_format(code.as_str()), "bad shape for {raw:?}");
    }
}

#[test]
fn offset_table_is_stable() {
    // Issued codes depend on these exact values.
    assert_eq!(OFFSETS, [10, 52, 63, 89, 12, 36, 63, 78, 63, 75]);
}

// ── Display forms ────────────────────────────────────────────────

#[test]
fn dashed_inserts_hyphen_after_fifth_char() {
    let code = ActivationCode::from_phone("9876543210");
    assert_eq!(code.dashed(), "TISRR-06045");
}

#[test]
fn display_prints_canonical_form() {
    let code = ActivationCode::from_phone("9876543210");
    assert_eq!(code.to_string(), "TISRR06045");
}

#[test]
fn as_ref_matches_as_str() {
    let code = ActivationCode::from_phone("9876543210");
    let s: &str = code.as_ref();
    assert_eq!(s, code.as_str());
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_canonical_form() {
    let code = ActivationCode::parse("TISRR06045").unwrap();
    assert_eq!(code.as_str(), "TISRR06045");
}

#[test]
fn parse_accepts_display_form() {
    let code = ActivationCode::parse("TISRR-06045").unwrap();
    assert_eq!(code.as_str(), "TISRR06045");
}

#[test]
fn parse_trims_whitespace() {
    let code = ActivationCode::parse("  TISRR06045  ").unwrap();
    assert_eq!(code.as_str(), "TISRR06045");
}

#[test]
fn parse_rejects_lowercase() {
    assert!(ActivationCode::parse("tisrr06045").is_err());
}

#[test]
fn parse_rejects_wrong_length() {
    assert!(ActivationCode::parse("TISRR0604").is_err());
    assert!(ActivationCode::parse("TISRR060455").is_err());
    assert!(ActivationCode::parse("").is_err());
}

#[test]
fn parse_rejects_digits_before_letters() {
    assert!(ActivationCode::parse("06045TISRR").is_err());
}

#[test]
fn parse_error_carries_input() {
    let err = ActivationCode::parse("garbage").unwrap_err();
    assert!(err.to_string().contains("garbage"));
}

#[test]
fn from_str_delegates_to_parse() {
    let code = ActivationCode::from_str("TISRR-06045").unwrap();
    assert_eq!(code.as_str(), "TISRR06045");
    assert!(ActivationCode::from_str("nope").is_err());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_bare_string() {
    let code = ActivationCode::from_phone("9876543210");
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, "\"TISRR06045\"");
}

#[test]
fn serialization_roundtrip() {
    let code = ActivationCode::from_phone("9876543210");
    let json = serde_json::to_string(&code).unwrap();
    let restored: ActivationCode = serde_json::from_str(&json).unwrap();
    assert_eq!(code, restored);
}
