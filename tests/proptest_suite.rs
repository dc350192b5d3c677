//! Property-based tests for hresult_registry
//!
//! These tests use proptest to generate random status codes and metadata and
//! verify the resolver and log record invariants hold.

use hresult_registry::{
    Facility, HResult, MAX_FIELD_OUTPUT_LEN, Severity, StatusError, StatusKind, catalog,
    from_code, resolve,
};
use proptest::prelude::*;

/// Any value, biased toward the catalog's dense facilities.
fn status_code() -> impl Strategy<Value = u32> {
    prop_oneof![
        any::<u32>(),
        (0u32..0x1000).prop_map(|c| 0x8000_0000 | c),
        (0u32..0x1000).prop_map(|c| 0x8001_0000 | c),
        (0u32..0x1000).prop_map(|c| 0x8004_0000 | c),
        (0u32..0x1000).prop_map(|c| 0x8007_0000 | c),
        (0usize..catalog().len()).prop_map(|i| catalog()[i].code()),
    ]
}

// ============================================================================
// RESOLUTION PROPERTIES
// ============================================================================

proptest! {
    /// Resolution never panics
    #[test]
    fn resolve_is_total(code in any::<u32>()) {
        let _ = from_code(code);
        let _ = resolve(code);
        let _ = HResult::new(code).ok();
    }

    /// Repeated lookups return the same static entry
    #[test]
    fn lookup_is_deterministic(code in status_code()) {
        match (from_code(code), from_code(code)) {
            (Some(a), Some(b)) => prop_assert!(std::ptr::eq(a, b)),
            (None, None) => {}
            _ => prop_assert!(false, "lookup changed between calls"),
        }
    }

    /// Both entry points agree on every nonzero code
    #[test]
    fn entry_points_agree(code in status_code()) {
        prop_assume!(code != 0);

        let err = resolve(code).unwrap_err();
        prop_assert_eq!(err.code(), code);

        match from_code(code) {
            Some(entry) => {
                prop_assert!(err.is(entry));
                prop_assert_eq!(entry.code(), code);
            }
            None => {
                prop_assert!(!err.is_known());
                prop_assert_eq!(err.kind(), StatusKind::Unknown(HResult::new(code)));
                prop_assert!(err.name().is_none());
            }
        }
    }

    /// Display names the code for known and unknown values alike
    #[test]
    fn display_contains_code(code in status_code()) {
        prop_assume!(code != 0);

        let rendered = resolve(code).unwrap_err().to_string();
        let hex = format!("0x{:08X}", code);
        prop_assert!(rendered.contains(&hex));
    }
}

// ============================================================================
// BIT LAYOUT PROPERTIES
// ============================================================================

proptest! {
    /// Positive Win32 codes land in FACILITY_WIN32 as failures
    #[test]
    fn win32_mapping_layout(code in 1u32..=i32::MAX as u32) {
        let hr = HResult::from_win32(code);

        prop_assert!(hr.is_failure());
        prop_assert_eq!(hr.facility(), Facility::Win32);
        prop_assert_eq!(hr.code(), (code & 0xFFFF) as u16);
        prop_assert_eq!(hr.win32_code(), Some((code & 0xFFFF) as u16));
    }

    /// Values already negative as i32 pass through unchanged
    #[test]
    fn win32_mapping_passthrough(code in 0x8000_0000u32..=u32::MAX) {
        prop_assert_eq!(HResult::from_win32(code).value(), code);
    }

    /// Severity matches the top bit
    #[test]
    fn severity_is_top_bit(code in any::<u32>()) {
        let hr = HResult::new(code);
        let expected = if code >> 31 == 1 { Severity::Failure } else { Severity::Success };
        prop_assert_eq!(hr.severity(), expected);
        prop_assert_eq!(hr.is_failure(), !hr.is_success());
    }

    /// Display output parses back to the same value
    #[test]
    fn display_parses_back(code in any::<u32>()) {
        let hr = HResult::new(code);
        prop_assert_eq!(hr.to_string().parse::<HResult>().unwrap(), hr);
        prop_assert_eq!(code.to_string().parse::<HResult>().unwrap(), hr);
    }

    /// Arbitrary text never panics the parser
    #[test]
    fn parse_never_panics(s in "\\PC*") {
        let _ = s.parse::<HResult>();
    }
}

// ============================================================================
// LOG RECORD PROPERTIES
// ============================================================================

/// Fixed part of a text record plus one truncated description.
const TEXT_OVERHEAD: usize = 256 + MAX_FIELD_OUTPUT_LEN;

proptest! {
    /// Text records stay bounded whatever the metadata holds
    #[test]
    fn text_record_is_bounded(
        code in status_code(),
        values in prop::collection::vec("\\PC{0,3000}", 0..6)
    ) {
        prop_assume!(code != 0);

        let count = values.len();
        let mut err = resolve(code).unwrap_err();
        for value in values {
            err = err.with_metadata("field", value);
        }

        let mut line = String::new();
        err.with_status_log(|log| log.write_to(&mut line)).unwrap();

        // " field=''" is 9 bytes per entry
        let bound = TEXT_OVERHEAD + count * (9 + MAX_FIELD_OUTPUT_LEN);
        prop_assert!(line.len() <= bound, "{} > {}", line.len(), bound);
        let prefix = format!("[0x{:08X}]", code);
        prop_assert!(line.starts_with(&prefix), "missing code prefix in {}", line);
    }

    /// JSON records always parse, whatever the metadata holds
    #[test]
    fn json_record_is_valid(
        code in status_code(),
        key_index in 0usize..3,
        value in "\\PC{0,200}",
        raw in prop::collection::vec(any::<char>(), 0..64)
    ) {
        prop_assume!(code != 0);

        const KEYS: [&str; 3] = ["interface", "opnum", "quote\"key"];
        let err = resolve(code)
            .unwrap_err()
            .with_metadata(KEYS[key_index], value.clone())
            .with_metadata("raw", raw.into_iter().collect::<String>());

        let mut line = String::new();
        err.with_status_log(|log| log.write_json_to(&mut line)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&line)
            .map_err(|e| TestCaseError::fail(format!("{}: {}", e, line)))?;

        prop_assert_eq!(parsed["code"].as_u64(), Some(u64::from(code)));
        prop_assert_eq!(parsed["known"].as_bool(), Some(err.is_known()));
        prop_assert_eq!(parsed["metadata"][KEYS[key_index]].as_str(), Some(value.as_str()));
    }

    /// Metadata never changes what a status resolves to
    #[test]
    fn metadata_does_not_affect_identity(
        code in status_code(),
        values in prop::collection::vec("\\PC{0,50}", 0..10)
    ) {
        prop_assume!(code != 0);

        let plain = resolve(code).unwrap_err();
        let mut tagged = resolve(code).unwrap_err();
        for value in values {
            tagged = tagged.with_metadata("k", value);
        }

        prop_assert_eq!(&plain, &tagged);
        prop_assert_eq!(plain.to_string(), tagged.to_string());
    }
}

// ============================================================================
// CATALOG ERROR PROPERTIES
// ============================================================================

proptest! {
    /// Any catalog entry converts into an error that names it
    #[test]
    fn entry_converts_to_error(index in 0usize..catalog().len()) {
        let entry = catalog()[index];
        let err = StatusError::from(entry);

        prop_assert!(err.is(entry));
        prop_assert_eq!(err.name(), Some(entry.name()));
        prop_assert_eq!(err.to_string(), entry.to_string());
    }
}
