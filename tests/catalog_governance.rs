//! Catalog governance checks run against the public API.
//!
//! The unit tests in `definitions.rs` check the tables directly. These go
//! through `from_code`, `resolve` and `lookup_name` the way a protocol decoder
//! would.

use std::collections::HashSet;

use hresult_registry::{
    E_ACCESSDENIED, E_FAIL, E_INVALIDARG, Facility, RPC_E_DISCONNECTED, StatusKind, aliases,
    catalog, entries_in, from_code, lookup_name, resolve,
};

// ============================================================================
// SUCCESS
// ============================================================================

#[test]
fn zero_resolves_to_absent() {
    assert!(from_code(0).is_none());
    assert!(resolve(0).is_ok());
    assert!(catalog().iter().all(|entry| entry.code() != 0));
}

// ============================================================================
// IDENTITY
// ============================================================================

#[test]
fn every_entry_maps_back_to_itself() {
    for entry in catalog() {
        let found = from_code(entry.code())
            .unwrap_or_else(|| panic!("{} (0x{:08X}) does not dispatch", entry.name(), entry.code()));
        assert!(
            std::ptr::eq(found, *entry),
            "0x{:08X} dispatches to {} instead of {}",
            entry.code(),
            found.name(),
            entry.name()
        );

        let err = resolve(entry.code()).unwrap_err();
        assert!(err.is(entry));
    }
}

#[test]
fn codes_are_distinct() {
    let mut seen = HashSet::new();
    for entry in catalog() {
        assert!(seen.insert(entry.code()), "duplicate code 0x{:08X}", entry.code());
    }
    assert_eq!(seen.len(), catalog().len());
}

#[test]
fn names_resolve_to_their_entries() {
    for entry in catalog() {
        let found = lookup_name(entry.name()).unwrap();
        assert!(std::ptr::eq(found, *entry), "{}", entry.name());
    }
}

#[test]
fn aliases_resolve_by_name_only() {
    assert!(!aliases().is_empty());

    for (alias, canonical) in aliases() {
        assert!(std::ptr::eq(lookup_name(alias).unwrap(), *canonical), "{}", alias);
        assert!(
            catalog().iter().all(|entry| entry.name() != *alias),
            "{} is both an alias and an entry",
            alias
        );
        assert_eq!(from_code(canonical.code()).map(|e| e.name()), Some(canonical.name()));
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn unspecified_error() {
    let entry = from_code(0x8000_4005).unwrap();
    assert!(std::ptr::eq(entry, &E_FAIL));
    assert_eq!(entry.name(), "E_FAIL");
    assert_eq!(entry.description(), "Unspecified error.");
}

#[test]
fn invalid_argument() {
    let err = resolve(0x8007_0057).unwrap_err();
    assert!(err.is(&E_INVALIDARG));
    assert_eq!(err.description(), Some("One or more arguments are invalid."));
}

#[test]
fn access_denied_from_win32() {
    let err = hresult_registry::HResult::from_win32(5).ok().unwrap_err();
    assert!(err.is(&E_ACCESSDENIED));
}

#[test]
fn rpc_disconnect() {
    let err = resolve(0x8001_0108).unwrap_err();
    assert!(err.is(&RPC_E_DISCONNECTED));
    assert!(err.hresult().is_failure());
}

#[test]
fn unknown_code() {
    assert!(from_code(0xFFFF_FFFF).is_none());

    let err = resolve(0xFFFF_FFFF).unwrap_err();
    assert!(matches!(err.kind(), StatusKind::Unknown(hr) if hr.value() == 0xFFFF_FFFF));
    assert_eq!(err.to_string(), "unknown status code 0xFFFFFFFF");
}

#[test]
fn placeholders_are_not_expanded() {
    let entry = lookup_name("STG_E_FILENOTFOUND").unwrap();
    assert_eq!(entry.description(), "%1 could not be found.");
    assert!(entry.has_placeholders());
    assert_eq!(
        resolve(entry.code()).unwrap_err().to_string(),
        "STG_E_FILENOTFOUND (0x80030002): %1 could not be found."
    );
}

// ============================================================================
// FACILITY COVERAGE
// ============================================================================

#[test]
fn subsystem_blocks_resolve() {
    for (code, name) in [
        (0x8010_0001u32, "SCARD_F_INTERNAL_ERROR"),
        (0x8009_1001, "CRYPT_E_MSG_ERROR"),
        (0x8009_3000, "OSS_MORE_BUF"),
        (0x8028_0001, "TPM_E_AUTHFAIL"),
        (0x8028_400F, "TBS_E_TPM_NOT_FOUND"),
        (0x8031_0000, "FVE_E_LOCKED_VOLUME"),
        (0x8032_0001, "FWP_E_CALLOUT_NOT_FOUND"),
        (0x8020_0001, "BG_E_NOT_FOUND"),
        (0x8030_0002, "PLA_E_DCS_NOT_FOUND"),
        (0x8019_0194, "HTTP_E_STATUS_NOT_FOUND"),
        (0x800C_0005, "INET_E_RESOURCE_NOT_FOUND"),
        (0x8033_8000, "ERROR_WSMAN_RESOURCE_NOT_FOUND"),
        (0x8034_001F, "ERROR_NDIS_MEDIA_DISCONNECTED"),
        (0x8026_2100, "ERROR_GRAPHICS_NO_VIDEO_MEMORY"),
    ] {
        let entry = from_code(code).unwrap_or_else(|| panic!("0x{:08X} does not resolve", code));
        assert_eq!(entry.name(), name);
        assert!(std::ptr::eq(lookup_name(name).unwrap(), entry));
    }
}

#[test]
fn every_named_facility_is_populated() {
    for raw in 0u16..0x800 {
        let facility = Facility::from_code(raw);
        if facility.name().is_some() {
            assert!(entries_in(facility).next().is_some(), "{} has no entries", facility);
        }
    }
}
