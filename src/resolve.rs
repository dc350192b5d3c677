//! Status code resolution.
//!
//! Two entry points map a raw 32-bit status field to an error:
//!
//! | Input                 | [`from_code`]   | [`resolve`]                         |
//! |-----------------------|-----------------|-------------------------------------|
//! | `0`                   | `None`          | `Ok(())`                            |
//! | code in the catalog   | `Some(&ENTRY)`  | `Err(StatusKind::Known(&ENTRY))`    |
//! | code not in catalog   | `None`          | `Err(StatusKind::Unknown(code))`    |
//!
//! [`from_code`] keeps the historical contract where an unrecognized code is
//! indistinguishable from success. New code should call [`resolve`].
//!
//! Both are pure: no allocation, no locks, no side effects.
//!
//! The generated dispatch table stays private to the crate:
//!
//! ```compile_fail
//! let _ = hresult_registry::lookup_code(0x80004005);
//! ```
//!
//! ```compile_fail
//! let _ = hresult_registry::CATALOG.len();
//! ```
//!
//! Use [`catalog`] to enumerate entries instead.
//!
//! [`StatusKind`]: crate::StatusKind

use crate::definitions::{ALIASES, CATALOG, lookup_code};
use crate::{Facility, HResult, HResultEntry, Result, StatusError};

/// Legacy lookup: the catalog entry for `code`, or `None`.
///
/// `None` means either success (`0`) or a code missing from the catalog.
/// Use [`resolve`] when the two must be told apart.
///
/// ```rust
/// use hresult_registry::{from_code, E_FAIL};
///
/// assert!(from_code(0).is_none());
/// assert!(std::ptr::eq(from_code(0x80004005).unwrap(), &E_FAIL));
/// assert!(from_code(0xFFFFFFFF).is_none());
/// ```
#[inline]
pub fn from_code(code: u32) -> Option<&'static HResultEntry> {
    if code == 0 {
        return None;
    }
    lookup_code(code)
}

/// Resolve a raw status field.
///
/// `0` is success. Any other value is an error: the catalog entry when known,
/// otherwise an unknown-code error that still carries the raw value.
///
/// ```rust
/// use hresult_registry::{resolve, Result};
///
/// fn check(status: u32) -> Result<()> {
///     resolve(status)?;
///     Ok(())
/// }
///
/// assert!(check(0).is_ok());
/// assert_eq!(check(0x80070057).unwrap_err().name(), Some("E_INVALIDARG"));
/// assert_eq!(
///     check(0xFFFFFFFF).unwrap_err().to_string(),
///     "unknown status code 0xFFFFFFFF"
/// );
/// ```
#[inline]
pub fn resolve(code: u32) -> Result<()> {
    if code == 0 {
        return Ok(());
    }
    match lookup_code(code) {
        Some(entry) => Err(StatusError::known(entry)),
        None => Err(StatusError::unknown(HResult::new(code))),
    }
}

/// Entry by symbolic name. Aliases resolve to their canonical entry.
///
/// ```rust
/// use hresult_registry::{lookup_name, DV_E_FORMATETC};
///
/// assert_eq!(lookup_name("E_FAIL").map(|e| e.code()), Some(0x80004005));
/// assert!(std::ptr::eq(lookup_name("DATA_E_FORMATETC").unwrap(), &DV_E_FORMATETC));
/// assert!(lookup_name("e_fail").is_none());
/// ```
pub fn lookup_name(name: &str) -> Option<&'static HResultEntry> {
    CATALOG
        .iter()
        .copied()
        .find(|entry| entry.name() == name)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, entry)| *entry)
        })
}

/// Every catalog entry, grouped by facility, ascending within each group.
#[inline]
pub fn catalog() -> &'static [&'static HResultEntry] {
    CATALOG
}

/// Secondary names and their canonical entries.
#[inline]
pub fn aliases() -> &'static [(&'static str, &'static HResultEntry)] {
    ALIASES
}

/// Catalog entries belonging to `facility`.
pub fn entries_in(facility: Facility) -> impl Iterator<Item = &'static HResultEntry> {
    CATALOG
        .iter()
        .copied()
        .filter(move |entry| entry.facility() == facility)
}

impl HResult {
    /// Catalog entry for this value. `None` for success and unknown codes.
    #[inline]
    pub fn entry(self) -> Option<&'static HResultEntry> {
        from_code(self.value())
    }

    /// Convert to a `Result`, as [`resolve`] does.
    ///
    /// ```rust
    /// use hresult_registry::HResult;
    ///
    /// assert!(HResult::S_OK.ok().is_ok());
    /// assert!(HResult::from_win32(5).ok().is_err());
    /// ```
    #[inline]
    pub fn ok(self) -> Result<()> {
        resolve(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CO_E_NOTINITIALIZED, DV_E_FORMATETC, E_ACCESSDENIED, E_FAIL, E_INVALIDARG,
        SEC_I_CONTINUE_NEEDED, StatusKind,
    };

    #[test]
    fn zero_is_success() {
        assert!(from_code(0).is_none());
        assert!(resolve(0).is_ok());
        assert!(HResult::S_OK.entry().is_none());
    }

    #[test]
    fn known_codes_resolve_to_the_same_static() {
        let entry = from_code(0x8000_4005).unwrap();
        assert!(std::ptr::eq(entry, &E_FAIL));
        assert_eq!(entry.description(), "Unspecified error.");

        let err = resolve(0x8007_0057).unwrap_err();
        assert!(matches!(err.kind(), StatusKind::Known(e) if std::ptr::eq(e, &E_INVALIDARG)));
        assert_eq!(err.description(), Some("One or more arguments are invalid."));
    }

    #[test]
    fn unknown_codes_diverge_between_entry_points() {
        assert!(from_code(0xFFFF_FFFF).is_none());

        let err = resolve(0xFFFF_FFFF).unwrap_err();
        assert_eq!(err.kind(), StatusKind::Unknown(HResult::new(0xFFFF_FFFF)));
        assert_eq!(err.code(), 0xFFFF_FFFF);
        assert!(!err.is_known());
    }

    #[test]
    fn informational_codes_are_still_errors() {
        let err = resolve(SEC_I_CONTINUE_NEEDED.code()).unwrap_err();
        assert!(err.hresult().is_success());
        assert!(err.is(&SEC_I_CONTINUE_NEEDED));
    }

    #[test]
    fn win32_mapping_reaches_catalog() {
        // ERROR_ACCESS_DENIED
        let hr = HResult::from_win32(5);
        assert!(std::ptr::eq(hr.entry().unwrap(), &E_ACCESSDENIED));
        assert!(hr.ok().unwrap_err().is(&E_ACCESSDENIED));
    }

    #[test]
    fn name_lookup_covers_entries_and_aliases() {
        assert!(std::ptr::eq(lookup_name("CO_E_NOTINITIALIZED").unwrap(), &CO_E_NOTINITIALIZED));
        assert!(std::ptr::eq(lookup_name("CO_E_FIRST").unwrap(), &CO_E_NOTINITIALIZED));
        assert!(std::ptr::eq(lookup_name("DATA_E_FORMATETC").unwrap(), &DV_E_FORMATETC));
        assert!(lookup_name("").is_none());
        assert!(lookup_name("S_OK").is_none());
    }

    #[test]
    fn aliases_never_enter_code_dispatch() {
        for (alias, entry) in aliases() {
            let resolved = from_code(entry.code()).unwrap();
            assert_ne!(resolved.name(), *alias);
            assert!(std::ptr::eq(resolved, *entry));
        }
    }

    #[test]
    fn facility_filter() {
        let win32: Vec<_> = entries_in(Facility::Win32).map(|e| e.name()).collect();
        assert!(win32.contains(&"E_INVALIDARG"));
        assert!(win32.contains(&"E_ACCESSDENIED"));
        assert!(!win32.contains(&"E_FAIL"));

        assert_eq!(entries_in(Facility::Other(0x7FF)).count(), 0);

        let total: usize = (0u16..0x800)
            .map(Facility::from_code)
            .filter(|f| f.name().is_some())
            .map(|f| entries_in(f).count())
            .sum();
        assert_eq!(total, catalog().len());
    }
}
