//! # HRESULT Registry
//!
//! An immutable catalog of Windows HRESULT status codes and a total resolver
//! from raw 32-bit status fields to structured errors.
//!
//! ## Design Philosophy
//!
//! 1. **The catalog is data, fixed at build time.** Every entry is a `static`
//!    with a stable address; there is no lazy initialization and no lock.
//! 2. **Resolution is total.** Every `u32` maps to success, a known entry, or
//!    an unknown-code error that keeps the raw value.
//! 3. **Duplicates cannot ship.** A code declared twice, a code in the wrong
//!    facility block, or code `0` fails compilation.
//! 4. **Descriptions are verbatim.** `%1` placeholders are never expanded.
//! 5. **Call-site context is zeroized.** Metadata attached to an error is wiped
//!    on drop.
//!
//! ## Quick Start
//!
//! ```rust
//! use hresult_registry::{resolve, Result, E_ACCESSDENIED};
//!
//! // Status field taken from a DCE/RPC fault PDU or a COM ORPCTHAT.
//! fn check_call(status: u32) -> Result<()> {
//!     resolve(status)?;
//!     Ok(())
//! }
//!
//! let err = check_call(0x80070005).unwrap_err();
//! assert!(err.is(&E_ACCESSDENIED));
//! assert_eq!(
//!     err.to_string(),
//!     "E_ACCESSDENIED (0x80070005): General access denied error."
//! );
//! ```
//!
//! ## Legacy Lookup
//!
//! [`from_code`] returns `Option<&'static HResultEntry>` and cannot tell
//! success from an unknown code. It exists for callers that depend on that
//! contract.
//!
//! ```rust
//! use hresult_registry::from_code;
//!
//! assert_eq!(from_code(0x80004005).map(|e| e.name()), Some("E_FAIL"));
//! assert!(from_code(0xFFFFFFFF).is_none());
//! ```
//!
//! ## Logging
//!
//! ```rust
//! use hresult_registry::resolve;
//!
//! let err = resolve(0x8001011F)
//!     .unwrap_err()
//!     .with_metadata("interface", "IRemoteSCMActivator")
//!     .with_metadata("opnum", format!("{}", 4));
//!
//! err.with_status_log(|log| {
//!     let mut line = String::new();
//!     log.write_json_to(&mut line).unwrap();
//!     assert!(line.starts_with("{\"code\":2147549471,"));
//! });
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: `StatusLog::format_for_trusted_debug` (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::borrow::Cow;
use std::fmt;
use std::result;

pub mod codes;
pub mod context;
pub mod definitions;
pub mod logging;
pub mod resolve;

pub use codes::*;
pub use context::*;
pub use definitions::*;
pub use logging::*;
pub use resolve::*;

/// Result type for status resolution.
pub type Result<T> = result::Result<T, StatusError>;

// ============================================================================
// Status Kind
// ============================================================================

/// What a nonzero status code resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The code is in the catalog.
    Known(&'static HResultEntry),
    /// The code is nonzero and missing from the catalog.
    Unknown(HResult),
}

impl StatusKind {
    /// The status value.
    #[inline]
    pub const fn hresult(self) -> HResult {
        match self {
            Self::Known(entry) => entry.hresult(),
            Self::Unknown(hr) => hr,
        }
    }
}

// ============================================================================
// Status Error
// ============================================================================

/// A nonzero status code as an error value.
///
/// Produced by [`resolve`] and [`HResult::ok`], or directly from a catalog
/// entry with `StatusError::from(&E_FAIL)`. Equality compares the status only;
/// attached metadata does not participate.
///
/// # Display
///
/// - Known: `E_FAIL (0x80004005): Unspecified error.`
/// - Unknown: `unknown status code 0xFFFFFFFF`
#[must_use = "status errors should be handled or logged"]
pub struct StatusError {
    kind: StatusKind,
    metadata: ContextMetadata,
}

impl StatusError {
    /// Error for a catalog entry.
    #[inline]
    pub fn known(entry: &'static HResultEntry) -> Self {
        Self {
            kind: StatusKind::Known(entry),
            metadata: ContextMetadata::new(),
        }
    }

    /// Error for a code the catalog does not contain. Callers go through
    /// `resolve` so a known code never lands here.
    #[inline]
    pub(crate) fn unknown(hresult: HResult) -> Self {
        debug_assert!(hresult.value() != 0, "success is not an error");
        Self {
            kind: StatusKind::Unknown(hresult),
            metadata: ContextMetadata::new(),
        }
    }

    /// Attach call-site context (interface, opnum, endpoint, ...).
    ///
    /// ```rust
    /// # use hresult_registry::{StatusError, RPC_E_DISCONNECTED};
    /// let err = StatusError::from(&RPC_E_DISCONNECTED)
    ///     .with_metadata("endpoint", String::from("ncacn_ip_tcp:10.0.0.7[49667]"));
    /// assert_eq!(err.metadata().get("endpoint"), Some("ncacn_ip_tcp:10.0.0.7[49667]"));
    /// ```
    #[inline]
    pub fn with_metadata(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.add(key, value.into());
        self
    }

    /// Known entry or unknown code.
    #[inline]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Raw status value.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.kind.hresult().value()
    }

    /// Status value with bit accessors.
    #[inline]
    pub const fn hresult(&self) -> HResult {
        self.kind.hresult()
    }

    /// Catalog entry, if known.
    #[inline]
    pub const fn entry(&self) -> Option<&'static HResultEntry> {
        match self.kind {
            StatusKind::Known(entry) => Some(entry),
            StatusKind::Unknown(_) => None,
        }
    }

    /// Symbolic name, if known.
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.entry().map(HResultEntry::name)
    }

    /// Description, if known.
    #[inline]
    pub fn description(&self) -> Option<&'static str> {
        self.entry().map(HResultEntry::description)
    }

    /// True if the code is in the catalog.
    #[inline]
    pub const fn is_known(&self) -> bool {
        matches!(self.kind, StatusKind::Known(_))
    }

    /// Identity check against a catalog entry.
    #[inline]
    pub fn is(&self, entry: &HResultEntry) -> bool {
        self.entry().is_some_and(|own| std::ptr::eq(own, entry))
    }

    /// Attached metadata.
    #[inline]
    pub fn metadata(&self) -> &ContextMetadata {
        &self.metadata
    }

    /// Borrowed structured log record.
    ///
    /// The record cannot outlive the error, so metadata is never retained past
    /// the logging call.
    #[inline]
    pub fn status_log(&self) -> StatusLog<'_> {
        StatusLog::new(self.hresult(), self.entry(), self.metadata.as_slice())
    }

    /// Callback form of [`status_log`](Self::status_log).
    ///
    /// ```rust
    /// # use hresult_registry::resolve;
    /// let err = resolve(0x80004002).unwrap_err();
    /// let name = err.with_status_log(|log| log.name());
    /// assert_eq!(name, Some("E_NOINTERFACE"));
    /// ```
    #[inline]
    pub fn with_status_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StatusLog<'_>) -> R,
    {
        let log = self.status_log();
        f(&log)
    }
}

impl From<&'static HResultEntry> for StatusError {
    fn from(entry: &'static HResultEntry) -> Self {
        Self::known(entry)
    }
}

impl PartialEq for StatusError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for StatusError {}

impl fmt::Debug for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusError")
            .field("code", &format_args!("{}", self.hresult()))
            .field("name", &self.name().unwrap_or("<UNKNOWN>"))
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Known(entry) => fmt::Display::fmt(entry, f),
            StatusKind::Unknown(hr) => write!(f, "unknown status code {}", hr),
        }
    }
}

impl std::error::Error for StatusError {}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn display_known() {
        let err = resolve(0x8000_4005).unwrap_err();
        assert_eq!(err.to_string(), "E_FAIL (0x80004005): Unspecified error.");
    }

    #[test]
    fn display_unknown() {
        let err = resolve(0xFFFF_FFFF).unwrap_err();
        assert_eq!(err.to_string(), "unknown status code 0xFFFFFFFF");
    }

    #[test]
    fn display_keeps_placeholders() {
        let err = StatusError::from(&STG_E_PATHNOTFOUND);
        assert_eq!(
            err.to_string(),
            "STG_E_PATHNOTFOUND (0x80030003): The path %1 could not be found."
        );
    }

    #[test]
    fn equality_ignores_metadata() {
        let plain = StatusError::from(&E_FAIL);
        let tagged = StatusError::from(&E_FAIL).with_metadata("opnum", "7");
        assert_eq!(plain, tagged);
        assert_ne!(plain, StatusError::from(&E_ABORT));
    }

    #[test]
    fn identity_check() {
        let err = resolve(E_NOINTERFACE.code()).unwrap_err();
        assert!(err.is(&E_NOINTERFACE));
        assert!(!err.is(&E_POINTER));
        assert!(!resolve(0x8000_0001).unwrap_err().is(&E_FAIL));
    }

    #[test]
    fn accessors_for_unknown() {
        let err = resolve(0x8007_06BA).unwrap_err();
        assert_eq!(err.code(), 0x8007_06BA);
        assert_eq!(err.hresult().win32_code(), Some(0x06BA));
        assert!(err.entry().is_none());
        assert!(err.name().is_none());
        assert!(err.description().is_none());
    }

    #[test]
    fn debug_redacts_metadata_values() {
        let err = StatusError::from(&RPC_E_ACCESS_DENIED)
            .with_metadata("principal", String::from("CORP\\svc-backup"));
        let rendered = format!("{:?}", err);

        assert!(rendered.contains("0x8001011B"));
        assert!(rendered.contains("RPC_E_ACCESS_DENIED"));
        assert!(rendered.contains("principal"));
        assert!(!rendered.contains("svc-backup"));
    }

    #[test]
    fn status_log_borrows_metadata() {
        let err = StatusError::from(&E_FAIL)
            .with_metadata("interface", "IOXIDResolver")
            .with_metadata("opnum", "5");

        err.with_status_log(|log| {
            assert_eq!(log.code(), 0x8000_4005);
            assert_eq!(log.name(), Some("E_FAIL"));
            assert_eq!(log.metadata().len(), 2);
            assert_eq!(log.metadata()[0].0, "interface");
            assert_eq!(log.metadata()[1].1.as_str(), "5");
        });
    }

    #[test]
    fn usable_as_boxed_error() {
        use std::error::Error as _;

        fn fails() -> result::Result<(), Box<dyn std::error::Error>> {
            resolve(0x8001_0108)?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.to_string().starts_with("RPC_E_DISCONNECTED"));
        assert!(err.source().is_none());
    }

    #[test]
    fn status_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusError>();
        assert_send_sync::<&'static HResultEntry>();
    }
}
