//! Structured log record for resolved status codes.
//!
//! # Properties
//!
//! - Borrows from the `StatusError` with an explicit lifetime and cannot
//!   outlive it
//! - Accessors never allocate
//! - Rendered fields are bounded by [`MAX_FIELD_OUTPUT_LEN`]; metadata values
//!   come from the call site and may be arbitrarily long
//!
//! There is no logging framework dependency. Callers either pull fields
//! through the accessors into their own structured logger, or render the
//! record with [`StatusLog::write_to`] (key/value text) or
//! [`StatusLog::write_json_to`] (one JSON object per line).
//!
//! ```rust
//! use hresult_registry::resolve;
//!
//! let err = resolve(0x80070005).unwrap_err().with_metadata("opnum", "4");
//!
//! let mut line = String::new();
//! err.status_log().write_to(&mut line).unwrap();
//! assert_eq!(
//!     line,
//!     "[0x80070005] E_ACCESSDENIED facility=FACILITY_WIN32 severity=failure \
//!      description='General access denied error.' opnum='4'"
//! );
//! ```

use crate::{ContextField, Facility, HResult, HResultEntry, Severity};
use std::borrow::Cow;
use std::fmt;

/// Maximum length of any single rendered field.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Appended to fields cut at [`MAX_FIELD_OUTPUT_LEN`].
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Placeholder name for codes missing from the catalog.
const UNKNOWN_NAME: &str = "UNKNOWN";

/// Borrowed view of a resolved status.
///
/// ```rust
/// # use hresult_registry::{resolve, Severity};
/// let err = resolve(0xFFFFFFFF).unwrap_err();
/// let log = err.status_log();
/// assert!(!log.is_known());
/// assert_eq!(log.name(), None);
/// assert_eq!(log.severity(), Severity::Failure);
/// ```
#[derive(Debug)]
pub struct StatusLog<'a> {
    hresult: HResult,
    entry: Option<&'static HResultEntry>,
    metadata: &'a [(&'static str, ContextField)],
}

impl<'a> StatusLog<'a> {
    pub(crate) const fn new(
        hresult: HResult,
        entry: Option<&'static HResultEntry>,
        metadata: &'a [(&'static str, ContextField)],
    ) -> Self {
        Self {
            hresult,
            entry,
            metadata,
        }
    }

    /// Format the full record into a `String`.
    ///
    /// Only available with the `trusted_debug` feature in debug builds.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }

    /// Render as a single `key='value'` line.
    ///
    /// Known: `[0x80004005] E_FAIL facility=FACILITY_NULL severity=failure description='Unspecified error.'`
    ///
    /// Unknown: `[0xFFFFFFFF] UNKNOWN facility=FACILITY_2047 severity=failure`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] {} facility={} severity={}",
            self.hresult,
            self.name().unwrap_or(UNKNOWN_NAME),
            self.facility(),
            self.severity()
        )?;

        if let Some(description) = self.description() {
            write!(f, " description='{}'", truncate_with_indicator(description))?;
        }

        for (key, value) in self.metadata {
            write!(f, " {}='{}'", key, truncate_with_indicator(value.as_str()))?;
        }

        Ok(())
    }

    /// Render as one JSON object.
    ///
    /// Fields: `code` (number), `hresult` (hex string), `name`,
    /// `description` (both `null` when unknown), `facility`, `severity`,
    /// `known`, and `metadata` (an object in insertion order; duplicate keys
    /// are emitted as-is).
    pub fn write_json_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "{{\"code\":{},\"hresult\":\"{}\",\"name\":", self.code(), self.hresult)?;
        write_json_opt(f, self.name())?;
        f.write_str(",\"description\":")?;
        write_json_opt(f, self.description().map(truncate_with_indicator).as_deref())?;
        f.write_str(",\"facility\":")?;
        match self.facility().name() {
            Some(name) => write_json_str(f, name)?,
            None => write!(f, "\"FACILITY_{}\"", self.facility().code())?,
        }
        write!(
            f,
            ",\"severity\":\"{}\",\"known\":{},\"metadata\":{{",
            self.severity(),
            self.is_known()
        )?;
        for (i, (key, value)) in self.metadata.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write_json_str(f, key)?;
            f.write_char(':')?;
            write_json_str(f, &truncate_with_indicator(value.as_str()))?;
        }
        f.write_str("}}")
    }

    /// Raw status value.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.hresult.value()
    }

    /// Status value with bit accessors.
    #[inline]
    pub const fn hresult(&self) -> HResult {
        self.hresult
    }

    /// Catalog entry, if the code is known.
    #[inline]
    pub const fn entry(&self) -> Option<&'static HResultEntry> {
        self.entry
    }

    /// Symbolic name, if known.
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.entry.map(HResultEntry::name)
    }

    /// Untruncated description, if known.
    #[inline]
    pub fn description(&self) -> Option<&'static str> {
        self.entry.map(HResultEntry::description)
    }

    /// Facility of the status value.
    #[inline]
    pub const fn facility(&self) -> Facility {
        self.hresult.facility()
    }

    /// Severity bit of the status value.
    #[inline]
    pub const fn severity(&self) -> Severity {
        self.hresult.severity()
    }

    /// True if the code is in the catalog.
    #[inline]
    pub const fn is_known(&self) -> bool {
        self.entry.is_some()
    }

    /// Call-site metadata, untruncated.
    #[inline]
    pub const fn metadata(&self) -> &[(&'static str, ContextField)] {
        self.metadata
    }
}

/// Cut `s` at [`MAX_FIELD_OUTPUT_LEN`] on a char boundary, with a visible
/// indicator. Borrows when no cut is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

fn write_json_opt(f: &mut impl fmt::Write, s: Option<&str>) -> fmt::Result {
    match s {
        Some(s) => write_json_str(f, s),
        None => f.write_str("null"),
    }
}

/// Quoted JSON string with RFC 8259 escaping.
fn write_json_str(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        let escaped = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            c if (c as u32) < 0x20 => {
                f.write_str(&s[start..i])?;
                write!(f, "\\u{:04x}", c as u32)?;
                start = i + c.len_utf8();
                continue;
            }
            _ => continue,
        };
        f.write_str(&s[start..i])?;
        f.write_str(escaped)?;
        start = i + c.len_utf8();
    }
    f.write_str(&s[start..])?;
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{E_FAIL, STG_E_FILENOTFOUND};

    fn render(log: &StatusLog<'_>) -> String {
        let mut out = String::new();
        log.write_to(&mut out).unwrap();
        out
    }

    fn render_json(log: &StatusLog<'_>) -> serde_json::Value {
        let mut out = String::new();
        log.write_json_to(&mut out).unwrap();
        serde_json::from_str(&out).unwrap_or_else(|e| panic!("invalid JSON {}: {}", out, e))
    }

    // ========================================================================
    // Truncation
    // ========================================================================

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 10);
        let truncated = truncate_with_indicator(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let s = "short string";
        let truncated = truncate_with_indicator(s);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, s);
    }

    #[test]
    fn truncate_utf8_boundary() {
        // Two bytes per char.
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_emoji() {
        let s = "🔥".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn one_over_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 1);
        let truncated = truncate_with_indicator(&s);

        assert!(matches!(truncated, Cow::Owned(_)));
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    // ========================================================================
    // Text Rendering
    // ========================================================================

    #[test]
    fn write_known_status() {
        let log = StatusLog::new(E_FAIL.hresult(), Some(&E_FAIL), &[]);
        assert_eq!(
            render(&log),
            "[0x80004005] E_FAIL facility=FACILITY_NULL severity=failure description='Unspecified error.'"
        );
    }

    #[test]
    fn write_unknown_status() {
        let log = StatusLog::new(HResult::new(0xFFFF_FFFF), None, &[]);
        assert_eq!(
            render(&log),
            "[0xFFFFFFFF] UNKNOWN facility=FACILITY_2047 severity=failure"
        );
    }

    #[test]
    fn accessors_report_status_fields() {
        let known = StatusLog::new(E_FAIL.hresult(), Some(&E_FAIL), &[]);
        assert_eq!(known.facility(), Facility::Null);
        assert_eq!(known.severity(), Severity::Failure);
        assert!(known.is_known());

        let unknown = StatusLog::new(HResult::new(0x0001_0000), None, &[]);
        assert_eq!(unknown.facility(), Facility::Rpc);
        assert_eq!(unknown.severity(), Severity::Success);
        assert!(!unknown.is_known());
        assert!(unknown.name().is_none());
    }

    #[test]
    fn write_keeps_placeholders_and_metadata() {
        let meta = [
            ("interface", ContextField::from("IStorage")),
            ("path", ContextField::from(String::from("C:\\data.stg"))),
        ];
        let log = StatusLog::new(STG_E_FILENOTFOUND.hresult(), Some(&STG_E_FILENOTFOUND), &meta);
        let line = render(&log);

        assert!(line.contains("description='%1 could not be found.'"));
        assert!(line.ends_with("interface='IStorage' path='C:\\data.stg'"));
    }

    #[test]
    fn write_truncates_long_metadata() {
        let meta = [("blob", ContextField::from("x".repeat(MAX_FIELD_OUTPUT_LEN * 2)))];
        let log = StatusLog::new(E_FAIL.hresult(), Some(&E_FAIL), &meta);
        let line = render(&log);

        assert!(line.contains(TRUNCATION_INDICATOR));
        assert!(line.len() < MAX_FIELD_OUTPUT_LEN * 2);
    }

    // ========================================================================
    // JSON Rendering
    // ========================================================================

    #[test]
    fn json_known_status() {
        let meta = [("opnum", ContextField::from("3"))];
        let log = StatusLog::new(E_FAIL.hresult(), Some(&E_FAIL), &meta);
        let json = render_json(&log);

        assert_eq!(json["code"], 0x8000_4005u32);
        assert_eq!(json["hresult"], "0x80004005");
        assert_eq!(json["name"], "E_FAIL");
        assert_eq!(json["description"], "Unspecified error.");
        assert_eq!(json["facility"], "FACILITY_NULL");
        assert_eq!(json["severity"], "failure");
        assert_eq!(json["known"], true);
        assert_eq!(json["metadata"]["opnum"], "3");
    }

    #[test]
    fn json_unknown_status() {
        let log = StatusLog::new(HResult::new(0x0123_4567), None, &[]);
        let json = render_json(&log);

        assert!(json["name"].is_null());
        assert!(json["description"].is_null());
        assert_eq!(json["facility"], "FACILITY_291");
        assert_eq!(json["severity"], "success");
        assert_eq!(json["known"], false);
        assert!(json["metadata"].as_object().unwrap().is_empty());
    }

    #[test]
    fn json_escapes_hostile_metadata() {
        let hostile = "quote\" back\\slash\nnewline\u{0001}ctl \u{1F525}";
        let meta = [("peer", ContextField::from(hostile))];
        let log = StatusLog::new(E_FAIL.hresult(), Some(&E_FAIL), &meta);
        let json = render_json(&log);

        assert_eq!(json["metadata"]["peer"], hostile);
    }

    #[test]
    fn json_escapes_quoted_descriptions() {
        let log = StatusLog::new(
            crate::CO_E_WRONGTRUSTEENAMESYNTAX.hresult(),
            Some(&crate::CO_E_WRONGTRUSTEENAMESYNTAX),
            &[],
        );
        let json = render_json(&log);

        assert_eq!(
            json["description"],
            crate::CO_E_WRONGTRUSTEENAMESYNTAX.description()
        );
    }

    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    #[test]
    fn trusted_debug_matches_write_to() {
        let meta = [("endpoint", ContextField::from(String::from("ncacn_np:\\\\srv[\\pipe\\epmapper]")))];
        let log = StatusLog::new(E_FAIL.hresult(), Some(&E_FAIL), &meta);
        assert_eq!(log.format_for_trusted_debug(), render(&log));
    }
}
