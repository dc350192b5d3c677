//! Call-site metadata attached to a [`StatusError`](crate::StatusError).
//!
//! A status code says *what* failed. The metadata says *where*: which
//! interface, which operation number, which endpoint. Resolvers never add
//! metadata; callers attach it after resolution.
//!
//! # Security Properties
//!
//! - Keys are `&'static str`, so the metadata schema is greppable and cannot
//!   be injected at runtime.
//! - Owned values are zeroized on drop. Borrowed values point at static
//!   program memory and are left alone.
//! - Neither type implements `Clone`.
//!
//! # Example
//!
//! ```rust
//! use hresult_registry::ContextMetadata;
//!
//! let mut meta = ContextMetadata::new();
//! meta.add("interface", "IRemUnknown2");
//! meta.add("opnum", format!("{}", 3));
//!
//! assert_eq!(meta.get("opnum"), Some("3"));
//! assert_eq!(meta.len(), 2);
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

/// Entries stored inline before spilling to the heap.
///
/// Status errors rarely carry more than an interface name, an operation
/// number and an endpoint.
pub const METADATA_INLINE_CAPACITY: usize = 4;

// ============================================================================
// Context Field
// ============================================================================

/// A metadata value, static or owned. Owned values are zeroized on drop.
pub struct ContextField {
    value: Cow<'static, str>,
}

impl ContextField {
    /// Borrow the value.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }

    /// True if the value was allocated at runtime.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.value, Cow::Owned(_))
    }
}

impl From<&'static str> for ContextField {
    fn from(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }
}

impl From<String> for ContextField {
    fn from(value: String) -> Self {
        Self {
            value: Cow::Owned(value),
        }
    }
}

impl From<Cow<'static, str>> for ContextField {
    fn from(value: Cow<'static, str>) -> Self {
        Self { value }
    }
}

impl fmt::Debug for ContextField {
    /// Values never reach `Debug` output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextField([REDACTED])")
    }
}

impl Zeroize for ContextField {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.value {
            s.zeroize();
        }
    }
}

impl Drop for ContextField {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ============================================================================
// Context Metadata
// ============================================================================

/// Ordered key/value metadata with zeroization on drop.
///
/// Duplicate keys are kept; [`get`](Self::get) returns the first.
pub struct ContextMetadata {
    entries: SmallVec<[(&'static str, ContextField); METADATA_INLINE_CAPACITY]>,
}

impl ContextMetadata {
    /// Create an empty collection. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Append an entry.
    #[inline]
    pub fn add(&mut self, key: &'static str, value: impl Into<ContextField>) {
        self.entries.push((key, value.into()));
    }

    /// First value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Raw entries, for log records that borrow them.
    #[inline]
    pub fn as_slice(&self) -> &[(&'static str, ContextField)] {
        &self.entries
    }

    /// True if no entries were added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True once the entries no longer fit inline.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.entries.spilled()
    }
}

impl Default for ContextMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContextMetadata {
    /// Keys only. Values are redacted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(k, _)| k))
            .finish()
    }
}

impl Zeroize for ContextMetadata {
    fn zeroize(&mut self) {
        for (_, value) in &mut self.entries {
            value.zeroize();
        }
        self.entries.clear();
    }
}

impl Drop for ContextMetadata {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_basic_operations() {
        let mut meta = ContextMetadata::new();

        meta.add("interface", "IObjectExporter");
        meta.add("opnum", "5");

        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("interface"), Some("IObjectExporter"));
        assert_eq!(meta.get("opnum"), Some("5"));
        assert_eq!(meta.get("endpoint"), None);
    }

    #[test]
    fn metadata_zeroization() {
        let mut meta = ContextMetadata::new();
        meta.add("endpoint", "ncacn_ip_tcp:10.0.0.5[135]".to_string());

        meta.zeroize();

        assert_eq!(meta.len(), 0);
        assert!(meta.is_empty());
    }

    #[test]
    fn metadata_with_owned_and_borrowed() {
        let mut meta = ContextMetadata::new();

        meta.add("static", "literal");
        meta.add("dynamic", format!("value-{}", 42));

        assert_eq!(meta.get("static"), Some("literal"));
        assert_eq!(meta.get("dynamic"), Some("value-42"));
        assert!(!meta.as_slice()[0].1.is_owned());
        assert!(meta.as_slice()[1].1.is_owned());
    }

    #[test]
    fn metadata_iteration_preserves_order() {
        let mut meta = ContextMetadata::new();
        meta.add("key1", "val1");
        meta.add("key2", "val2");
        meta.add("key1", "shadowed");

        let collected: Vec<_> = meta.iter().collect();
        assert_eq!(
            collected,
            vec![("key1", "val1"), ("key2", "val2"), ("key1", "shadowed")]
        );
        assert_eq!(meta.get("key1"), Some("val1"));
    }

    #[test]
    fn metadata_spills_past_inline_capacity() {
        let mut meta = ContextMetadata::new();
        for _ in 0..METADATA_INLINE_CAPACITY {
            meta.add("k", "v");
        }
        assert!(!meta.spilled());

        meta.add("k", "v");
        assert!(meta.spilled());
    }

    #[test]
    fn debug_redacts_values() {
        let mut meta = ContextMetadata::new();
        meta.add("token", "hunter2".to_string());

        let rendered = format!("{:?}", meta);
        assert!(rendered.contains("token"));
        assert!(!rendered.contains("hunter2"));
        assert_eq!(format!("{:?}", ContextField::from("x")), "ContextField([REDACTED])");
    }

    #[test]
    fn field_zeroizes_owned() {
        let mut field = ContextField::from(String::from("sensitive"));
        assert!(field.is_owned());

        field.zeroize();

        assert_eq!(field.as_str(), "");
    }

    #[test]
    fn field_leaves_borrowed_intact() {
        let mut field = ContextField::from("static");
        assert!(!field.is_owned());

        field.zeroize();

        assert_eq!(field.as_str(), "static");
    }
}
