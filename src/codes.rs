//! HRESULT identity types: the raw status value, its facility and severity,
//! and the immutable catalog entry that gives a code its name and description.
//!
//! # Bit Layout
//!
//! ```text
//!  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
//!  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! +-+-+-+-+-+---------------------+-------------------------------+
//! |S|R|C|N|X|      Facility       |              Code             |
//! +-+-+-+-+-+---------------------+-------------------------------+
//! ```
//!
//! - **S**: severity, set for failures
//! - **R**: reserved (NTSTATUS severity high bit when `N` is set)
//! - **C**: customer-defined value
//! - **N**: the value is a mapped NTSTATUS
//! - **X**: reserved
//!
//! # Identity vs. Metadata
//!
//! - **Identity** (`HResultEntry`): frozen at compile time. Entries are
//!   `static` items, never constructed at runtime, never copied. Two
//!   references to the same entry are the same address.
//! - **Metadata** (`HResult`, `Facility`, `Severity`): `Copy` values derived
//!   from the raw bits, cheap to pass around.
//!
//! # Example
//!
//! ```rust
//! use hresult_registry::{define_hresults, Facility, HResult, Severity};
//!
//! define_hresults! {
//!     Facility::Itf => {
//!         MY_E_WIDGET_JAMMED = (0x80040999, "The widget is jammed."),
//!     }
//! }
//!
//! assert_eq!(MY_E_WIDGET_JAMMED.name(), "MY_E_WIDGET_JAMMED");
//! assert_eq!(MY_E_WIDGET_JAMMED.severity(), Severity::Failure);
//! assert_eq!(HResult::new(0x80040999).facility(), Facility::Itf);
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

const SEVERITY_BIT: u32 = 0x8000_0000;
const RESERVED_BIT: u32 = 0x4000_0000;
const CUSTOMER_BIT: u32 = 0x2000_0000;
const NTSTATUS_BIT: u32 = 0x1000_0000;
const FACILITY_MASK: u32 = 0x07FF_0000;
const FACILITY_SHIFT: u32 = 16;
const CODE_MASK: u32 = 0x0000_FFFF;

// ============================================================================
// Severity
// ============================================================================

/// Severity bit of an HRESULT.
///
/// Informational codes (`*_S_*`, `*_I_*`) carry `Success`; they are still
/// catalog entries and still resolve to an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Bit 31 clear.
    Success,
    /// Bit 31 set.
    Failure,
}

impl Severity {
    /// Human-readable label.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Facility
// ============================================================================

/// The 11-bit facility field of an HRESULT.
///
/// A facility gets a named variant only when the catalog declares codes under
/// it; every other number is carried through as `Other` so the mapping stays
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facility {
    /// `FACILITY_NULL` (0): broadly applicable codes such as `E_FAIL`.
    Null,
    /// `FACILITY_RPC` (1): COM RPC runtime.
    Rpc,
    /// `FACILITY_DISPATCH` (2): `IDispatch` and type libraries.
    Dispatch,
    /// `FACILITY_STORAGE` (3): structured storage.
    Storage,
    /// `FACILITY_ITF` (4): interface-specific codes.
    Itf,
    /// `FACILITY_WIN32` (7): Win32 error codes mapped into HRESULTs.
    Win32,
    /// `FACILITY_WINDOWS` (8): Windows subsystem.
    Windows,
    /// `FACILITY_SECURITY` / `FACILITY_SSPI` (9).
    Security,
    /// `FACILITY_CERT` (11): certificates and trust.
    Cert,
    /// `FACILITY_INTERNET` (12).
    Internet,
    /// `FACILITY_SETUPAPI` (15).
    SetupApi,
    /// `FACILITY_SCARD` (16).
    SmartCard,
    /// `FACILITY_COMPLUS` (17).
    ComPlus,
    /// `FACILITY_HTTP` (25).
    Http,
    /// `FACILITY_USERMODE_FILTER_MANAGER` (31).
    FilterManager,
    /// `FACILITY_BACKGROUNDCOPY` (32).
    BackgroundCopy,
    /// `FACILITY_WINDOWSUPDATE` (36).
    WindowsUpdate,
    /// `FACILITY_GRAPHICS` (38).
    Graphics,
    /// `FACILITY_TPM_SERVICES` (40).
    TpmServices,
    /// `FACILITY_TPM_SOFTWARE` (41).
    TpmSoftware,
    /// `FACILITY_PLA` (48): performance logs and alerts.
    Pla,
    /// `FACILITY_FVE` (49): full volume encryption.
    Fve,
    /// `FACILITY_FWP` (50): filtering platform.
    Fwp,
    /// `FACILITY_WINRM` (51).
    WinRm,
    /// `FACILITY_NDIS` (52).
    Ndis,
    /// `FACILITY_USERMODE_VOLMGR` (56).
    VolumeManager,
    /// `FACILITY_BCD` (57).
    Bcd,
    /// `FACILITY_USERMODE_VHD` (58).
    Vhd,
    /// `FACILITY_SDIAG` (60).
    Sdiag,
    /// `FACILITY_WEBSERVICES` (61).
    WebServices,
    /// Any facility number without a named variant.
    Other(u16),
}

impl Facility {
    /// Map a raw 11-bit facility number to a facility.
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Null,
            1 => Self::Rpc,
            2 => Self::Dispatch,
            3 => Self::Storage,
            4 => Self::Itf,
            7 => Self::Win32,
            8 => Self::Windows,
            9 => Self::Security,
            11 => Self::Cert,
            12 => Self::Internet,
            15 => Self::SetupApi,
            16 => Self::SmartCard,
            17 => Self::ComPlus,
            25 => Self::Http,
            31 => Self::FilterManager,
            32 => Self::BackgroundCopy,
            36 => Self::WindowsUpdate,
            38 => Self::Graphics,
            40 => Self::TpmServices,
            41 => Self::TpmSoftware,
            48 => Self::Pla,
            49 => Self::Fve,
            50 => Self::Fwp,
            51 => Self::WinRm,
            52 => Self::Ndis,
            56 => Self::VolumeManager,
            57 => Self::Bcd,
            58 => Self::Vhd,
            60 => Self::Sdiag,
            61 => Self::WebServices,
            other => Self::Other(other),
        }
    }

    /// The raw facility number.
    pub const fn code(self) -> u16 {
        match self {
            Self::Null => 0,
            Self::Rpc => 1,
            Self::Dispatch => 2,
            Self::Storage => 3,
            Self::Itf => 4,
            Self::Win32 => 7,
            Self::Windows => 8,
            Self::Security => 9,
            Self::Cert => 11,
            Self::Internet => 12,
            Self::SetupApi => 15,
            Self::SmartCard => 16,
            Self::ComPlus => 17,
            Self::Http => 25,
            Self::FilterManager => 31,
            Self::BackgroundCopy => 32,
            Self::WindowsUpdate => 36,
            Self::Graphics => 38,
            Self::TpmServices => 40,
            Self::TpmSoftware => 41,
            Self::Pla => 48,
            Self::Fve => 49,
            Self::Fwp => 50,
            Self::WinRm => 51,
            Self::Ndis => 52,
            Self::VolumeManager => 56,
            Self::Bcd => 57,
            Self::Vhd => 58,
            Self::Sdiag => 60,
            Self::WebServices => 61,
            Self::Other(code) => code,
        }
    }

    /// The `winerror.h` constant name, or `None` for `Other`.
    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::Null => "FACILITY_NULL",
            Self::Rpc => "FACILITY_RPC",
            Self::Dispatch => "FACILITY_DISPATCH",
            Self::Storage => "FACILITY_STORAGE",
            Self::Itf => "FACILITY_ITF",
            Self::Win32 => "FACILITY_WIN32",
            Self::Windows => "FACILITY_WINDOWS",
            Self::Security => "FACILITY_SECURITY",
            Self::Cert => "FACILITY_CERT",
            Self::Internet => "FACILITY_INTERNET",
            Self::SetupApi => "FACILITY_SETUPAPI",
            Self::SmartCard => "FACILITY_SCARD",
            Self::ComPlus => "FACILITY_COMPLUS",
            Self::Http => "FACILITY_HTTP",
            Self::FilterManager => "FACILITY_USERMODE_FILTER_MANAGER",
            Self::BackgroundCopy => "FACILITY_BACKGROUNDCOPY",
            Self::WindowsUpdate => "FACILITY_WINDOWSUPDATE",
            Self::Graphics => "FACILITY_GRAPHICS",
            Self::TpmServices => "FACILITY_TPM_SERVICES",
            Self::TpmSoftware => "FACILITY_TPM_SOFTWARE",
            Self::Pla => "FACILITY_PLA",
            Self::Fve => "FACILITY_FVE",
            Self::Fwp => "FACILITY_FWP",
            Self::WinRm => "FACILITY_WINRM",
            Self::Ndis => "FACILITY_NDIS",
            Self::VolumeManager => "FACILITY_USERMODE_VOLMGR",
            Self::Bcd => "FACILITY_BCD",
            Self::Vhd => "FACILITY_USERMODE_VHD",
            Self::Sdiag => "FACILITY_SDIAG",
            Self::WebServices => "FACILITY_WEBSERVICES",
            Self::Other(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "FACILITY_{}", self.code()),
        }
    }
}

// ============================================================================
// HResult (raw value)
// ============================================================================

/// A raw 32-bit HRESULT with accessors for its bit fields.
///
/// Any `u32` is a valid `HResult`; nothing here consults the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HResult(u32);

impl HResult {
    /// `S_OK`, the success value.
    pub const S_OK: HResult = HResult(0);

    /// Wrap a raw value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// `HRESULT_FROM_WIN32`: map a Win32 error code into facility WIN32.
    ///
    /// Values that are already zero or negative when read as `i32` pass
    /// through unchanged, so `from_win32(0)` is `S_OK`.
    #[inline]
    pub const fn from_win32(error: u32) -> Self {
        if (error as i32) <= 0 {
            Self(error)
        } else {
            Self(
                (error & CODE_MASK)
                    | ((Facility::Win32.code() as u32) << FACILITY_SHIFT)
                    | SEVERITY_BIT,
            )
        }
    }

    /// `HRESULT_FROM_NT`: tag an NTSTATUS with the `N` bit.
    #[inline]
    pub const fn from_ntstatus(status: u32) -> Self {
        Self(status | NTSTATUS_BIT)
    }

    /// True when bit 31 is clear.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 & SEVERITY_BIT == 0
    }

    /// True when bit 31 is set.
    #[inline]
    pub const fn is_failure(self) -> bool {
        !self.is_success()
    }

    /// Severity derived from bit 31.
    #[inline]
    pub const fn severity(self) -> Severity {
        if self.is_success() {
            Severity::Success
        } else {
            Severity::Failure
        }
    }

    /// The raw 11-bit facility number.
    #[inline]
    pub const fn facility_code(self) -> u16 {
        ((self.0 & FACILITY_MASK) >> FACILITY_SHIFT) as u16
    }

    /// The facility.
    #[inline]
    pub const fn facility(self) -> Facility {
        Facility::from_code(self.facility_code())
    }

    /// The low 16-bit code.
    #[inline]
    pub const fn code(self) -> u16 {
        (self.0 & CODE_MASK) as u16
    }

    /// `C` bit: customer-defined value.
    #[inline]
    pub const fn is_customer(self) -> bool {
        self.0 & CUSTOMER_BIT != 0
    }

    /// `N` bit: mapped NTSTATUS.
    #[inline]
    pub const fn is_ntstatus(self) -> bool {
        self.0 & NTSTATUS_BIT != 0
    }

    /// `R` bit.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 & RESERVED_BIT != 0
    }

    /// Inverse of [`HResult::from_win32`] for failures in facility WIN32.
    #[inline]
    pub const fn win32_code(self) -> Option<u16> {
        if self.is_failure()
            && !self.is_ntstatus()
            && self.facility_code() == Facility::Win32.code()
        {
            Some(self.code())
        } else {
            None
        }
    }
}

impl From<u32> for HResult {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<i32> for HResult {
    /// Bit reinterpretation, as HRESULTs are signed in C headers.
    fn from(value: i32) -> Self {
        Self(value as u32)
    }
}

impl From<HResult> for u32 {
    fn from(value: HResult) -> Self {
        value.0
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::LowerHex for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Failure to parse an [`HResult`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHResultError {
    /// Input was empty after trimming.
    Empty,
    /// Input was not a valid `0x`-prefixed hex or decimal `u32`.
    InvalidNumber(ParseIntError),
}

impl fmt::Display for ParseHResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty status code"),
            Self::InvalidNumber(e) => write!(f, "invalid status code: {}", e),
        }
    }
}

impl std::error::Error for ParseHResultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidNumber(e) => Some(e),
        }
    }
}

impl FromStr for HResult {
    type Err = ParseHResultError;

    /// Accepts `0x80004005`, `0X80004005` or `2147500037`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseHResultError::Empty);
        }
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => s.parse::<u32>(),
        };
        parsed.map(Self).map_err(ParseHResultError::InvalidNumber)
    }
}

// ============================================================================
// Catalog Entry (frozen identity)
// ============================================================================

/// One catalog entry: code, symbolic name and description.
///
/// Entries only exist as `static` items produced by [`define_hresults!`].
/// The type is neither `Copy` nor `Clone`; callers hold `&'static` references,
/// so identity comparison with [`std::ptr::eq`] is meaningful.
///
/// Descriptions are transcribed text. Positional placeholders such as `%1`
/// are left as-is.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct HResultEntry {
    code: u32,
    name: &'static str,
    description: &'static str,
}

impl HResultEntry {
    /// Create an entry with compile-time validation.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if `code` is zero, which is
    /// reserved for success, or if `name` is empty.
    #[inline]
    pub const fn const_new(code: u32, name: &'static str, description: &'static str) -> Self {
        assert!(code != 0, "status code 0 is success and cannot be a catalog entry");
        assert!(!name.is_empty(), "catalog entry requires a symbolic name");
        Self {
            code,
            name,
            description,
        }
    }

    /// The raw code.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The code as an [`HResult`].
    #[inline]
    pub const fn hresult(&self) -> HResult {
        HResult::new(self.code)
    }

    /// Symbolic name, e.g. `E_FAIL`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Description text, placeholders unexpanded.
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Facility of the code.
    #[inline]
    pub const fn facility(&self) -> Facility {
        self.hresult().facility()
    }

    /// Severity of the code.
    #[inline]
    pub const fn severity(&self) -> Severity {
        self.hresult().severity()
    }

    /// True if the description contains a `%n` insertion placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.description
            .as_bytes()
            .windows(2)
            .any(|w| w[0] == b'%' && w[1].is_ascii_digit())
    }
}

impl fmt::Display for HResultEntry {
    /// `E_FAIL (0x80004005): Unspecified error.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08X}): {}", self.name, self.code, self.description)
    }
}

impl std::error::Error for HResultEntry {}

/// Check at compile time that `code` sits in the facility block it was
/// declared under.
#[doc(hidden)]
pub const fn __facility_matches(code: u32, facility: Facility) -> bool {
    HResult::new(code).facility_code() == facility.code()
}

// ============================================================================
// Definition Macros
// ============================================================================

/// Define catalog entries grouped by facility.
///
/// For every entry this emits a `pub static` [`HResultEntry`] plus a
/// compile-time check that the code's facility bits match the block. For the
/// whole invocation it emits:
///
/// - `CATALOG`: every entry in declaration order
/// - `lookup_code(u32)`: the code dispatch, a single `match` compiled with
///   `deny(unreachable_patterns)` so a code declared twice fails the build
///
/// Both are `pub(crate)`: callers outside the defining crate go through the
/// crate's own resolver functions.
///
/// Invoke it once per module; the generated items share that module.
///
/// ```rust
/// # use hresult_registry::{define_hresults, Facility};
/// define_hresults! {
///     Facility::Null => {
///         MY_E_ONE = (0x80000F01, "First."),
///     }
///     Facility::Rpc => {
///         MY_E_TWO = (0x80010F02, "Second."),
///     }
/// }
///
/// assert_eq!(CATALOG.len(), 2);
/// assert!(std::ptr::eq(lookup_code(0x80010F02).unwrap(), &MY_E_TWO));
/// assert!(lookup_code(0x80010F03).is_none());
/// ```
#[macro_export]
macro_rules! define_hresults {
    ($( $facility:expr => { $( $name:ident = ($code:literal, $description:literal) ),+ $(,)? } )+) => {
        $($(
            #[doc = $description]
            pub static $name: $crate::HResultEntry =
                $crate::HResultEntry::const_new($code, stringify!($name), $description);

            const _: () = assert!(
                $crate::codes::__facility_matches($code, $facility),
                concat!(stringify!($name), " is declared under the wrong facility")
            );
        )+)+

        /// Every entry of this catalog, in declaration order.
        #[allow(dead_code)]
        pub(crate) static CATALOG: &[&$crate::HResultEntry] = &[ $($( &$name, )+)+ ];

        /// Code dispatch over this catalog.
        #[deny(unreachable_patterns)]
        #[allow(dead_code)]
        pub(crate) fn lookup_code(code: u32) -> ::core::option::Option<&'static $crate::HResultEntry> {
            match code {
                $($( $code => ::core::option::Option::Some(&$name), )+)+
                _ => ::core::option::Option::None,
            }
        }
    };
}

/// Define secondary symbolic names for existing entries.
///
/// An alias is a `pub static` reference to its canonical entry. Aliases are
/// collected into the crate-private `ALIASES` for name lookup and never take
/// part in code dispatch, so a code always resolves to its canonical entry.
///
/// ```rust
/// # use hresult_registry::{define_hresult_aliases, E_FAIL};
/// define_hresult_aliases! {
///     MY_E_GENERIC => E_FAIL,
/// }
///
/// assert!(std::ptr::eq(MY_E_GENERIC, &E_FAIL));
/// assert_eq!(ALIASES[0].0, "MY_E_GENERIC");
/// ```
#[macro_export]
macro_rules! define_hresult_aliases {
    ($( $alias:ident => $canonical:path ),+ $(,)?) => {
        $(
            #[doc = concat!("Alias of [`", stringify!($canonical), "`].")]
            pub static $alias: &$crate::HResultEntry = &$canonical;
        )+

        /// Secondary names and the canonical entry each one refers to.
        #[allow(dead_code)]
        pub(crate) static ALIASES: &[(&str, &$crate::HResultEntry)] = &[
            $( (stringify!($alias), &$canonical), )+
        ];
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Bit Layout
    // ========================================================================

    #[test]
    fn decomposes_e_fail() {
        let hr = HResult::new(0x8000_4005);
        assert!(hr.is_failure());
        assert_eq!(hr.severity(), Severity::Failure);
        assert_eq!(hr.facility(), Facility::Null);
        assert_eq!(hr.code(), 0x4005);
        assert!(!hr.is_customer());
        assert!(!hr.is_ntstatus());
    }

    #[test]
    fn decomposes_informational_code() {
        let hr = HResult::new(0x0009_0312);
        assert!(hr.is_success());
        assert_eq!(hr.facility(), Facility::Security);
        assert_eq!(hr.code(), 0x0312);
    }

    #[test]
    fn facility_uses_all_eleven_bits() {
        let hr = HResult::new(0x87FF_0000);
        assert_eq!(hr.facility_code(), 0x7FF);
        assert_eq!(hr.facility(), Facility::Other(0x7FF));

        // The X bit (27) is not part of the facility.
        let hr = HResult::new(0x8800_0000);
        assert_eq!(hr.facility_code(), 0);
    }

    #[test]
    fn flag_bits() {
        assert!(HResult::new(0xA000_0001).is_customer());
        assert!(HResult::new(0xD000_0005).is_ntstatus());
        assert!(HResult::new(0xC000_0005).is_reserved());
    }

    // ========================================================================
    // Win32 / NTSTATUS Mapping
    // ========================================================================

    #[test]
    fn from_win32_maps_into_facility_win32() {
        // ERROR_ACCESS_DENIED
        assert_eq!(HResult::from_win32(5).value(), 0x8007_0005);
        // ERROR_INVALID_PARAMETER
        assert_eq!(HResult::from_win32(87).value(), 0x8007_0057);
        assert_eq!(HResult::from_win32(0), HResult::S_OK);
    }

    #[test]
    fn from_win32_passes_negative_values_through() {
        assert_eq!(HResult::from_win32(0x8000_4005).value(), 0x8000_4005);
    }

    #[test]
    fn win32_code_round_trips() {
        assert_eq!(HResult::from_win32(1722).win32_code(), Some(1722));
        assert_eq!(HResult::new(0x8000_4005).win32_code(), None);
        assert_eq!(HResult::new(0x0007_0005).win32_code(), None);
    }

    #[test]
    fn from_ntstatus_sets_n_bit() {
        let hr = HResult::from_ntstatus(0xC000_0022);
        assert_eq!(hr.value(), 0xD000_0022);
        assert!(hr.is_ntstatus());
        assert_eq!(hr.win32_code(), None);
    }

    // ========================================================================
    // Facility
    // ========================================================================

    #[test]
    fn facility_codes_round_trip() {
        for code in 0u16..0x800 {
            assert_eq!(Facility::from_code(code).code(), code);
        }
    }

    #[test]
    fn facility_display() {
        assert_eq!(Facility::Rpc.to_string(), "FACILITY_RPC");
        assert_eq!(Facility::from_code(16).to_string(), "FACILITY_SCARD");
        assert_eq!(Facility::Other(200).to_string(), "FACILITY_200");
        assert_eq!(Facility::Other(200).name(), None);
    }

    // ========================================================================
    // Display / Parsing
    // ========================================================================

    #[test]
    fn display_is_zero_padded_upper_hex() {
        assert_eq!(HResult::new(0x5).to_string(), "0x00000005");
        assert_eq!(HResult::new(0x8007_000E).to_string(), "0x8007000E");
        assert_eq!(format!("{:x}", HResult::new(0x8007_000E)), "8007000e");
    }

    #[test]
    fn parses_hex_and_decimal() {
        assert_eq!("0x80004005".parse::<HResult>(), Ok(HResult::new(0x8000_4005)));
        assert_eq!(" 0X8007000e ".parse::<HResult>(), Ok(HResult::new(0x8007_000E)));
        assert_eq!("2147500037".parse::<HResult>(), Ok(HResult::new(0x8000_4005)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<HResult>(), Err(ParseHResultError::Empty));
        assert!(matches!(
            "0xZZ".parse::<HResult>(),
            Err(ParseHResultError::InvalidNumber(_))
        ));
        assert!(matches!(
            "0x1FFFFFFFF".parse::<HResult>(),
            Err(ParseHResultError::InvalidNumber(_))
        ));
    }

    #[test]
    fn signed_conversion_reinterprets_bits() {
        assert_eq!(HResult::from(-2147467259i32).value(), 0x8000_4005);
        assert_eq!(u32::from(HResult::new(7)), 7);
    }

    // ========================================================================
    // Entries
    // ========================================================================

    #[test]
    fn entry_const_construction() {
        const ENTRY: HResultEntry = HResultEntry::const_new(0x8000_4005, "E_FAIL", "Unspecified error.");
        assert_eq!(ENTRY.code(), 0x8000_4005);
        assert_eq!(ENTRY.name(), "E_FAIL");
        assert_eq!(ENTRY.facility(), Facility::Null);
        assert_eq!(ENTRY.to_string(), "E_FAIL (0x80004005): Unspecified error.");
    }

    #[test]
    #[should_panic(expected = "status code 0 is success")]
    fn entry_rejects_zero() {
        let _ = HResultEntry::const_new(0, "S_OK", "Success.");
    }

    #[test]
    fn placeholder_detection() {
        let with = HResultEntry::const_new(0x8003_0002, "STG_E_FILENOTFOUND", "%1 could not be found.");
        let without = HResultEntry::const_new(0x8000_4005, "E_FAIL", "Unspecified error 100%.");
        assert!(with.has_placeholders());
        assert!(!without.has_placeholders());
    }

    // ========================================================================
    // Macro Tests
    // ========================================================================

    mod sample {
        use crate::{Facility, define_hresults};

        define_hresults! {
            Facility::Null => {
                T_E_ONE = (0x80000F01, "One."),
                T_E_TWO = (0x80000F02, "Two."),
            }
            Facility::Storage => {
                T_S_THREE = (0x00030F03, "Three."),
            }
        }
    }

    #[test]
    fn macro_batch_definition() {
        assert_eq!(sample::CATALOG.len(), 3);
        assert_eq!(sample::T_E_TWO.name(), "T_E_TWO");
        assert!(std::ptr::eq(sample::lookup_code(0x0003_0F03).unwrap(), &sample::T_S_THREE));
        assert!(sample::lookup_code(0x8000_0F03).is_none());
    }
}
