//! Call-site annotation flags

use bitflags::bitflags;

bitflags! {
    /// Independently combinable annotations added to each rendered line.
    ///
    /// `SHORT_FILE` and `LONG_FILE` both render the `file` field from the same
    /// captured path; when both are set the short form wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Trailing path segment and line of the call site
        const SHORT_FILE = 1 << 0;
        /// Full path and line of the call site
        const LONG_FILE = 1 << 1;
        /// Fully qualified name of the calling function
        const METHOD = 1 << 2;

        const DEFAULTS = Self::SHORT_FILE.bits() | Self::LONG_FILE.bits() | Self::METHOD.bits();
    }
}

impl Flags {
    /// Whether any file annotation is requested
    #[inline]
    pub fn wants_file(&self) -> bool {
        self.intersects(Flags::SHORT_FILE | Flags::LONG_FILE)
    }

    /// Whether call-site introspection is needed at all
    #[inline]
    pub fn wants_call_site(&self) -> bool {
        self.intersects(Flags::DEFAULTS)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::DEFAULTS
    }
}
