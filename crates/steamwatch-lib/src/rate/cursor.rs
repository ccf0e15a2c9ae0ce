use std::fmt;

/// Number of bytes of a log file that have already been examined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScanCursor(u64);

impl ScanCursor {
    pub const START: Self = Self(0);

    pub fn new(offset: u64) -> Self {
        Self(offset)
    }

    pub fn offset(self) -> u64 {
        self.0
    }

    pub(crate) fn advance(self, bytes: u64) -> Self {
        Self(self.0 + bytes)
    }
}

impl fmt::Display for ScanCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
