use std::fmt;

/// SOA serial as returned by one server at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Serial(u32);

impl Serial {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// How far this serial trails `reference`.
    ///
    /// Computed in `i64` so a server ahead of the reference yields a negative
    /// lag instead of wrapping around.
    pub fn lag_behind(self, reference: Serial) -> i64 {
        i64::from(reference.0) - i64::from(self.0)
    }
}

impl From<u32> for Serial {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
