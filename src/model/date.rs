//! Partial date model

use serde::Deserialize;

/// A date where any of year, month and day may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PartialDate {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u8>,
    #[serde(default)]
    pub day: Option<u8>,
}

impl PartialDate {
    /// Create a date from its (possibly unknown) parts
    pub fn new(year: Option<i32>, month: Option<u8>, day: Option<u8>) -> Self {
        Self { year, month, day }
    }

    /// Create a date with only the year known
    pub fn year(year: i32) -> Self {
        Self::new(Some(year), None, None)
    }

    /// Create a fully known date
    pub fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self::new(Some(year), Some(month), Some(day))
    }
}
