//! Wall clock shown in the header

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{FolioError, Result};

/// Where the clock reads its time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockZone {
    #[default]
    Local,
    Named(Tz),
}

impl ClockZone {
    /// Parse an IANA zone name such as `Europe/Istanbul`.
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse::<Tz>()
            .map(ClockZone::Named)
            .map_err(|_| FolioError::unknown_timezone(name.trim()))
    }

    /// `None` or an empty string means local time.
    pub fn from_option(name: Option<&str>) -> Result<Self> {
        match name.map(str::trim) {
            None | Some("") => Ok(ClockZone::Local),
            Some(name) => Self::parse(name),
        }
    }

    pub fn name(&self) -> String {
        match self {
            ClockZone::Local => "local".to_string(),
            ClockZone::Named(tz) => tz.name().to_string(),
        }
    }

    /// `HH:MM:SS` for the given instant.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        match self {
            ClockZone::Local => format_hms(&at.with_timezone(&Local)),
            ClockZone::Named(tz) => format_hms(&at.with_timezone(tz)),
        }
    }

    pub fn now(&self) -> String {
        self.format(Utc::now())
    }
}

fn format_hms<Z: TimeZone>(at: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}
