//! Clock text formatting

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Two-digit month/day/hour/minute/second, four-digit year, 24-hour clock
const DISPLAY_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Formats instants for one fixed time zone
#[derive(Debug, Clone)]
pub struct ClockFormat {
    offset: FixedOffset,
    label: String,
}

impl ClockFormat {
    /// `label` is appended after the time when non-empty (e.g. "EST")
    pub fn new(offset: FixedOffset, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }

    /// Build from an offset in minutes east of UTC. `None` when the offset is
    /// a day or more.
    pub fn from_minutes(minutes: i32, label: impl Into<String>) -> Option<Self> {
        let offset = FixedOffset::east_opt(minutes.checked_mul(60)?)?;
        Some(Self::new(offset, label))
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix(), "")
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.offset);
        let text = local.format(DISPLAY_FORMAT).to_string();
        if self.label.is_empty() {
            text
        } else {
            format!("{} {}", text, self.label)
        }
    }

    pub fn now(&self) -> String {
        self.format(Utc::now())
    }
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_utc_format() {
        assert_eq!(ClockFormat::utc().format(instant()), "03/04/2026, 05:06:07");
    }

    #[test]
    fn test_offset_crosses_midnight() {
        let format = ClockFormat::from_minutes(-6 * 60, "CST").unwrap();
        assert_eq!(format.format(instant()), "03/03/2026, 23:06:07 CST");
    }

    #[test]
    fn test_half_hour_offset() {
        let format = ClockFormat::from_minutes(330, "").unwrap();
        assert_eq!(format.format(instant()), "03/04/2026, 10:36:07");
    }

    #[test]
    fn test_invalid_offset() {
        assert!(ClockFormat::from_minutes(24 * 60, "").is_none());
        assert!(ClockFormat::from_minutes(i32::MAX, "").is_none());
    }
}
