use chrono::{DateTime, Duration, FixedOffset, Utc};

// Aligo reserve timestamps are calendar values in Korea Standard Time.
// KST is a fixed +09:00 offset; South Korea has not observed DST since 1988.
const KST_OFFSET_SECS: i32 = 9 * 3600;

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("+09:00 is a valid offset")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A reserved send time, pinned to `Asia/Seoul` regardless of the host's
/// local time zone.
///
/// Aligo takes the calendar date and time of day as two separate form
/// fields, `rdate` (`YYYYMMDD`) and `rtime` (`HHMM`).
pub struct ReserveTime(DateTime<FixedOffset>);

impl ReserveTime {
    /// Form field name for the calendar date (`rdate`).
    pub const DATE_FIELD: &'static str = "rdate";
    /// Form field name for the time of day (`rtime`).
    pub const TIME_FIELD: &'static str = "rtime";

    /// Interpret an absolute Unix timestamp as a KST calendar time.
    ///
    /// Returns `None` only for timestamps outside the representable range.
    pub fn from_epoch(epoch: i64) -> Option<Self> {
        let utc = DateTime::<Utc>::from_timestamp(epoch, 0)?;
        Some(Self(utc.with_timezone(&kst())))
    }

    /// `now` plus `delay_secs`, as a KST calendar time.
    pub fn after_delay(now: DateTime<Utc>, delay_secs: u32) -> Self {
        let when = now + Duration::seconds(i64::from(delay_secs));
        Self(when.with_timezone(&kst()))
    }

    /// Calendar date, `YYYYMMDD` with no separators.
    pub fn rdate(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Time of day, `HHMM` 24-hour.
    pub fn rtime(&self) -> String {
        self.0.format("%H%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn from_epoch_converts_to_kst_calendar_values() {
        // 2023-11-14T22:13:20Z is 2023-11-15T07:13:20 in Seoul.
        let reserve = ReserveTime::from_epoch(1_700_000_000).unwrap();
        assert_eq!(reserve.rdate(), "20231115");
        assert_eq!(reserve.rtime(), "0713");
    }

    #[test]
    fn from_epoch_rejects_out_of_range_timestamps() {
        assert!(ReserveTime::from_epoch(i64::MAX).is_none());
    }

    #[test]
    fn after_delay_crosses_kst_midnight() {
        // 14:59:30 UTC is 23:59:30 KST; forty seconds later is the next day.
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 14, 59, 30).unwrap();
        let reserve = ReserveTime::after_delay(now, 40);
        assert_eq!(reserve.rdate(), "20240102");
        assert_eq!(reserve.rtime(), "0000");
    }

    #[test]
    fn after_delay_zero_keeps_the_instant() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 3, 5, 0).unwrap();
        let reserve = ReserveTime::after_delay(now, 0);
        assert_eq!(reserve.rdate(), "20240615");
        assert_eq!(reserve.rtime(), "1205");
    }
}
