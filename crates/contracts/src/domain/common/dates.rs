use chrono::{NaiveDate, NaiveTime};

/// Calendar date from compiled-in literals.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("catalog literal is a valid date")
}

/// Wall-clock time from compiled-in literals.
pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("catalog literal is a valid time")
}

/// "Nov 3, 2025"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Nov 3" (chart axis labels)
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "14:35"
pub fn time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(display_date(date), "Nov 3, 2025");
        assert_eq!(short_date(date), "Nov 3");
        let date = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();
        assert_eq!(display_date(date), "Oct 28, 2025");
    }

    #[test]
    fn test_time_label() {
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(time_of_day(time), "09:05");
    }
}
