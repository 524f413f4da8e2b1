use chrono::{Local, NaiveDate, Utc};

/// The backend keys schedules and attendance by the UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Wall-clock label for a recognition result, e.g. "14:03:27".
pub fn local_time_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "2025-03-07");
    }

    #[test]
    fn local_time_label_has_clock_shape() {
        let label = local_time_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
