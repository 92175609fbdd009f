//! Calendar helpers

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::error::{AppError, AppResult};

/// Every calendar day from `start_date` to `end_date`, both included.
///
/// A reversed range is rejected rather than yielding an empty list.
pub fn get_all_days_between_dates(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    if start_date > end_date {
        return Err(AppError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    let mut days = Vec::new();
    let mut current = start_date;
    while current < end_date {
        days.push(current);
        current = current
            .checked_add_days(Days::new(1))
            .ok_or_else(|| AppError::Validation(format!("date overflow after {}", current)))?;
    }
    days.push(end_date);

    Ok(days)
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose UTC date is used.
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").or_else(|date_err| {
        DateTime::parse_from_rfc3339(input)
            .map(|dt| dt.naive_utc().date())
            .map_err(|_| AppError::DateParse {
                input: input.to_string(),
                source: date_err,
            })
    })
}

/// Today's calendar date in UTC.
///
/// Loan and reservation periods and parsed timestamps are all compared as UTC
/// dates, so "today" is too.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_across_month_end() {
        let days = get_all_days_between_dates(date(2024, 1, 30), date(2024, 2, 2)).unwrap();
        assert_eq!(
            days,
            vec![date(2024, 1, 30), date(2024, 1, 31), date(2024, 2, 1), date(2024, 2, 2)]
        );
    }

    #[test]
    fn test_days_leap_year() {
        let days = get_all_days_between_dates(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[1], date(2024, 2, 29));
    }

    #[test]
    fn test_days_single_day() {
        let days = get_all_days_between_dates(date(2024, 5, 4), date(2024, 5, 4)).unwrap();
        assert_eq!(days, vec![date(2024, 5, 4)]);
    }

    #[test]
    fn test_days_reversed_range() {
        let err = get_all_days_between_dates(date(2024, 5, 4), date(2024, 5, 1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-15").unwrap(), date(2024, 3, 15));
        assert_eq!(parse_date(" 2024-03-15 ").unwrap(), date(2024, 3, 15));
        assert_eq!(parse_date("2024-03-15T23:30:00-02:00").unwrap(), date(2024, 3, 16));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date("15/03/2024"), Err(AppError::DateParse { .. })));
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_today_is_utc_date() {
        let before = Utc::now().date_naive();
        let today = today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
