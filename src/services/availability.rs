//! Availability of artworks by date and by location

use chrono::NaiveDate;

use crate::{
    dates,
    models::{Artwork, Loan, Reservation},
};

/// Decides whether an artwork can be displayed on a date or at a building.
///
/// Stateless; works on the single loan and reservation it is handed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AvailabilityChecker;

impl AvailabilityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Whether the artwork is out on loan on the given date.
    ///
    /// For `today` the live flag on the artwork is authoritative. For any other
    /// date only the given loan is consulted. A reservation covering the date
    /// is reported but never changes the outcome.
    pub fn is_artwork_lent_out_on_date(
        &self,
        artwork: &Artwork,
        loan: Option<&Loan>,
        reservation: Option<&Reservation>,
        date_of_interest: NaiveDate,
        today: NaiveDate,
    ) -> bool {
        if let Some(reservation) = reservation {
            if reservation.artwork_id == artwork.id && reservation.covers(date_of_interest) {
                tracing::warn!(
                    artwork_id = artwork.id,
                    reservation_id = reservation.id,
                    %date_of_interest,
                    "Artwork is reserved on the date of interest"
                );
            }
        }

        if date_of_interest == today {
            return artwork.is_lent_out;
        }

        loan.is_some_and(|loan| loan.artwork_id == artwork.id && loan.covers(date_of_interest))
    }

    /// Whether the artwork is free on the given date, using the local clock for today
    pub fn is_artwork_available_on_date(
        &self,
        artwork: &Artwork,
        loan: Option<&Loan>,
        reservation: Option<&Reservation>,
        date_of_interest: NaiveDate,
    ) -> bool {
        self.is_artwork_available_on_date_as_of(
            artwork,
            loan,
            reservation,
            date_of_interest,
            dates::today(),
        )
    }

    pub fn is_artwork_available_on_date_as_of(
        &self,
        artwork: &Artwork,
        loan: Option<&Loan>,
        reservation: Option<&Reservation>,
        date_of_interest: NaiveDate,
        today: NaiveDate,
    ) -> bool {
        !self.is_artwork_lent_out_on_date(artwork, loan, reservation, date_of_interest, today)
    }

    /// Location-sensitive artworks are only available in the building they are in;
    /// every other category is available anywhere.
    pub fn is_artwork_available_at_location(&self, artwork: &Artwork, location_of_interest: i32) -> bool {
        if artwork.is_location_sensitive() {
            return artwork.building_id == location_of_interest;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log output collected by a test subscriber
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
        (result, output)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_loan(artwork_id: i32) -> Loan {
        Loan {
            id: 10,
            artwork_id,
            reservation_id: 20,
            borrower_id: 30,
            building_id: 2,
            room_id: 4,
            start_dt: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            end_dt: Utc.with_ymd_and_hms(2024, 3, 31, 17, 0, 0).unwrap(),
        }
    }

    fn april_reservation(artwork_id: i32) -> Reservation {
        Reservation {
            id: 20,
            artwork_id,
            user_id: 30,
            building_id: 2,
            room_id: 4,
            reservation_issuance_dt: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
            start_dt: Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
            end_dt: Utc.with_ymd_and_hms(2024, 4, 30, 17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_today_uses_lent_out_flag() {
        let checker = AvailabilityChecker::new();
        let today = date(2024, 6, 1);
        let mut artwork = Artwork::new(1, "Le Penseur");

        assert!(checker.is_artwork_available_on_date_as_of(&artwork, None, None, today, today));

        artwork.is_lent_out = true;
        assert!(checker.is_artwork_lent_out_on_date(&artwork, None, None, today, today));
        assert!(!checker.is_artwork_available_on_date_as_of(&artwork, None, None, today, today));
    }

    #[test]
    fn test_today_ignores_loan_records() {
        let checker = AvailabilityChecker::new();
        let today = date(2024, 3, 15);
        let artwork = Artwork::new(1, "Le Penseur");
        let loan = march_loan(1);
        assert!(checker.is_artwork_available_on_date_as_of(&artwork, Some(&loan), None, today, today));
    }

    #[test]
    fn test_other_date_uses_loan_range() {
        let checker = AvailabilityChecker::new();
        let today = date(2024, 1, 1);
        let artwork = Artwork::new(1, "Le Penseur");
        let loan = march_loan(1);

        assert!(!checker.is_artwork_available_on_date_as_of(&artwork, Some(&loan), None, date(2024, 3, 1), today));
        assert!(!checker.is_artwork_available_on_date_as_of(&artwork, Some(&loan), None, date(2024, 3, 31), today));
        assert!(checker.is_artwork_available_on_date_as_of(&artwork, Some(&loan), None, date(2024, 4, 1), today));
        assert!(checker.is_artwork_available_on_date_as_of(&artwork, None, None, date(2024, 3, 15), today));
    }

    #[test]
    fn test_loan_of_other_artwork_is_ignored() {
        let checker = AvailabilityChecker::new();
        let artwork = Artwork::new(1, "Le Penseur");
        let loan = march_loan(99);
        assert!(checker.is_artwork_available_on_date_as_of(
            &artwork,
            Some(&loan),
            None,
            date(2024, 3, 15),
            date(2024, 1, 1)
        ));
    }

    #[test]
    fn test_reservation_does_not_change_outcome() {
        let checker = AvailabilityChecker::new();
        let artwork = Artwork::new(1, "Le Penseur");
        let reservation = april_reservation(1);
        assert!(checker.is_artwork_available_on_date_as_of(
            &artwork,
            None,
            Some(&reservation),
            date(2024, 4, 10),
            date(2024, 1, 1)
        ));
    }

    #[test]
    fn test_reservation_is_reported_without_changing_outcome() {
        let checker = AvailabilityChecker::new();
        let today = date(2024, 1, 1);
        let artwork = Artwork::new(1, "Le Penseur");
        let reservation = april_reservation(1);
        let mut april_loan = march_loan(1);
        april_loan.start_dt = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
        april_loan.end_dt = Utc.with_ymd_and_hms(2024, 4, 30, 17, 0, 0).unwrap();
        let reserved_day = date(2024, 4, 10);

        for loan in [None, Some(&april_loan)] {
            let without = checker.is_artwork_lent_out_on_date(&artwork, loan, None, reserved_day, today);
            let (with, logs) = with_captured_logs(|| {
                checker.is_artwork_lent_out_on_date(&artwork, loan, Some(&reservation), reserved_day, today)
            });
            assert_eq!(with, without);
            assert_eq!(with, loan.is_some());
            assert!(logs.contains("Artwork is reserved on the date of interest"));
        }

        let (lent_out, logs) = with_captured_logs(|| {
            checker.is_artwork_lent_out_on_date(&artwork, None, Some(&reservation), date(2024, 5, 10), today)
        });
        assert!(!lent_out);
        assert!(logs.is_empty());
    }

    #[test]
    fn test_location_sensitive_category() {
        let checker = AvailabilityChecker::new();
        let mut sculpture = Artwork::new(2, "Le Penseur");
        sculpture.category = Some(1);
        sculpture.building_id = 2;

        assert!(checker.is_artwork_available_at_location(&sculpture, 2));
        assert!(!checker.is_artwork_available_at_location(&sculpture, 3));
    }

    #[test]
    fn test_other_categories_are_available_anywhere() {
        let checker = AvailabilityChecker::new();
        let mut print = Artwork::new(3, "Zeefdruk");
        print.building_id = 2;

        assert!(checker.is_artwork_available_at_location(&print, 3));
        print.category = Some(2);
        assert!(checker.is_artwork_available_at_location(&print, 3));
        assert!(checker.is_artwork_available_at_location(&print, 2));
    }
}
