//! Reservation model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to borrow an artwork for a future period; precedes a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_reservation_period"))]
pub struct Reservation {
    pub id: i32,
    pub artwork_id: i32,
    pub user_id: i32,
    pub building_id: i32,
    pub room_id: i32,
    pub reservation_issuance_dt: DateTime<Utc>,
    pub start_dt: DateTime<Utc>,
    pub end_dt: DateTime<Utc>,
}

fn validate_reservation_period(reservation: &Reservation) -> Result<(), ValidationError> {
    if reservation.end_dt < reservation.start_dt {
        return Err(ValidationError::new("reservation_ends_before_start"));
    }
    Ok(())
}

impl Reservation {
    /// Whether the reserved period includes the given calendar day (bounds inclusive)
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_dt.date_naive() <= date && date <= self.end_dt.date_naive()
    }
}
