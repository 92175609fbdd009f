//! Loan model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Active or past borrowing of an artwork. A loan occupies one room at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_loan_period"))]
pub struct Loan {
    pub id: i32,
    pub artwork_id: i32,
    pub reservation_id: i32,
    pub borrower_id: i32,
    pub building_id: i32,
    pub room_id: i32,
    pub start_dt: DateTime<Utc>,
    pub end_dt: DateTime<Utc>,
}

fn validate_loan_period(loan: &Loan) -> Result<(), ValidationError> {
    if loan.end_dt < loan.start_dt {
        return Err(ValidationError::new("loan_ends_before_start"));
    }
    Ok(())
}

impl Loan {
    /// Whether the loan period includes the given calendar day (bounds inclusive)
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_dt.date_naive() <= date && date <= self.end_dt.date_naive()
    }

    /// Whether two loan periods share at least one instant
    pub fn overlaps(&self, other: &Loan) -> bool {
        self.start_dt <= other.end_dt && other.start_dt <= self.end_dt
    }
}
