//! Loan and reservation lookups

use chrono::NaiveDate;

use super::Store;
use crate::models::{Loan, Reservation};

impl Store<Loan> {
    /// Full loan history of an artwork
    pub fn list_for_artwork(&self, artwork_id: i32) -> impl Iterator<Item = &Loan> {
        self.list().filter(move |loan| loan.artwork_id == artwork_id)
    }

    /// Loan of the artwork covering the given date, if any
    pub fn find_covering(&self, artwork_id: i32, date: NaiveDate) -> Option<&Loan> {
        self.list_for_artwork(artwork_id).find(|loan| loan.covers(date))
    }

    /// Existing loan occupying the same room during the candidate's period
    pub fn overlapping_in_room(&self, candidate: &Loan) -> Option<&Loan> {
        self.list().find(|loan| {
            loan.id != candidate.id && loan.room_id == candidate.room_id && loan.overlaps(candidate)
        })
    }
}

impl Store<Reservation> {
    pub fn list_for_artwork(&self, artwork_id: i32) -> impl Iterator<Item = &Reservation> {
        self.list()
            .filter(move |reservation| reservation.artwork_id == artwork_id)
    }

    /// Reservation of the artwork covering the given date, if any
    pub fn find_covering(&self, artwork_id: i32, date: NaiveDate) -> Option<&Reservation> {
        self.list_for_artwork(artwork_id)
            .find(|reservation| reservation.covers(date))
    }
}
