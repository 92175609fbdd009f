//! Catalog service: checks on stored artworks, resolved through the repository

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{ArtworkInformationChecker, AvailabilityChecker};
use crate::{
    dates,
    error::AppResult,
    models::Artwork,
    repository::Repository,
};

/// Dimensions of a display location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LocationDimensions {
    pub width_cm: u32,
    pub height_cm: u32,
    pub depth_cm: Option<u32>,
}

/// User preferences to filter artworks on; unset fields do not filter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtworkQuery {
    pub fits_within: Option<LocationDimensions>,
    pub style: Option<String>,
    pub available_on: Option<NaiveDate>,
    /// Building name
    pub location: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<Repository>,
    artwork_information: ArtworkInformationChecker,
    availability: AvailabilityChecker,
}

impl CatalogService {
    pub fn new(repository: Arc<Repository>) -> Self {
        Self {
            repository,
            artwork_information: ArtworkInformationChecker::new(),
            availability: AvailabilityChecker::new(),
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn get_artwork(&self, artwork_id: i32) -> AppResult<&Artwork> {
        self.repository.artworks.get_by_id(artwork_id)
    }

    pub fn does_artwork_fit(
        &self,
        artwork_id: i32,
        location_width_cm: u32,
        location_height_cm: u32,
        location_depth_cm: Option<u32>,
    ) -> AppResult<bool> {
        let artwork = self.get_artwork(artwork_id)?;
        self.artwork_information.does_artwork_fit(
            artwork,
            location_width_cm,
            location_height_cm,
            location_depth_cm,
        )
    }

    pub fn is_artwork_desired_style(&self, artwork_id: i32, preferred_style: Option<&str>) -> AppResult<bool> {
        let artwork = self.get_artwork(artwork_id)?;
        Ok(self.artwork_information.is_artwork_desired_style(artwork, preferred_style))
    }

    /// Availability on a date, taking the artwork's whole loan history into account
    pub fn is_artwork_available_on_date(&self, artwork_id: i32, date_of_interest: NaiveDate) -> AppResult<bool> {
        self.is_artwork_available_on_date_as_of(artwork_id, date_of_interest, dates::today())
    }

    pub fn is_artwork_available_on_date_as_of(
        &self,
        artwork_id: i32,
        date_of_interest: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<bool> {
        let artwork = self.get_artwork(artwork_id)?;
        Ok(self.available_on(artwork, date_of_interest, today))
    }

    /// Available on every day from `start_date` to `end_date`, both included
    pub fn is_artwork_available_between(
        &self,
        artwork_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<bool> {
        self.is_artwork_available_between_as_of(artwork_id, start_date, end_date, dates::today())
    }

    pub fn is_artwork_available_between_as_of(
        &self,
        artwork_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<bool> {
        let artwork = self.get_artwork(artwork_id)?;
        let days = dates::get_all_days_between_dates(start_date, end_date)?;
        Ok(days.into_iter().all(|day| self.available_on(artwork, day, today)))
    }

    /// Availability at a building given by name. An unknown name matches no building.
    pub fn is_artwork_available_at_location(&self, artwork_id: i32, location_of_interest: &str) -> AppResult<bool> {
        let artwork = self.get_artwork(artwork_id)?;
        Ok(self.available_at(artwork, location_of_interest))
    }

    /// Artworks matching every preference set in the query
    pub fn search(&self, query: &ArtworkQuery) -> Vec<&Artwork> {
        self.search_as_of(query, dates::today())
    }

    pub fn search_as_of(&self, query: &ArtworkQuery, today: NaiveDate) -> Vec<&Artwork> {
        let artworks: Vec<&Artwork> = self
            .repository
            .artworks
            .list()
            .filter(|artwork| self.matches(artwork, query, today))
            .collect();

        tracing::debug!(matches = artworks.len(), "Artwork search done");
        artworks
    }

    fn matches(&self, artwork: &Artwork, query: &ArtworkQuery, today: NaiveDate) -> bool {
        if let Some(style) = &query.style {
            if !self.artwork_information.is_artwork_desired_style(artwork, Some(style)) {
                return false;
            }
        }

        if let Some(dims) = query.fits_within {
            match self.artwork_information.does_artwork_fit(
                artwork,
                dims.width_cm,
                dims.height_cm,
                dims.depth_cm,
            ) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(e) => {
                    tracing::debug!(artwork_id = artwork.id, "Skipping artwork: {}", e);
                    return false;
                }
            }
        }

        if let Some(date) = query.available_on {
            if !self.available_on(artwork, date, today) {
                return false;
            }
        }

        if let Some(location) = &query.location {
            if !self.available_at(artwork, location) {
                return false;
            }
        }

        true
    }

    fn available_on(&self, artwork: &Artwork, date: NaiveDate, today: NaiveDate) -> bool {
        let loan = self.repository.loans.find_covering(artwork.id, date);
        let reservation = self.repository.reservations.find_covering(artwork.id, date);
        self.availability
            .is_artwork_available_on_date_as_of(artwork, loan, reservation, date, today)
    }

    fn available_at(&self, artwork: &Artwork, location_of_interest: &str) -> bool {
        match self.repository.buildings.find_by_name(location_of_interest) {
            Some(building) => self
                .availability
                .is_artwork_available_at_location(artwork, building.id),
            None => !artwork.is_location_sensitive(),
        }
    }
}
