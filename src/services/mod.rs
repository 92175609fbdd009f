//! Business logic services

pub mod artwork_information;
pub mod availability;
pub mod catalog;

use std::sync::Arc;

use crate::repository::Repository;

pub use artwork_information::ArtworkInformationChecker;
pub use availability::AvailabilityChecker;
pub use catalog::{ArtworkQuery, CatalogService, LocationDimensions};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub artwork_information: ArtworkInformationChecker,
    pub availability: AvailabilityChecker,
    pub catalog: CatalogService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Arc<Repository>) -> Self {
        Self {
            artwork_information: ArtworkInformationChecker::new(),
            availability: AvailabilityChecker::new(),
            catalog: CatalogService::new(repository),
        }
    }
}
