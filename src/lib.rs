//! Museum collection management
//!
//! Tracks artworks, artists, municipal buildings with their display rooms,
//! loans and reservations, and answers two questions about an artwork: does it
//! fit a display location, and is it available on a date or at a building.

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::{CollectionSeed, Repository};
pub use services::{ArtworkInformationChecker, AvailabilityChecker, Services};
