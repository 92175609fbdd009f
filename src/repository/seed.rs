//! Seeding the repository from a JSON collection document

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Repository;
use crate::{
    error::AppResult,
    models::{AppUser, Artist, Artwork, DisplayRoom, Loan, MunicipalBuilding, Reservation},
};

/// Collection document; every section is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSeed {
    pub buildings: Vec<MunicipalBuilding>,
    pub rooms: Vec<DisplayRoom>,
    pub artists: Vec<Artist>,
    pub artworks: Vec<Artwork>,
    pub users: Vec<AppUser>,
    pub reservations: Vec<Reservation>,
    pub loans: Vec<Loan>,
}

impl CollectionSeed {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        tracing::info!("Reading collection from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Repository {
    /// Build a repository from a seed, adding records in dependency order
    pub fn from_seed(seed: CollectionSeed) -> AppResult<Self> {
        let mut repo = Repository::new();

        for building in seed.buildings {
            repo.add_building(building)?;
        }
        for room in seed.rooms {
            repo.add_room(room)?;
        }
        for artist in seed.artists {
            repo.add_artist(artist)?;
        }
        for artwork in seed.artworks {
            repo.add_artwork(artwork)?;
        }
        for user in seed.users {
            repo.add_user(user)?;
        }
        for reservation in seed.reservations {
            repo.add_reservation(reservation)?;
        }
        for loan in seed.loans {
            repo.add_loan(loan)?;
        }

        tracing::info!(
            artworks = repo.artworks.len(),
            buildings = repo.buildings.len(),
            loans = repo.loans.len(),
            reservations = repo.reservations.len(),
            "Collection loaded"
        );
        Ok(repo)
    }
}
