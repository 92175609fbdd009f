//! In-memory repository of collection records
//!
//! Records are kept per entity, keyed by id in insertion order. Referential
//! invariants are checked when a record is added; nothing is ever written back.

pub mod artworks;
pub mod buildings;
pub mod loans;
pub mod seed;

use indexmap::IndexMap;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{AppUser, Artist, Artwork, DisplayRoom, Loan, MunicipalBuilding, Reservation},
};

pub use seed::CollectionSeed;

/// A record that can live in a [`Store`]
pub trait Record: Validate {
    const KIND: &'static str;

    fn id(&self) -> i32;
}

/// Records of one entity, keyed by id
#[derive(Debug, Clone)]
pub struct Store<T> {
    records: IndexMap<i32, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Record> Store<T> {
    /// Get a record by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&T> {
        self.records
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("{} with id {} not found", T::KIND, id)))
    }

    pub fn contains(&self, id: i32) -> bool {
        self.records.contains_key(&id)
    }

    /// All records in insertion order
    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, record: T) -> AppResult<()> {
        record.validate()?;
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(AppError::Conflict(format!("{} with id {} already exists", T::KIND, id)));
        }
        self.records.insert(id, record);
        tracing::debug!(kind = T::KIND, id, "Record added");
        Ok(())
    }
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> i32 {
                self.id
            }
        }
    };
}

impl_record!(Artwork, "Artwork");
impl_record!(Artist, "Artist");
impl_record!(MunicipalBuilding, "Building");
impl_record!(DisplayRoom, "Room");
impl_record!(Loan, "Loan");
impl_record!(Reservation, "Reservation");
impl_record!(AppUser, "User");

/// Main repository holding every record store
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub artworks: Store<Artwork>,
    pub artists: Store<Artist>,
    pub buildings: Store<MunicipalBuilding>,
    pub rooms: Store<DisplayRoom>,
    pub loans: Store<Loan>,
    pub reservations: Store<Reservation>,
    pub users: Store<AppUser>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_building(&mut self, building: MunicipalBuilding) -> AppResult<()> {
        self.buildings.insert(building)
    }

    pub fn add_room(&mut self, room: DisplayRoom) -> AppResult<()> {
        self.buildings.get_by_id(room.building_id)?;
        self.rooms.insert(room)
    }

    pub fn add_artist(&mut self, artist: Artist) -> AppResult<()> {
        self.artists.insert(artist)
    }

    pub fn add_artwork(&mut self, artwork: Artwork) -> AppResult<()> {
        self.buildings.get_by_id(artwork.building_id)?;
        for creator_id in &artwork.creator_ids {
            self.artists.get_by_id(*creator_id)?;
        }
        self.artworks.insert(artwork)
    }

    pub fn add_user(&mut self, user: AppUser) -> AppResult<()> {
        self.users.insert(user)
    }

    pub fn add_reservation(&mut self, reservation: Reservation) -> AppResult<()> {
        self.artworks.get_by_id(reservation.artwork_id)?;
        self.users.get_by_id(reservation.user_id)?;
        self.check_room_in_building(reservation.room_id, reservation.building_id)?;
        self.reservations.insert(reservation)
    }

    /// Add a loan; a room hosts at most one loan at a time
    pub fn add_loan(&mut self, loan: Loan) -> AppResult<()> {
        self.artworks.get_by_id(loan.artwork_id)?;
        self.users.get_by_id(loan.borrower_id)?;
        self.reservations.get_by_id(loan.reservation_id)?;
        self.check_room_in_building(loan.room_id, loan.building_id)?;

        if let Some(occupying) = self.loans.overlapping_in_room(&loan) {
            return Err(AppError::Conflict(format!(
                "Room {} is already occupied by loan {} during loan {}",
                loan.room_id, occupying.id, loan.id
            )));
        }

        self.loans.insert(loan)
    }

    fn check_room_in_building(&self, room_id: i32, building_id: i32) -> AppResult<()> {
        let room = self.rooms.get_by_id(room_id)?;
        if room.building_id != building_id {
            return Err(AppError::Validation(format!(
                "Room {} belongs to building {}, not {}",
                room_id, room.building_id, building_id
            )));
        }
        Ok(())
    }
}
