//! Building and display room lookups

use super::Store;
use crate::models::{DisplayRoom, MunicipalBuilding};

impl Store<MunicipalBuilding> {
    /// Find a building by its exact name
    pub fn find_by_name(&self, name: &str) -> Option<&MunicipalBuilding> {
        self.list().find(|building| building.name == name)
    }
}

impl Store<DisplayRoom> {
    pub fn list_for_building(&self, building_id: i32) -> impl Iterator<Item = &DisplayRoom> {
        self.list().filter(move |room| room.building_id == building_id)
    }
}
