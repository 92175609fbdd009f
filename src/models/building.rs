//! Municipal buildings and their display rooms

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Building id of the depot, where artworks live when not on display
pub const DEPOT_BUILDING_ID: i32 = 1;

/// Municipal building able to host artworks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MunicipalBuilding {
    pub id: i32,
    /// e.g. "Depot" for the depot building
    #[validate(length(min = 1, message = "Building name must not be empty"))]
    pub name: String,
    pub address: String,
}

/// Display room inside a building (many rooms per building)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DisplayRoom {
    pub id: i32,
    pub building_id: i32,
    /// Room label, unique only within its building
    #[validate(length(min = 1, message = "Room label must not be empty"))]
    pub room_in_building: String,
}
