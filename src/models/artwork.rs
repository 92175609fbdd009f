//! Artwork model and related types

use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, OneOrMany};
use validator::Validate;

use super::building::DEPOT_BUILDING_ID;

/// Art type for flat works hung against a wall; depth is not compared for these
pub const PAINTING: &str = "painting";

/// Category whose availability depends on the building the artwork is in.
/// Other categories (e.g. works with interchangeable copies) are available anywhere.
pub const LOCATION_SENSITIVE_CATEGORY: i16 = 1;

/// Artwork in the collection
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Artwork {
    pub id: i32,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    /// Artists who created the work; a single id is accepted
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default)]
    pub creator_ids: Vec<i32>,
    /// Building the artwork currently is in
    #[serde(default = "default_building_id")]
    pub building_id: i32,
    pub width_cm: Option<u32>,
    pub height_cm: Option<u32>,
    pub depth_cm: Option<u32>,
    pub year_of_creation: Option<i32>,
    pub art_type: Option<String>,
    pub art_style: Option<String>,
    /// Live loan status, kept on the artwork apart from loan records
    #[serde(default)]
    pub is_lent_out: bool,
    pub category: Option<i16>,
}

fn default_building_id() -> i32 {
    DEPOT_BUILDING_ID
}

impl Artwork {
    /// Minimal artwork stored in the depot, without dimensions or classification
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            creator_ids: Vec::new(),
            building_id: DEPOT_BUILDING_ID,
            width_cm: None,
            height_cm: None,
            depth_cm: None,
            year_of_creation: None,
            art_type: None,
            art_style: None,
            is_lent_out: false,
            category: None,
        }
    }

    pub fn is_painting(&self) -> bool {
        self.art_type.as_deref() == Some(PAINTING)
    }

    pub fn is_location_sensitive(&self) -> bool {
        self.category == Some(LOCATION_SENSITIVE_CATEGORY)
    }
}
