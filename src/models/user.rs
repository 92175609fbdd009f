//! Application user model

use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, OneOrMany};
use validator::Validate;

/// User of the application (borrower or reserving party)
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppUser {
    pub id: i32,
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    /// Locations the user can host artworks at; a single name is accepted
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default)]
    pub locations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_location_is_accepted() {
        let user: AppUser = serde_json::from_value(json!({
            "id": 3,
            "first_name": "Anna",
            "last_name": "de Vries",
            "locations": "Stadhuis"
        }))
        .unwrap();
        assert_eq!(user.locations, vec!["Stadhuis".to_string()]);
    }

    #[test]
    fn test_locations_serialize_as_list() {
        let user = AppUser {
            id: 3,
            first_name: "Anna".to_string(),
            last_name: "de Vries".to_string(),
            locations: vec!["Stadhuis".to_string()],
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["locations"], json!(["Stadhuis"]));
    }
}
