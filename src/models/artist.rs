//! Artist model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Creator of one or more artworks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Artist {
    pub id: i32,
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    /// Reference page about the artist
    #[validate(url(message = "Invalid artist URL"))]
    pub url: String,
}

impl Artist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
