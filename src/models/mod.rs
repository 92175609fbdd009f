//! Data models for the museum collection

pub mod artist;
pub mod artwork;
pub mod building;
pub mod loan;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use artist::Artist;
pub use artwork::{Artwork, LOCATION_SENSITIVE_CATEGORY, PAINTING};
pub use building::{DisplayRoom, MunicipalBuilding};
pub use loan::Loan;
pub use reservation::Reservation;
pub use user::AppUser;
