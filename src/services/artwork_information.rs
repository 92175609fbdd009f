//! Physical fit and style checks on artworks

use crate::{
    error::{AppError, AppResult},
    models::Artwork,
};

/// Checks artworks against display locations and user preferences.
///
/// Stateless; the results can serve as filters on a user's preferences.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArtworkInformationChecker;

impl ArtworkInformationChecker {
    pub fn new() -> Self {
        Self
    }

    /// Whether every compared dimension of the artwork is within the location's.
    ///
    /// Paintings hang against a wall, so their depth is never compared. Any other
    /// artwork needs a location depth, and every compared artwork dimension must be known.
    pub fn does_artwork_fit(
        &self,
        artwork: &Artwork,
        location_width_cm: u32,
        location_height_cm: u32,
        location_depth_cm: Option<u32>,
    ) -> AppResult<bool> {
        let mut comparisons = vec![
            ("width", artwork.width_cm, location_width_cm),
            ("height", artwork.height_cm, location_height_cm),
        ];

        if !artwork.is_painting() {
            let location_depth = location_depth_cm.ok_or_else(|| {
                AppError::DimensionMismatch(format!(
                    "artwork {} is not a painting, a location depth is required",
                    artwork.id
                ))
            })?;
            comparisons.push(("depth", artwork.depth_cm, location_depth));
        }

        let mut fits = true;
        for (name, artwork_dim, location_dim) in comparisons {
            let artwork_dim = artwork_dim.ok_or_else(|| {
                AppError::MissingDimension(format!("artwork {} has no {}", artwork.id, name))
            })?;
            fits &= artwork_dim <= location_dim;
        }

        tracing::debug!(artwork_id = artwork.id, fits, "Checked artwork fit");
        Ok(fits)
    }

    /// Exact, case-sensitive style match; no style only matches no style
    pub fn is_artwork_desired_style(&self, artwork: &Artwork, preferred_style: Option<&str>) -> bool {
        artwork.art_style.as_deref() == preferred_style
    }
}
