//! Artwork and artist lookups

use super::Store;
use crate::models::{Artist, Artwork};

impl Store<Artwork> {
    /// Artworks created (alone or together) by the given artist
    pub fn list_by_creator(&self, artist_id: i32) -> impl Iterator<Item = &Artwork> {
        self.list()
            .filter(move |artwork| artwork.creator_ids.contains(&artist_id))
    }

    /// Artworks currently in the given building
    pub fn list_in_building(&self, building_id: i32) -> impl Iterator<Item = &Artwork> {
        self.list()
            .filter(move |artwork| artwork.building_id == building_id)
    }
}

impl Store<Artist> {
    /// Creators of an artwork, skipping unknown ids
    pub fn creators_of<'a>(&'a self, artwork: &'a Artwork) -> impl Iterator<Item = &'a Artist> {
        artwork
            .creator_ids
            .iter()
            .filter_map(move |id| self.get_by_id(*id).ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Artwork;
    use crate::repository::tests::sample_repository;

    #[test]
    fn test_list_by_creator() {
        let mut repo = sample_repository();
        let mut bust = Artwork::new(3, "Balzac");
        bust.creator_ids = vec![1];
        repo.add_artwork(bust).unwrap();
        repo.add_artwork(Artwork::new(4, "Anoniem")).unwrap();

        let titles: Vec<_> = repo.artworks.list_by_creator(1).map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Le Penseur", "Balzac"]);
        assert_eq!(repo.artworks.list_by_creator(2).count(), 0);
    }

    #[test]
    fn test_list_in_building() {
        let mut repo = sample_repository();
        repo.add_artwork(Artwork::new(3, "In depot")).unwrap();
        assert_eq!(repo.artworks.list_in_building(1).count(), 1);
        assert_eq!(repo.artworks.list_in_building(2).count(), 1);
    }

    #[test]
    fn test_creators_of() {
        let repo = sample_repository();
        let artwork = repo.artworks.get_by_id(2).unwrap();
        let names: Vec<_> = repo.artists.creators_of(artwork).map(|a| a.full_name()).collect();
        assert_eq!(names, vec!["Auguste Rodin"]);
    }
}
