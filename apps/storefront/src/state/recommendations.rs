//! # Recommendations
//!
//! The "AI-powered" recommender: a genre picker over
//! [`Catalog::recommended_books`] with a simulated thinking delay.

use rand::Rng;
use tracing::debug;

use haven_core::{Book, Catalog, DEFAULT_QUERY_LIMIT};

use crate::latency::{LatencyKind, SimulatedLatency};

/// Genres offered in the preference picker.
pub const PREFERENCE_GENRES: [&str; 10] = [
    "Fiction",
    "Science Fiction",
    "Fantasy",
    "Thriller",
    "Mystery",
    "Romance",
    "Self-Help",
    "History",
    "Biography",
    "Memoir",
];

/// Preferences preselected once a user signs in.
pub const DEFAULT_PREFERENCES: [&str; 2] = ["Fiction", "Thriller"];

#[derive(Debug, Clone, Default)]
pub struct RecommendationState {
    preferences: Vec<String>,
    results: Vec<Book>,
    loading: bool,
}

impl RecommendationState {
    /// Starts with a random pick from the whole catalog.
    pub fn new<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        RecommendationState {
            preferences: Vec::new(),
            results: catalog
                .recommended_books::<String, _>(&[], DEFAULT_QUERY_LIMIT, rng)
                .into_iter()
                .cloned()
                .collect(),
            loading: false,
        }
    }

    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    pub fn results(&self) -> &[Book] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Preselects the default genres for a freshly signed-in user.
    pub fn apply_default_preferences(&mut self) {
        self.preferences = DEFAULT_PREFERENCES.iter().map(|g| g.to_string()).collect();
    }

    /// Selects or deselects a genre. Returns whether it is now selected.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        if let Some(index) = self.preferences.iter().position(|g| g == genre) {
            self.preferences.remove(index);
            false
        } else {
            self.preferences.push(genre.to_string());
            true
        }
    }

    /// Regenerates the recommendations after the simulated delay.
    pub async fn generate<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
        latency: &SimulatedLatency,
    ) -> &[Book] {
        debug!(preferences = ?self.preferences, "Generating recommendations");
        self.loading = true;
        latency.wait(LatencyKind::Recommendations).await;

        self.results = catalog
            .recommended_books(&self.preferences, DEFAULT_QUERY_LIMIT, rng)
            .into_iter()
            .cloned()
            .collect();
        self.loading = false;

        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;
    use tokio::time::Instant;

    #[test]
    fn test_initial_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = RecommendationState::new(&Catalog::seeded(), &mut rng);

        assert_eq!(state.results().len(), 4);
        assert!(state.preferences().is_empty());
    }

    #[test]
    fn test_toggle_genre() {
        let mut state = RecommendationState::default();
        state.apply_default_preferences();

        assert!(!state.toggle_genre("Thriller"));
        assert!(state.toggle_genre("Memoir"));
        assert_eq!(state.preferences(), ["Fiction", "Memoir"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_and_prefers_genres() {
        let catalog = Catalog::seeded();
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = RecommendationState::default();
        state.apply_default_preferences();

        let start = Instant::now();
        let results = state
            .generate(&catalog, &mut rng, &SimulatedLatency::default())
            .await;

        // Fiction and Thriller only have three books; they lead the list
        let ids: Vec<&str> = results.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(&ids[..3], ["1", "2", "4"]);
        assert_eq!(ids.len(), 4);
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_same_seed_same_results() {
        let catalog = Catalog::seeded();
        let mut a = RecommendationState::default();
        let mut b = RecommendationState::default();

        let first: Vec<String> = a
            .generate(&catalog, &mut StdRng::seed_from_u64(9), &SimulatedLatency::none())
            .await
            .iter()
            .map(|book| book.id.clone())
            .collect();
        let second: Vec<String> = b
            .generate(&catalog, &mut StdRng::seed_from_u64(9), &SimulatedLatency::none())
            .await
            .iter()
            .map(|book| book.id.clone())
            .collect();

        assert_eq!(first, second);
    }
}
