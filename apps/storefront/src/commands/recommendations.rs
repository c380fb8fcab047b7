//! # Recommendation Commands
//!
//! The genre picker and the "generate" button on the recommendations page.

use serde::Serialize;
use ts_rs::TS;

use haven_core::Book;

use crate::state::PREFERENCE_GENRES;
use crate::storefront::Storefront;

/// Everything the recommendations page draws.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    /// Genres offered in the picker.
    pub genres: Vec<String>,
    pub preferences: Vec<String>,
    pub books: Vec<Book>,
    pub loading: bool,
}

impl RecommendationsResponse {
    fn current(storefront: &Storefront) -> Self {
        let state = &storefront.recommendations;
        RecommendationsResponse {
            genres: PREFERENCE_GENRES.iter().map(|g| g.to_string()).collect(),
            preferences: state.preferences().to_vec(),
            books: state.results().to_vec(),
            loading: state.is_loading(),
        }
    }
}

pub fn get_recommendations(storefront: &Storefront) -> RecommendationsResponse {
    RecommendationsResponse::current(storefront)
}

pub fn toggle_genre(storefront: &mut Storefront, genre: &str) -> RecommendationsResponse {
    storefront.recommendations.toggle_genre(genre);
    RecommendationsResponse::current(storefront)
}

/// Regenerates the picks from the selected genres after the simulated delay.
pub async fn generate(storefront: &mut Storefront) -> RecommendationsResponse {
    storefront
        .recommendations
        .generate(&storefront.catalog, &mut storefront.rng, &storefront.latency)
        .await;
    RecommendationsResponse::current(storefront)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StorefrontConfig;

    #[tokio::test]
    async fn test_toggle_and_generate() {
        let (mut storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let page = toggle_genre(&mut storefront, "Science Fiction");
        assert_eq!(page.preferences, ["Science Fiction"]);
        assert_eq!(page.genres.len(), 10);

        let page = generate(&mut storefront).await;

        assert_eq!(page.books.len(), 4);
        assert_eq!(page.books[0].genre, "Science Fiction");
        assert!(!page.loading);
    }
}
