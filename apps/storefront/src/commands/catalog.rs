//! # Catalog Commands
//!
//! Read-only browsing over the static catalog.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use haven_core::{Book, DEFAULT_QUERY_LIMIT, NEW_RELEASES_LIMIT};

use crate::error::AppResult;
use crate::storefront::Storefront;

/// A book page: the book plus same-genre suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailResponse {
    pub book: Book,
    pub related: Vec<Book>,
    /// Copies of this book already in the cart.
    pub in_cart: i64,
}

/// The shelves on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub top_rated: Vec<Book>,
    pub new_releases: Vec<Book>,
    pub recommended: Vec<Book>,
}

fn owned(books: Vec<&Book>) -> Vec<Book> {
    books.into_iter().cloned().collect()
}

pub fn list_books(storefront: &Storefront) -> Vec<Book> {
    storefront.catalog.books().to_vec()
}

/// Looks up a book with its related titles.
///
/// ## Errors
/// `NOT_FOUND` for an unknown id.
pub fn get_book(storefront: &Storefront, book_id: &str) -> AppResult<BookDetailResponse> {
    let book = storefront.catalog.require_book(book_id)?;
    let related = owned(storefront.catalog.related_books(book, DEFAULT_QUERY_LIMIT));
    let in_cart = storefront
        .cart
        .cart()
        .get(book_id)
        .map_or(0, |entry| entry.quantity);

    Ok(BookDetailResponse {
        book: book.clone(),
        related,
        in_cart,
    })
}

/// Case-insensitive substring search over title, author and genre.
///
/// The query is matched as given. An empty query returns the whole catalog.
pub fn search_books(storefront: &Storefront, query: &str) -> Vec<Book> {
    let results = owned(storefront.catalog.search(query));
    debug!(query, count = results.len(), "search_books");
    results
}

pub fn get_home(storefront: &Storefront) -> HomeResponse {
    HomeResponse {
        top_rated: owned(storefront.catalog.top_rated(DEFAULT_QUERY_LIMIT)),
        new_releases: owned(storefront.catalog.new_releases(NEW_RELEASES_LIMIT)),
        recommended: storefront.recommendations.results().to_vec(),
    }
}

pub fn list_genres(storefront: &Storefront) -> Vec<String> {
    storefront
        .catalog
        .genres()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::StorefrontConfig;

    async fn storefront() -> Storefront {
        let (storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();
        storefront
    }

    #[tokio::test]
    async fn test_get_book_with_related() {
        let mut storefront = storefront().await;
        let book = storefront.catalog.get_book_by_id("1").unwrap().clone();
        storefront.cart.add_to_cart(&book, 2).await;

        let detail = get_book(&storefront, "1").unwrap();

        assert_eq!(detail.book.title, "The Silent Patient");
        assert!(detail.related.iter().all(|b| b.genre == detail.book.genre));
        assert!(detail.related.iter().all(|b| b.id != "1"));
        assert_eq!(detail.in_cart, 2);
    }

    #[tokio::test]
    async fn test_get_unknown_book() {
        let storefront = storefront().await;

        let err = get_book(&storefront, "99").unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_search_books() {
        let storefront = storefront().await;

        let results = search_books(&storefront, "HAIG");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "4");

        assert_eq!(search_books(&storefront, "").len(), 8);
        // Matched verbatim: no trimming, no length limit
        assert!(search_books(&storefront, " haig ").is_empty());
        assert!(search_books(&storefront, &"x".repeat(500)).is_empty());
        assert_eq!(search_books(&storefront, "matt haig").len(), 1);
    }

    #[tokio::test]
    async fn test_home_shelves() {
        let storefront = storefront().await;

        let home = get_home(&storefront);

        let top: Vec<&str> = home.top_rated.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(top, ["2", "6", "3", "5"]);
        assert_eq!(home.new_releases.len(), 5);
        assert_eq!(home.recommended.len(), 4);
        assert_eq!(list_genres(&storefront).len(), 7);
    }
}
