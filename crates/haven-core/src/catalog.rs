//! # Catalog
//!
//! The static in-memory book catalog and its query helpers.
//!
//! Every helper is a pure, side-effect-free scan over the materialized book
//! list. The catalog is small, so there is no indexing, caching or
//! pagination.
//!
//! ## Query Helpers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Helper                 Used By              Ordering                   │
//! │  ──────                 ───────              ────────                   │
//! │  get_book_by_id         Book detail          first match                │
//! │  related_books          Book detail          catalog order, same genre  │
//! │  recommended_books      Home / recommender   random (injected rng)      │
//! │  top_rated              Home                 rating desc, stable        │
//! │  new_releases           Home                 publication date desc      │
//! │  search                 Search bar           catalog order              │
//! │  admin_search           Admin book list      catalog order              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Book;

/// The book catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates a catalog over the given books.
    pub fn new(books: Vec<Book>) -> Self {
        Catalog { books }
    }

    /// Creates the storefront's built-in catalog.
    pub fn seeded() -> Self {
        Catalog::new(seed_books())
    }

    /// All books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Finds a book by id (first match).
    pub fn get_book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Like [`Catalog::get_book_by_id`] but a missing book is an error.
    pub fn require_book(&self, id: &str) -> CoreResult<&Book> {
        self.get_book_by_id(id)
            .ok_or_else(|| CoreError::BookNotFound(id.to_string()))
    }

    /// Other books of the same genre, in catalog order, at most `limit`.
    pub fn related_books(&self, book: &Book, limit: usize) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.id != book.id && b.genre == book.genre)
            .take(limit)
            .collect()
    }

    /// Recommends up to `limit` books for a set of preferred genres.
    ///
    /// ## Selection
    /// ```text
    /// genres empty?            ──► random sample of the whole catalog
    /// matches >= limit?        ──► random sample of the matches
    /// otherwise                ──► all matches (catalog order)
    ///                              + shuffled non-matching books
    /// ```
    ///
    /// Genre matching is exact. The random source is injected so callers can
    /// seed it for reproducible results.
    pub fn recommended_books<S, R>(&self, genres: &[S], limit: usize, rng: &mut R) -> Vec<&Book>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if genres.is_empty() {
            let mut shuffled: Vec<&Book> = self.books.iter().collect();
            shuffled.shuffle(rng);
            shuffled.truncate(limit);
            return shuffled;
        }

        let (mut matching, mut others): (Vec<&Book>, Vec<&Book>) = self
            .books
            .iter()
            .partition(|b| genres.iter().any(|g| g.as_ref() == b.genre));

        if matching.len() >= limit {
            matching.shuffle(rng);
            matching.truncate(limit);
            return matching;
        }

        others.shuffle(rng);
        matching.extend(others);
        matching.truncate(limit);
        matching
    }

    /// The `limit` highest-rated books. Ties keep catalog order.
    pub fn top_rated(&self, limit: usize) -> Vec<&Book> {
        let mut sorted: Vec<&Book> = self.books.iter().collect();
        sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        sorted.truncate(limit);
        sorted
    }

    /// The `limit` most recently published books.
    pub fn new_releases(&self, limit: usize) -> Vec<&Book> {
        let mut sorted: Vec<&Book> = self.books.iter().collect();
        sorted.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));
        sorted.truncate(limit);
        sorted
    }

    /// Case-insensitive substring search over title, author and genre.
    ///
    /// An empty query matches every book.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
                    || b.genre.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Admin book-list filter: title or author only.
    pub fn admin_search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Distinct genres, in the order they first appear.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for book in &self.books {
            if !genres.contains(&book.genre.as_str()) {
                genres.push(&book.genre);
            }
        }
        genres
    }

    /// Summary figures for the admin dashboard.
    pub fn stats(&self) -> CatalogStats {
        let total_books = self.books.len();
        let in_stock = self.books.iter().filter(|b| b.in_stock).count();
        let average_rating = if total_books == 0 {
            0.0
        } else {
            self.books.iter().map(|b| b.rating).sum::<f32>() / total_books as f32
        };

        CatalogStats {
            total_books,
            in_stock,
            average_rating,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seeded()
    }
}

/// Catalog figures shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_books: usize,
    pub in_stock: usize,
    pub average_rating: f32,
}

// =============================================================================
// Seed Data
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    cover_image: &str,
    price_cents: i64,
    rating: f32,
    genre: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
    pages: u32,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover_image: cover_image.to_string(),
        price: Money::from_cents(price_cents),
        rating,
        genre: genre.to_string(),
        description: description.to_string(),
        publication_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        pages,
        in_stock: true,
    }
}

const COVER_QUERY: &str = "?auto=compress&cs=tinysrgb&dpr=2&h=650&w=940";

fn cover(photo: &str) -> String {
    format!("https://images.pexels.com/photos/{}{}", photo, COVER_QUERY)
}

fn seed_books() -> Vec<Book> {
    vec![
        book(
            "1",
            "The Silent Patient",
            "Alex Michaelides",
            &cover("6373305/pexels-photo-6373305.jpeg"),
            2499,
            4.6,
            "Thriller",
            "Alicia Berenson's life is seemingly perfect. A famous painter married to an in-demand fashion photographer, she lives in a grand house in one of London's most desirable areas. One evening her husband Gabriel returns home late from a fashion shoot, and Alicia shoots him five times in the face, and then never speaks another word.",
            (2019, 2, 5),
            336,
        ),
        book(
            "2",
            "Where the Crawdads Sing",
            "Delia Owens",
            &cover("3747139/pexels-photo-3747139.jpeg"),
            2295,
            4.8,
            "Fiction",
            "For years, rumors of the \"Marsh Girl\" have haunted Barkley Cove, a quiet town on the North Carolina coast. So in late 1969, when handsome Chase Andrews is found dead, the locals immediately suspect Kya Clark, the so-called Marsh Girl. But Kya is not what they say.",
            (2018, 8, 14),
            384,
        ),
        book(
            "3",
            "Atomic Habits",
            "James Clear",
            &cover("6475045/pexels-photo-6475045.jpeg"),
            1899,
            4.7,
            "Self-Help",
            "No matter your goals, Atomic Habits offers a proven framework for improving every day. James Clear, one of the world's leading experts on habit formation, reveals practical strategies that will teach you exactly how to form good habits, break bad ones, and master the tiny behaviors that lead to remarkable results.",
            (2018, 10, 16),
            320,
        ),
        book(
            "4",
            "The Midnight Library",
            "Matt Haig",
            &cover("4753997/pexels-photo-4753997.jpeg"),
            2049,
            4.5,
            "Fiction",
            "Between life and death there is a library, and within that library, the shelves go on forever. Every book provides a chance to try another life you could have lived. To see how things would be if you had made other choices... Would you have done anything different, if you had the chance to undo your regrets?",
            (2020, 9, 29),
            304,
        ),
        book(
            "5",
            "Educated: A Memoir",
            "Tara Westover",
            &cover("6344231/pexels-photo-6344231.jpeg"),
            1695,
            4.7,
            "Memoir",
            "Born to survivalists in the mountains of Idaho, Tara Westover was seventeen the first time she set foot in a classroom. Her family was so isolated from mainstream society that there was no one to ensure the children received an education, and no one to intervene when one of Tara's older brothers became violent.",
            (2018, 2, 20),
            352,
        ),
        book(
            "6",
            "Project Hail Mary",
            "Andy Weir",
            &cover("41162/moon-landing-apollo-11-nasa-buzz-aldrin-41162.jpeg"),
            2549,
            4.8,
            "Science Fiction",
            "Ryland Grace is the sole survivor on a desperate, last-chance mission, and if he fails, humanity and the earth itself will perish. Except that right now, he doesn't know that. He can't even remember his own name, let alone the nature of his assignment or how to complete it.",
            (2021, 5, 4),
            496,
        ),
        book(
            "7",
            "The Four Winds",
            "Kristin Hannah",
            &cover("7299908/pexels-photo-7299908.jpeg"),
            2399,
            4.5,
            "Historical Fiction",
            "Texas, 1934. Millions are out of work and a drought has broken the Great Plains. Farmers are fighting to keep their land and their livelihoods as the crops are failing, the water is drying up, and dust threatens to bury them all. One of the darkest periods of the Great Depression, the Dust Bowl era, has arrived with a vengeance.",
            (2021, 2, 2),
            464,
        ),
        book(
            "8",
            "The Invisible Life of Addie LaRue",
            "V.E. Schwab",
            &cover("6801651/pexels-photo-6801651.jpeg"),
            2199,
            4.6,
            "Fantasy",
            "France, 1714: in a moment of desperation, a young woman makes a Faustian bargain to live forever and is cursed to be forgotten by everyone she meets. Thus begins the extraordinary life of Addie LaRue, and a dazzling adventure that will play out across centuries and continents, across history and art, as a young woman learns how far she will go to leave her mark on the world.",
            (2020, 10, 6),
            448,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
