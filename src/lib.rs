//! mixbook - the data layer for a small cocktail catalog.
//!
//! Recipes and user accounts live in memory and persist as
//! human-readable JSON files, one per collection, rewritten in full on
//! every mutation. A cocktail's average rating is derived from the
//! ratings stored on user records and recomputed whenever one is
//! submitted.
//!
//! ```no_run
//! use mixbook::{query, AccountService, Cocktail, RatingService, RecordStore};
//!
//! # fn main() -> Result<(), mixbook::StoreError> {
//! let store = mixbook::open("data")?;
//!
//! let cocktails = store.list::<Cocktail>()?;
//! let quick = query::filter_by_max_preparation_time(&cocktails, 10);
//!
//! let accounts = AccountService::new(store.clone());
//! accounts.register("maria_k", "maria@example.com", "secret1")?;
//!
//! let ratings = RatingService::new(store);
//! ratings.rate(1, 2, 5)?;
//! # Ok(())
//! # }
//! ```

mod account;
mod catalog;
pub mod query;
mod rating;
mod store;

pub use account::{AccountService, PasswordHasher, Sha256Hasher};
pub use catalog::{open, starter_cocktails, Cocktail, Ingredient, PreparationStep, User};
pub use rating::RatingService;
pub use store::{
    FileStorage, InMemoryStorage, JsonRecordStore, Record, RecordStore, Storage, StoreError,
};
