use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A registered account, carrying the user's cocktail ratings keyed by
/// cocktail id. On the wire the map keys are string-encoded ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    /// Opaque one-way hash; see [`PasswordHasher`](crate::PasswordHasher).
    pub password_hash: String,
    pub ratings: HashMap<u32, u8>,
}

impl User {
    pub fn new(
        id: u32,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        User {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            ratings: HashMap::new(),
        }
    }

    /// Record a rating for a cocktail, replacing any previous one.
    /// Values outside 1..=5 are ignored.
    pub fn rate(&mut self, cocktail_id: u32, rating: u8) {
        if (1..=5).contains(&rating) {
            self.ratings.insert(cocktail_id, rating);
        }
    }

    /// The user's rating for a cocktail, if any.
    pub fn rating_for(&self, cocktail_id: u32) -> Option<u8> {
        self.ratings.get(&cocktail_id).copied()
    }

    /// Drop the user's rating for a cocktail, if present.
    pub fn remove_rating(&mut self, cocktail_id: u32) {
        self.ratings.remove(&cocktail_id);
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> u32 {
        self.id
    }
}
