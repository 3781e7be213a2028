//! RatingService - keeps each cocktail's derived average rating in step
//! with the ratings stored on user records.

use crate::catalog::{Cocktail, User};
use crate::store::{RecordStore, StoreError};

/// Maintains `Cocktail::average_rating` as the mean of every stored
/// user rating referencing the cocktail.
///
/// Submitting a rating writes the user record first and then recomputes
/// the average with a scan over all users, so the fresh rating is
/// already visible to the scan. The scan is O(users) per submission,
/// which is fine at catalog scale.
pub struct RatingService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RatingService<S> {
    pub fn new(store: S) -> Self {
        RatingService { store }
    }

    /// Submit a user's rating for a cocktail, replacing any previous
    /// one, then recompute and persist the cocktail's average.
    ///
    /// Ratings outside 1..=5 and unknown user ids change nothing.
    pub fn rate(&self, user_id: u32, cocktail_id: u32, rating: u8) -> Result<(), StoreError> {
        if !(1..=5).contains(&rating) {
            return Ok(());
        }
        let mut user = match self.store.get::<User>(user_id)? {
            Some(user) => user,
            None => return Ok(()),
        };
        user.rate(cocktail_id, rating);
        self.store.update(&user)?;
        self.recompute_average(cocktail_id)
    }

    /// Withdraw a user's rating for a cocktail, if present.
    ///
    /// The cocktail's stored average is left as it was; only the rate
    /// path recomputes it.
    pub fn unrate(&self, user_id: u32, cocktail_id: u32) -> Result<(), StoreError> {
        let mut user = match self.store.get::<User>(user_id)? {
            Some(user) => user,
            None => return Ok(()),
        };
        user.remove_rating(cocktail_id);
        self.store.update(&user)
    }

    /// The rating a user gave a cocktail; None when the user is unknown
    /// or has not rated it.
    pub fn user_rating(&self, user_id: u32, cocktail_id: u32) -> Result<Option<u8>, StoreError> {
        Ok(self
            .store
            .get::<User>(user_id)?
            .and_then(|user| user.rating_for(cocktail_id)))
    }

    /// Re-derive the cocktail's average from every rating that
    /// references it and persist the result; 0 when nobody has rated
    /// it. Nothing to update when the cocktail id is unknown.
    fn recompute_average(&self, cocktail_id: u32) -> Result<(), StoreError> {
        let mut sum = 0u32;
        let mut count = 0u32;
        for user in self.store.list::<User>()? {
            if let Some(rating) = user.rating_for(cocktail_id) {
                sum += u32::from(rating);
                count += 1;
            }
        }

        let mut cocktail = match self.store.get::<Cocktail>(cocktail_id)? {
            Some(cocktail) => cocktail,
            None => return Ok(()),
        };
        cocktail.average_rating = if count > 0 {
            f64::from(sum) / f64::from(count)
        } else {
            0.0
        };
        self.store.update(&cocktail)
    }
}
