//! AccountService - registration, login, and profile management on top
//! of the record store.

mod hasher;
mod validate;

pub use hasher::{PasswordHasher, Sha256Hasher};

use crate::catalog::User;
use crate::rating::RatingService;
use crate::store::{RecordStore, StoreError};

/// Account registration and authentication.
///
/// Credential hashing goes through the [`PasswordHasher`] seam;
/// [`Sha256Hasher`] is the shipped implementation. Login failure never
/// says whether the username or the password was wrong.
pub struct AccountService<S: RecordStore, H: PasswordHasher = Sha256Hasher> {
    store: S,
    ratings: RatingService<S>,
    hasher: H,
}

impl<S: RecordStore + Clone> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self::with_hasher(store, Sha256Hasher)
    }
}

impl<S: RecordStore + Clone, H: PasswordHasher> AccountService<S, H> {
    pub fn with_hasher(store: S, hasher: H) -> Self {
        AccountService {
            ratings: RatingService::new(store.clone()),
            store,
            hasher,
        }
    }

    /// Create an account. Returns false, writing nothing, when the
    /// username (3-20 word characters), email, or password (6+
    /// characters) fails validation, or when the username is taken.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        if !validate::is_valid_username(username)
            || !validate::is_valid_email(email)
            || !validate::is_valid_password(password)
        {
            return Ok(false);
        }
        if self.find_by_username(username)?.is_some() {
            return Ok(false);
        }

        let id = self.store.next_id::<User>()?;
        let user = User::new(id, username, email, self.hasher.hash(password));
        self.store.add(&user)?;
        Ok(true)
    }

    /// Authenticate. An unknown username and a wrong password both come
    /// back as None.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .find_by_username(username)?
            .filter(|user| self.hasher.verify(password, &user.password_hash)))
    }

    /// Exact-match lookup by username.
    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.store.find_one(&|user: &User| user.username == username)
    }

    pub fn user_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.find_by_username(username)?.is_some())
    }

    pub fn user(&self, id: u32) -> Result<Option<User>, StoreError> {
        self.store.get(id)
    }

    /// Submit a rating on the user's behalf. The range check here is
    /// deliberately repeated; [`RatingService`] rejects out-of-range
    /// values on its own as well.
    pub fn rate(&self, user_id: u32, cocktail_id: u32, rating: u8) -> Result<(), StoreError> {
        if !(1..=5).contains(&rating) {
            return Ok(());
        }
        self.ratings.rate(user_id, cocktail_id, rating)
    }

    /// The rating this user gave a cocktail, if any.
    pub fn user_rating(&self, user_id: u32, cocktail_id: u32) -> Result<Option<u8>, StoreError> {
        self.ratings.user_rating(user_id, cocktail_id)
    }

    /// Replace a user record wholesale, keyed by its id. Unknown ids
    /// change nothing.
    pub fn update_profile(&self, user: &User) -> Result<(), StoreError> {
        self.store.update(user)
    }

    pub fn delete_user(&self, id: u32) -> Result<(), StoreError> {
        self.store.delete::<User>(id)
    }
}
