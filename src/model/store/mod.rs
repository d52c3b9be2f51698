mod user_store;

use crate::model::User;

/// Read access to stored users, shared by the login and change-password roles.
pub trait UserLookup {
    /// Returns the most recently saved user under `username`, if any.
    fn get(&self, username: &str) -> Option<&User>;
}

pub use user_store::*;
