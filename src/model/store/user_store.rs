use crate::model::store::UserLookup;
use crate::model::User;

/// What the signup flow needs: check a name is free, then store the new user.
pub trait SignupUserDataAccess {
    fn exists_by_name(&self, identifier: &str) -> bool;

    /// Inserts or replaces the record keyed by `user.name()`.
    fn save(&mut self, user: User);
}

/// What the login flow needs: look a user up, then record who is logged in.
pub trait LoginUserDataAccess: UserLookup {
    /// Overwrites the current user. The name is not checked against stored records.
    fn set_current_user(&mut self, name: String);

    fn current_user(&self) -> Option<&str>;
}

pub trait ChangePasswordUserDataAccess: UserLookup {
    /// Replaces the record keyed by `user.name()`, creating it if absent.
    fn change_password(&mut self, user: User);
}
