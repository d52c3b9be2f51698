use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::StoreConfig;
use crate::model::store::{
    ChangePasswordUserDataAccess, LoginUserDataAccess, SignupUserDataAccess, UserLookup,
};
use crate::model::User;

/// Keeps users in a map for the lifetime of the process. Nothing is persisted and
/// nothing is ever removed.
///
/// Mutations take `&mut self`; share an instance across threads by wrapping it in a
/// lock.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, User>,
    current_user: Option<String>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store seeded from `config`. Users are saved in order, so a repeated
    /// name keeps its last entry.
    pub fn from_config(config: StoreConfig) -> Self {
        let mut store = Self::new();
        for user in config.users {
            store.save(user);
        }
        if let Some(name) = config.current_user {
            store.set_current_user(name);
        }
        debug!(users = store.len(), "seeded user store from config");
        store
    }

    pub fn exists_by_name(&self, identifier: &str) -> bool {
        self.users.contains_key(identifier)
    }

    pub fn save(&mut self, user: User) {
        let replaced = self.users.insert(user.name().to_owned(), user).is_some();
        trace!(replaced, "saved user");
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        let user = self.users.get(username);
        trace!(username, found = user.is_some(), "looked up user");
        user
    }

    /// Same as [`save`](Self::save): the record is replaced whether or not one existed.
    pub fn change_password(&mut self, user: User) {
        debug!(username = user.name(), "changing password");
        self.save(user);
    }

    pub fn set_current_user(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(username = %name, "current user set");
        self.current_user = Some(name);
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserLookup for InMemoryUserStore {
    fn get(&self, username: &str) -> Option<&User> {
        InMemoryUserStore::get(self, username)
    }
}

impl SignupUserDataAccess for InMemoryUserStore {
    fn exists_by_name(&self, identifier: &str) -> bool {
        InMemoryUserStore::exists_by_name(self, identifier)
    }

    fn save(&mut self, user: User) {
        InMemoryUserStore::save(self, user)
    }
}

impl LoginUserDataAccess for InMemoryUserStore {
    fn set_current_user(&mut self, name: String) {
        InMemoryUserStore::set_current_user(self, name)
    }

    fn current_user(&self) -> Option<&str> {
        InMemoryUserStore::current_user(self)
    }
}

impl ChangePasswordUserDataAccess for InMemoryUserStore {
    fn change_password(&mut self, user: User) {
        InMemoryUserStore::change_password(self, user)
    }
}
