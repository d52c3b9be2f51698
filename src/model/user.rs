use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record as handed to the store. The password is opaque and kept verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    password: String,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}
