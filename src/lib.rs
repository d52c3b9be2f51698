//! In-memory user data-access object.
//!
//! [`InMemoryUserStore`] keeps user records keyed by name together with the name of
//! the currently logged-in user. Callers depend on the narrow capability traits in
//! [`model::store`] rather than on the concrete store.

pub mod config;
pub mod model;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use model::store::{
    ChangePasswordUserDataAccess, LoginUserDataAccess, SignupUserDataAccess, UserLookup,
};
pub use model::User;
pub use store::InMemoryUserStore;
