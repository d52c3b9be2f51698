pub mod store;
mod user;

pub use user::User;
