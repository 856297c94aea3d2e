//! Application services and ports.

#![forbid(unsafe_code)]

mod user_service;

pub use user_service::{USERS_PER_PAGE, UserPage, UserRepository, UserService};
