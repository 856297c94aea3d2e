//! Wire types for the HTTP API.

mod common;
mod users;

pub use common::HealthResponse;
pub use users::{
    CreateUserRequest, ListUsersResponse, UpdateUserRequest, UserResponse,
};
