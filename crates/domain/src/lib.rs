//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod user;
mod validate;

pub use user::{NewUser, UserId, UserPatch, UserRecord};
pub use validate::{
    FieldViolation, NAME_MAX_LENGTH, validate_new_user, validate_user_patch,
};
