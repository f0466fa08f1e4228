//! Route-level pages rendered into the content outlet.

pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
