//! Networking modules for the auction API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the API base URL and key, `api` performs the auth and
//! profile calls the session store needs, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
