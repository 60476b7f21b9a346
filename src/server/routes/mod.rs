//! Request handlers.

pub mod health;
pub mod identify;
pub mod species;
