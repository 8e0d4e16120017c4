//! Stateless helpers shared across the server layers.

pub mod password;
pub mod position;
pub mod validate;
