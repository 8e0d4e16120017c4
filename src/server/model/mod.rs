//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request input into the service layer.

pub mod activity;
pub mod assignee;
pub mod board;
pub mod board_list;
pub mod card;
pub mod invitation;
pub mod label;
pub mod member;
pub mod notification;
pub mod user;
pub mod verification_code;
pub mod workspace;
