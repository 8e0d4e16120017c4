//! Request and response DTOs shared by the HTTP layer.
//!
//! These types define the JSON shapes of the API and derive `ToSchema` for the
//! OpenAPI document. Server-side domain models convert into them at the controller
//! boundary.

pub mod activity;
pub mod api;
pub mod assignee;
pub mod auth;
pub mod board;
pub mod card;
pub mod invitation;
pub mod label;
pub mod list;
pub mod member;
pub mod notification;
pub mod user;
pub mod workspace;
