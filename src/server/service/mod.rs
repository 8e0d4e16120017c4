//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules that
//! go beyond a permission check (conflicts, parent and child consistency, protected
//! creator rights), coordinate several repositories and record the side effects of an
//! operation such as notifications and board activity entries.

pub mod activity;
pub mod assignee;
pub mod auth;
pub mod board;
pub mod board_list;
pub mod card;
pub mod image;
pub mod invitation;
pub mod label;
pub mod member;
pub mod notification;
pub mod oauth;
pub mod password_reset;
pub mod user;
pub mod workspace;
