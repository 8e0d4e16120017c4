pub mod activity;
pub mod assignee;
pub mod auth;
pub mod board;
pub mod board_list;
pub mod card;
pub mod invitation;
pub mod label;
pub mod member;
pub mod notification;
pub mod password_reset;
pub mod user;
pub mod workspace;
