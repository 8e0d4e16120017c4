mod activity;
mod assignee;
mod board;
mod board_list;
mod card;
mod invitation;
mod label;
mod member;
mod notification;
mod user;
mod verification_code;
mod workspace;
