//! Database repository layer for all domain entities.
//!
//! Repository structs handle the database operations for each domain. They use SeaORM
//! entity models internally and return domain models, keeping the data layer separate
//! from business logic. Operations that renumber list or card positions run inside a
//! single transaction together with the counter update of the parent.

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

#[cfg(test)]
mod test;
