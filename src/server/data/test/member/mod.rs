use crate::server::{data::member::MemberRepository, model::member::MemberRight};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_workspace;
mod set_right;
