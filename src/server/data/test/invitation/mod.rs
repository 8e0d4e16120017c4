use crate::server::data::{invitation::InvitationRepository, member::MemberRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod create;
mod get_by_user;
