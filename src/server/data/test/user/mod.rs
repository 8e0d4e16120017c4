use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, Credentials, OAuthIdentity, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod link_oauth;
mod update;
