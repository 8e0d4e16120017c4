use crate::server::data::activity::ActivityRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
