use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::verification_code::VerificationCodeRepository;

mod delete_expired;
mod replace;
