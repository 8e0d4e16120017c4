use crate::server::{
    data::label::LabelRepository,
    model::label::{CreateLabelParams, UpdateLabelParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
