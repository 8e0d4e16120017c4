use crate::server::{
    data::{member::MemberRepository, workspace::WorkspaceRepository},
    model::{
        member::MemberRight,
        workspace::{CreateWorkspaceParams, UpdateWorkspaceParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_member;
mod update;
