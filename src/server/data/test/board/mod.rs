use crate::server::{
    data::{board::BoardRepository, board_list::BoardListRepository},
    model::board::{CreateBoardParams, UpdateBoardParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_workspace;
mod update;
