//! Board domain models and parameters.

use crate::{
    model::board::{BoardDto, CreateBoardDto, PatchBoardDto, UpdateBoardDto},
    server::{
        error::AppError,
        util::validate::{optional_non_blank, require_non_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i32,
    pub workspace_id: i32,
    pub name: String,
    pub background_color: String,
    pub list_nb: i32,
}

impl Board {
    pub fn from_entity(entity: entity::board::Model) -> Self {
        Self {
            id: entity.id,
            workspace_id: entity.workspace_id,
            name: entity.name,
            background_color: entity.background_color,
            list_nb: entity.list_nb,
        }
    }

    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            workspace_id: self.workspace_id,
            name: self.name,
            background_color: self.background_color,
            list_nb: self.list_nb,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    pub workspace_id: i32,
    pub name: String,
    pub background_color: String,
}

impl CreateBoardParams {
    pub fn from_dto(workspace_id: i32, dto: CreateBoardDto) -> Result<Self, AppError> {
        Ok(Self {
            workspace_id,
            name: require_non_blank("name", dto.name)?,
            background_color: require_non_blank("background_color", dto.background_color)?,
        })
    }
}

/// Board update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBoardParams {
    pub id: i32,
    pub name: Option<String>,
    pub background_color: Option<String>,
}

impl UpdateBoardParams {
    pub fn from_update_dto(id: i32, dto: UpdateBoardDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: Some(require_non_blank("name", dto.name)?),
            background_color: Some(require_non_blank("background_color", dto.background_color)?),
        })
    }

    pub fn from_patch_dto(id: i32, dto: PatchBoardDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: optional_non_blank("name", dto.name)?,
            background_color: optional_non_blank("background_color", dto.background_color)?,
        })
    }
}
