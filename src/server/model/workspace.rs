//! Workspace domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::workspace::{CreateWorkspaceDto, PatchWorkspaceDto, UpdateWorkspaceDto, WorkspaceDto},
    server::{
        error::AppError,
        util::validate::{optional_non_blank, require_non_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub favicon_url: Option<String>,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn from_entity(entity: entity::workspace::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            favicon_url: entity.favicon_url,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WorkspaceDto {
        WorkspaceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            favicon_url: self.favicon_url,
            creator_id: self.creator_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceParams {
    pub creator_id: i32,
    pub name: String,
    pub description: String,
    pub favicon_url: Option<String>,
}

impl CreateWorkspaceParams {
    pub fn from_dto(creator_id: i32, dto: CreateWorkspaceDto) -> Result<Self, AppError> {
        Ok(Self {
            creator_id,
            name: require_non_blank("name", dto.name)?,
            description: dto.description.trim().to_string(),
            favicon_url: optional_non_blank("favicon_url", dto.favicon_url)?,
        })
    }
}

/// Workspace update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspaceParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub favicon_url: Option<String>,
}

impl UpdateWorkspaceParams {
    pub fn from_update_dto(id: i32, dto: UpdateWorkspaceDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: Some(require_non_blank("name", dto.name)?),
            description: Some(dto.description.trim().to_string()),
            favicon_url: None,
        })
    }

    pub fn from_patch_dto(id: i32, dto: PatchWorkspaceDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: optional_non_blank("name", dto.name)?,
            description: dto.description.map(|d| d.trim().to_string()),
            favicon_url: optional_non_blank("favicon_url", dto.favicon_url)?,
        })
    }
}
