//! Card domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::card::{CardDto, CreateCardDto, PatchCardDto, UpdateCardDto},
    server::{
        error::AppError,
        util::validate::{optional_non_blank, require_non_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub list_id: i32,
    pub name: String,
    pub description: String,
    pub date_end: Option<DateTime<Utc>>,
    pub position: i32,
}

impl Card {
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            list_id: entity.list_id,
            name: entity.name,
            description: entity.description,
            date_end: entity.date_end,
            position: entity.position,
        }
    }

    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            list_id: self.list_id,
            name: self.name,
            description: self.description,
            date_end: self.date_end,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub list_id: i32,
    pub name: String,
    pub description: String,
    pub date_end: Option<DateTime<Utc>>,
}

impl CreateCardParams {
    pub fn from_dto(list_id: i32, dto: CreateCardDto) -> Result<Self, AppError> {
        Ok(Self {
            list_id,
            name: require_non_blank("name", dto.name)?,
            description: dto.description.trim().to_string(),
            date_end: dto.date_end,
        })
    }
}

/// Card update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCardParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_end: Option<DateTime<Utc>>,
}

impl UpdateCardParams {
    pub fn from_update_dto(id: i32, dto: UpdateCardDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: Some(require_non_blank("name", dto.name)?),
            description: Some(dto.description.trim().to_string()),
            date_end: None,
        })
    }

    pub fn from_patch_dto(id: i32, dto: PatchCardDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: optional_non_blank("name", dto.name)?,
            description: dto.description.map(|d| d.trim().to_string()),
            date_end: dto.date_end,
        })
    }
}
