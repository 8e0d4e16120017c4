use crate::{
    model::label::{CreateLabelDto, LabelDto, PatchLabelDto},
    server::{
        error::AppError,
        util::validate::{optional_non_blank, require_non_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: i32,
    pub card_id: i32,
    pub title: String,
    pub color: String,
}

impl Label {
    pub fn from_entity(entity: entity::card_label::Model) -> Self {
        Self {
            id: entity.id,
            card_id: entity.card_id,
            title: entity.title,
            color: entity.color,
        }
    }

    pub fn into_dto(self) -> LabelDto {
        LabelDto {
            id: self.id,
            card_id: self.card_id,
            title: self.title,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLabelParams {
    pub card_id: i32,
    pub title: String,
    pub color: String,
}

impl CreateLabelParams {
    pub fn from_dto(card_id: i32, dto: CreateLabelDto) -> Result<Self, AppError> {
        Ok(Self {
            card_id,
            title: require_non_blank("title", dto.title)?,
            color: require_non_blank("color", dto.color)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLabelParams {
    pub id: i32,
    pub title: Option<String>,
    pub color: Option<String>,
}

impl UpdateLabelParams {
    pub fn from_update_dto(id: i32, dto: CreateLabelDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: Some(require_non_blank("title", dto.title)?),
            color: Some(require_non_blank("color", dto.color)?),
        })
    }

    pub fn from_patch_dto(id: i32, dto: PatchLabelDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: optional_non_blank("title", dto.title)?,
            color: optional_non_blank("color", dto.color)?,
        })
    }
}
