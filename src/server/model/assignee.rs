use crate::model::assignee::AssigneeDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignee {
    pub id: i32,
    pub card_id: i32,
    pub user_id: i32,
    pub username: String,
}

impl Assignee {
    pub fn from_entity(assignee: entity::card_assignee::Model, user: entity::user::Model) -> Self {
        Self {
            id: assignee.id,
            card_id: assignee.card_id,
            user_id: assignee.user_id,
            username: user.username,
        }
    }

    pub fn into_dto(self) -> AssigneeDto {
        AssigneeDto {
            id: self.id,
            card_id: self.card_id,
            user_id: self.user_id,
            username: self.username,
        }
    }
}
