use crate::model::list::ListDto;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardList {
    pub id: i32,
    pub board_id: i32,
    pub name: String,
    pub position: i32,
    pub card_nb: i32,
}

impl BoardList {
    pub fn from_entity(entity: entity::board_list::Model) -> Self {
        Self {
            id: entity.id,
            board_id: entity.board_id,
            name: entity.name,
            position: entity.position,
            card_nb: entity.card_nb,
        }
    }

    pub fn into_dto(self) -> ListDto {
        ListDto {
            id: self.id,
            board_id: self.board_id,
            name: self.name,
            position: self.position,
            card_nb: self.card_nb,
        }
    }
}
