use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::assignee::Assignee;

pub struct AssigneeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssigneeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, card_id: i32, user_id: i32) -> Result<Assignee, DbErr> {
        let assignee = entity::card_assignee::ActiveModel {
            card_id: ActiveValue::Set(card_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", user_id)))?;

        Ok(Assignee::from_entity(assignee, user))
    }

    pub async fn exists(&self, card_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CardAssignee::find()
            .filter(entity::card_assignee::Column::CardId.eq(card_id))
            .filter(entity::card_assignee::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_by_card(&self, card_id: i32) -> Result<Vec<Assignee>, DbErr> {
        let results = entity::prelude::CardAssignee::find()
            .filter(entity::card_assignee::Column::CardId.eq(card_id))
            .order_by_asc(entity::card_assignee::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .filter_map(|(assignee, user)| user.map(|u| Assignee::from_entity(assignee, u)))
            .collect())
    }

    pub async fn delete(&self, card_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CardAssignee::delete_many()
            .filter(entity::card_assignee::Column::CardId.eq(card_id))
            .filter(entity::card_assignee::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
