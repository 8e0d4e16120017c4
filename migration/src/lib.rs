pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_workspace_table;
mod m20250901_000003_create_workspace_member_table;
mod m20250901_000004_create_workspace_invitation_table;
mod m20250902_000005_create_board_table;
mod m20250902_000006_create_board_list_table;
mod m20250902_000007_create_card_table;
mod m20250903_000008_create_card_label_table;
mod m20250903_000009_create_card_assignee_table;
mod m20250904_000010_create_notification_table;
mod m20250904_000011_create_board_activity_table;
mod m20250905_000012_create_verification_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_workspace_table::Migration),
            Box::new(m20250901_000003_create_workspace_member_table::Migration),
            Box::new(m20250901_000004_create_workspace_invitation_table::Migration),
            Box::new(m20250902_000005_create_board_table::Migration),
            Box::new(m20250902_000006_create_board_list_table::Migration),
            Box::new(m20250902_000007_create_card_table::Migration),
            Box::new(m20250903_000008_create_card_label_table::Migration),
            Box::new(m20250903_000009_create_card_assignee_table::Migration),
            Box::new(m20250904_000010_create_notification_table::Migration),
            Box::new(m20250904_000011_create_board_activity_table::Migration),
            Box::new(m20250905_000012_create_verification_code_table::Migration),
        ]
    }
}
