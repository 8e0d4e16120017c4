use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Workspace};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Workspace)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for workspace membership operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Workspace
    /// - WorkspaceMember
    /// - WorkspaceInvitation
    /// - Notification
    /// - VerificationCode
    pub fn with_workspace_tables(self) -> Self {
        self.with_table(User)
            .with_table(Workspace)
            .with_table(WorkspaceMember)
            .with_table(WorkspaceInvitation)
            .with_table(Notification)
            .with_table(VerificationCode)
    }

    /// Adds every table of the schema.
    ///
    /// Equivalent to `with_workspace_tables()` followed by the board, list, card, label,
    /// assignee and activity tables. Use this for anything touching positions.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_board_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_board_tables(self) -> Self {
        self.with_workspace_tables()
            .with_table(Board)
            .with_table(BoardList)
            .with_table(Card)
            .with_table(CardLabel)
            .with_table(CardAssignee)
            .with_table(BoardActivity)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
