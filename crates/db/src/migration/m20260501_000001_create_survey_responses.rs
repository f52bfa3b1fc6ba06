//! Creates the survey_responses table.
//!
//! Fields hold whatever the form submitted (nullable text and an
//! unvalidated JSONB document); the store enforces no schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SURVEY_RESPONSES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS survey_responses;")
            .await?;
        Ok(())
    }
}

const SURVEY_RESPONSES_SQL: &str = "
CREATE TABLE IF NOT EXISTS survey_responses (
    id UUID PRIMARY KEY,
    age TEXT,
    gender TEXT,
    total_income TEXT,
    expenses JSONB NOT NULL DEFAULT '{}'::jsonb,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_survey_responses_created_at
    ON survey_responses (created_at);
";
