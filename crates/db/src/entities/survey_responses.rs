//! `SeaORM` Entity for the survey_responses table.
//!
//! Fields are stored exactly as submitted (free text, no schema
//! enforcement); the expense mapping is kept as an unvalidated JSON
//! document. Rows are append-only.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "survey_responses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub total_income: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub expenses: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for foster_core::processing::RawSubmission {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            submitted_at: model.created_at.to_utc(),
            age: model.age,
            gender: model.gender,
            total_income: model.total_income,
            expenses: model.expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use foster_core::processing::RawSubmission;

    #[test]
    fn test_model_converts_to_raw_submission() {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now().into();
        let model = Model {
            id,
            age: Some("34".to_string()),
            gender: None,
            total_income: Some("5000".to_string()),
            expenses: json!({"utilities": "200"}),
            created_at: now,
        };

        let raw = RawSubmission::from(model);
        assert_eq!(raw.id, id);
        assert_eq!(raw.age.as_deref(), Some("34"));
        assert_eq!(raw.gender, None);
        assert_eq!(raw.expenses["utilities"], "200");
    }
}
