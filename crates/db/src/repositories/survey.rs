//! Survey response repository for record store operations.
//!
//! The repository takes an explicit injected connection; there is no
//! module-level store handle. Submissions are append-only: no update or
//! delete operations exist.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use crate::entities::survey_responses;
use foster_core::processing::RawSubmission;

/// A survey submission as received from the form, prior to storage.
///
/// Every field is optional text; no server-side validation of ranges or
/// formats happens before insertion.
#[derive(Debug, Clone, Default)]
pub struct NewSubmission {
    /// Respondent age, as submitted.
    pub age: Option<String>,
    /// Respondent gender label, as submitted.
    pub gender: Option<String>,
    /// Total monthly income, as submitted.
    pub total_income: Option<String>,
    /// Expense mapping, as submitted.
    pub expenses: serde_json::Value,
}

/// Survey response repository.
#[derive(Debug, Clone)]
pub struct SurveyRepository {
    db: DatabaseConnection,
}

impl SurveyRepository {
    /// Creates a new survey repository over an injected connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one submission to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert(
        &self,
        submission: NewSubmission,
    ) -> Result<survey_responses::Model, DbErr> {
        let response = survey_responses::ActiveModel {
            id: Set(Uuid::new_v4()),
            age: Set(submission.age),
            gender: Set(submission.gender),
            total_income: Set(submission.total_income),
            expenses: Set(submission.expenses),
            created_at: Set(chrono::Utc::now().into()),
        };

        response.insert(&self.db).await
    }

    /// Retrieves every stored submission as a raw record.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_all(&self) -> Result<Vec<RawSubmission>, DbErr> {
        let models = survey_responses::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(RawSubmission::from).collect())
    }

    /// Performs a trivial read against the store, for liveness checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not respond.
    pub async fn ping(&self) -> Result<(), DbErr> {
        survey_responses::Entity::find()
            .one(&self.db)
            .await
            .map(|_| ())
    }
}
