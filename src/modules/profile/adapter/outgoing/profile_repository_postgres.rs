use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::profile::adapter::outgoing::sea_orm_entity::profiles::{
    ActiveModel, Column, Entity, Model,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::profile::domain::Profile;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let model = Entity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(model_to_profile).transpose()
    }

    async fn save(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        let model = ActiveModel::from_domain(&profile).map_err(map_json_err)?;

        // One row per owner: a concurrent first save turns into an update
        // of the row that won, keeping its id and created_at.
        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::OwnerId)
                    .update_columns([
                        Column::Company,
                        Column::Website,
                        Column::Location,
                        Column::Bio,
                        Column::Status,
                        Column::GithubUsername,
                        Column::Skills,
                        Column::Social,
                        Column::Experience,
                        Column::Education,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_profile(saved)
    }

    async fn delete_by_owner(&self, owner: UserId) -> Result<bool, ProfileRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::OwnerId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_profile(model: Model) -> Result<Profile, ProfileRepositoryError> {
    model.into_domain().map_err(map_json_err)
}

fn map_db_err(err: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(err.to_string())
}

fn map_json_err(err: serde_json::Error) -> ProfileRepositoryError {
    ProfileRepositoryError::SerializationError(err.to_string())
}
