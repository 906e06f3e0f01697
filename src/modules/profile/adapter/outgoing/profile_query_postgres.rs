use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::profile::adapter::outgoing::sea_orm_entity::profiles::{Column, Entity, Model};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError, ProfileView};

/// Read side: profiles joined with their owner's public identity.
#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_owner(&self, owner: UserId) -> Result<Option<ProfileView>, ProfileQueryError> {
        let row = Entity::find()
            .find_also_related(users::Entity)
            .filter(Column::OwnerId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(to_view).transpose()
    }

    async fn list_all(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        let rows = Entity::find()
            .find_also_related(users::Entity)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(to_view).collect()
    }
}

fn to_view((profile, user): (Model, Option<users::Model>)) -> Result<ProfileView, ProfileQueryError> {
    let profile = profile
        .into_domain()
        .map_err(|e| ProfileQueryError::SerializationError(e.to_string()))?;

    Ok(ProfileView {
        profile,
        user: user.as_ref().map(users::Model::to_public_identity),
    })
}

fn map_db_err(err: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(err.to_string())
}
