use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::profile::domain::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub owner_id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub company: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub status: Option<String>,

    #[sea_orm(nullable)]
    pub github_username: Option<String>,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub social: Json,

    // JSONB arrays, most recent entry first
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub education: Json,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::OwnerId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<Profile, serde_json::Error> {
        Ok(Profile {
            id: self.id,
            owner: UserId::from(self.owner_id),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            github_username: self.github_username,
            skills: serde_json::from_value(self.skills)?,
            social: serde_json::from_value(self.social)?,
            experience: serde_json::from_value(self.experience)?,
            education: serde_json::from_value(self.education)?,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

impl ActiveModel {
    pub fn from_domain(profile: &Profile) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: Set(profile.id),
            owner_id: Set(profile.owner.value()),
            company: Set(profile.company.clone()),
            website: Set(profile.website.clone()),
            location: Set(profile.location.clone()),
            bio: Set(profile.bio.clone()),
            status: Set(profile.status.clone()),
            github_username: Set(profile.github_username.clone()),
            skills: Set(serde_json::to_value(&profile.skills)?),
            social: Set(serde_json::to_value(&profile.social)?),
            experience: Set(serde_json::to_value(&profile.experience)?),
            education: Set(serde_json::to_value(&profile.education)?),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        })
    }
}
