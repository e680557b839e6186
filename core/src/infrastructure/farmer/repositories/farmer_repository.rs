use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
};
use tracing::error;

use crate::{
    domain::{common::entities::app_errors::CoreError, farmer::{entities::Farmer, ports::FarmerRepository}},
    entity::farmers::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFarmerRepository {
    pub db: DatabaseConnection,
}

impl PostgresFarmerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FarmerRepository for PostgresFarmerRepository {
    async fn create(&self, farmer: Farmer) -> Result<Farmer, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(farmer.id),
            name: Set(farmer.name),
            age: Set(farmer.age),
            location: Set(farmer.location),
            username: Set(farmer.username),
            email: Set(farmer.email),
            avatar_url: Set(farmer.avatar_url),
            created_at: Set(farmer.created_at.fixed_offset()),
            updated_at: Set(farmer.updated_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Farmer::from)
        .map_err(|e| {
            error!("Failed to create farmer: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_username(&self, username: String) -> Result<Option<Farmer>, CoreError> {
        let farmer = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get farmer: {}", e);
                CoreError::InternalServerError
            })?
            .map(Farmer::from);

        Ok(farmer)
    }

    async fn update_avatar_url(
        &self,
        username: String,
        avatar_url: String,
    ) -> Result<Farmer, CoreError> {
        let model = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get farmer for avatar update: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let mut active = model.into_active_model();
        active.avatar_url = Set(Some(avatar_url));
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update(active)
            .exec(&self.db)
            .await
            .map(Farmer::from)
            .map_err(|e| {
                error!("Failed to update farmer avatar: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }
}
