use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        identification::{
            entities::Analysis, ports::AnalysisRepository, value_objects::GetAnalysesFilter,
        },
    },
    entity::analyses::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAnalysisRepository {
    pub db: DatabaseConnection,
}

impl PostgresAnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AnalysisRepository for PostgresAnalysisRepository {
    async fn create(&self, analysis: Analysis) -> Result<Analysis, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(analysis.id),
            user_id: Set(analysis.user_id),
            image_url: Set(analysis.image_url),
            crop_label: Set(analysis.crop_label),
            confidence: Set(analysis.confidence),
            latitude: Set(analysis.latitude),
            longitude: Set(analysis.longitude),
            health_status: Set(analysis.health_status),
            health_probability: Set(analysis.health_probability),
            diseases: Set(analysis.diseases),
            created_at: Set(analysis.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Analysis::from)
        .map_err(|e| {
            error!("Failed to create analysis: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, analysis_id: Uuid) -> Result<Option<Analysis>, CoreError> {
        let analysis = Entity::find()
            .filter(Column::Id.eq(analysis_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get analysis: {}", e);
                CoreError::InternalServerError
            })?
            .map(Analysis::from);

        Ok(analysis)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetAnalysesFilter,
    ) -> Result<Vec<Analysis>, CoreError> {
        let mut query = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }
        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let analyses = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch analyses: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Analysis::from)
            .collect();

        Ok(analyses)
    }
}
