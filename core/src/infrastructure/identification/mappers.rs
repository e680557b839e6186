use crate::{domain::identification::entities::Analysis, entity::analyses};

impl From<&analyses::Model> for Analysis {
    fn from(model: &analyses::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            image_url: model.image_url.clone(),
            crop_label: model.crop_label.clone(),
            confidence: model.confidence,
            latitude: model.latitude,
            longitude: model.longitude,
            health_status: model.health_status.clone(),
            health_probability: model.health_probability,
            diseases: model.diseases.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<analyses::Model> for Analysis {
    fn from(model: analyses::Model) -> Self {
        Self::from(&model)
    }
}
