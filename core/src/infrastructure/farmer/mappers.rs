use crate::{domain::farmer::entities::Farmer, entity::farmers};

impl From<&farmers::Model> for Farmer {
    fn from(model: &farmers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            age: model.age,
            location: model.location.clone(),
            username: model.username.clone(),
            email: model.email.clone(),
            avatar_url: model.avatar_url.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<farmers::Model> for Farmer {
    fn from(model: farmers::Model) -> Self {
        Self::from(&model)
    }
}
