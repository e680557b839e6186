use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A farmer profile, keyed by username. Created at sign-up; mutated only
/// via avatar upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Farmer {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Farmer {
    pub fn new(name: String, age: i32, location: String, username: String, email: String) -> Self {
        let (_, timestamp) = generate_timestamp();
        let now = Utc::now();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            age,
            location,
            username,
            email,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
