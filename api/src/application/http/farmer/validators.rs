use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterFarmerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: i32,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    /// Defaults to the email local-part when absent.
    pub username: Option<String>,

    #[validate(email(message = "a valid email is required"))]
    pub email: String,
}
