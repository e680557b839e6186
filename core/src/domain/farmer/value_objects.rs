use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct RegisterFarmerInput {
    pub name: String,
    pub age: i32,
    pub location: String,
    /// Defaults to the email local-part when absent.
    pub username: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct GetFarmerInput {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAvatarInput {
    pub username: String,
    pub image: Bytes,
    pub content_type: String,
    pub file_name: String,
}
