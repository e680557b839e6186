pub mod get_farmer;
pub mod register_farmer;
pub mod upload_avatar;
