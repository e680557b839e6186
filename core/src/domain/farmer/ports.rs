use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    farmer::{
        entities::Farmer,
        value_objects::{GetFarmerInput, RegisterFarmerInput, UpdateAvatarInput},
    },
};

/// Repository trait for farmer profiles.
#[cfg_attr(test, mockall::automock)]
pub trait FarmerRepository: Send + Sync {
    fn create(&self, farmer: Farmer) -> impl Future<Output = Result<Farmer, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<Farmer>, CoreError>> + Send;

    fn update_avatar_url(
        &self,
        username: String,
        avatar_url: String,
    ) -> impl Future<Output = Result<Farmer, CoreError>> + Send;
}

/// Service trait for farmer profile management.
#[cfg_attr(test, mockall::automock)]
pub trait FarmerService: Send + Sync {
    fn register_farmer(
        &self,
        input: RegisterFarmerInput,
    ) -> impl Future<Output = Result<Farmer, CoreError>> + Send;

    fn get_farmer(
        &self,
        input: GetFarmerInput,
    ) -> impl Future<Output = Result<Farmer, CoreError>> + Send;

    fn update_avatar(
        &self,
        input: UpdateAvatarInput,
    ) -> impl Future<Output = Result<Farmer, CoreError>> + Send;
}
