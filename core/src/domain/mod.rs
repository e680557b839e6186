pub mod advisory;
pub mod chat;
pub mod common;
pub mod farmer;
pub mod health;
pub mod identification;
pub mod locale;
pub mod storage;
pub mod weather;
