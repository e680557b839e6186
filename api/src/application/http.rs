pub mod accept_language;
pub mod analysis;
pub mod chat;
pub mod farmer;
pub mod health;
pub mod server;
pub mod weather;
