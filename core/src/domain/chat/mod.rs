pub mod entities;
pub mod ports;
pub mod rules;
pub mod services;
pub mod stream;
