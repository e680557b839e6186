pub mod entities;
pub mod imaging;
pub mod labels;
pub mod ports;
pub mod services;
pub mod value_objects;
