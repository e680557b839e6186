pub mod chat;
pub mod chat_stream;
