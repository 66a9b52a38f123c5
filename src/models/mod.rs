pub mod chat;
pub mod content;
pub mod usage;
