pub mod application;
pub mod common;
pub mod content;
pub mod event;
pub mod message;
