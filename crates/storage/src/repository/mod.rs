pub mod analytics;
pub mod application;
pub mod content;
pub mod event;
pub mod message;
