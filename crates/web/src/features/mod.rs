pub mod analytics;
pub mod applications;
pub mod cards;
pub mod cms;
pub mod content;
pub mod events;
pub mod messages;
