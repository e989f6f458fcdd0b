pub mod application;
pub mod content;
pub mod event;
pub mod message;

pub use application::{Application, ApplicationStatus, RaceCategory};
pub use content::{HeroContent, NewsPost, SectionSetting, SiteContent, SiteImage, Sponsor, Testimonial};
pub use event::{Event, EventStatus};
pub use message::{ContactMessage, MessageFolder, MessageReply};
