// Real-time stock trading dashboard over the streaming analytics store
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
