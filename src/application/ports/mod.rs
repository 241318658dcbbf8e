// src/application/ports/mod.rs
pub mod notification;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type ClockPort = dyn time::Clock;
pub type NotificationPublisherPort = dyn notification::NotificationPublisher;
