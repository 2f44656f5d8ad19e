//! HTTP request handlers.

pub mod admin;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod recruiter;
