//! Shared data models for the Hireboard backend.
//!
//! This crate provides Serde-serializable types for:
//! - User roles and accounts
//! - Job postings and their lifecycle
//! - Applications submitted by candidates

pub mod application;
pub mod job;
pub mod role;
pub mod user;

// Re-export common types
pub use application::{Application, ApplicationStatus};
pub use job::{EmploymentType, JobPosting, JobStatus};
pub use role::{Role, RoleParseError};
pub use user::UserAccount;
