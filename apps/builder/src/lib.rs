//! Client-side core of the resume builder.
//!
//! The browser page is a thin layer over [`session::EditorSession`]: it owns the
//! [`store::ResumeStore`], the section editors, the pending enhancement set and
//! the notification queue. Network access goes through the traits in
//! [`client`] so the session runs the same against the real service or a
//! test double.

pub mod client;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod sections;
pub mod session;
pub mod shell;
pub mod store;
pub mod upload;

pub use client::{ApiClient, EnhancementService, PersistenceService};
pub use config::ClientConfig;
pub use errors::{BuilderError, ServiceError};
pub use models::{ResumeDraft, ResumePatch, ResumeRecord};
pub use session::EditorSession;
pub use store::ResumeStore;
