//! Contact Book Server - a server-rendered contact management web application.
//!
//! Contacts (name, phone number, optional email) are listed, viewed, searched,
//! added, edited, and deleted through HTML pages and form submissions, backed
//! by a SQLite document store.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (ids, email addresses, phone numbers)
//! - **models**: the contact document and the submitted form shape
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **store**: the contact document store (trait + SQLite implementation)
//! - **validation**: the per-submission validation workflow
//! - **flash**: session-scoped one-shot confirmation messages
//! - **server**: axum routes, handlers, and HTML views

pub mod config;
pub mod domain;
pub mod error;
pub mod flash;
pub mod models;
pub mod server;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use flash::FlashStore;
pub use models::{Contact, ContactFields, ContactForm};
pub use server::{app, run_server, AppState};
pub use store::{ContactStore, SqliteContactStore, SqliteStore};
pub use validation::{validate_submission, FieldError, Mode};
