//! ghprojects - Typed client for the GitHub Projects (V2) REST API
//!
//! This library builds requests from typed parameters, sends them through a
//! shared [`Client`] and decodes the typed JSON answers. Projects, their
//! fields and their items are reachable for organization- and user-owned
//! projects alike.
//!
//! ```no_run
//! use ghprojects::{Client, ListProjectsOptions};
//!
//! # async fn demo() -> ghprojects::Result<()> {
//! let client = Client::builder().token("ghp_example").build()?;
//! let opts = ListProjectsOptions::default();
//! let (projects, response) = client
//!     .projects()
//!     .list_organization_projects("octo-org", Some(&opts))
//!     .await?;
//! for project in &projects {
//!     println!("#{:?} {}", project.number, project.display_title());
//! }
//! if let Some(next) = opts.pagination.next_page(&response) {
//!     println!("next page starts after {:?}", next.after);
//! }
//! # Ok(())
//! # }
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod client;
pub mod config;
pub mod models;
pub mod options;
pub mod output;
pub mod paths;
pub mod projects;

pub use client::{ApiError, Client, ClientBuilder, Error, Rate, Response, Result};
pub use models::{ProjectV2, ProjectV2Field, ProjectV2FieldOption, ProjectV2Item, User};
pub use options::{
    AddProjectItemOptions, FieldValueUpdate, GetProjectItemOptions, ListProjectItemsOptions,
    ListProjectsOptions, PaginationOptions, UpdateProjectItemOptions,
};
pub use projects::{ProjectsService, Scope};
