//! Typed payloads returned by the Projects (V2) endpoints
//!
//! Every attribute is optional: GitHub omits fields it does not know or
//! does not expose to the caller, and an unset field is never written back
//! on the wire. Entities are plain values with no link back to the client.

mod field;
mod item;
mod project;
mod user;

pub use field::{ProjectV2Field, ProjectV2FieldOption};
pub use item::ProjectV2Item;
pub use project::ProjectV2;
pub use user::User;

/// Timestamps are RFC 3339 strings on the wire
pub type Timestamp = chrono::DateTime<chrono::Utc>;
