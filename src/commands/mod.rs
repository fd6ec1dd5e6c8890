//! Command implementations

mod fields;
mod items;
mod projects;

use ghprojects::Scope;

pub use fields::fields;
pub use items::items;
pub use projects::projects;

/// Organization or user the command runs against
#[derive(Debug)]
pub struct Owner {
    /// Ownership scope
    pub scope: Scope,
    /// Organization name or username
    pub login: String,
}

impl Owner {
    /// Owner from the `--org` / `--user` flag
    pub const fn new(scope: Scope, login: String) -> Self {
        Self { scope, login }
    }
}
