//! Canonical resource paths for Projects (V2)

use std::fmt;

/// Ownership context of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Organization-owned (`orgs/{org}`)
    Organization,
    /// User-owned (`users/{username}`)
    User,
}

impl Scope {
    /// Plural path segment
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Organization => "orgs",
            Self::User => "users",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Sub-collection of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// `items`
    Items,
    /// `fields`
    Fields,
}

impl Collection {
    /// Path segment
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Fields => "fields",
        }
    }
}

/// Path of a project resource, relative to the API root
///
/// Renders as `{scope}/{owner}/projectsV2[/{number}[/{collection}[/{id}]]]`.
/// Segments are written verbatim; escaping is the transport's concern.
/// Building a path never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectPath<'a> {
    scope: Scope,
    owner: &'a str,
    number: Option<u64>,
    collection: Option<(Collection, Option<i64>)>,
}

impl<'a> ProjectPath<'a> {
    /// The projects collection of an owner
    #[must_use]
    pub const fn projects(scope: Scope, owner: &'a str) -> Self {
        Self {
            scope,
            owner,
            number: None,
            collection: None,
        }
    }

    /// One project
    #[must_use]
    pub const fn project(scope: Scope, owner: &'a str, number: u64) -> Self {
        Self {
            scope,
            owner,
            number: Some(number),
            collection: None,
        }
    }

    /// The items or fields of a project
    #[must_use]
    pub const fn collection(self, collection: Collection) -> Self {
        Self {
            collection: Some((collection, None)),
            ..self
        }
    }

    /// One item or field of a project
    #[must_use]
    pub const fn member(self, collection: Collection, id: i64) -> Self {
        Self {
            collection: Some((collection, Some(id))),
            ..self
        }
    }
}

impl fmt::Display for ProjectPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/projectsV2", self.scope, self.owner)?;

        let Some(number) = self.number else {
            return Ok(());
        };
        write!(f, "/{number}")?;

        if let Some((collection, id)) = self.collection {
            write!(f, "/{}", collection.segment())?;
            if let Some(id) = id {
                write!(f, "/{id}")?;
            }
        }
        Ok(())
    }
}
