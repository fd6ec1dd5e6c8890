//! Projects (V2) endpoints
//!
//! Every operation is one request: render the resource path for the owner
//! scope, append encoded query options, build the request and execute it.
//! The operations take the [`Scope`] as a parameter; the
//! `*_organization_*` / `*_user_*` methods are thin aliases generated from
//! the scope × operation product.
//!
//! List calls return one page. An empty page is a valid answer; follow
//! `Response::after` (see [`PaginationOptions::next_page`]) to keep going.

mod path;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use path::{Collection, ProjectPath, Scope};

use crate::client::{Client, Response, Result};
use crate::models::{ProjectV2, ProjectV2Field, ProjectV2Item};
use crate::options::{
    AddProjectItemOptions, GetProjectItemOptions, ListProjectItemsOptions, ListProjectsOptions,
    PaginationOptions, UpdateProjectItemOptions, add_options,
};

/// Handle on the Projects (V2) endpoints, borrowed from a [`Client`]
#[derive(Debug, Clone, Copy)]
pub struct ProjectsService<'a> {
    client: &'a Client,
}

/// Generates the organization and user entry points of one operation
macro_rules! scoped_aliases {
    ($op:ident => $org_fn:ident, $user_fn:ident ( $($arg:ident: $ty:ty),* ) -> $ret:ty) => {
        #[doc = concat!("[`Self::", stringify!($op), "`] for an organization-owned project.")]
        pub async fn $org_fn(&self, org: &str, $($arg: $ty),*) -> Result<$ret> {
            self.$op(Scope::Organization, org, $($arg),*).await
        }

        #[doc = concat!("[`Self::", stringify!($op), "`] for a user-owned project.")]
        pub async fn $user_fn(&self, username: &str, $($arg: $ty),*) -> Result<$ret> {
            self.$op(Scope::User, username, $($arg),*).await
        }
    };
}

impl<'a> ProjectsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // =========================================================================
    // PROJECTS
    // =========================================================================

    /// List the projects of an owner
    ///
    /// `GET {scope}/{owner}/projectsV2`
    pub async fn list_projects(
        &self,
        scope: Scope,
        owner: &str,
        opts: Option<&ListProjectsOptions>,
    ) -> Result<(Vec<ProjectV2>, Response)> {
        self.get(ProjectPath::projects(scope, owner), opts).await
    }

    /// Get a project by number
    ///
    /// `GET {scope}/{owner}/projectsV2/{number}`
    pub async fn get_project(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
    ) -> Result<(ProjectV2, Response)> {
        self.get(ProjectPath::project(scope, owner, number), None::<&()>)
            .await
    }

    // =========================================================================
    // FIELDS
    // =========================================================================

    /// List the fields of a project
    ///
    /// `GET {scope}/{owner}/projectsV2/{number}/fields`
    pub async fn list_project_fields(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        opts: Option<&PaginationOptions>,
    ) -> Result<(Vec<ProjectV2Field>, Response)> {
        let path = ProjectPath::project(scope, owner, number).collection(Collection::Fields);
        self.get(path, opts).await
    }

    /// Get one field of a project
    ///
    /// `GET {scope}/{owner}/projectsV2/{number}/fields/{field_id}`
    pub async fn get_project_field(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        field_id: i64,
    ) -> Result<(ProjectV2Field, Response)> {
        let path = ProjectPath::project(scope, owner, number).member(Collection::Fields, field_id);
        self.get(path, None::<&()>).await
    }

    // =========================================================================
    // ITEMS
    // =========================================================================

    /// List the items of a project
    ///
    /// `GET {scope}/{owner}/projectsV2/{number}/items`
    pub async fn list_project_items(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        opts: Option<&ListProjectItemsOptions>,
    ) -> Result<(Vec<ProjectV2Item>, Response)> {
        let path = ProjectPath::project(scope, owner, number).collection(Collection::Items);
        self.get(path, opts).await
    }

    /// Add an issue or pull request to a project
    ///
    /// `POST {scope}/{owner}/projectsV2/{number}/items`
    pub async fn add_project_item(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        opts: &AddProjectItemOptions,
    ) -> Result<(ProjectV2Item, Response)> {
        let path = ProjectPath::project(scope, owner, number).collection(Collection::Items);
        self.send(Method::POST, path, opts).await
    }

    /// Get one item of a project
    ///
    /// `GET {scope}/{owner}/projectsV2/{number}/items/{item_id}`
    pub async fn get_project_item(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        item_id: i64,
        opts: Option<&GetProjectItemOptions>,
    ) -> Result<(ProjectV2Item, Response)> {
        let path = ProjectPath::project(scope, owner, number).member(Collection::Items, item_id);
        self.get(path, opts).await
    }

    /// Patch an item of a project; only the members set in `opts` are sent
    ///
    /// `PATCH {scope}/{owner}/projectsV2/{number}/items/{item_id}`
    pub async fn update_project_item(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        item_id: i64,
        opts: &UpdateProjectItemOptions,
    ) -> Result<(ProjectV2Item, Response)> {
        let path = ProjectPath::project(scope, owner, number).member(Collection::Items, item_id);
        self.send(Method::PATCH, path, opts).await
    }

    /// Remove an item from a project
    ///
    /// `DELETE {scope}/{owner}/projectsV2/{number}/items/{item_id}`
    pub async fn delete_project_item(
        &self,
        scope: Scope,
        owner: &str,
        number: u64,
        item_id: i64,
    ) -> Result<Response> {
        let path = ProjectPath::project(scope, owner, number).member(Collection::Items, item_id);
        let request = self
            .client
            .new_request::<()>(Method::DELETE, &path.to_string(), None)?;
        self.client.execute_empty(request).await
    }

    // =========================================================================
    // SCOPED ENTRY POINTS
    // =========================================================================

    scoped_aliases!(list_projects => list_organization_projects, list_user_projects
        (opts: Option<&ListProjectsOptions>) -> (Vec<ProjectV2>, Response));

    scoped_aliases!(get_project => get_organization_project, get_user_project
        (number: u64) -> (ProjectV2, Response));

    scoped_aliases!(list_project_fields => list_organization_project_fields, list_user_project_fields
        (number: u64, opts: Option<&PaginationOptions>) -> (Vec<ProjectV2Field>, Response));

    scoped_aliases!(get_project_field => get_organization_project_field, get_user_project_field
        (number: u64, field_id: i64) -> (ProjectV2Field, Response));

    scoped_aliases!(list_project_items => list_organization_project_items, list_user_project_items
        (number: u64, opts: Option<&ListProjectItemsOptions>) -> (Vec<ProjectV2Item>, Response));

    scoped_aliases!(add_project_item => add_organization_project_item, add_user_project_item
        (number: u64, opts: &AddProjectItemOptions) -> (ProjectV2Item, Response));

    scoped_aliases!(get_project_item => get_organization_project_item, get_user_project_item
        (number: u64, item_id: i64, opts: Option<&GetProjectItemOptions>) -> (ProjectV2Item, Response));

    scoped_aliases!(update_project_item => update_organization_project_item, update_user_project_item
        (number: u64, item_id: i64, opts: &UpdateProjectItemOptions) -> (ProjectV2Item, Response));

    scoped_aliases!(delete_project_item => delete_organization_project_item, delete_user_project_item
        (number: u64, item_id: i64) -> Response);

    // =========================================================================
    // REQUEST PLUMBING
    // =========================================================================

    async fn get<T, O>(&self, path: ProjectPath<'_>, opts: Option<&O>) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        O: Serialize + ?Sized,
    {
        let url = add_options(&path.to_string(), opts)?;
        let request = self.client.new_request::<()>(Method::GET, &url, None)?;
        self.client.execute(request).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: ProjectPath<'_>,
        body: &B,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .new_request(method, &path.to_string(), Some(body))?;
        self.client.execute(request).await
    }
}
