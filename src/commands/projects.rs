//! Projects command - list and show projects of an owner

use ghprojects::output::{OutputMode, PageResult, render_entity};
use ghprojects::{ListProjectsOptions, ProjectsService};

use super::Owner;
use crate::cli::ProjectAction;

/// Handle `ghprojects projects ...`
pub async fn projects(
    service: &ProjectsService<'_>,
    owner: &Owner,
    action: ProjectAction,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ProjectAction::List { query, page } => {
            let opts = ListProjectsOptions {
                pagination: page.into(),
                query,
            };
            let (projects, response) = service
                .list_projects(owner.scope, &owner.login, Some(&opts))
                .await?;
            PageResult::new(projects, &response).render(output_mode);
        },
        ProjectAction::Get { number } => {
            let (project, _) = service
                .get_project(owner.scope, &owner.login, number)
                .await?;
            render_entity(&project, output_mode);
        },
    }
    Ok(())
}
