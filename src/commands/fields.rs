//! Fields command - list and show the fields of a project

use ghprojects::output::{OutputMode, PageResult, render_entity};
use ghprojects::{PaginationOptions, ProjectsService};

use super::Owner;
use crate::cli::FieldAction;

/// Handle `ghprojects fields ...`
pub async fn fields(
    service: &ProjectsService<'_>,
    owner: &Owner,
    action: FieldAction,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        FieldAction::List { number, page } => {
            let opts = PaginationOptions::from(page);
            let (fields, response) = service
                .list_project_fields(owner.scope, &owner.login, number, Some(&opts))
                .await?;
            PageResult::new(fields, &response).render(output_mode);
        },
        FieldAction::Get { number, field_id } => {
            let (field, _) = service
                .get_project_field(owner.scope, &owner.login, number, field_id)
                .await?;
            render_entity(&field, output_mode);
        },
    }
    Ok(())
}
