//! Items command - list, add, archive and remove project items

use log::info;

use ghprojects::output::{OperationResult, OutputMode, PageResult, render_entity};
use ghprojects::{
    AddProjectItemOptions, GetProjectItemOptions, ListProjectItemsOptions, ProjectsService,
    UpdateProjectItemOptions,
};

use super::Owner;
use crate::cli::ItemAction;

/// Handle `ghprojects items ...`
pub async fn items(
    service: &ProjectsService<'_>,
    owner: &Owner,
    action: ItemAction,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (scope, login) = (owner.scope, owner.login.as_str());

    match action {
        ItemAction::List {
            number,
            query,
            fields,
            page,
        } => {
            let opts = ListProjectItemsOptions {
                pagination: page.into(),
                query,
                fields,
            };
            let (items, response) = service
                .list_project_items(scope, login, number, Some(&opts))
                .await?;
            PageResult::new(items, &response).render(output_mode);
        },
        ItemAction::Get {
            number,
            item_id,
            fields,
        } => {
            let opts = GetProjectItemOptions { fields };
            let (item, _) = service
                .get_project_item(scope, login, number, item_id, Some(&opts))
                .await?;
            render_entity(&item, output_mode);
        },
        ItemAction::Add {
            number,
            kind,
            content_id,
        } => {
            let opts = AddProjectItemOptions::new(kind, content_id);
            let (item, _) = service
                .add_project_item(scope, login, number, &opts)
                .await?;
            info!("added {} {} to project #{number}", opts.kind, opts.id);
            render_entity(&item, output_mode);
        },
        ItemAction::Archive { number, item_id } => {
            let patch = UpdateProjectItemOptions::archived(true);
            let (item, _) = service
                .update_project_item(scope, login, number, item_id, &patch)
                .await?;
            render_entity(&item, output_mode);
        },
        ItemAction::Unarchive { number, item_id } => {
            let patch = UpdateProjectItemOptions::archived(false);
            let (item, _) = service
                .update_project_item(scope, login, number, item_id, &patch)
                .await?;
            render_entity(&item, output_mode);
        },
        ItemAction::Delete { number, item_id } => {
            service
                .delete_project_item(scope, login, number, item_id)
                .await?;
            OperationResult {
                success: true,
                message: format!("Removed item {item_id} from project #{number}"),
            }
            .render(output_mode);
        },
    }
    Ok(())
}
