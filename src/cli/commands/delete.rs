//! Delete command - remove one or more users

use futures_util::future::join_all;

use crate::cli::args::DeleteArgs;
use crate::config::Config;
use crate::error::{UserctlError, UserctlResult};
use crate::ui::{self, DeleteProgress, UiContext};
use crate::views;

/// Execute the delete command
pub async fn execute(args: DeleteArgs, config: &Config) -> UserctlResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes || !config.general.confirm_delete);
    let manager = super::build_manager(config, &ctx)?;

    // Load the list first: the rows to delete are confirmed by name, and
    // the manager captures those names before the cache is invalidated
    let snapshot = manager.load_list().await;
    if let Some(err) = &snapshot.error {
        return Err(UserctlError::Shared(err.clone()));
    }
    let users = manager.cache().cached_users().unwrap_or_default();

    let named: Vec<String> = args
        .ids
        .iter()
        .map(|id| {
            users
                .iter()
                .find(|u| u.id == *id)
                .map(|u| format!("\"{}\"", u.name))
                .unwrap_or_else(|| format!("#{id}"))
        })
        .collect();

    let question = match named.as_slice() {
        [single] => format!("Remove user {single}?"),
        many => format!("Remove {} users ({})?", many.len(), many.join(", ")),
    };
    if !ui::confirm(&ctx, &question, false).await? {
        ui::step_info(&ctx, "Canceled");
        return Ok(());
    }

    // Rows delete concurrently; each is tracked as its own in-flight target
    let progress = DeleteProgress::new(&ctx, args.ids.len() as u64);
    let results = join_all(args.ids.iter().map(|&id| {
        let manager = &manager;
        let progress = &progress;
        async move {
            let result = manager.remove_user(id).await;
            progress.row_done();
            result
        }
    }))
    .await;
    progress.finish();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        return Err(UserctlError::User(format!(
            "{failed} of {} deletion(s) failed",
            args.ids.len()
        )));
    }

    views::list::render_table(&ctx, &manager.load_list().await, manager.tracker());
    Ok(())
}
