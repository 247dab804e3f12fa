//! Edit command - update a user's profile

use crate::cli::args::EditArgs;
use crate::config::Config;
use crate::error::{UserctlError, UserctlResult};
use crate::ui::{self, TaskSpinner, UiContext};
use crate::users::UserDraft;
use crate::views::form::FormOutcome;
use crate::views::{info, profile};

/// Execute the edit command
pub async fn execute(args: EditArgs, config: &Config) -> UserctlResult<()> {
    let ctx = UiContext::detect();
    let manager = super::build_manager(config, &ctx)?;

    let snapshot = manager.load_user(args.id).await;
    if let Some(err) = &snapshot.error {
        info::render(&ctx, &snapshot);
        return Err(UserctlError::Shared(err.clone()));
    }
    let Some(current) = snapshot.data.as_ref().and_then(|v| v.as_user()).cloned() else {
        return Err(UserctlError::UserNotFound(args.id));
    };

    let draft = if args.name.is_some() || args.email.is_some() || !ctx.is_interactive() {
        // Flag-driven edit: keep the current value for whatever was omitted
        UserDraft {
            name: args.name.unwrap_or_else(|| current.name.clone()),
            email: args.email.unwrap_or_else(|| current.email.clone()),
        }
    } else {
        match profile::edit_form(&ctx, &current).await? {
            FormOutcome::Submitted(draft) => draft,
            FormOutcome::Cancelled => {
                ui::step_info(&ctx, "Canceled editing user");
                return Ok(());
            }
        }
    };
    draft.validate()?;

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Updating user...");
    match manager.update_user(args.id, draft).await {
        Ok(updated) => {
            spinner.clear();
            // Render the server-confirmed record, not the typed draft
            profile::render(&ctx, &updated);
            Ok(())
        }
        Err(err) => {
            spinner.clear();
            Err(err)
        }
    }
}
