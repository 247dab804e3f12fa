//! Add command - create a new user

use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::error::UserctlResult;
use crate::ui::{self, TaskSpinner, UiContext};
use crate::users::UserDraft;
use crate::views::form::FormOutcome;
use crate::views::{self, info};

/// Execute the add command
pub async fn execute(args: AddArgs, config: &Config) -> UserctlResult<()> {
    let ctx = UiContext::detect();
    let manager = super::build_manager(config, &ctx)?;

    // Warm the list cache so the candidate id derives from known rows
    manager.load_list().await;

    let draft = if args.name.is_some() || args.email.is_some() || !ctx.is_interactive() {
        UserDraft {
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
        }
    } else {
        match views::form::user_form(&ctx, None).await? {
            FormOutcome::Submitted(draft) => draft,
            FormOutcome::Cancelled => {
                ui::step_info(&ctx, "Canceled adding new user");
                return Ok(());
            }
        }
    };
    draft.validate()?;

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Creating user...");
    match manager.add_user(draft).await {
        Ok(created) => {
            spinner.clear();
            info::card(&ctx, &created);
            Ok(())
        }
        Err(err) => {
            spinner.clear();
            Err(err)
        }
    }
}
