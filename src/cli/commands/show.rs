//! Show command - display one user's profile

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::{UserctlError, UserctlResult};
use crate::ui::{TaskSpinner, UiContext};
use crate::views;

/// Execute the show command
pub async fn execute(args: ShowArgs, config: &Config) -> UserctlResult<()> {
    let ctx = UiContext::detect();
    let manager = super::build_manager(config, &ctx)?;

    let mut spinner = TaskSpinner::new(&ctx);
    if matches!(args.format, OutputFormat::Table) {
        spinner.start("Loading user data...");
    }
    let snapshot = manager.load_user(args.id).await;
    spinner.clear();

    match args.format {
        OutputFormat::Table => views::info::render(&ctx, &snapshot),
        OutputFormat::Json => {
            if let Some(user) = snapshot.data.as_ref().and_then(|v| v.as_user()) {
                println!("{}", serde_json::to_string_pretty(user)?);
            }
        }
        OutputFormat::Plain => {
            if let Some(user) = snapshot.data.as_ref().and_then(|v| v.as_user()) {
                println!("{}\t{}\t{}", user.id, user.name, user.email);
            }
        }
    }

    if let Some(err) = snapshot.error {
        return Err(UserctlError::Shared(err));
    }
    Ok(())
}
