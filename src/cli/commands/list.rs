//! List command - show all users

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::{UserctlError, UserctlResult};
use crate::ui::{TaskSpinner, UiContext};
use crate::views;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> UserctlResult<()> {
    let ctx = UiContext::detect();
    let manager = super::build_manager(config, &ctx)?;

    let mut spinner = TaskSpinner::new(&ctx);
    if matches!(args.format, OutputFormat::Table) {
        spinner.start("Loading users...");
    }
    let snapshot = manager.load_list().await;
    spinner.clear();

    match args.format {
        OutputFormat::Table => views::list::render_table(&ctx, &snapshot, manager.tracker()),
        OutputFormat::Json => views::list::render_json(&snapshot)?,
        OutputFormat::Plain => views::list::render_plain(&snapshot),
    }

    if let Some(err) = snapshot.error {
        return Err(UserctlError::Shared(err));
    }
    Ok(())
}
