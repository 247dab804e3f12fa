//! CLI command implementations

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;

pub use add::execute as add;
pub use config::execute as config;
pub use delete::execute as delete;
pub use edit::execute as edit;
pub use init::execute as init;
pub use list::execute as list;
pub use show::execute as show;

use std::sync::Arc;

use crate::api::HttpClient;
use crate::config::Config;
use crate::error::UserctlResult;
use crate::sync::UiNotifier;
use crate::ui::UiContext;
use crate::users::{HttpUserApi, UserManager};

/// Build a `UserManager` wired to the configured API and the terminal UI
fn build_manager(config: &Config, ctx: &UiContext) -> UserctlResult<UserManager> {
    let http = HttpClient::new(&config.api.base_url)?;
    let api = Arc::new(HttpUserApi::new(http));
    let notifier = Arc::new(UiNotifier::new(ctx.clone()));
    Ok(UserManager::new(api, notifier))
}
