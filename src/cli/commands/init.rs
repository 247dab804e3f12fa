//! Init command - create a project-local .userctl.toml

use std::path::Path;

use tokio::fs;

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_FILE;
use crate::error::{UserctlError, UserctlResult};
use crate::ui::{self, UiContext};

const TEMPLATE: &str = "\
# Project-local userctl configuration.
# Keys set here override ~/.config/userctl/config.toml.

[api]
base_url = \"http://localhost:3000\"

[general]
confirm_delete = true
";

/// Execute the init command
pub async fn execute(args: InitArgs) -> UserctlResult<()> {
    let ctx = UiContext::detect();

    let dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| UserctlError::io("getting current directory", e))?,
    };
    let target = dir.join(LOCAL_CONFIG_FILE);

    if target.exists() && !args.force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", target.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    write_template(&target).await?;
    ui::step_ok_detail(&ctx, "Created local configuration", &target.display().to_string());
    ui::remark(&ctx, "Adjust api.base_url to point at your user API");

    Ok(())
}

async fn write_template(target: &Path) -> UserctlResult<()> {
    fs::write(target, TEMPLATE)
        .await
        .map_err(|e| UserctlError::io(format!("writing {}", target.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_into_config() {
        let config: Config = toml::from_str(TEMPLATE).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert!(config.general.confirm_delete);
    }

    #[tokio::test]
    async fn writes_template_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join(LOCAL_CONFIG_FILE);
        write_template(&target).await.unwrap();
        assert!(target.exists());
    }
}
