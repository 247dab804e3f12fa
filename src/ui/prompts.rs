//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{UserctlError, UserctlResult};

/// Prompt for confirmation, returns default if non-interactive or auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> UserctlResult<bool> {
    // Auto-yes mode bypasses prompts
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    // Non-interactive mode returns default
    if !ctx.is_interactive() {
        return Ok(default);
    }

    // Run blocking cliclack prompt in spawn_blocking
    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| UserctlError::Prompt(format!("prompt task failed: {e}")))?;

    result.map_err(|e| UserctlError::Prompt(e.to_string()))
}

/// Prompt for a required line of text, pre-filled with `initial` when given.
///
/// Returns `Ok(None)` if the user cancelled the prompt. In non-interactive
/// mode the initial value is returned as-is; missing values surface later
/// as validation errors.
pub async fn input_text(
    ctx: &UiContext,
    label: &str,
    placeholder: &str,
    initial: Option<String>,
) -> UserctlResult<Option<String>> {
    if !ctx.is_interactive() {
        return Ok(initial);
    }

    let label = label.to_string();
    let placeholder = placeholder.to_string();
    let result = tokio::task::spawn_blocking(move || {
        let mut input = cliclack::input(&label).placeholder(&placeholder);
        if let Some(ref initial) = initial {
            input = input.default_input(initial);
        }
        input
            .validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("This field is required")
                } else {
                    Ok(())
                }
            })
            .interact::<String>()
    })
    .await
    .map_err(|e| UserctlError::Prompt(format!("prompt task failed: {e}")))?;

    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(UserctlError::Prompt(e.to_string())),
    }
}
