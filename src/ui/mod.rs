//! UI module for consistent, modern CLI experience
//!
//! Uses `cliclack` (Rust port of @clack/prompts) for interactive prompts
//! with automatic fallback to plain output in CI/non-interactive environments.
//!
//! # Example
//!
//! ```rust,ignore
//! use userctl::ui::{self, UiContext, TaskSpinner};
//!
//! let ctx = UiContext::detect().with_auto_yes(args.yes);
//!
//! let mut spinner = TaskSpinner::new(&ctx);
//! spinner.start("Loading users...");
//! // ... fetch ...
//! spinner.stop("Loaded 4 users");
//!
//! let yes = ui::confirm(&ctx, "Remove user \"Ana\"?", false).await?;
//! ```

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, note, remark, step_error, step_error_detail, step_info, step_ok,
    step_ok_detail, step_warn_hint,
};
pub use progress::{DeleteProgress, TaskSpinner};
pub use prompts::{confirm, input_text};
pub use theme::{init_theme, UserctlTheme};
