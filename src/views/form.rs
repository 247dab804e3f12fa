//! User draft form
//!
//! Collects a `UserDraft` through interactive prompts and reports the
//! outcome as an explicit discriminated result, so the caller never has to
//! reach into dialog state to learn whether the user submitted or bailed.

use crate::error::UserctlResult;
use crate::ui::{self, UiContext};
use crate::users::UserDraft;

/// Result of a form interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted(UserDraft),
    Cancelled,
}

/// Collect name and email, pre-filled from `initial` when editing
pub async fn user_form(ctx: &UiContext, initial: Option<&UserDraft>) -> UserctlResult<FormOutcome> {
    let Some(name) = ui::input_text(
        ctx,
        "Name",
        "John Doe",
        initial.map(|draft| draft.name.clone()),
    )
    .await?
    else {
        return Ok(FormOutcome::Cancelled);
    };

    let Some(email) = ui::input_text(
        ctx,
        "Email",
        "john@doe.com",
        initial.map(|draft| draft.email.clone()),
    )
    .await?
    else {
        return Ok(FormOutcome::Cancelled);
    };

    Ok(FormOutcome::Submitted(UserDraft { name, email }))
}
