//! Profile view - one user's card plus an update form bound to its fields

use crate::error::UserctlResult;
use crate::ui::{self, UiContext};
use crate::users::{User, UserDraft};
use crate::views::form::{self, FormOutcome};
use crate::views::info;

/// Collect an updated draft, pre-bound to the user's current fields
pub async fn edit_form(ctx: &UiContext, current: &User) -> UserctlResult<FormOutcome> {
    info::card(ctx, current);
    let initial = UserDraft {
        name: current.name.clone(),
        email: current.email.clone(),
    };
    form::user_form(ctx, Some(&initial)).await
}

/// Render the profile with the server-confirmed record
pub fn render(ctx: &UiContext, user: &User) {
    info::card(ctx, user);
    ui::key_value(ctx, "name", &user.name);
    ui::key_value(ctx, "email", &user.email);
}
