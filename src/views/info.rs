//! Info card - pure display of one user with loading/error states

use crate::sync::{QuerySnapshot, QueryStatus};
use crate::ui::{self, UiContext};
use crate::users::User;

/// Render a detail snapshot as an info card
pub fn render(ctx: &UiContext, snapshot: &QuerySnapshot) {
    match snapshot.status {
        QueryStatus::Loading => ui::step_info(ctx, "Loading user data..."),
        QueryStatus::Error => {
            let detail = snapshot
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_default();
            ui::step_error_detail(ctx, "Could not load user data", &detail);
        }
        QueryStatus::Success => match snapshot.data.as_ref().and_then(|v| v.as_user()) {
            Some(user) => card(ctx, user),
            None => ui::step_info(ctx, "No user"),
        },
    }
}

/// Render one user as a card
pub fn card(ctx: &UiContext, user: &User) {
    ui::note(ctx, &format!("{} (#{})", user.name, user.id), &user.email);
}
