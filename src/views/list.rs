//! List view - rows rendered from the list query

use console::style;

use crate::error::UserctlResult;
use crate::sync::{MutationTracker, QuerySnapshot, QueryStatus};
use crate::ui::{self, UiContext};
use crate::users::User;

/// Render the list snapshot as a human-readable table
pub fn render_table(ctx: &UiContext, snapshot: &QuerySnapshot, deleting: &MutationTracker) {
    ui::intro(ctx, "Users");

    match snapshot.status {
        QueryStatus::Loading => {
            ui::step_info(ctx, "Loading users...");
            return;
        }
        QueryStatus::Error => {
            let detail = snapshot
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_default();
            ui::step_error_detail(ctx, "Could not list users", &detail);
            return;
        }
        QueryStatus::Success => {}
    }

    let users = list_data(snapshot);
    if users.is_empty() {
        ui::step_info(ctx, "No users");
        return;
    }

    println!(
        "{:<6} {:<24} {:<32} {}",
        style("ID").bold(),
        style("NAME").bold(),
        style("EMAIL").bold(),
        style("STATE").bold()
    );
    println!("{}", "-".repeat(72));

    for row in table_rows(users, deleting) {
        println!("{}", row);
    }

    println!();
    match snapshot.refreshed_at {
        Some(at) => println!(
            "{} user(s), refreshed {}",
            users.len(),
            style(at.format("%H:%M:%S")).dim()
        ),
        None => println!("{} user(s)", users.len()),
    }
}

/// Render the list snapshot as JSON (errors surface on stderr, not here)
pub fn render_json(snapshot: &QuerySnapshot) -> UserctlResult<()> {
    let users = list_data(snapshot);
    println!("{}", serde_json::to_string_pretty(users)?);
    Ok(())
}

/// Render the list snapshot as one tab-separated line per user
pub fn render_plain(snapshot: &QuerySnapshot) {
    for user in list_data(snapshot) {
        println!("{}\t{}\t{}", user.id, user.name, user.email);
    }
}

/// One formatted line per user; rows mid-delete carry a "removing" marker
pub fn table_rows(users: &[User], deleting: &MutationTracker) -> Vec<String> {
    users
        .iter()
        .map(|user| {
            let state = if deleting.is_pending_for(user.id) {
                "removing..."
            } else {
                ""
            };
            format!("{:<6} {:<24} {:<32} {}", user.id, user.name, user.email, state)
        })
        .collect()
}

fn list_data(snapshot: &QuerySnapshot) -> &[User] {
    snapshot
        .data
        .as_ref()
        .and_then(|value| value.as_list())
        .unwrap_or(&[])
}
