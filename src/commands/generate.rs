//! Headless ticket generation (`confticket generate`)
//!
//! Drives the same intake controller as the TUI: fields are set, the avatar
//! goes through the dropzone, and the record reaches the renderer through
//! the router hand-off.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{ConfTicketError, Result};
use crate::handoff::Router;
use crate::intake::{IntakeController, IntakeViewModel, SubmitOutcome};
use crate::ticket::{TicketScreen, render_ticket, render_ticket_colored, resolve_ticket_screen, today};
use crate::types::{Route, TextField};

/// Inputs of a headless submission
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub full_name: String,
    pub email: String,
    pub username: String,
    /// Every `--avatar` given; more than one is a single multi-file drop
    pub avatars: Vec<PathBuf>,
    pub json: bool,
}

/// Submit the form once and print the resulting ticket
pub fn cmd_generate(options: GenerateOptions) -> Result<()> {
    let config = Config::load_or_default();
    let mut controller = IntakeController::default();

    controller.set_text(TextField::FullName, options.full_name);
    controller.set_text(TextField::Email, options.email);
    controller.set_text(TextField::Username, options.username);
    if !options.avatars.is_empty() {
        let outcome = crate::avatar::acquire_paths(controller.policy(), &options.avatars);
        controller.apply_drop(outcome);
    }

    let record = match controller.submit() {
        SubmitOutcome::Submitted(record) => record,
        SubmitOutcome::Blocked(reason) => {
            tracing::debug!(?reason, "headless submission blocked");
            let messages = visible_messages(&controller.view_model());
            for message in &messages {
                eprintln!("{} {}", "ⓘ".red(), message);
            }
            return Err(ConfTicketError::Validation(messages.join("; ")));
        }
    };

    let mut router = Router::default();
    router.navigate_with(Route::Ticket, record);
    let record = router.take_state();

    let vm = match resolve_ticket_screen(record.as_ref(), today(), &config.event) {
        TicketScreen::Render(vm) => vm,
        TicketScreen::Redirect(route) => {
            return Err(ConfTicketError::Other(format!(
                "no ticket to show, redirected to {route}"
            )));
        }
    };

    let text = if atty::is(atty::Stream::Stdout) {
        render_ticket_colored(&vm)
    } else {
        render_ticket(&vm)
    };

    let json_output = json!({
        "record": serde_json::to_value(&record)?,
        "ticket": {
            "headline": vm.headline(),
            "handle": vm.handle,
            "ticketNumber": vm.ticket_number,
            "event": vm.event_name,
            "eventLine": vm.event_line,
        },
    });

    CommandOutput::new(json_output)
        .with_text(text.trim_end())
        .print(options.json)
}

/// Indicators the form shows after a blocked submit, avatar first
fn visible_messages(vm: &IntakeViewModel) -> Vec<&'static str> {
    vm.avatar
        .error
        .into_iter()
        .chain(vm.fields.iter().filter_map(|field| field.error))
        .collect()
}
