//! Ticket renderer
//!
//! A stateless consumer of a [`SubmissionRecord`]. Without a record the
//! ticket screen redirects back to the intake screen and renders nothing.

pub mod render;

use jiff::civil::Date;

use crate::avatar::AvatarFile;
use crate::config::EventConfig;
use crate::intake::SubmissionRecord;
use crate::types::Route;

pub use render::{render_ticket, render_ticket_colored};

/// What the ticket screen does with the state it was navigated with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketScreen {
    /// No record: replace the location with this route, render nothing
    Redirect(Route),
    Render(TicketViewModel),
}

/// Everything the ticket screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketViewModel {
    pub full_name: String,
    pub email: String,
    /// Username prefixed with `@`
    pub handle: String,
    pub avatar: AvatarFile,
    /// Ticket number prefixed with `#`
    pub ticket_number: String,
    pub event_name: String,
    /// "<date> / <location>"
    pub event_line: String,
}

impl TicketViewModel {
    pub fn headline(&self) -> String {
        format!("Congrats, {}! Your ticket is ready.", self.full_name)
    }

    pub fn email_notice(&self) -> String {
        format!(
            "We've emailed your ticket to {} and will send updates in the run up to the event.",
            self.email
        )
    }
}

/// Short en-US date, e.g. "Oct 16, 2026"
pub fn format_display_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// The local date at render time
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Build the ticket view model from a record
///
/// The date is the one passed in (render time), not the submission time.
pub fn compute_ticket_view_model(
    record: &SubmissionRecord,
    date: Date,
    event: &EventConfig,
) -> TicketViewModel {
    TicketViewModel {
        full_name: record.full_name.clone(),
        email: record.email.clone(),
        handle: format!("@{}", record.username),
        avatar: record.avatar.clone(),
        ticket_number: format!("#{}", record.ticket_id),
        event_name: event.name.clone(),
        event_line: format!("{} / {}", format_display_date(date), event.location),
    }
}

/// Decide between rendering and redirecting
pub fn resolve_ticket_screen(
    record: Option<&SubmissionRecord>,
    date: Date,
    event: &EventConfig,
) -> TicketScreen {
    match record {
        Some(record) => TicketScreen::Render(compute_ticket_view_model(record, date, event)),
        None => {
            tracing::debug!("ticket screen reached without a record, redirecting");
            TicketScreen::Redirect(Route::Intake)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            username: "adalovelace".to_string(),
            avatar: AvatarFile::new("/tmp/ada.png", "image/png", 100 * 1024),
            ticket_id: 1609,
        }
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(date(2025, 1, 31)), "Jan 31, 2025");
        assert_eq!(format_display_date(date(2026, 10, 6)), "Oct 6, 2026");
    }

    #[test]
    fn test_resolve_without_record_redirects() {
        let screen = resolve_ticket_screen(None, date(2025, 1, 31), &EventConfig::default());
        assert_eq!(screen, TicketScreen::Redirect(Route::Intake));
    }

    #[test]
    fn test_resolve_with_record_renders_fields_verbatim() {
        let record = SubmissionRecord {
            ticket_id: 12345,
            ..record()
        };
        let TicketScreen::Render(vm) =
            resolve_ticket_screen(Some(&record), date(2025, 1, 31), &EventConfig::default())
        else {
            panic!("expected render");
        };
        assert_eq!(vm.headline(), "Congrats, Ada Lovelace! Your ticket is ready.");
        assert!(vm.email_notice().contains("ada@example.com"));
        assert_eq!(vm.handle, "@adalovelace");
        assert_eq!(vm.ticket_number, "#12345");
        assert_eq!(vm.event_line, "Jan 31, 2025 / Austin, TX");
        assert_eq!(vm.event_name, "Coding Conf");
        assert_eq!(vm.avatar.name, "ada.png");
    }

    #[test]
    fn test_date_comes_from_render_time() {
        let event = EventConfig::default();
        let a = compute_ticket_view_model(&record(), date(2025, 1, 1), &event);
        let b = compute_ticket_view_model(&record(), date(2025, 6, 1), &event);
        assert_ne!(a.event_line, b.event_line);
    }
}
