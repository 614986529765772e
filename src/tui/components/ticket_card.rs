//! Ticket card component
//!
//! The TUI counterpart of `render_ticket`: event, date and location on top,
//! the ticket number on the right, attendee details below.

use iocraft::prelude::*;

use crate::ticket::TicketViewModel;
use crate::tui::theme::theme;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    pub ticket: Option<TicketViewModel>,
}

#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(vm) = props.ticket.clone() else {
        return element!(View).into_any();
    };

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.accent,
            padding_left: 2,
            padding_right: 2,
            min_width: 44,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(content: vm.event_name.clone(), color: theme.text, weight: Weight::Bold)
                Text(content: vm.ticket_number.clone(), color: theme.text_dimmed)
            }
            Text(content: vm.event_line.clone(), color: theme.text_dimmed)
            View(flex_direction: FlexDirection::Row, gap: 1, margin_top: 1) {
                Text(content: format!("[{}]", vm.avatar.name), color: theme.hint)
                View(flex_direction: FlexDirection::Column) {
                    Text(content: vm.full_name.clone(), color: theme.text, weight: Weight::Bold)
                    Text(content: vm.handle.clone(), color: theme.text_dimmed)
                }
            }
        }
    }
    .into_any()
}
