//! Ticket screen
//!
//! Redeems the record the router was navigated with exactly once, on mount.
//! Reached without one (e.g. opened directly), it replaces its own location
//! with the intake route and renders nothing.

use iocraft::prelude::*;

use crate::config::EventConfig;
use crate::handoff::Router;
use crate::intake::SubmissionRecord;
use crate::ticket::{TicketScreen as Resolved, resolve_ticket_screen, today};
use crate::tui::components::{Footer, Header, TicketCard, ticket_shortcuts};
use crate::tui::theme::theme;
use crate::types::Route;

/// Props for the TicketScreen component
#[derive(Default, Props)]
pub struct TicketScreenProps {
    pub router: Option<State<Router>>,
    pub event: EventConfig,
}

#[component]
pub fn TicketScreen<'a>(props: &TicketScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let router = props.router;
    let record: State<Option<SubmissionRecord>> =
        hooks.use_state(move || router.and_then(|mut router| router.write().take_state()));
    let mut redirected = hooks.use_state(|| false);
    let mut start_over = hooks.use_state(|| false);
    let mut should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events({
        move |event| {
            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            {
                if kind == KeyEventKind::Release {
                    return;
                }
                match code {
                    KeyCode::Char('n') => start_over.set(true),
                    KeyCode::Char('q') | KeyCode::Esc => should_exit.set(true),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        should_exit.set(true)
                    }
                    _ => {}
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    if start_over.get() {
        start_over.set(false);
        if let Some(mut router) = props.router {
            router.write().start_over();
        }
    }

    let screen = resolve_ticket_screen(record.read().as_ref(), today(), &props.event);
    let vm = match screen {
        Resolved::Render(vm) => vm,
        Resolved::Redirect(route) => {
            if !redirected.get() {
                redirected.set(true);
                if let Some(mut router) = props.router {
                    router.write().replace(route);
                }
            }
            return element!(View).into_any();
        }
    };

    let headline = vm.headline();
    let email_notice = vm.email_notice();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: Some(props.event.name.clone()),
                subtitle: Some("Your Ticket".to_string()),
                route: Some(Route::Ticket.to_string()),
            )
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding_top: 1,
                gap: 1,
            ) {
                Text(content: headline, color: theme.text, weight: Weight::Bold)
                Text(content: email_notice, color: theme.hint)
                TicketCard(ticket: Some(vm))
            }
            Footer(shortcuts: ticket_shortcuts())
        }
    }
    .into_any()
}
