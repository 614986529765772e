//! Top-level TUI component
//!
//! Owns the [`Router`] and mounts the screen for the current route. Leaving
//! a screen unmounts it, so returning to the intake route starts a fresh
//! draft.

use iocraft::prelude::*;

use crate::config::Config;
use crate::handoff::Router;
use crate::tui::intake::IntakeScreen;
use crate::tui::ticket::TicketScreen;
use crate::types::Route;

/// Props for the App component
#[derive(Default, Props)]
pub struct AppProps {
    pub config: Config,
}

#[component]
pub fn App<'a>(props: &AppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let router = hooks.use_state(Router::default);
    let route = router.read().current().route;
    let event = props.config.event.clone();

    let screen = match route {
        Route::Intake => element! {
            IntakeScreen(router: Some(router), event: event)
        }
        .into_any(),
        Route::Ticket => element! {
            TicketScreen(router: Some(router), event: event)
        }
        .into_any(),
    };

    element! {
        View(flex_direction: FlexDirection::Column) {
            #(Some(screen))
        }
    }
}
