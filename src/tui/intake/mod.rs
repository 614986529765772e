//! Intake form screen
//!
//! Hosts the [`IntakeState`] reducer in component state. Path acquisition
//! runs on a blocking task and comes back as a single `Drop` action; a
//! successful submit navigates to the ticket screen with the record as
//! transient state.

pub mod keymap;

use iocraft::prelude::*;

use crate::avatar::{AcceptPolicy, DropOutcome, FileRejection, RejectionCode, acquire};
use crate::config::EventConfig;
use crate::handoff::Router;
use crate::intake::{
    IntakeAction, IntakeState, SubmitOutcome, compute_intake_view_model, reduce_intake_state,
    submit,
};
use crate::tui::components::{AvatarField, Footer, Header, TextInput, intake_shortcuts};
use crate::tui::theme::theme;
use crate::types::Route;

pub use keymap::key_to_action;

/// Props for the IntakeScreen component
#[derive(Default, Props)]
pub struct IntakeScreenProps {
    /// Router shared with the app; receives the record on success
    pub router: Option<State<Router>>,
    pub event: EventConfig,
}

#[component]
pub fn IntakeScreen<'a>(props: &IntakeScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut intake = hooks.use_state(IntakeState::default);
    let mut pending_path: State<Option<String>> = hooks.use_state(|| None);
    let mut should_submit = hooks.use_state(|| false);
    let mut should_exit = hooks.use_state(|| false);
    let mut is_acquiring = hooks.use_state(|| false);

    // Stat the dropped paths off the render loop, then apply the outcome
    let acquire_handler: Handler<String> = hooks.use_async_handler({
        let intake_setter = intake;
        let is_acquiring_setter = is_acquiring;

        move |raw: String| {
            let mut intake_setter = intake_setter;
            let mut is_acquiring_setter = is_acquiring_setter;

            async move {
                let fallback = raw.clone();
                let outcome = tokio::task::spawn_blocking(move || {
                    acquire(&AcceptPolicy::default(), &raw)
                })
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!("avatar acquisition task failed: {e}");
                    DropOutcome {
                        accepted: vec![],
                        rejected: vec![FileRejection::new(
                            fallback,
                            vec![RejectionCode::FileUnreadable],
                        )],
                    }
                });

                let current = intake_setter.read().clone();
                intake_setter.set(reduce_intake_state(current, IntakeAction::Drop(outcome)));
                is_acquiring_setter.set(false);
            }
        }
    });

    // One acquisition at a time
    let pending = pending_path.read().clone();
    if let Some(raw) = pending
        && !is_acquiring.get()
    {
        pending_path.set(None);
        is_acquiring.set(true);
        acquire_handler(raw);
    }

    if should_submit.get() {
        should_submit.set(false);

        let mut draft = intake.read().clone();
        let outcome = submit(&mut draft, &mut rand::rng());
        intake.set(draft);

        match outcome {
            SubmitOutcome::Submitted(record) => match props.router {
                Some(mut router) => {
                    router.write().navigate_with(Route::Ticket, record);
                }
                None => tracing::warn!("submitted without a router, ticket dropped"),
            },
            SubmitOutcome::Blocked(reason) => tracing::debug!(?reason, "submission blocked"),
        }
    }

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

                let (focused, picker_active) = {
                    let state = intake.read();
                    (state.focused, state.picker_active())
                };
                let Some(action) = key_to_action(code, modifiers, focused, picker_active) else {
                    return;
                };

                match action {
                    IntakeAction::Quit => should_exit.set(true),
                    IntakeAction::Submit => should_submit.set(true),
                    IntakeAction::CommitPath => {
                        let raw = intake.read().path_buffer.clone();
                        if !raw.trim().is_empty() {
                            pending_path.set(Some(raw));
                        }
                    }
                    action => {
                        let current = intake.read().clone();
                        intake.set(reduce_intake_state(current, action));
                    }
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let vm = compute_intake_view_model(&intake.read());
    let fields = vm.fields.clone();
    let submit_focused = vm.submit_focused;
    let shortcuts = intake_shortcuts(intake.read().focused, vm.avatar.picker_active);
    let headline = format!(
        "Your Journey to {} {} Starts Here!",
        props.event.name, props.event.year
    );
    let event_name = props.event.name.clone();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: Some(event_name),
                subtitle: Some("Ticket Generator".to_string()),
                route: Some(Route::Intake.to_string()),
            )
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                overflow: Overflow::Hidden,
                padding_top: 1,
            ) {
                View(
                    width: 60,
                    max_width: 100pct,
                    flex_direction: FlexDirection::Column,
                    gap: 1,
                ) {
                    View(flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
                        Text(content: headline, color: theme.text, weight: Weight::Bold)
                        Text(
                            content: "Secure your spot at next year's biggest coding conference.",
                            color: theme.hint,
                        )
                    }
                    AvatarField(avatar: Some(vm.avatar.clone()))
                    #(fields.into_iter().map(|field| element! {
                        TextInput(field: Some(field))
                    }))
                    View(
                        width: 100pct,
                        justify_content: JustifyContent::Center,
                        border_style: BorderStyle::Round,
                        border_color: if submit_focused { theme.border_focused } else { theme.accent },
                        background_color: if submit_focused { theme.accent } else { theme.background },
                    ) {
                        Text(
                            content: "Generate My Ticket",
                            color: if submit_focused { theme.button_text } else { theme.accent },
                            weight: Weight::Bold,
                        )
                    }
                }
            }
            Footer(shortcuts: shortcuts)
        }
    }
}
