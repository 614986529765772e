//! App header bar component
//!
//! Displays the event name and the current screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "confticket")
    pub title: Option<String>,

    /// Subtitle, usually the screen name
    pub subtitle: Option<String>,

    /// Route shown on the right
    pub route: Option<String>,
}

/// App header bar showing the event and screen
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props.title.as_deref().unwrap_or("confticket");
    let left_text = match props.subtitle.as_deref() {
        Some(sub) => format!("{} - {}", title, sub),
        None => title.to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.accent,
        ) {
            Text(
                content: left_text,
                color: theme.button_text,
                weight: Weight::Bold,
            )
            #(props.route.clone().map(|route| element! {
                Text(
                    content: route,
                    color: theme.button_text,
                )
            }))
        }
    }
}
