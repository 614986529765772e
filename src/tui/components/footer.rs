//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;
use crate::types::IntakeField;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "Tab", "C-g")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Generate")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the intake form, depending on what has focus
pub fn intake_shortcuts(focused: IntakeField, picker_active: bool) -> Vec<Shortcut> {
    let on_avatar = focused == IntakeField::Avatar;

    ShortcutsBuilder::new()
        .with_field_navigation()
        .add_if(on_avatar && picker_active, "Enter", "Attach Path")
        .add_if(on_avatar && picker_active, "Esc", "Clear Path")
        .add_if(on_avatar && !picker_active, "x", "Remove Image")
        .add_if(on_avatar && !picker_active, "c", "Change Image")
        .add_if(!on_avatar, "Enter", "Generate")
        .add("C-g", "Generate")
        .with_quit()
        .build()
}

/// Shortcuts for the ticket screen
pub fn ticket_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("n", "Start Over")
        .add("q", "Quit")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextField;

    fn keys(shortcuts: &[Shortcut]) -> Vec<&str> {
        shortcuts.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_avatar_picker_shortcuts() {
        let shortcuts = intake_shortcuts(IntakeField::Avatar, true);
        let keys = keys(&shortcuts);
        assert!(keys.contains(&"Esc"));
        assert!(!keys.contains(&"x"));
    }

    #[test]
    fn test_avatar_preview_shortcuts() {
        let shortcuts = intake_shortcuts(IntakeField::Avatar, false);
        let keys = keys(&shortcuts);
        assert!(keys.contains(&"x"));
        assert!(keys.contains(&"c"));
    }

    #[test]
    fn test_text_field_shortcuts() {
        let shortcuts = intake_shortcuts(IntakeField::Text(TextField::Email), true);
        assert!(
            shortcuts
                .iter()
                .any(|s| s.key == "Enter" && s.action == "Generate")
        );
    }

    #[test]
    fn test_ticket_shortcuts() {
        assert_eq!(keys(&ticket_shortcuts()), vec!["n", "q"]);
    }
}
