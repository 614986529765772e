//! Labelled single-line text input
//!
//! Shows the label, the value with a cursor when focused, and the field's
//! required message once it is visible.

use iocraft::prelude::*;

use crate::intake::model::TextFieldViewModel;
use crate::tui::theme::theme;

/// Props for the TextInput component
#[derive(Default, Props)]
pub struct TextInputProps {
    pub field: Option<TextFieldViewModel>,
}

/// Text input with an inline error line
#[component]
pub fn TextInput(props: &TextInputProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(vm) = props.field.clone() else {
        return element!(View).into_any();
    };

    let (content, color) = if vm.value.is_empty() && !vm.is_focused {
        (vm.field.placeholder().to_string(), theme.text_dimmed)
    } else if vm.is_focused {
        (format!("{}_", vm.value), theme.text)
    } else {
        (vm.value.clone(), theme.text)
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            Text(
                content: vm.field.label(),
                color: theme.label_color(vm.is_focused),
            )
            View(
                border_style: BorderStyle::Round,
                border_color: theme.field_border(vm.is_focused, vm.error.is_some()),
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
            ) {
                Text(content: content, color: color, wrap: TextWrap::NoWrap)
            }
            #(vm.error.map(|message| element! {
                Text(content: format!("ⓘ {}", message), color: theme.error)
            }))
        }
    }
    .into_any()
}
