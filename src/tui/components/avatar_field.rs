//! Avatar dropzone
//!
//! Renders one of two faces: the path prompt (no file, or the user asked to
//! change the image) or a preview of the attached file with its actions.
//! The message line under it is either the error or the hint, never both.

use iocraft::prelude::*;

use crate::intake::model::AvatarViewModel;
use crate::tui::theme::theme;

/// Props for the AvatarField component
#[derive(Default, Props)]
pub struct AvatarFieldProps {
    pub avatar: Option<AvatarViewModel>,
}

#[component]
pub fn AvatarField(props: &AvatarFieldProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(vm) = props.avatar.clone() else {
        return element!(View).into_any();
    };

    let border_color = if vm.picker_active && vm.is_focused {
        theme.border_drop
    } else {
        theme.field_border(vm.is_focused, vm.error.is_some())
    };

    let body: AnyElement<'static> = if vm.picker_active {
        let prompt = if vm.path_buffer.is_empty() && !vm.is_focused {
            "Drop or paste a file path".to_string()
        } else if vm.is_focused {
            format!("{}_", vm.path_buffer)
        } else {
            vm.path_buffer.clone()
        };
        let replacing = vm.file.as_ref().map(|file| format!("Replacing {}", file.name));

        element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: prompt, color: theme.text, wrap: TextWrap::NoWrap)
                #(replacing.map(|line| element! {
                    Text(content: line, color: theme.text_dimmed)
                }))
            }
        }
        .into_any()
    } else {
        let (name, size) = vm
            .file
            .as_ref()
            .map(|file| (file.name.clone(), file.size_label()))
            .unwrap_or_default();

        element! {
            View(flex_direction: FlexDirection::Column) {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: name, color: theme.text, weight: Weight::Bold)
                    Text(content: format!("({})", size), color: theme.text_dimmed)
                }
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    Text(content: "[x] Remove image", color: theme.hint)
                    Text(content: "[c] Change image", color: theme.hint)
                }
            }
        }
        .into_any()
    };

    let (message, message_color) = match (vm.error, vm.hint) {
        (Some(error), _) => (Some(error), theme.error),
        (None, hint) => (hint, theme.hint),
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            Text(
                content: "Upload Avatar",
                color: theme.label_color(vm.is_focused),
            )
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
            ) {
                #(Some(body))
            }
            #(message.map(|line| element! {
                Text(content: format!("ⓘ {}", line), color: message_color)
            }))
        }
    }
    .into_any()
}
