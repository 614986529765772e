//! Plain-text rendering of a ticket for terminal output

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use super::TicketViewModel;

/// Narrowest card interior, in columns
const MIN_CARD_WIDTH: usize = 40;

/// Parts of the ticket that get their own color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Name,
    Email,
    Event,
    Handle,
    TicketNumber,
}

fn plain(_part: Part, text: &str) -> String {
    text.to_string()
}

fn colored(part: Part, text: &str) -> String {
    match part {
        Part::Name => text.bold().red().to_string(),
        Part::Email => text.yellow().to_string(),
        Part::Event => text.bold().to_string(),
        Part::Handle => text.dimmed().to_string(),
        Part::TicketNumber => text.dimmed().to_string(),
    }
}

/// Render a ticket without colors
pub fn render_ticket(vm: &TicketViewModel) -> String {
    render_with(vm, plain)
}

/// Render a ticket with terminal colors
pub fn render_ticket_colored(vm: &TicketViewModel) -> String {
    render_with(vm, colored)
}

fn render_with(vm: &TicketViewModel, paint: fn(Part, &str) -> String) -> String {
    let avatar = format!("[{}]", vm.avatar.name);
    let indent = " ".repeat(width(&avatar) + 1);

    // (left, right) pairs of the card body, measured before painting
    let rows: Vec<(String, usize, String, usize)> = vec![
        (
            paint(Part::Event, &vm.event_name),
            width(&vm.event_name),
            paint(Part::TicketNumber, &vm.ticket_number),
            width(&vm.ticket_number),
        ),
        (vm.event_line.clone(), width(&vm.event_line), String::new(), 0),
        (String::new(), 0, String::new(), 0),
        (
            format!("{avatar} {}", vm.full_name),
            width(&avatar) + 1 + width(&vm.full_name),
            String::new(),
            0,
        ),
        (
            format!("{indent}{}", paint(Part::Handle, &vm.handle)),
            width(&indent) + width(&vm.handle),
            String::new(),
            0,
        ),
    ];

    let inner = rows
        .iter()
        .map(|(_, lw, _, rw)| lw + if *rw > 0 { rw + 2 } else { 0 })
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_WIDTH);

    let mut out = String::new();
    out.push_str(&format!(
        "Congrats, {}! Your ticket is ready.\n",
        paint(Part::Name, &vm.full_name)
    ));
    out.push_str(&format!(
        "We've emailed your ticket to {} and will send updates in the run up to the event.\n",
        paint(Part::Email, &vm.email)
    ));
    out.push('\n');

    out.push_str(&format!("╭{}╮\n", "─".repeat(inner + 2)));
    for (left, left_width, right, right_width) in rows {
        let gap = inner - left_width - right_width;
        out.push_str(&format!("│ {left}{}{right} │\n", " ".repeat(gap)));
    }
    out.push_str(&format!("╰{}╯\n", "─".repeat(inner + 2)));
    out
}

/// Terminal columns taken by `text`; CJK and emoji count as two
fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::AvatarFile;

    fn vm() -> TicketViewModel {
        TicketViewModel {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            handle: "@adalovelace".to_string(),
            avatar: AvatarFile::new("/tmp/ada.png", "image/png", 100),
            ticket_number: "#12345".to_string(),
            event_name: "Coding Conf".to_string(),
            event_line: "Jan 31, 2025 / Austin, TX".to_string(),
        }
    }

    #[test]
    fn test_render_ticket_snapshot() {
        insta::assert_snapshot!(render_ticket(&vm()).trim_end(), @r"
        Congrats, Ada Lovelace! Your ticket is ready.
        We've emailed your ticket to ada@example.com and will send updates in the run up to the event.

        ╭──────────────────────────────────────────╮
        │ Coding Conf                       #12345 │
        │ Jan 31, 2025 / Austin, TX                │
        │                                          │
        │ [ada.png] Ada Lovelace                   │
        │           @adalovelace                   │
        ╰──────────────────────────────────────────╯
        ");
    }

    #[test]
    fn test_card_lines_have_equal_width() {
        let long = TicketViewModel {
            full_name: "Augusta Ada King, Countess of Lovelace".to_string(),
            ..vm()
        };
        let rendered = render_ticket(&long);
        let card: Vec<usize> = rendered
            .lines()
            .filter(|l| l.starts_with('│') || l.starts_with('╭') || l.starts_with('╰'))
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(card.len(), 7);
        assert!(card.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_wide_characters_keep_borders_aligned() {
        let wide = TicketViewModel {
            full_name: "山田 太郎 🎉".to_string(),
            ..vm()
        };
        let rendered = render_ticket(&wide);
        let card: Vec<usize> = rendered
            .lines()
            .filter(|l| l.starts_with('│') || l.starts_with('╭') || l.starts_with('╰'))
            .map(UnicodeWidthStr::width)
            .collect();
        assert_eq!(card.len(), 7);
        assert!(card.windows(2).all(|w| w[0] == w[1]), "{card:?}");
    }

    #[test]
    fn test_colored_render_keeps_text() {
        let rendered = render_ticket_colored(&vm());
        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("#12345"));
        assert!(rendered.contains("@adalovelace"));
    }
}
