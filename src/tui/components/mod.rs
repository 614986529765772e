//! Shared TUI components
//!
//! Reusable pieces of the intake and ticket screens.

pub mod avatar_field;
pub mod footer;
pub mod header;
pub mod shortcuts;
pub mod text_field;
pub mod ticket_card;

pub use avatar_field::{AvatarField, AvatarFieldProps};
pub use footer::{Footer, FooterProps, Shortcut, intake_shortcuts, ticket_shortcuts};
pub use header::{Header, HeaderProps};
pub use shortcuts::ShortcutsBuilder;
pub use text_field::{TextInput, TextInputProps};
pub use ticket_card::{TicketCard, TicketCardProps};
