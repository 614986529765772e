//! Interactive terminal interface
//!
//! Two screens behind a small router:
//! - `intake` - the ticket form with the avatar dropzone
//! - `ticket` - the generated ticket

pub mod app;
pub mod components;
pub mod intake;
pub mod theme;
pub mod ticket;

pub use app::{App, AppProps};
pub use intake::{IntakeScreen, IntakeScreenProps, key_to_action};
pub use theme::Theme;
pub use ticket::{TicketScreen, TicketScreenProps};
