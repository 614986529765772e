pub mod avatar;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod handoff;
pub mod intake;
pub mod ticket;
pub mod tui;
pub mod types;

pub use avatar::{AcceptPolicy, AvatarFile, DropOutcome, FileRejection, RejectionCode};
pub use config::{Config, EventConfig};
pub use error::{ConfTicketError, Result};
pub use handoff::{HandoffStore, HandoffToken, Location, Router};
pub use intake::{
    AcceptanceResult, AvatarRejection, IntakeAction, IntakeController, IntakeState,
    SubmissionRecord, SubmitBlocked, SubmitOutcome,
};
pub use ticket::{TicketScreen, TicketViewModel, render_ticket, resolve_ticket_screen};
pub use types::{IntakeField, Route, TextField};
