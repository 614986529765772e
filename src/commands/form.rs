//! Interactive form command (`confticket form`)

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{ConfTicketError, Result};
use crate::tui::App;

/// Launch the full-screen intake form
pub fn cmd_form() -> Result<()> {
    let config = Config::load_or_default();

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| ConfTicketError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(App(config: config))
            .fullscreen()
            .await
            .map_err(|e| ConfTicketError::Tui(e.to_string()))
    })
}
