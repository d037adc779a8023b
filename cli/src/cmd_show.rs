// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use clap::Args;
use evex_core::App;

use crate::event_formatter::write_details;

/// Show the full details of one event.
#[derive(Debug, Args)]
pub struct CmdShow {
    /// The event id
    pub id: String,
}

impl CmdShow {
    pub fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        let event = app
            .catalog()
            .get(&self.id)
            .ok_or_else(|| format!("No event with id {:?} in the catalog", self.id))?;

        write_details(&mut io::stdout(), event, app.favorites().contains(&event.id))?;
        Ok(())
    }
}
