// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use clap::Args;
use evex_core::{App, EventFilter};

use crate::event_formatter::EventFormatter;
use crate::util::parse_date_range;

/// List events, optionally filtered by text, category and date range.
#[derive(Debug, Args)]
pub struct CmdEvents {
    /// Case-insensitive text to search for in title, description,
    /// category and location
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only events in this exact category
    #[arg(long)]
    pub category: Option<String>,

    /// Earliest date (YYYY-MM-DD, inclusive); requires --until
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Latest date (YYYY-MM-DD, inclusive); requires --from
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// List favorites instead of the catalog
    #[arg(short, long)]
    pub favorites: bool,
}

impl CmdEvents {
    pub fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        let filter = EventFilter {
            search_text: self.search,
            category: self.category,
            date_range: parse_date_range(self.from.as_deref(), self.until.as_deref())?,
        };
        tracing::debug!(?filter, favorites = self.favorites, "listing events");

        let source = if self.favorites {
            app.favorites().list()
        } else {
            app.catalog().events().to_vec()
        };
        let events = filter.apply(&source);

        if events.is_empty() {
            match filter.is_empty() {
                true => println!("No events."),
                false => println!("No events match the given filters."),
            }
            return Ok(());
        }

        let shown = events.len();
        EventFormatter::new().write(&mut io::stdout(), &events, app.favorites())?;
        if !filter.is_empty() {
            println!("{shown} of {} events shown", source.len());
        }
        Ok(())
    }
}
