// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use clap::Subcommand;
use colored::Colorize;
use evex_core::{App, Event};

use crate::event_formatter::EventFormatter;

/// Manage the favorites list.
#[derive(Debug, Subcommand)]
pub enum CmdFav {
    /// List favorited events in the order they were added
    #[command(alias = "ls")]
    List,

    /// Favorite an event from the catalog
    Add {
        /// The event id
        id: String,
    },

    /// Remove an event from the favorites
    #[command(alias = "rm")]
    Remove {
        /// The event id
        id: String,
    },

    /// Favorite the event, or unfavorite it if it already is one
    Toggle {
        /// The event id
        id: String,
    },
}

impl CmdFav {
    pub async fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        match self {
            Self::List => {
                let favorites = app.favorites().list();
                if favorites.is_empty() {
                    println!("No favorites yet. Try `evex fav add <id>`.");
                    return Ok(());
                }
                EventFormatter::new().write(&mut io::stdout(), &favorites, app.favorites())?;
                Ok(())
            }

            Self::Add { id } => {
                let event = lookup(app, &id)?;
                app.favorites().add(event.clone()).await?;
                println!("Added {} to favorites", event.title.bold());
                Ok(())
            }

            Self::Remove { id } => {
                app.favorites().remove(&id).await?;
                println!("Removed {id} from favorites");
                Ok(())
            }

            Self::Toggle { id } => {
                let event = lookup(app, &id)?;
                let title = event.title.clone();
                match app.favorites().toggle(event.clone()).await? {
                    true => println!("Added {} to favorites", title.bold()),
                    false => println!("Removed {} from favorites", title.bold()),
                }
                Ok(())
            }
        }
    }
}

fn lookup<'a>(app: &'a App, id: &str) -> Result<&'a Event, Box<dyn Error>> {
    app.catalog()
        .get(id)
        .ok_or_else(|| format!("No event with id {id:?} in the catalog").into())
}
