// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use colored::Colorize;
use evex_core::{Event, Favorites};

/// Renders event lists as aligned rows, favorites marked with a star.
#[derive(Debug, Default)]
pub struct EventFormatter;

impl EventFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(
        &self,
        w: &mut impl Write,
        events: &[Event],
        favorites: &Favorites,
    ) -> io::Result<()> {
        let id_width = events.iter().map(|e| e.id.len()).max().unwrap_or(0);
        let title_width = events.iter().map(|e| e.title.len()).max().unwrap_or(0);

        for event in events {
            let marker = if favorites.contains(&event.id) {
                "★".yellow().to_string()
            } else {
                " ".to_string()
            };

            writeln!(
                w,
                "{marker} {id:>id_width$}  {date}  {title:<title_width$}  {category}  {location}",
                id = event.id,
                date = event.date,
                title = event.title.bold(),
                category = format!("[{}]", event.category).cyan(),
                location = event.location.dimmed(),
            )?;
        }

        Ok(())
    }
}

/// Renders the full detail view of a single event.
pub fn write_details(w: &mut impl Write, event: &Event, is_favorite: bool) -> io::Result<()> {
    let star = if is_favorite { " ★" } else { "" };
    writeln!(w, "{}{}", event.title.bold(), star.yellow())?;
    writeln!(w, "  {}  {} at {}", "When:".green(), event.date, event.time)?;
    writeln!(w, "  {} {}", "Where:".green(), event.location)?;
    writeln!(w, "  {}  {}", "What:".green(), event.category)?;

    match event.price {
        Some(price) => writeln!(w, "  {} ${price:.2}", "Price:".green())?,
        None => writeln!(w, "  {} free", "Price:".green())?,
    }
    if let Some(tickets) = event.available_tickets {
        writeln!(w, "  {} {tickets}", "Tickets left:".green())?;
    }
    if let Some(coords) = &event.coordinates {
        writeln!(
            w,
            "  {} {:.4}, {:.4}",
            "Coords:".green(),
            coords.latitude,
            coords.longitude
        )?;
    }

    writeln!(w)?;
    writeln!(w, "{}", event.full_description)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use evex_core::{Catalog, MemoryStorage};

    use super::*;

    #[tokio::test]
    async fn list_marks_favorites_with_a_star() {
        colored::control::set_override(false);

        let catalog = Catalog::builtin();
        let favorites = Favorites::load(Arc::new(MemoryStorage::new())).await;
        favorites.add(catalog.get("7").unwrap().clone()).await.unwrap();

        let mut out = Vec::new();
        EventFormatter::new()
            .write(&mut out, catalog.events(), &favorites)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        let starred: Vec<_> = text.lines().filter(|l| l.starts_with('★')).collect();
        assert_eq!(starred.len(), 1);
        assert!(starred[0].contains("Jazz Night Live"));
    }

    #[test]
    fn details_include_price_and_time() {
        colored::control::set_override(false);

        let catalog = Catalog::builtin();
        let mut out = Vec::new();
        write_details(&mut out, catalog.get("7").unwrap(), false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Jazz Night Live"));
        assert!(text.contains("$35.00"));
        assert!(text.contains("08:00 PM"));
    }
}
