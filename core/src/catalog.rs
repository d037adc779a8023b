// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use tokio::fs;

use crate::event::{Coordinates, Event};

/// Errors raised when opening a catalog file.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains duplicate event id {0:?}")]
    DuplicateId(String),
}

/// A read-only, insertion-ordered set of events.
///
/// This is the source the filter operates over. The catalog never changes
/// after construction; favorites are stored separately and reference catalog
/// events by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// The bundled demo events, used when no catalog file is configured.
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
        }
    }

    /// Loads a catalog from a JSON array of events.
    pub async fn open(path: &Path) -> Result<Self, CatalogError> {
        tracing::debug!(path = %path.display(), "loading catalog");
        let content = fs::read_to_string(path).await?;
        let events: Vec<Event> = serde_json::from_str(&content)?;
        Self::from_events(events)
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_events(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId(event.id.clone()));
            }
        }
        Ok(Self { events })
    }

    /// All events in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up a single event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

fn builtin_events() -> Vec<Event> {
    fn event(
        id: &str,
        title: &str,
        date: &str,
        time: &str,
        short_description: &str,
        full_description: &str,
        location: &str,
        category: &str,
    ) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            short_description: short_description.to_string(),
            full_description: full_description.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            image_url: None,
            coordinates: None,
            price: None,
            available_tickets: None,
            organizer_id: None,
        }
    }

    vec![
        Event {
            price: Some(299.0),
            available_tickets: Some(500),
            coordinates: Some(Coordinates {
                latitude: 37.7840,
                longitude: -122.4010,
            }),
            ..event(
                "1",
                "Tech Conference 2024",
                "2024-03-15",
                "09:00 AM",
                "Annual technology conference featuring the latest innovations",
                "Join us for the biggest tech conference of the year! Keynotes from \
                 leading companies, hands-on workshops, and networking opportunities \
                 covering AI, cloud computing and security.",
                "San Francisco Convention Center, CA",
                "Technology",
            )
        },
        Event {
            price: Some(189.0),
            coordinates: Some(Coordinates {
                latitude: 37.7694,
                longitude: -122.4862,
            }),
            ..event(
                "2",
                "Summer Music Festival",
                "2024-06-20",
                "05:00 PM",
                "Three-day outdoor music festival with top artists",
                "Over 50 artists across multiple stages, from rock to electronic. \
                 Camping options, food trucks and art installations.",
                "Golden Gate Park, San Francisco, CA",
                "Music",
            )
        },
        event(
            "3",
            "Startup Pitch Night",
            "2024-02-28",
            "06:30 PM",
            "Watch innovative startups pitch to investors",
            "Ten selected startups pitch their ideas to a panel of investors. \
             Network with founders and fellow entrepreneurs.",
            "Innovation Hub, 123 Market St, San Francisco, CA",
            "Business",
        ),
        Event {
            price: Some(85.0),
            ..event(
                "4",
                "Food & Wine Expo",
                "2024-04-10",
                "12:00 PM",
                "Culinary experience with renowned chefs and sommeliers",
                "Tastings from 50+ restaurants, cooking demonstrations by celebrity \
                 chefs, wine pairings and masterclasses.",
                "Moscone Center, San Francisco, CA",
                "Food & Drink",
            )
        },
        Event {
            price: Some(45.0),
            ..event(
                "5",
                "Marathon 2024",
                "2024-05-05",
                "07:00 AM",
                "Annual city marathon for all fitness levels",
                "Full marathon, half marathon or 5K fun run through the city's most \
                 scenic neighborhoods. All finishers receive a medal.",
                "Starting at City Hall, San Francisco, CA",
                "Sports",
            )
        },
        event(
            "6",
            "Art Gallery Opening",
            "2024-03-22",
            "07:00 PM",
            "Contemporary art exhibition opening night",
            "Opening reception for a new contemporary exhibition featuring emerging \
             local artists. Wine and light refreshments served.",
            "SOMA Gallery District, San Francisco, CA",
            "Art",
        ),
        Event {
            price: Some(35.0),
            available_tickets: Some(120),
            ..event(
                "7",
                "Jazz Night Live",
                "2024-03-30",
                "08:00 PM",
                "An intimate evening of live jazz standards",
                "A quartet of seasoned musicians plays classics and originals in a \
                 candle-lit lounge. Two sets, doors at seven.",
                "Blue Note Lounge, Oakland, CA",
                "Music",
            )
        },
        event(
            "8",
            "Community Yoga in the Park",
            "2024-04-14",
            "08:30 AM",
            "Free outdoor yoga session for all levels",
            "Bring a mat and join a relaxed morning flow led by local instructors. \
             Rain cancels.",
            "Mission Dolores Park, San Francisco, CA",
            "Sports",
        ),
    ]
}
