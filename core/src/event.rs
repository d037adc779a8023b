// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the catalog and the favorites slot.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// An event as shown in the catalog and stored in the favorites slot.
///
/// The `id` is the equality key: no collection in this crate ever holds two
/// events with the same `id`. Field names serialize in camelCase so the
/// persisted JSON stays diffable against catalog exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique, stable identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,

    /// Time of day as a display string. Never used for filtering.
    pub time: String,

    /// One-line description shown in list views.
    pub short_description: String,

    /// Long-form description shown on the detail view.
    pub full_description: String,

    /// Free-text venue or address.
    pub location: String,

    /// Open-ended category label; any string is valid.
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    /// Ticket price; `None` means a free or unpriced event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_tickets: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
}

impl Event {
    /// The calendar date the event occurs on, if `date` parses.
    pub fn occurs_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Geographic position of an event venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
