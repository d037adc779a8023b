// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::event::Event;

/// Inclusive calendar-date range, `start <= end`.
///
/// A reversed range is not representable through [`DateRange::new`]; a value
/// built directly with `start > end` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, or `None` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Criteria for filtering a sequence of events.
///
/// Every field is independently optional; an absent field imposes no
/// constraint, and active criteria are combined with logical AND.
#[derive(Debug, Default, Clone)]
pub struct EventFilter {
    /// Case-insensitive substring match against title, short description,
    /// category and location. Empty or whitespace-only text is ignored.
    pub search_text: String,

    /// Exact, case-sensitive category match.
    pub category: Option<String>,

    /// Events must occur within this range. Time of day is ignored; an
    /// event whose date does not parse is excluded while a range is active.
    pub date_range: Option<DateRange>,
}

impl EventFilter {
    /// Whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search_text.trim().is_empty() && self.category.is_none() && self.date_range.is_none()
    }

    /// Computes the filtered projection of `events`.
    ///
    /// Pure: the source is not mutated and the result preserves the source
    /// order (stable filter, no re-sorting).
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    fn matches(&self, event: &Event) -> bool {
        self.matches_text(event) && self.matches_category(event) && self.matches_date(event)
    }

    fn matches_text(&self, event: &Event) -> bool {
        let query = self.search_text.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            &event.title,
            &event.short_description,
            &event.category,
            &event.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_category(&self, event: &Event) -> bool {
        match &self.category {
            Some(category) => event.category == *category,
            None => true,
        }
    }

    fn matches_date(&self, event: &Event) -> bool {
        match self.date_range {
            // Fails closed: an unparseable date never matches a range.
            Some(range) => event.occurs_on().is_some_and(|date| range.contains(date)),
            None => true,
        }
    }
}

/// The distinct category values present in `events`, sorted ascending.
pub fn distinct_categories(events: &[Event]) -> Vec<String> {
    let mut categories: Vec<String> = events.iter().map(|e| e.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
