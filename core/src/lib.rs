// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod catalog;
mod config;
mod event;
mod favorites;
mod filter;
mod storage;

pub use crate::app::App;
pub use crate::catalog::{Catalog, CatalogError};
pub use crate::config::{APP_NAME, Config};
pub use crate::event::{Coordinates, Event};
pub use crate::favorites::{FAVORITES_KEY, Favorites, FavoritesError};
pub use crate::filter::{DateRange, EventFilter, distinct_categories};
pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
