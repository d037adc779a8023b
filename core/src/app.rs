// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::favorites::Favorites;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// The application composition root.
///
/// Owns the catalog and the favorites store as explicitly constructed
/// instances; consumers receive them by reference, there is no ambient
/// global state.
#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    favorites: Favorites,
}

impl App {
    /// Builds the application from a configuration.
    ///
    /// Opens the configured catalog (or the builtin one) and loads the
    /// favorites store from the state directory. Without a resolvable state
    /// directory, favorites are kept in memory for the session.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::open(path)
                .await
                .map_err(|e| format!("Failed to open catalog: {e}"))?,
            None => Catalog::builtin(),
        };

        let storage: Arc<dyn KeyValueStorage> = match &config.state_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "storing favorites under state directory");
                Arc::new(FileStorage::new(dir))
            }
            None => {
                tracing::info!("no state directory resolved, keeping favorites in memory");
                Arc::new(MemoryStorage::new())
            }
        };
        let favorites = Favorites::load(storage).await;

        Ok(Self { catalog, favorites })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}
