// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::Args;
use evex_core::{App, distinct_categories};

/// List the distinct categories present in the catalog.
#[derive(Debug, Args)]
pub struct CmdCategories;

impl CmdCategories {
    pub fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        for category in distinct_categories(app.catalog().events()) {
            println!("{category}");
        }
        Ok(())
    }
}
