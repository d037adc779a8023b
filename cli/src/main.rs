// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    evex_cli::run().await
}
