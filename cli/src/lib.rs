// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_categories;
mod cmd_events;
mod cmd_fav;
mod cmd_show;
mod config;
mod event_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
