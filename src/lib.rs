#![doc(test(attr(deny(warnings))))]

//! Expense Report models categorised personal expenses and answers filtered,
//! aggregated report queries with optional screen logging of over-budget items.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod report;
pub mod sample;
pub mod utils;

pub use domain::{Expense, ExpenseRecord, ExpenseSubType, ExpenseType};
pub use errors::{ExpenseError, Result};
pub use report::{ExpenseReport, Report, ReportFilter};

use std::sync::Once;

use crate::config::Config;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default configuration.
pub fn init() {
    init_with(&Config::default());
}

/// Initializes global tracing using `config`'s log directive and emits a startup
/// debug log. Only the first call in a process has any effect.
pub fn init_with(config: &Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing_with(&config.log_directive);
        tracing::debug!("Expense Report tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_does_not_panic() {
        init();
        init_with(&Config::default());
    }
}
