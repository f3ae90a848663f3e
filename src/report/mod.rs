//! Filtering and aggregation over a fixed set of expenses.

pub mod filter;
pub mod summary;

pub use filter::{DateRange, ReportFilter};
pub use summary::{build_summary, screen_log, NO_EXPENSES_MESSAGE};

use serde::Serialize;

use crate::config::Config;
use crate::domain::common::total_amount;
use crate::domain::{Expense, ExpenseRecord};
use crate::errors::Result;

/// Result of a single report query. Expenses borrow from the owning [`ExpenseReport`]
/// and keep its insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    pub total: f64,
    pub summary: String,
    pub expenses: Vec<&'a Expense>,
}

impl Report<'_> {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Read-only collection of expenses answering filtered report queries.
#[derive(Debug, Clone, Default)]
pub struct ExpenseReport {
    expenses: Vec<Expense>,
    config: Config,
}

impl ExpenseReport {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self::with_config(expenses, Config::default())
    }

    pub fn with_config(expenses: Vec<Expense>, config: Config) -> Self {
        Self { expenses, config }
    }

    /// Builds a report from raw records, failing on the first invalid one.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = ExpenseRecord>,
    {
        let expenses = records
            .into_iter()
            .map(Expense::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(expenses))
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Applies `filter`, totals the matching expenses and builds the summary line.
    ///
    /// Type, subtype, overspend and date predicates are AND-ed; unset fields are
    /// skipped. When screen logging is enabled the matching expenses are emitted
    /// as a single `info` event.
    pub fn get_report(&self, filter: &ReportFilter) -> Result<Report<'_>> {
        let date_range = filter.date_range();
        let matching: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|exp| filter.expense_type.is_none() || exp.matches_type(filter.expense_type))
            .filter(|exp| {
                filter.expense_sub_type.is_none() || exp.matches_sub_type(filter.expense_sub_type)
            })
            .filter(|exp| !filter.is_over_spent || exp.is_over_budget())
            .filter(|exp| date_range.admits(exp))
            .collect();

        let total = total_amount(matching.iter().copied());
        let summary = build_summary(filter, total)?;
        tracing::debug!(
            ?filter,
            matched = matching.len(),
            total,
            "expense report computed"
        );

        if filter.log_to_screen.unwrap_or(self.config.log_to_screen) {
            let text = screen_log(matching.iter().copied(), &self.config.currency_suffix);
            tracing::info!("{text}");
        }

        Ok(Report {
            total,
            summary,
            expenses: matching,
        })
    }
}

impl FromIterator<Expense> for ExpenseReport {
    fn from_iter<T: IntoIterator<Item = Expense>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
