//! Human-readable report text.
//!
//! Clauses are concatenated without separators so the output stays
//! byte-for-byte stable, e.g. `Total expense for type Mealfor the date 2023-04-15 is 150`.

use crate::domain::category::{self, ExpenseSubType};
use crate::domain::Expense;
use crate::errors::Result;

use super::filter::ReportFilter;

pub const NO_EXPENSES_MESSAGE: &str = "No expenses found for filters passed";

/// Builds the summary line for `filter` using the catalog's reverse subtype lookup.
pub fn build_summary(filter: &ReportFilter, total: f64) -> Result<String> {
    build_summary_with(filter, total, category::subtype_display_name_any_type)
}

/// Same as [`build_summary`] with an explicit resolver for subtype filters that
/// arrive without a type. A resolver miss leaves the subject clause empty.
pub fn build_summary_with<F>(
    filter: &ReportFilter,
    total: f64,
    resolve_sub_type: F,
) -> Result<String>
where
    F: Fn(ExpenseSubType) -> Option<&'static str>,
{
    let mut text = String::from("Total expense ");
    if filter.has_category() {
        text.push_str("for ");
    }

    match (filter.expense_type, filter.expense_sub_type) {
        (Some(expense_type), sub_type) => {
            text.push_str("type ");
            text.push_str(expense_type.display_name());
            if let Some(sub_type) = sub_type {
                let meta = category::subtype_meta(expense_type, sub_type)?;
                text.push_str(", subtype ");
                text.push_str(meta.display_name);
            }
        }
        (None, Some(sub_type)) => {
            if let Some(name) = resolve_sub_type(sub_type) {
                text.push_str("subtype ");
                text.push_str(name);
            }
        }
        (None, None) => {}
    }

    text.push_str(&filter.date_range().clause());
    text.push_str(&format!(" is {total}"));
    Ok(text)
}

/// One log line per expense, or [`NO_EXPENSES_MESSAGE`] when there are none.
pub fn screen_log<'a, I>(expenses: I, currency_suffix: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let lines: Vec<String> = expenses
        .into_iter()
        .map(|expense| expense.log_line_with(currency_suffix))
        .collect();
    if lines.is_empty() {
        NO_EXPENSES_MESSAGE.to_string()
    } else {
        lines.join("\n")
    }
}
