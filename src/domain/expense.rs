//! A single expense and the record shape it is built from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::{self, ExpenseSubType, ExpenseType};
use crate::domain::common::{Amounted, Identifiable};
use crate::errors::{ExpenseError, Result};

pub const DEFAULT_CURRENCY_SUFFIX: &str = "eur";
pub const OVER_EXPENSE_MARKER: &str = "[over-expense!]";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// An immutable expense entry whose category pair is known to be valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    id: Uuid,
    expense_type: ExpenseType,
    expense_sub_type: ExpenseSubType,
    amount: f64,
    date_of_expense: NaiveDate,
    type_display_name: &'static str,
    sub_type_display_name: &'static str,
    #[serde(skip)]
    max_spend_limit: Option<f64>,
}

impl Expense {
    /// Builds an expense, resolving its display names from the catalog.
    ///
    /// Returns [`ExpenseError::InvalidCategoryReference`] when `expense_sub_type`
    /// does not belong to `expense_type`.
    pub fn new(
        expense_type: ExpenseType,
        expense_sub_type: ExpenseSubType,
        amount: f64,
        date_of_expense: NaiveDate,
    ) -> Result<Self> {
        let meta = category::subtype_meta(expense_type, expense_sub_type)?;
        Ok(Self {
            id: Uuid::new_v4(),
            expense_type,
            expense_sub_type,
            amount,
            date_of_expense,
            type_display_name: category::type_display_name(expense_type),
            sub_type_display_name: meta.display_name,
            max_spend_limit: meta.max_spend_limit,
        })
    }

    pub fn expense_type(&self) -> ExpenseType {
        self.expense_type
    }

    pub fn expense_sub_type(&self) -> ExpenseSubType {
        self.expense_sub_type
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date_of_expense(&self) -> NaiveDate {
        self.date_of_expense
    }

    pub fn type_display_name(&self) -> &'static str {
        self.type_display_name
    }

    pub fn sub_type_display_name(&self) -> &'static str {
        self.sub_type_display_name
    }

    /// Strict match: an absent filter value never matches.
    pub fn matches_type(&self, expense_type: Option<ExpenseType>) -> bool {
        expense_type.is_some_and(|wanted| wanted == self.expense_type)
    }

    pub fn matches_sub_type(&self, expense_sub_type: Option<ExpenseSubType>) -> bool {
        expense_sub_type.is_some_and(|wanted| wanted == self.expense_sub_type)
    }

    pub fn date_equals(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|date| self.date_of_expense == date)
    }

    pub fn date_at_or_after(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|date| self.date_of_expense >= date)
    }

    pub fn date_at_or_before(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|date| self.date_of_expense <= date)
    }

    /// True when the amount strictly exceeds the subtype's spending ceiling.
    pub fn is_over_budget(&self) -> bool {
        self.max_spend_limit.is_some_and(|limit| self.amount > limit)
    }

    /// Screen-log line using the default `eur` suffix.
    pub fn log_line(&self) -> String {
        self.log_line_with(DEFAULT_CURRENCY_SUFFIX)
    }

    pub fn log_line_with(&self, currency_suffix: &str) -> String {
        let marker = if self.is_over_budget() {
            OVER_EXPENSE_MARKER
        } else {
            ""
        };
        format!(
            "{}\t{}{}\t{}\t{}",
            self.sub_type_display_name, self.amount, currency_suffix, self.date_of_expense, marker
        )
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Plain expense data as supplied by a loader or fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub expense_type: ExpenseType,
    pub expense_sub_type: ExpenseSubType,
    pub amount: f64,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub date_of_expense: String,
}

impl ExpenseRecord {
    pub fn new(
        expense_type: ExpenseType,
        expense_sub_type: ExpenseSubType,
        amount: f64,
        date_of_expense: impl Into<String>,
    ) -> Self {
        Self {
            expense_type,
            expense_sub_type,
            amount,
            date_of_expense: date_of_expense.into(),
        }
    }
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ExpenseError;

    fn try_from(record: ExpenseRecord) -> Result<Self> {
        let date = parse_iso_date(&record.date_of_expense)?;
        Expense::new(
            record.expense_type,
            record.expense_sub_type,
            record.amount,
            date,
        )
    }
}

pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDate(value.to_string()))
}
