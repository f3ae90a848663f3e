use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Expense, ExpenseSubType, ExpenseType};

/// Query parameters for [`ExpenseReport::get_report`](super::ExpenseReport::get_report).
///
/// Every field is optional; unset fields apply no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFilter {
    pub expense_type: Option<ExpenseType>,
    pub expense_sub_type: Option<ExpenseSubType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_over_spent: bool,
    /// `None` defers to the report configuration.
    pub log_to_screen: Option<bool>,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, expense_type: ExpenseType) -> Self {
        self.expense_type = Some(expense_type);
        self
    }

    pub fn with_sub_type(mut self, expense_sub_type: ExpenseSubType) -> Self {
        self.expense_sub_type = Some(expense_sub_type);
        self
    }

    pub fn from_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from_date(start).until_date(end)
    }

    pub fn over_spent(mut self) -> Self {
        self.is_over_spent = true;
        self
    }

    pub fn log_to_screen(mut self, enabled: bool) -> Self {
        self.log_to_screen = Some(enabled);
        self
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::classify(self.start_date, self.end_date)
    }

    /// True when the summary names a category.
    pub fn has_category(&self) -> bool {
        self.expense_type.is_some() || self.expense_sub_type.is_some()
    }
}

/// The date-filtering mode implied by a start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    Any,
    On(NaiveDate),
    /// Inclusive on both ends. A start after the end admits nothing.
    Between(NaiveDate, NaiveDate),
    From(NaiveDate),
    Until(NaiveDate),
}

impl DateRange {
    pub fn classify(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if start == end => DateRange::On(start),
            (Some(start), Some(end)) => DateRange::Between(start, end),
            (Some(start), None) => DateRange::From(start),
            (None, Some(end)) => DateRange::Until(end),
            (None, None) => DateRange::Any,
        }
    }

    pub fn admits(&self, expense: &Expense) -> bool {
        match *self {
            DateRange::Any => true,
            DateRange::On(date) => expense.date_equals(Some(date)),
            DateRange::Between(start, end) => {
                expense.date_at_or_after(Some(start)) && expense.date_at_or_before(Some(end))
            }
            DateRange::From(start) => expense.date_at_or_after(Some(start)),
            DateRange::Until(end) => expense.date_at_or_before(Some(end)),
        }
    }

    /// Summary fragment describing the range; empty for [`DateRange::Any`].
    pub fn clause(&self) -> String {
        match self {
            DateRange::Any => String::new(),
            DateRange::On(date) => format!("for the date {date}"),
            DateRange::Between(start, end) => format!("for the date range {start} - {end}"),
            DateRange::From(start) => format!("from the date {start}"),
            DateRange::Until(end) => format!("until the date {end}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn classify_covers_every_mode() {
        let a = date("2023-04-10");
        let b = date("2023-04-15");
        assert_eq!(DateRange::classify(None, None), DateRange::Any);
        assert_eq!(DateRange::classify(Some(a), Some(a)), DateRange::On(a));
        assert_eq!(DateRange::classify(Some(a), Some(b)), DateRange::Between(a, b));
        assert_eq!(DateRange::classify(Some(b), Some(a)), DateRange::Between(b, a));
        assert_eq!(DateRange::classify(Some(a), None), DateRange::From(a));
        assert_eq!(DateRange::classify(None, Some(b)), DateRange::Until(b));
    }

    #[test]
    fn clauses_use_iso_dates() {
        let a = date("2023-04-10");
        let b = date("2023-04-25");
        assert_eq!(DateRange::Any.clause(), "");
        assert_eq!(DateRange::On(a).clause(), "for the date 2023-04-10");
        assert_eq!(
            DateRange::Between(a, b).clause(),
            "for the date range 2023-04-10 - 2023-04-25"
        );
        assert_eq!(DateRange::From(a).clause(), "from the date 2023-04-10");
        assert_eq!(DateRange::Until(b).clause(), "until the date 2023-04-25");
    }

    #[test]
    fn builder_sets_fields() {
        let filter = ReportFilter::new()
            .with_type(ExpenseType::Meal)
            .between(date("2023-04-15"), date("2023-04-17"))
            .over_spent()
            .log_to_screen(true);
        assert_eq!(filter.expense_type, Some(ExpenseType::Meal));
        assert!(filter.is_over_spent);
        assert_eq!(filter.log_to_screen, Some(true));
        assert!(filter.has_category());
        assert!(matches!(filter.date_range(), DateRange::Between(_, _)));
    }

    #[test]
    fn filters_deserialize_with_missing_fields() {
        let filter: ReportFilter =
            serde_json::from_str(r#"{"expense_sub_type":"BREAKFAST","start_date":"2023-04-15"}"#)
                .unwrap();
        assert_eq!(filter.expense_sub_type, Some(ExpenseSubType::Breakfast));
        assert_eq!(filter.start_date, Some(date("2023-04-15")));
        assert!(!filter.is_over_spent);
        assert_eq!(filter.log_to_screen, None);
    }
}
