//! Twelve expenses spread over three days, used by the demo CLI, tests and benches.

use crate::domain::expense::parse_iso_date;
use crate::domain::{Expense, ExpenseRecord, ExpenseSubType as Sub, ExpenseType as Type};
use crate::errors::Result;
use crate::report::{ExpenseReport, ReportFilter};

pub fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new(Type::Travel, Sub::CarRental, 90.0, "2023-04-15"),
        ExpenseRecord::new(Type::Meal, Sub::Breakfast, 30.0, "2023-04-15"),
        ExpenseRecord::new(Type::Meal, Sub::Lunch, 40.0, "2023-04-15"),
        ExpenseRecord::new(Type::Meal, Sub::Dinner, 80.0, "2023-04-15"),
        ExpenseRecord::new(Type::Travel, Sub::Metro, 10.0, "2023-04-17"),
        ExpenseRecord::new(Type::Meal, Sub::Breakfast, 30.0, "2023-04-17"),
        ExpenseRecord::new(Type::Meal, Sub::Lunch, 60.0, "2023-04-17"),
        ExpenseRecord::new(Type::Meal, Sub::Dinner, 90.0, "2023-04-17"),
        ExpenseRecord::new(Type::Travel, Sub::Bus, 30.0, "2023-04-20"),
        ExpenseRecord::new(Type::Meal, Sub::Breakfast, 10.0, "2023-04-20"),
        ExpenseRecord::new(Type::Meal, Sub::Lunch, 70.0, "2023-04-20"),
        ExpenseRecord::new(Type::Meal, Sub::Dinner, 110.0, "2023-04-20"),
    ]
}

pub fn sample_expenses() -> Result<Vec<Expense>> {
    sample_records().into_iter().map(Expense::try_from).collect()
}

pub fn sample_report() -> Result<ExpenseReport> {
    Ok(ExpenseReport::new(sample_expenses()?))
}

/// The scripted walk-through replayed by `expense_report_cli --demo`.
pub fn demo_filters() -> Result<Vec<ReportFilter>> {
    let range = |start: &str, end: &str| -> Result<ReportFilter> {
        Ok(ReportFilter::new().between(parse_iso_date(start)?, parse_iso_date(end)?))
    };

    Ok(vec![
        ReportFilter::new().with_type(Type::Meal).log_to_screen(true),
        ReportFilter::new()
            .with_type(Type::Meal)
            .with_sub_type(Sub::Breakfast),
        ReportFilter::new().with_sub_type(Sub::Breakfast),
        ReportFilter::new().with_type(Type::Travel),
        ReportFilter::new().from_date(parse_iso_date("2023-04-30")?),
        ReportFilter::new().from_date(parse_iso_date("2023-04-10")?),
        ReportFilter::new().until_date(parse_iso_date("2023-04-30")?),
        ReportFilter::new().until_date(parse_iso_date("2023-04-10")?),
        range("2023-04-10", "2023-04-15")?,
        range("2023-04-10", "2023-04-25")?,
        range("2023-04-25", "2023-04-30")?,
        ReportFilter::new().over_spent().log_to_screen(true),
    ])
}
