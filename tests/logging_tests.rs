mod common;

use common::{capture_logs, date, sample_report};
use expense_report::{
    config::Config, report::NO_EXPENSES_MESSAGE, sample, ExpenseReport, ExpenseType, ReportFilter,
};

#[test]
fn empty_result_logs_the_no_expenses_line() {
    let report = sample_report();
    let logs = capture_logs(|| {
        let result = report
            .get_report(&ReportFilter::new().from_date(date("2099-01-01")).log_to_screen(true))
            .unwrap();
        assert!(result.is_empty());
    });
    assert!(logs.contains(NO_EXPENSES_MESSAGE), "logs were: {logs}");
    assert_eq!(logs.matches(NO_EXPENSES_MESSAGE).count(), 1);
}

#[test]
fn matching_expenses_are_logged_one_per_line() {
    let report = sample_report();
    let logs = capture_logs(|| {
        report
            .get_report(&ReportFilter::new().with_type(ExpenseType::Meal).log_to_screen(true))
            .unwrap();
    });
    assert_eq!(logs.matches("eur\t").count(), 9, "logs were: {logs}");
    assert!(logs.contains("Dinner\t110eur\t2023-04-20\t[over-expense!]"));
    assert!(logs.contains("Breakfast\t30eur\t2023-04-15\t"));
    assert!(!logs.contains(NO_EXPENSES_MESSAGE));
}

#[test]
fn nothing_is_logged_unless_requested() {
    let report = sample_report();
    let logs = capture_logs(|| {
        report
            .get_report(&ReportFilter::new().from_date(date("2099-01-01")))
            .unwrap();
    });
    assert!(!logs.contains(NO_EXPENSES_MESSAGE));
    assert!(!logs.contains("eur\t"));
}

#[test]
fn config_supplies_default_logging_and_currency() {
    let config = Config {
        currency_suffix: "usd".into(),
        log_to_screen: true,
        ..Config::default()
    };
    let report = ExpenseReport::with_config(sample::sample_expenses().unwrap(), config);
    let logs = capture_logs(|| {
        report
            .get_report(&ReportFilter::new().with_type(ExpenseType::Travel))
            .unwrap();
    });
    assert!(logs.contains("Car Rental\t90usd\t2023-04-15\t"), "logs were: {logs}");
    assert!(!logs.contains("eur\t"));

    let silenced = capture_logs(|| {
        report
            .get_report(&ReportFilter::new().with_type(ExpenseType::Travel).log_to_screen(false))
            .unwrap();
    });
    assert!(!silenced.contains("usd\t"));
}
