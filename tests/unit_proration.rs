use adspace::modules::pricing::service::ProrationService;
use adspace_models::{ContractDuration, MonthlyRate};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn rate(amount: f64) -> MonthlyRate {
    MonthlyRate::new(amount).unwrap()
}

/// Inclusive range covering exactly `days` days.
fn span(start: NaiveDate, days: u64) -> (NaiveDate, NaiveDate) {
    (start, start.checked_add_days(Days::new(days - 1)).unwrap())
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_thirty_days_costs_one_month() {
    let (start, end) = span(date("2024-02-01"), 30);
    assert_close(
        ProrationService::calculate_prorated_price(rate(15_000.0), start, end),
        15_000.0,
    );
}

#[test]
fn test_forty_five_days_costs_one_and_a_half_months() {
    let (start, end) = span(date("2024-01-01"), 45);
    assert_close(
        ProrationService::calculate_prorated_price(rate(15_000.0), start, end),
        22_500.0,
    );

    let duration = ProrationService::contract_duration(start, end);
    assert_eq!(duration.whole_months, 1);
    assert_eq!(duration.remaining_days, 15);
    assert_eq!(duration.label(), "1 month and 15 days");
}

#[test]
fn test_sixty_days_costs_two_months() {
    let (start, end) = span(date("2024-06-10"), 60);
    assert_close(
        ProrationService::calculate_prorated_price(rate(8_400.0), start, end),
        16_800.0,
    );
}

#[test]
fn test_same_day_costs_one_thirtieth() {
    let day = date("2024-03-15");
    assert_close(
        ProrationService::calculate_prorated_price(rate(15_000.0), day, day),
        500.0,
    );
    assert_eq!(ProrationService::contract_duration(day, day).duration_days, 1);
}

#[test]
fn test_ninety_day_quote_breakdown() {
    let price =
        ProrationService::price_breakdown(rate(15_000.0), date("2024-01-01"), date("2024-03-30"));

    assert_eq!(price.duration.duration_days, 90);
    assert_eq!(price.duration.whole_months, 3);
    assert_eq!(price.duration.remaining_days, 0);
    assert_eq!(price.duration_label, "3 months");
    assert_close(price.total_amount, 45_000.0);
    assert_close(price.vat_amount, 5_400.0);
    assert_close(price.grand_total, 50_400.0);
}

#[test]
fn test_calendar_month_lengths_are_ignored() {
    // 28 days of February fall short of a month; 31 days of July run one day over
    let feb = ProrationService::contract_duration(date("2023-02-01"), date("2023-02-28"));
    assert_eq!(feb, ContractDuration::from_days(28));
    assert_eq!(feb.whole_months, 0);

    let july = ProrationService::contract_duration(date("2024-07-01"), date("2024-07-31"));
    assert_eq!(july.whole_months, 1);
    assert_eq!(july.remaining_days, 1);
}

#[test]
fn test_multi_year_contract_is_linear() {
    let start = date("2022-05-01");
    let monthly = 12_345.67;

    for days in [360_u64, 365, 730, 1_095, 1_826] {
        let (start, end) = span(start, days);
        let expected = monthly * days as f64 / 30.0;
        assert_close(
            ProrationService::calculate_prorated_price(rate(monthly), start, end),
            expected,
        );
    }
}

#[test]
fn test_reversed_range_costs_nothing() {
    let price =
        ProrationService::price_breakdown(rate(15_000.0), date("2024-05-01"), date("2024-04-01"));

    assert_eq!(price.duration.duration_days, 0);
    assert_eq!(price.total_amount, 0.0);
    assert_eq!(price.grand_total, 0.0);
    assert_eq!(price.duration_label, "0 days");
}

#[test]
fn test_price_scales_with_rate_and_days() {
    let mut rng = StdRng::seed_from_u64(7);
    let origin = date("2020-01-01");

    for _ in 0..300 {
        let monthly: f64 = rng.gen_range(0.0..250_000.0);
        let days: u64 = rng.gen_range(1..=2_000);
        let offset: u64 = rng.gen_range(0..3_650);
        let (start, end) = span(origin.checked_add_days(Days::new(offset)).unwrap(), days);

        let price = ProrationService::price_breakdown(rate(monthly), start, end);

        let duration = price.duration;
        assert_eq!(duration.duration_days, days as i64);
        assert_eq!(duration.whole_months * 30 + duration.remaining_days, days as i64);
        assert!((0..30).contains(&duration.remaining_days));

        assert!(price.total_amount >= 0.0);
        assert_close(price.total_amount, monthly * days as f64 / 30.0);
        assert_close(price.vat_amount, price.total_amount * 0.12);
        assert_close(price.grand_total, price.total_amount * 1.12);

        let doubled = ProrationService::calculate_prorated_price(rate(monthly * 2.0), start, end);
        assert_close(doubled, price.total_amount * 2.0);
    }
}

#[test]
fn test_zero_rate_is_free_for_any_period() {
    let (start, end) = span(date("2024-01-01"), 400);
    assert_eq!(
        ProrationService::calculate_prorated_price(rate(0.0), start, end),
        0.0
    );
}
