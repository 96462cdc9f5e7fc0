use super::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

#[test]
fn round_half_up_moves_midpoints_away_from_zero() {
    assert_eq!(round_half_up(dec!(1.005), 2), dec!(1.01));
    assert_eq!(round_half_up(dec!(1.004), 2), dec!(1.00));
    assert_eq!(round_half_up(dec!(-1.005), 2), dec!(-1.01));
    assert_eq!(round_half_up(dec!(0.12345), 4), dec!(0.1235));
}

#[test]
fn rounded_snapshot_keeps_two_and_four_decimals() {
    let snapshot = NewPortfolioSnapshot::rounded(
        "u1",
        date(),
        "RUB",
        dec!(1234.565),
        dec!(1000.004),
        dec!(23.45645),
        dec!(1.23455),
    );

    assert_eq!(snapshot.total_value, dec!(1234.57));
    assert_eq!(snapshot.total_cost, dec!(1000.00));
    assert_eq!(snapshot.total_return_pct, dec!(23.4565));
    assert_eq!(snapshot.sharpe_ratio, dec!(1.2346));
    assert_eq!(snapshot.currency, "RUB");
    assert_eq!(snapshot.snapshot_date, date());
}

#[test]
fn rounded_snapshot_of_empty_portfolio_is_zero() {
    let snapshot = NewPortfolioSnapshot::rounded(
        "u1",
        date(),
        "RUB",
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    );
    assert!(snapshot.total_value.is_zero());
    assert!(snapshot.sharpe_ratio.is_zero());
}

#[test]
fn snapshot_serializes_camel_case() {
    let snapshot = PortfolioSnapshot {
        id: "s1".to_string(),
        user_id: "u1".to_string(),
        snapshot_date: date(),
        total_value: dec!(10),
        total_cost: dec!(5),
        total_return_pct: dec!(100),
        sharpe_ratio: Decimal::ZERO,
        currency: "RUB".to_string(),
        created_at: date().and_hms_opt(12, 0, 0).unwrap(),
    };
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["snapshotDate"], "2024-06-30");
    assert!(json.get("totalReturnPct").is_some());
    assert!(json.get("userId").is_some());
}
