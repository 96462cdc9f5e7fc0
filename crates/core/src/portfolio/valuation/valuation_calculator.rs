use log::warn;
use rust_decimal::Decimal;

use super::valuation_model::{AssetValuation, PriceSource};
use crate::assets::Asset;
use crate::market_data::MarketPrice;
use crate::settings::CostBasisMode;
use crate::trades::Trade;

/// Weighted average cost per unit over the BUY trades in `trades`, fees
/// included. Trades of any other side are ignored. Zero when there are no
/// BUY trades, their quantities sum to zero, or the sums do not fit in a
/// `Decimal`.
pub fn average_cost(trades: &[Trade]) -> Decimal {
    let totals = trades
        .iter()
        .filter(|trade| trade.is_buy())
        .try_fold((Decimal::ZERO, Decimal::ZERO), |(cost, quantity), trade| {
            Some((
                cost.checked_add(trade.gross_cost()?)?,
                quantity.checked_add(trade.quantity)?,
            ))
        });

    match totals {
        Some((total_cost, total_quantity)) if total_quantity > Decimal::ZERO => total_cost
            .checked_div(total_quantity)
            .unwrap_or(Decimal::ZERO),
        Some(_) => Decimal::ZERO,
        None => {
            warn!("Buy trades overflow the decimal range; average cost set to zero");
            Decimal::ZERO
        }
    }
}

/// Current unit price: the latest market price when there is one, otherwise
/// the average cost.
pub fn resolve_current_price(
    latest: Option<&MarketPrice>,
    average_cost: Decimal,
) -> (Decimal, PriceSource) {
    match latest {
        Some(price) => (price.price, PriceSource::Market),
        None => (average_cost, PriceSource::AverageCost),
    }
}

/// Gain over cost as a percentage. Zero when cost is not positive or the
/// ratio does not fit in a `Decimal`.
pub fn return_pct(value: Decimal, cost: Decimal) -> Decimal {
    if cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let pct = value
        .checked_sub(cost)
        .and_then(|gain| gain.checked_div(cost))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    match pct {
        Some(pct) => pct,
        None => {
            warn!(
                "Return of value {} over cost {} is out of range; reporting 0%",
                value, cost
            );
            Decimal::ZERO
        }
    }
}

/// Values one asset. Returns `None` for assets that are not held, and for
/// holdings whose market value or total cost does not fit in a `Decimal`.
pub fn value_asset(
    asset: &Asset,
    trades: &[Trade],
    latest: Option<&MarketPrice>,
    cost_basis_mode: CostBasisMode,
) -> Option<AssetValuation> {
    if !asset.is_held() {
        return None;
    }

    let average_cost = average_cost(trades);
    let (current_price, price_source) = resolve_current_price(latest, average_cost);
    let market_value = current_price.checked_mul(asset.quantity);
    let cost_basis = match cost_basis_mode {
        CostBasisMode::PerUnit => Some(average_cost),
        CostBasisMode::Total => average_cost.checked_mul(asset.quantity),
    };
    let (Some(market_value), Some(cost_basis)) = (market_value, cost_basis) else {
        warn!(
            "Asset {} ({} units at {}) overflows the decimal range; skipping it",
            asset.id, asset.quantity, current_price
        );
        return None;
    };

    Some(AssetValuation {
        asset_id: asset.id.clone(),
        quantity: asset.quantity,
        average_cost,
        current_price,
        price_source,
        market_value,
        cost_basis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetType;
    use crate::trades::TradeSide;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn trade(side: TradeSide, quantity: Decimal, price: Decimal, fee: Decimal) -> Trade {
        Trade {
            id: format!("t-{}-{}", quantity, price),
            asset_id: "a1".to_string(),
            side,
            trade_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            quantity,
            price,
            fee,
        }
    }

    fn asset(quantity: Decimal) -> Asset {
        Asset {
            id: "a1".to_string(),
            account_id: "acc1".to_string(),
            name: "Sberbank".to_string(),
            ticker: "SBER".to_string(),
            asset_type: AssetType::Stock,
            currency: "RUB".to_string(),
            quantity,
        }
    }

    fn price(value: Decimal) -> MarketPrice {
        MarketPrice {
            ticker: "SBER".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            price: value,
            volume: None,
            currency: None,
            source: None,
        }
    }

    #[test]
    fn average_cost_weights_by_quantity_and_includes_fees() {
        let trades = vec![
            trade(TradeSide::Buy, dec!(10), dec!(100), dec!(5)),
            trade(TradeSide::Buy, dec!(5), dec!(100), dec!(0)),
        ];
        assert_eq!(average_cost(&trades), dec!(1505) / dec!(15));
    }

    #[test]
    fn average_cost_ignores_sells() {
        let trades = vec![
            trade(TradeSide::Buy, dec!(10), dec!(100), dec!(0)),
            trade(TradeSide::Sell, dec!(5), dec!(500), dec!(10)),
        ];
        assert_eq!(average_cost(&trades), dec!(100));
    }

    #[test]
    fn average_cost_is_zero_without_buys() {
        assert_eq!(average_cost(&[]), Decimal::ZERO);
        let sells = vec![trade(TradeSide::Sell, dec!(1), dec!(10), dec!(0))];
        assert_eq!(average_cost(&sells), Decimal::ZERO);
    }

    #[test]
    fn current_price_falls_back_to_average_cost() {
        let (value, source) = resolve_current_price(None, dec!(42));
        assert_eq!(value, dec!(42));
        assert_eq!(source, PriceSource::AverageCost);

        let latest = price(dec!(50));
        let (value, source) = resolve_current_price(Some(&latest), dec!(42));
        assert_eq!(value, dec!(50));
        assert_eq!(source, PriceSource::Market);
    }

    #[test]
    fn return_pct_handles_zero_cost() {
        assert_eq!(return_pct(dec!(120), dec!(100)), dec!(20));
        assert_eq!(return_pct(dec!(120), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(return_pct(dec!(120), dec!(-1)), Decimal::ZERO);
    }

    #[test]
    fn return_pct_out_of_range_is_zero() {
        // Gain over a tiny cost exceeds the decimal range once scaled to percent.
        assert_eq!(
            return_pct(dec!(70000000000000000000000000000), dec!(0.001)),
            Decimal::ZERO
        );
        assert_eq!(
            return_pct(dec!(1000000000000.0001), dec!(0.0001)),
            dec!(1000000000000000000)
        );
    }

    #[test]
    fn average_cost_overflow_is_zero() {
        let trades = vec![
            trade(TradeSide::Buy, Decimal::MAX, dec!(2), dec!(0)),
            trade(TradeSide::Buy, dec!(1), dec!(10), dec!(0)),
        ];
        assert_eq!(average_cost(&trades), Decimal::ZERO);
    }

    #[test]
    fn value_asset_skips_holdings_beyond_decimal_range() {
        let trades = vec![trade(TradeSide::Buy, dec!(10), dec!(100), dec!(0))];
        let latest = price(dec!(10000000000000000));
        let huge = asset(dec!(10000000000000000));

        assert!(value_asset(&huge, &trades, Some(&latest), CostBasisMode::PerUnit).is_none());
        assert!(value_asset(&huge, &trades, None, CostBasisMode::PerUnit).is_some());
    }

    #[test]
    fn value_asset_skips_unheld_assets() {
        let trades = vec![trade(TradeSide::Buy, dec!(10), dec!(100), dec!(0))];
        assert!(value_asset(&asset(Decimal::ZERO), &trades, None, CostBasisMode::PerUnit).is_none());
        assert!(value_asset(&asset(dec!(-3)), &trades, None, CostBasisMode::PerUnit).is_none());
    }

    #[test]
    fn value_asset_uses_market_price_and_cost_basis_mode() {
        let trades = vec![trade(TradeSide::Buy, dec!(10), dec!(100), dec!(0))];
        let latest = price(dec!(120));

        let per_unit =
            value_asset(&asset(dec!(10)), &trades, Some(&latest), CostBasisMode::PerUnit).unwrap();
        assert_eq!(per_unit.market_value, dec!(1200));
        assert_eq!(per_unit.cost_basis, dec!(100));

        let total =
            value_asset(&asset(dec!(10)), &trades, Some(&latest), CostBasisMode::Total).unwrap();
        assert_eq!(total.market_value, dec!(1200));
        assert_eq!(total.cost_basis, dec!(1000));
        assert_eq!(total.unrealized_gain(), dec!(200));
    }

    #[test]
    fn value_asset_without_trades_or_price_is_worth_nothing() {
        let valuation =
            value_asset(&asset(dec!(4)), &[], None, CostBasisMode::PerUnit).unwrap();
        assert_eq!(valuation.current_price, Decimal::ZERO);
        assert_eq!(valuation.market_value, Decimal::ZERO);
        assert_eq!(valuation.cost_basis, Decimal::ZERO);
    }
}
