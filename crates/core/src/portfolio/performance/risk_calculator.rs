use log::warn;
use rust_decimal::{Decimal, MathematicalOps};

use crate::constants::MIN_SNAPSHOTS_FOR_RISK;
use crate::portfolio::valuation::return_pct;

/// Portfolio return over cost, in percent. Zero when cost is not positive.
pub fn total_return_pct(total_value: Decimal, total_cost: Decimal) -> Decimal {
    return_pct(total_value, total_cost)
}

/// Mean and population standard deviation of a return series.
///
/// Returns `None` for an empty series, or when the sums or squared
/// deviations do not fit in a `Decimal`.
pub fn mean_and_volatility(returns: &[Decimal]) -> Option<(Decimal, Decimal)> {
    if returns.is_empty() {
        return None;
    }

    let count = Decimal::from(returns.len());
    let mean = returns
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(*value))?
        .checked_div(count)?;
    let variance = returns
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| {
            let deviation = value.checked_sub(mean)?;
            sum.checked_add(deviation.checked_mul(deviation)?)
        })?
        .checked_div(count)?;
    let volatility = variance.sqrt().unwrap_or(Decimal::ZERO);

    Some((mean, volatility))
}

/// Mean over standard deviation of historical returns, with no risk-free rate
/// and no annualisation.
///
/// Zero with fewer than two observations, when the deviation is zero, or when
/// the series is out of the decimal range.
pub fn sharpe_ratio(returns: &[Decimal]) -> Decimal {
    if returns.len() < MIN_SNAPSHOTS_FOR_RISK {
        return Decimal::ZERO;
    }

    match mean_and_volatility(returns) {
        Some((mean, volatility)) if volatility > Decimal::ZERO => {
            mean.checked_div(volatility).unwrap_or(Decimal::ZERO)
        }
        Some(_) => Decimal::ZERO,
        None => {
            warn!(
                "Return series of {} observations overflows the decimal range; Sharpe ratio set to 0",
                returns.len()
            );
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sharpe_of_evenly_spread_returns() {
        let ratio = sharpe_ratio(&[dec!(5), dec!(10), dec!(15)]);
        // mean 10, population deviation sqrt(50 / 3)
        assert!((ratio - dec!(2.4494897)).abs() < dec!(0.000001), "got {}", ratio);
    }

    #[test]
    fn sharpe_needs_two_observations() {
        assert_eq!(sharpe_ratio(&[]), Decimal::ZERO);
        assert_eq!(sharpe_ratio(&[dec!(12.5)]), Decimal::ZERO);
    }

    #[test]
    fn sharpe_of_constant_returns_is_zero() {
        assert_eq!(
            sharpe_ratio(&[dec!(3.3333), dec!(3.3333), dec!(3.3333)]),
            Decimal::ZERO
        );
    }

    #[test]
    fn sharpe_keeps_the_sign_of_the_mean() {
        let ratio = sharpe_ratio(&[dec!(-4), dec!(-2)]);
        assert!((ratio - dec!(-3)).abs() < dec!(0.000001), "got {}", ratio);
    }

    #[test]
    fn sharpe_of_out_of_range_returns_is_zero() {
        let returns = [dec!(10000000000000000), dec!(-10000000000000000)];
        assert!(mean_and_volatility(&returns).is_none());
        assert_eq!(sharpe_ratio(&returns), Decimal::ZERO);

        let sum_overflows = [Decimal::MAX, Decimal::MAX, dec!(1)];
        assert_eq!(sharpe_ratio(&sum_overflows), Decimal::ZERO);
    }

    #[test]
    fn volatility_is_population_deviation() {
        let (mean, volatility) = mean_and_volatility(&[dec!(2), dec!(4)]).unwrap();
        assert_eq!(mean, dec!(3));
        assert!((volatility - dec!(1)).abs() < dec!(0.000001));
        assert!(mean_and_volatility(&[]).is_none());
    }

    #[test]
    fn total_return_over_cost() {
        assert_eq!(total_return_pct(dec!(150), dec!(100)), dec!(50));
        assert_eq!(total_return_pct(dec!(150), Decimal::ZERO), Decimal::ZERO);
    }
}
