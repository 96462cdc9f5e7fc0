use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::Error;

/// Signed money needed to move each requested asset type to its target
/// percentage of `total_value`.
///
/// Only the keys of `targets` produce deltas; types held but not requested are
/// left out, and requested types not held count as zero current value.
/// Percentages are used as given, without normalisation. A percentage whose
/// delta does not fit in a `Decimal` is rejected as invalid input.
pub fn calculate_rebalance_deltas(
    targets: &HashMap<String, Decimal>,
    current_by_type: &HashMap<String, Decimal>,
    total_value: Decimal,
) -> Result<HashMap<String, Decimal>> {
    targets
        .iter()
        .map(|(asset_type, pct)| {
            let current = current_by_type
                .get(asset_type)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let delta = total_value
                .checked_mul(*pct)
                .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
                .and_then(|target| target.checked_sub(current))
                .ok_or_else(|| {
                    Error::Validation(ValidationError::InvalidInput(format!(
                        "Target percentage {} for '{}' is out of range",
                        pct, asset_type
                    )))
                })?;
            Ok((asset_type.clone(), delta))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::allocation::AllocationBreakdown;
    use rust_decimal_macros::dec;

    fn map(entries: &[(&str, Decimal)]) -> HashMap<String, Decimal> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    #[test]
    fn delta_is_target_value_minus_current() {
        let deltas = calculate_rebalance_deltas(
            &map(&[("stock", dec!(60))]),
            &map(&[("stock", dec!(300)), ("bond", dec!(700))]),
            dec!(1000),
        )
        .unwrap();
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas["stock"], dec!(300));
    }

    #[test]
    fn unheld_target_type_counts_as_zero() {
        let deltas =
            calculate_rebalance_deltas(&map(&[("crypto", dec!(10))]), &HashMap::new(), dec!(500))
                .unwrap();
        assert_eq!(deltas["crypto"], dec!(50));
    }

    #[test]
    fn percentages_are_not_normalised() {
        let deltas = calculate_rebalance_deltas(
            &map(&[("stock", dec!(90)), ("bond", dec!(90))]),
            &map(&[("stock", dec!(100)), ("bond", dec!(100))]),
            dec!(200),
        )
        .unwrap();
        assert_eq!(deltas["stock"], dec!(80));
        assert_eq!(deltas["bond"], dec!(80));
    }

    #[test]
    fn empty_targets_give_empty_deltas() {
        let deltas =
            calculate_rebalance_deltas(&HashMap::new(), &map(&[("stock", dec!(1))]), dec!(1))
                .unwrap();
        assert!(deltas.is_empty());
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let result = calculate_rebalance_deltas(
            &map(&[("stock", Decimal::MAX)]),
            &HashMap::new(),
            dec!(1000000),
        );
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn breakdown_sums_by_type_and_currency() {
        let mut breakdown = AllocationBreakdown::default();
        breakdown.add("stock", "RUB", dec!(100));
        breakdown.add("stock", "USD", dec!(50));
        breakdown.add("bond", "RUB", dec!(25));

        assert_eq!(breakdown.by_type["stock"], dec!(150));
        assert_eq!(breakdown.by_type["bond"], dec!(25));
        assert_eq!(breakdown.by_currency["RUB"], dec!(125));
        assert_eq!(breakdown.by_currency["USD"], dec!(50));
    }
}
