use super::income_model::{DividendEvent, IncomeWindow};
use crate::accruals::Accrual;
use crate::assets::Asset;

/// Calendar events for the accruals of `asset` that fall inside `window`.
///
/// The asset's quantity is not consulted, so scheduled payments of a sold-out
/// position still show up.
pub fn project_dividend_events<'a>(
    asset: &'a Asset,
    accruals: &'a [Accrual],
    window: IncomeWindow,
) -> impl Iterator<Item = DividendEvent> + 'a {
    accruals
        .iter()
        .filter(move |accrual| window.contains(accrual.accrual_date))
        .map(move |accrual| DividendEvent {
            date: accrual.accrual_date,
            ticker: asset.ticker.clone(),
            name: asset.name.clone(),
            amount: accrual.amount,
            kind: accrual.kind,
        })
}
