use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accruals::AccrualKind;
use crate::utils::time_utils::add_months;

/// A scheduled income payment projected onto the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendEvent {
    pub date: NaiveDate,
    pub ticker: String,
    pub name: String,
    pub amount: Decimal,
    pub kind: AccrualKind,
}

/// Upcoming income events ordered by date, earliest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendCalendar {
    pub events: Vec<DividendEvent>,
}

impl DividendCalendar {
    pub fn total_amount(&self) -> Decimal {
        self.events.iter().map(|event| event.amount).sum()
    }
}

/// Open date interval `(start, end)` of the calendar projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl IncomeWindow {
    /// Window from `today` to `today` plus `months` calendar months.
    pub fn months_ahead(today: NaiveDate, months: u32) -> Self {
        Self {
            start: today,
            end: add_months(today, months),
        }
    }

    /// Both bounds are exclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.start && date < self.end
    }
}
