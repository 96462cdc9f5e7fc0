//! Income module - dividend and coupon calendar projection.

mod income_calculator;
mod income_model;

pub use income_calculator::project_dividend_events;
pub use income_model::{DividendCalendar, DividendEvent, IncomeWindow};
