//! Analytics module - the single entry point combining valuation, risk,
//! allocation, income and snapshot persistence.

mod analytics_model;
mod analytics_service;
mod analytics_traits;


pub use analytics_model::{AssetAnalytics, PortfolioAnalytics};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
