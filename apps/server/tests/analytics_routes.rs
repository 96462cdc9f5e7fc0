use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use budgetflow_core::accounts::{AccountRepositoryTrait, NewAccount};
use budgetflow_core::accruals::{AccrualKind, AccrualRepositoryTrait, NewAccrual};
use budgetflow_core::assets::{AssetRepositoryTrait, AssetType, NewAsset};
use budgetflow_core::market_data::{MarketPrice, MarketPriceRepositoryTrait};
use budgetflow_core::trades::{NewTrade, TradeRepositoryTrait, TradeSide};
use budgetflow_server::{api::app_router, build_state, config::Config};
use budgetflow_storage_sqlite::{
    create_pool, spawn_writer, AccountRepository, AccrualRepository, AssetRepository, DbPool,
    MarketPriceRepository, TradeRepository, WriteHandle,
};
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

struct TestApp {
    _dir: TempDir,
    router: Router,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

async fn build_test_app() -> TestApp {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    let config = Config {
        db_path: db_path.clone(),
        ..Config::default()
    };

    let state = build_state(&config).await.unwrap();
    let router = app_router(state, &config);

    // A second pool on the same file seeds data behind the app's back.
    let pool = create_pool(&db_path).unwrap();
    let writer = spawn_writer(pool.clone());

    TestApp {
        _dir: dir,
        router,
        pool,
        writer,
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Seeds user `u1` with one priced stock (10 @ 300, bought at 250) and one
/// unpriced bond (4 units, bought at 950) paying a coupon in ten days.
async fn seed_portfolio(app: &TestApp) {
    let accounts = AccountRepository::new(app.pool.clone(), app.writer.clone());
    let account = accounts
        .create(NewAccount {
            id: None,
            user_id: "u1".to_string(),
            name: "Main".to_string(),
            account_type: "BROKERAGE".to_string(),
            currency: "RUB".to_string(),
        })
        .await
        .unwrap();

    let assets = AssetRepository::new(app.pool.clone(), app.writer.clone());
    let trades = TradeRepository::new(app.pool.clone(), app.writer.clone());
    let bought_on = today() - Duration::days(90);

    for (ticker, asset_type, quantity, cost) in [
        ("SBER", AssetType::Stock, dec!(10), dec!(250)),
        ("OFZ", AssetType::Bond, dec!(4), dec!(950)),
    ] {
        let asset = assets
            .create(NewAsset {
                id: None,
                account_id: account.id.clone(),
                name: format!("{} name", ticker),
                ticker: ticker.to_string(),
                asset_type,
                currency: "RUB".to_string(),
                quantity,
            })
            .await
            .unwrap();
        trades
            .create(NewTrade {
                id: None,
                asset_id: asset.id.clone(),
                side: TradeSide::Buy,
                trade_date: bought_on,
                quantity,
                price: cost,
                fee: Decimal::ZERO,
            })
            .await
            .unwrap();

        if ticker == "OFZ" {
            let accruals = AccrualRepository::new(app.pool.clone(), app.writer.clone());
            accruals
                .create(NewAccrual {
                    id: None,
                    asset_id: asset.id.clone(),
                    kind: AccrualKind::Coupon,
                    accrual_date: today() + Duration::days(10),
                    amount: dec!(36.4),
                })
                .await
                .unwrap();
        }
    }

    let prices = MarketPriceRepository::new(app.pool.clone(), app.writer.clone());
    prices
        .save_prices(&[MarketPrice {
            ticker: "SBER".to_string(),
            timestamp: Utc::now().naive_utc() - Duration::hours(1),
            price: dec!(300),
            volume: None,
            currency: Some("RUB".to_string()),
            source: None,
        }])
        .await
        .unwrap();
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_probes_report_ok() {
    let app = build_test_app().await;
    for uri in ["/api/v1/healthz", "/api/v1/readyz"] {
        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}

#[tokio::test]
async fn unknown_user_gets_zero_analytics() {
    let app = build_test_app().await;
    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/analytics/portfolio/nobody",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalValue"].as_f64(), Some(0.0));
    assert_eq!(body["sharpeRatio"].as_f64(), Some(0.0));
    assert_eq!(body["assetDetails"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn portfolio_analytics_values_held_assets() {
    let app = build_test_app().await;
    seed_portfolio(&app).await;

    let (status, body) =
        send(&app.router, Method::GET, "/api/v1/analytics/portfolio/u1", None).await;

    assert_eq!(status, StatusCode::OK);
    // 10 × 300 priced, plus 4 × 950 valued at average cost.
    assert_eq!(body["totalValue"].as_f64(), Some(6800.0));
    assert_eq!(body["byType"]["stock"].as_f64(), Some(3000.0));
    assert_eq!(body["byType"]["bond"].as_f64(), Some(3800.0));
    assert_eq!(body["byCurrency"]["RUB"].as_f64(), Some(6800.0));

    let details = body["assetDetails"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details.iter().any(|d| d["ticker"] == "OFZ"));
}

#[tokio::test]
async fn dividend_calendar_honours_months_ahead() {
    let app = build_test_app().await;
    seed_portfolio(&app).await;

    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/analytics/dividends/u1?monthsAhead=1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["ticker"], "OFZ");
    assert_eq!(events[0]["kind"], "COUPON");

    let (status, body) =
        send(&app.router, Method::GET, "/api/v1/analytics/dividends/u1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn dividend_calendar_with_negative_horizon_is_empty() {
    let app = build_test_app().await;
    seed_portfolio(&app).await;

    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/analytics/dividends/u1?monthsAhead=-2",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn dividend_calendar_rejects_non_numeric_horizon_with_error_body() {
    let app = build_test_app().await;
    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/analytics/dividends/u1?monthsAhead=soon",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn rebalance_returns_signed_deltas() {
    let app = build_test_app().await;
    seed_portfolio(&app).await;

    let target = serde_json::json!({ "stock": 50, "bond": 50, "crypto": 0 });
    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/analytics/rebalance/u1",
        Some(target),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalValue"].as_f64(), Some(6800.0));
    assert_eq!(body["recommendations"]["stock"].as_f64(), Some(400.0));
    assert_eq!(body["recommendations"]["bond"].as_f64(), Some(-400.0));
    assert_eq!(body["recommendations"]["crypto"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn blank_user_id_is_a_bad_request() {
    let app = build_test_app().await;
    let (status, body) = send(
        &app.router,
        Method::GET,
        "/api/v1/analytics/portfolio/%20",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn rebalance_rejects_malformed_body() {
    let app = build_test_app().await;
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/analytics/rebalance/u1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn snapshot_is_created_once_per_day() {
    let app = build_test_app().await;
    seed_portfolio(&app).await;

    let (status, first) =
        send(&app.router, Method::POST, "/api/v1/analytics/snapshot/u1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["snapshotDate"], today().format("%Y-%m-%d").to_string());

    let (_, second) = send(&app.router, Method::POST, "/api/v1/analytics/snapshot/u1", None).await;
    assert_eq!(first["id"], second["id"]);

    let (status, history) =
        send(&app.router, Method::GET, "/api/v1/analytics/snapshots/u1", None).await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["totalValue"].as_f64(), Some(6800.0));
    assert_eq!(history[0]["currency"], "RUB");
}
