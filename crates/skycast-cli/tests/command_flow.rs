//! End-to-end handler flows over an in-memory database and fake network ports.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use skycast_cli::handlers;
use skycast_cli::handlers::now::NowArgs;
use skycast_cli::{CliContext, CliError, ConfigCommand, bootstrap_with};
use skycast_core::{
    Coordinates, ForecastError, ForecastPeriod, ForecastPort, GeocodeError, GeocoderPort,
    GridPoint, LocationQuery, NewWeatherRecord, Services,
};
use skycast_db::TestDb;

struct FakeGeocoder;

#[async_trait]
impl GeocoderPort for FakeGeocoder {
    async fn locate(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeocodeError> {
        match query {
            LocationQuery::Zip(zip) if zip == "80302" => {
                Ok(Some(Coordinates::new(40.0150, -105.2705)))
            }
            _ => Ok(None),
        }
    }
}

struct FakeForecast;

fn period(number: u32, name: &str, temperature: i32) -> ForecastPeriod {
    ForecastPeriod {
        number,
        name: name.to_string(),
        start_time: "2026-10-18T06:00:00-06:00".to_string(),
        end_time: "2026-10-18T18:00:00-06:00".to_string(),
        is_daytime: true,
        temperature,
        temperature_unit: "F".to_string(),
        wind_speed: "5 mph".to_string(),
        wind_direction: "NW".to_string(),
        precipitation_probability: Some(10),
        short_forecast: "Sunny".to_string(),
        detailed_forecast: format!("Sunny, with a high near {temperature}."),
    }
}

#[async_trait]
impl ForecastPort for FakeForecast {
    async fn grid_point(&self, coordinates: Coordinates) -> Result<GridPoint, ForecastError> {
        if coordinates.latitude > 50.0 {
            return Err(ForecastError::OutsideCoverage {
                coordinates: coordinates.to_string(),
            });
        }
        Ok(GridPoint {
            forecast_url: "https://api.weather.gov/gridpoints/BOU/53,74/forecast".to_string(),
            hourly_forecast_url: Some(
                "https://api.weather.gov/gridpoints/BOU/53,74/forecast/hourly".to_string(),
            ),
            city: Some("Boulder".to_string()),
            state: Some("CO".to_string()),
        })
    }

    async fn forecast(&self, _grid: &GridPoint) -> Result<Vec<ForecastPeriod>, ForecastError> {
        Ok(vec![period(1, "Today", 70), period(2, "Tonight", 41)])
    }

    async fn hourly_forecast(
        &self,
        _grid: &GridPoint,
    ) -> Result<Vec<ForecastPeriod>, ForecastError> {
        Ok(vec![period(1, "", 64)])
    }
}

fn context(db: &TestDb) -> CliContext {
    bootstrap_with(
        db.repos(),
        Services::new(Arc::new(FakeGeocoder), Arc::new(FakeForecast)),
    )
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[tokio::test]
async fn save_then_history_then_delete() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    handlers::save::execute(&ctx, Some("80302".to_string()), Some(day(18)))
        .await
        .unwrap();

    let records = ctx.app().records().list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location, "Boulder, CO");
    assert_eq!(records[0].temperature, 64);
    assert_eq!(records[0].forecast, "Sunny");

    handlers::history::execute(&ctx, Some("Boulder".to_string()))
        .await
        .unwrap();

    handlers::delete::execute(&ctx, "Boulder, CO", day(18), true)
        .await
        .unwrap();
    assert_eq!(ctx.app().records().count().await.unwrap(), 0);

    // Deleting again reports "No record found" but succeeds
    handlers::delete::execute(&ctx, "Boulder, CO", day(18), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn add_replaces_same_location_and_date() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    let first = NewWeatherRecord::new("Austin, TX", day(1), 91, "10 mph", "S");
    handlers::add::execute(&ctx, first).await.unwrap();
    let second =
        NewWeatherRecord::new("Austin, TX", day(1), 88, "12 mph", "SE").with_forecast("Storms");
    handlers::add::execute(&ctx, second).await.unwrap();

    let records = ctx.app().records().search("austin").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].temperature, 88);
    assert_eq!(records[0].forecast, "Storms");

    handlers::count::execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn add_rejects_blank_location() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    let err = handlers::add::execute(&ctx, NewWeatherRecord::new("  ", day(1), 50, "", ""))
        .await
        .unwrap_err();
    assert_eq!(CliError::from_anyhow(err).exit_code(), 2);
}

#[tokio::test]
async fn now_reports_not_found() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    let err = handlers::now::execute(
        &ctx,
        NowArgs {
            query: Some("99999".to_string()),
            at: None,
            periods: None,
            json: false,
        },
    )
    .await
    .unwrap_err();

    let err = CliError::from_anyhow(err);
    assert!(matches!(err, CliError::NotFound(ref q) if q == "99999"));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn now_outside_coverage_is_not_found() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    let err = handlers::now::execute(
        &ctx,
        NowArgs {
            query: None,
            at: Some(Coordinates::new(51.5074, -0.1278)),
            periods: None,
            json: true,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(CliError::from_anyhow(err), CliError::NotFound(_)));
}

#[tokio::test]
async fn now_falls_back_to_default_location() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    let args = || NowArgs {
        query: None,
        at: None,
        periods: Some(1),
        json: false,
    };

    let err = handlers::now::execute(&ctx, args()).await.unwrap_err();
    assert!(matches!(
        CliError::from_anyhow(err),
        CliError::Arguments(_)
    ));

    handlers::config::execute(
        &ctx,
        ConfigCommand::Set {
            default_location: Some("80302".to_string()),
            clear_default_location: false,
            future_periods: None,
            show_celsius: None,
            contact_email: None,
            clear_contact_email: false,
        },
    )
    .await
    .unwrap();

    handlers::now::execute(&ctx, args()).await.unwrap();
}

#[tokio::test]
async fn config_set_validates_and_reset_restores_defaults() {
    let db = TestDb::new().await.unwrap();
    let ctx = context(&db);

    let set_periods = |periods| ConfigCommand::Set {
        default_location: None,
        clear_default_location: false,
        future_periods: Some(periods),
        show_celsius: Some(false),
        contact_email: None,
        clear_contact_email: false,
    };

    let err = handlers::config::execute(&ctx, set_periods(20))
        .await
        .unwrap_err();
    assert_eq!(CliError::from_anyhow(err).exit_code(), 78);
    // Nothing was written
    let settings = ctx.app().settings().get().await.unwrap();
    assert_eq!(settings.show_celsius, Some(true));

    handlers::config::execute(&ctx, set_periods(5)).await.unwrap();
    let settings = ctx.app().settings().get().await.unwrap();
    assert_eq!(settings.future_periods, Some(5));
    assert_eq!(settings.show_celsius, Some(false));

    handlers::config::execute(&ctx, ConfigCommand::Reset { force: true })
        .await
        .unwrap();
    let settings = ctx.app().settings().get().await.unwrap();
    assert_eq!(settings.future_periods, Some(13));
    assert_eq!(settings.show_celsius, Some(true));
}
