//! Test data generation utilities.
//!
//! Builds a SQLite file with the same two tables as the Hawaii climate
//! dataset, filled with a deterministic pattern of readings.

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;
use surfsup::{Measurement, Station};

/// Station with a reading every day
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// Newest date in the generated measurements
pub const LAST_DATE: &str = "2017-08-23";

/// First date of the most recent year of data (LAST_DATE - 366 days)
pub const CUTOFF_DATE: &str = "2016-08-22";

/// Stations in table order. MANOA has no measurements.
pub fn stations() -> Vec<Station> {
    [
        ("USC00519397", "WAIKIKI 717.2, HI US"),
        ("USC00513117", "KANEOHE 838.1, HI US"),
        ("USC00519281", "WAIHEE 837.5, HI US"),
        ("USC00516128", "MANOA LYON ARBO 785.2, HI US"),
    ]
    .into_iter()
    .map(|(station, name)| Station {
        station: station.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Daily readings from 2016-01-01 to LAST_DATE.
///
/// - USC00519281 reports daily, without precipitation every seventh day
/// - USC00519397 reports every other day
/// - USC00513117 reports every third day and never has precipitation
pub fn measurements() -> Vec<Measurement> {
    let first = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
    let last = NaiveDate::parse_from_str(LAST_DATE, "%Y-%m-%d").unwrap();

    let mut rows = Vec::new();
    for (i, day) in first.iter_days().take_while(|d| *d <= last).enumerate() {
        let date = day.format("%Y-%m-%d").to_string();

        rows.push(Measurement {
            station: MOST_ACTIVE_STATION.to_string(),
            date: date.clone(),
            prcp: if i % 7 == 0 {
                None
            } else {
                Some((i % 5) as f64 * 0.1)
            },
            tobs: 70.0 + (i % 10) as f64,
        });

        if i % 2 == 0 {
            rows.push(Measurement {
                station: "USC00519397".to_string(),
                date: date.clone(),
                prcp: Some((i % 3) as f64 * 0.05),
                tobs: 75.0 + (i % 4) as f64,
            });
        }

        if i % 3 == 0 {
            rows.push(Measurement {
                station: "USC00513117".to_string(),
                date,
                prcp: None,
                tobs: 65.0 + (i % 6) as f64,
            });
        }
    }

    rows
}

/// Write the dataset to `path`
pub async fn create_hawaii_sqlite(
    path: &Path,
    stations: &[Station],
    measurements: &[Measurement],
) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    let mut tx = pool.begin().await?;

    for station in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(&station.station)
            .bind(&station.name)
            .execute(&mut *tx)
            .await?;
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    pool.close().await;

    Ok(())
}
