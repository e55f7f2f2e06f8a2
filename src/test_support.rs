//! Fixture datasets for unit tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;
use tempfile::TempDir;

use crate::config::DataConfig;
use crate::database::connect;
use crate::models::{Measurement, Station};
use crate::queries::ClimateQueries;

/// Write a dataset with the same table layout as the Hawaii climate file
pub async fn create_dataset(path: &Path, stations: &[Station], measurements: &[Measurement]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();

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
    .await
    .unwrap();

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
    .await
    .unwrap();

    for station in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(&station.station)
            .bind(&station.name)
            .execute(&pool)
            .await
            .unwrap();
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool.close().await;
}

/// Create a fixture dataset in a temp dir and open it through the query service
pub async fn open_queries(
    stations: &[Station],
    measurements: &[Measurement],
) -> (TempDir, ClimateQueries) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    create_dataset(&path, stations, measurements).await;

    let pool = connect(&path, &DataConfig::default()).await.unwrap();
    (dir, ClimateQueries::new(pool))
}

/// Three stations, deliberately not in id order
pub fn sample_stations() -> Vec<Station> {
    [
        ("USC00519397", "WAIKIKI 717.2, HI US"),
        ("USC00513117", "KANEOHE 838.1, HI US"),
        ("USC00519281", "WAIHEE 837.5, HI US"),
    ]
    .into_iter()
    .map(|(station, name)| Station {
        station: station.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Measurements spanning 2016-08-20..=2017-08-23.
///
/// The lookback cutoff is 2016-08-22. USC00519397 and USC00519281 both have
/// four rows, USC00513117 has two.
pub fn sample_measurements() -> Vec<Measurement> {
    [
        ("USC00519397", "2016-08-20", Some(0.5), 70.0),
        ("USC00519397", "2016-08-22", Some(0.1), 71.0),
        ("USC00519397", "2017-08-22", None, 80.0),
        ("USC00519397", "2017-08-23", Some(0.0), 81.0),
        ("USC00513117", "2016-08-21", Some(1.2), 72.0),
        ("USC00513117", "2017-08-23", Some(0.45), 82.0),
        ("USC00519281", "2016-08-20", Some(0.3), 65.0),
        ("USC00519281", "2016-08-23", Some(0.2), 75.0),
        ("USC00519281", "2017-08-22", Some(0.7), 77.0),
        ("USC00519281", "2017-08-23", Some(0.9), 79.0),
    ]
    .into_iter()
    .map(|(station, date, prcp, tobs)| Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    })
    .collect()
}
