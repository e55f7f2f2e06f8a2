//! Dataset records and API response shapes.
//!
//! The two dataset tables map onto [`Measurement`] and [`Station`]. The
//! remaining types are what the HTTP routes serialize.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One daily reading at one station (a row of the `measurement` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Measurement {
    /// Station identifier, e.g. "USC00519281"
    pub station: String,
    /// ISO-8601 calendar date ("YYYY-MM-DD")
    pub date: String,
    /// Precipitation, absent for some station/date pairs
    pub prcp: Option<f64>,
    /// Temperature observation
    pub tobs: f64,
}

/// A weather-reporting location (a row of the `station` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Station {
    /// Unique station identifier
    pub station: String,
    /// Human readable station name
    pub name: String,
}

/// Response body of the precipitation route: date -> precipitation
pub type PrecipitationByDate = BTreeMap<String, f64>;

/// One entry of the tobs route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemperatureObservation {
    pub date: String,
    pub temperature: f64,
}

/// Min/avg/max temperature over a filtered set of measurements.
///
/// All three fields are `None` when the filter matched no rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    #[sqlx(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    #[sqlx(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    #[sqlx(rename = "TMAX")]
    pub tmax: Option<f64>,
}

/// Row counts and date coverage of the loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}
