//! The query service behind the climate routes.
//!
//! Every operation borrows one connection from the pool, runs its queries on
//! it, and hands it back when the connection guard drops, whether the query
//! succeeded or not.
//!
//! Dates are stored as ISO-8601 text, so comparisons against a formatted
//! cutoff are plain string comparisons in SQLite. Where the dataset leaves row
//! order open, the queries pin it down:
//!
//! - precipitation iterates by date then station, so on a date reported by
//!   several stations the highest station id wins
//! - the most active station breaks count ties by the lowest station id
//! - temperature observations come back in date order
//! - stations come back in table (rowid) order

use chrono::{Duration, NaiveDate};
use sqlx::sqlite::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{Result, SurfsUpError};
use crate::models::{PrecipitationByDate, Station, TemperatureObservation, TemperatureStats};

/// How far back "the most recent year" reaches from the newest measurement
pub const LOOKBACK_DAYS: i64 = 366;

/// Format of dates in the dataset and in route parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` route parameter
pub fn parse_date(param: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| SurfsUpError::InvalidDate {
        param: param.to_string(),
        value: value.to_string(),
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read-only queries over the `measurement` and `station` tables
#[derive(Debug, Clone)]
pub struct ClimateQueries {
    pool: SqlitePool,
}

impl ClimateQueries {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The pool this service draws connections from
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Precipitation for every date in the most recent year of data.
    ///
    /// Rows without a precipitation value are skipped. Returns an empty map
    /// when the dataset has no measurements.
    pub async fn most_recent_year_precipitation(&self) -> Result<PrecipitationByDate> {
        let mut conn = self.pool.acquire().await?;

        let Some(cutoff) = lookback_cutoff(&mut conn).await? else {
            return Ok(PrecipitationByDate::new());
        };

        let rows: Vec<(String, f64)> = sqlx::query_as(
            "SELECT date, prcp FROM measurement \
             WHERE date >= ?1 AND prcp IS NOT NULL \
             ORDER BY date, station",
        )
        .bind(&cutoff)
        .fetch_all(&mut *conn)
        .await?;

        debug!(cutoff = %cutoff, row_count = rows.len(), "Fetched precipitation rows");

        // Later rows overwrite earlier ones for the same date
        Ok(rows.into_iter().collect())
    }

    /// All stations in dataset order
    pub async fn list_stations(&self) -> Result<Vec<Station>> {
        let mut conn = self.pool.acquire().await?;

        let stations = sqlx::query_as::<_, Station>(
            "SELECT station, name FROM station ORDER BY rowid",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(stations)
    }

    /// The station with the most measurement rows, with its row count
    pub async fn most_active_station(&self) -> Result<Option<(String, i64)>> {
        let mut conn = self.pool.acquire().await?;
        most_active_station(&mut conn).await
    }

    /// Temperature observations of the most active station over the most
    /// recent year of data (the year is global, not per station)
    pub async fn most_active_station_temperatures(&self) -> Result<Vec<TemperatureObservation>> {
        let mut conn = self.pool.acquire().await?;

        let Some((station, count)) = most_active_station(&mut conn).await? else {
            return Ok(Vec::new());
        };
        let Some(cutoff) = lookback_cutoff(&mut conn).await? else {
            return Ok(Vec::new());
        };

        debug!(station = %station, count, cutoff = %cutoff, "Selected most active station");

        let observations = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, tobs AS temperature FROM measurement \
             WHERE station = ?1 AND date >= ?2 \
             ORDER BY date",
        )
        .bind(&station)
        .bind(&cutoff)
        .fetch_all(&mut *conn)
        .await?;

        Ok(observations)
    }

    /// Min/avg/max temperature from `start` onwards, or over `start..=end`.
    ///
    /// Always returns exactly one record; its fields are `None` when no
    /// measurement falls in the range.
    pub async fn temperature_stats_for_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<Vec<TemperatureStats>> {
        let start = parse_date("start", start)?;
        let end = end.map(|value| parse_date("end", value)).transpose()?;

        let mut conn = self.pool.acquire().await?;

        let stats = sqlx::query_as::<_, TemperatureStats>(
            "SELECT MIN(tobs) AS TMIN, AVG(tobs) AS TAVG, MAX(tobs) AS TMAX \
             FROM measurement \
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)",
        )
        .bind(format_date(start))
        .bind(end.map(format_date))
        .fetch_one(&mut *conn)
        .await?;

        Ok(vec![stats])
    }
}

/// Newest measurement date, if there are any measurements
async fn most_recent_date(conn: &mut SqliteConnection) -> Result<Option<NaiveDate>> {
    let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
        .fetch_one(&mut *conn)
        .await?;

    latest
        .map(|value| {
            NaiveDate::parse_from_str(&value, DATE_FORMAT)
                .map_err(|e| SurfsUpError::Database(sqlx::Error::Decode(Box::new(e))))
        })
        .transpose()
}

/// First date (formatted) inside the most recent year of data
async fn lookback_cutoff(conn: &mut SqliteConnection) -> Result<Option<String>> {
    let Some(latest) = most_recent_date(conn).await? else {
        return Ok(None);
    };

    let cutoff = latest
        .checked_sub_signed(Duration::days(LOOKBACK_DAYS))
        .unwrap_or(NaiveDate::MIN);

    Ok(Some(format_date(cutoff)))
}

async fn most_active_station(conn: &mut SqliteConnection) -> Result<Option<(String, i64)>> {
    let station = sqlx::query_as::<_, (String, i64)>(
        "SELECT station, COUNT(*) AS observations FROM measurement \
         GROUP BY station \
         ORDER BY observations DESC, station ASC \
         LIMIT 1",
    )
    .fetch_optional(&mut *conn)
    .await?;

    Ok(station)
}
