//! PostgreSQL store. Tables live in one schema; see `migration::ensure_tables`.

use super::Store;
use crate::error::AppError;
use crate::migration::qualified_table;
use crate::models::{
    Airline, AirlineAirport, AirlineChanges, Airport, CreateAirport, LinkedAirport, NewAirline, UpdateAirport,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const AIRLINE_COLUMNS: &str = "id, name, description, founding_date, website, created_at, updated_at";
const AIRPORT_COLUMNS: &str = "id, name, code, country, city, created_at, updated_at";
const LINK_COLUMNS: &str = "airline_id, airport_id, start_date, active, created_at, updated_at";

pub struct PgStore {
    pool: PgPool,
    airline: String,
    airport: String,
    airline_airport: String,
}

impl PgStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgStore {
            pool,
            airline: qualified_table(schema, "airline"),
            airport: qualified_table(schema, "airport"),
            airline_airport: qualified_table(schema, "airline_airport"),
        }
    }

    fn linked_airports_sql(&self) -> String {
        format!(
            "SELECT aa.airline_id, aa.airport_id, aa.start_date, aa.active, aa.created_at, aa.updated_at, \
             ap.name AS airport_name, ap.code AS airport_code, ap.country AS airport_country, ap.city AS airport_city, \
             ap.created_at AS airport_created_at, ap.updated_at AS airport_updated_at \
             FROM {} aa JOIN {} ap ON ap.id = aa.airport_id \
             WHERE aa.airline_id = $1 ORDER BY aa.created_at, ap.code",
            self.airline_airport, self.airport
        )
    }
}

/// One row of the link/airport join.
#[derive(sqlx::FromRow)]
struct LinkedAirportRow {
    airline_id: Uuid,
    airport_id: Uuid,
    start_date: DateTime<Utc>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    airport_name: String,
    airport_code: String,
    airport_country: String,
    airport_city: String,
    airport_created_at: DateTime<Utc>,
    airport_updated_at: DateTime<Utc>,
}

impl From<LinkedAirportRow> for LinkedAirport {
    fn from(r: LinkedAirportRow) -> Self {
        LinkedAirport {
            link: AirlineAirport {
                airline_id: r.airline_id,
                airport_id: r.airport_id,
                start_date: r.start_date,
                active: r.active,
                created_at: r.created_at,
                updated_at: r.updated_at,
            },
            airport: Airport {
                id: r.airport_id,
                name: r.airport_name,
                code: r.airport_code,
                country: r.airport_country,
                city: r.airport_city,
                created_at: r.airport_created_at,
                updated_at: r.airport_updated_at,
            },
        }
    }
}

/// Translate constraint violations into business errors; anything else stays a database error.
fn map_write_error(e: sqlx::Error, conflict: &str) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return AppError::Conflict(conflict.to_string());
        }
        if db.is_foreign_key_violation() {
            return AppError::NotFound("referenced record not found".into());
        }
    }
    AppError::Db(e)
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    async fn list_airlines(&self) -> Result<Vec<Airline>, AppError> {
        let sql = format!("SELECT {} FROM {}", AIRLINE_COLUMNS, self.airline);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Airline>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_airline(&self, id: Uuid) -> Result<Option<Airline>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", AIRLINE_COLUMNS, self.airline);
        tracing::debug!(sql = %sql, %id, "query");
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_airline(&self, new: &NewAirline) -> Result<Airline, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, description, founding_date, website) VALUES ($1, $2, $3, $4) RETURNING {}",
            self.airline, AIRLINE_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.founding_date)
            .bind(&new.website)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_airline(&self, id: Uuid, changes: &AirlineChanges) -> Result<Option<Airline>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = COALESCE($2, name), description = COALESCE($3, description), \
             founding_date = COALESCE($4, founding_date), website = COALESCE($5, website), updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            self.airline, AIRLINE_COLUMNS
        );
        tracing::debug!(sql = %sql, %id, "query");
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.founding_date)
            .bind(changes.website.as_deref())
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_airline(&self, id: Uuid) -> Result<Option<Airline>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", self.airline, AIRLINE_COLUMNS);
        tracing::debug!(sql = %sql, %id, "query");
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_airports(&self) -> Result<Vec<Airport>, AppError> {
        let sql = format!("SELECT {} FROM {}", AIRPORT_COLUMNS, self.airport);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Airport>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_airport(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", AIRPORT_COLUMNS, self.airport);
        tracing::debug!(sql = %sql, %id, "query");
        Ok(sqlx::query_as::<_, Airport>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_airport_by_code(&self, code: &str) -> Result<Option<Airport>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE code = $1", AIRPORT_COLUMNS, self.airport);
        tracing::debug!(sql = %sql, code, "query");
        Ok(sqlx::query_as::<_, Airport>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_airport(&self, new: &CreateAirport) -> Result<Airport, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, code, country, city) VALUES ($1, $2, $3, $4) RETURNING {}",
            self.airport, AIRPORT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Airport>(&sql)
            .bind(&new.name)
            .bind(&new.code)
            .bind(&new.country)
            .bind(&new.city)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &format!("Airport with code {} already exists", new.code)))
    }

    async fn update_airport(&self, id: Uuid, changes: &UpdateAirport) -> Result<Option<Airport>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = COALESCE($2, name), code = COALESCE($3, code), \
             country = COALESCE($4, country), city = COALESCE($5, city), updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            self.airport, AIRPORT_COLUMNS
        );
        tracing::debug!(sql = %sql, %id, "query");
        let code = changes.code.as_deref().unwrap_or_default();
        sqlx::query_as::<_, Airport>(&sql)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.code.as_deref())
            .bind(changes.country.as_deref())
            .bind(changes.city.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &format!("Airport with code {} already exists", code)))
    }

    async fn delete_airport(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", self.airport, AIRPORT_COLUMNS);
        tracing::debug!(sql = %sql, %id, "query");
        Ok(sqlx::query_as::<_, Airport>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<Option<AirlineAirport>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE airline_id = $1 AND airport_id = $2",
            LINK_COLUMNS, self.airline_airport
        );
        tracing::debug!(sql = %sql, %airline_id, %airport_id, "query");
        Ok(sqlx::query_as::<_, AirlineAirport>(&sql)
            .bind(airline_id)
            .bind(airport_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn linked_airports(&self, airline_id: Uuid) -> Result<Vec<LinkedAirport>, AppError> {
        let sql = self.linked_airports_sql();
        tracing::debug!(sql = %sql, %airline_id, "query");
        let rows = sqlx::query_as::<_, LinkedAirportRow>(&sql)
            .bind(airline_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(LinkedAirport::from).collect())
    }

    async fn insert_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<AirlineAirport, AppError> {
        let sql = format!(
            "INSERT INTO {} (airline_id, airport_id) VALUES ($1, $2) RETURNING {}",
            self.airline_airport, LINK_COLUMNS
        );
        tracing::debug!(sql = %sql, %airline_id, %airport_id, "query");
        sqlx::query_as::<_, AirlineAirport>(&sql)
            .bind(airline_id)
            .bind(airport_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Airport already associated with airline"))
    }

    async fn delete_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<Option<AirlineAirport>, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE airline_id = $1 AND airport_id = $2 RETURNING {}",
            self.airline_airport, LINK_COLUMNS
        );
        tracing::debug!(sql = %sql, %airline_id, %airport_id, "query");
        Ok(sqlx::query_as::<_, AirlineAirport>(&sql)
            .bind(airline_id)
            .bind(airport_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn replace_links(&self, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<Vec<LinkedAirport>, AppError> {
        let mut tx = self.pool.begin().await?;

        let delete_sql = format!("DELETE FROM {} WHERE airline_id = $1", self.airline_airport);
        tracing::debug!(sql = %delete_sql, %airline_id, "query (tx)");
        sqlx::query(&delete_sql).bind(airline_id).execute(&mut *tx).await?;

        // clock_timestamp() advances within the transaction, so the new links keep request order.
        let insert_sql = format!(
            "INSERT INTO {} (airline_id, airport_id, created_at, updated_at) \
             VALUES ($1, $2, clock_timestamp(), clock_timestamp())",
            self.airline_airport
        );
        for airport_id in airport_ids {
            tracing::debug!(sql = %insert_sql, %airline_id, %airport_id, "query (tx)");
            sqlx::query(&insert_sql)
                .bind(airline_id)
                .bind(airport_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_write_error(e, "Airport already associated with airline"))?;
        }

        let select_sql = self.linked_airports_sql();
        let rows = sqlx::query_as::<_, LinkedAirportRow>(&select_sql)
            .bind(airline_id)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(rows.into_iter().map(LinkedAirport::from).collect())
    }
}
