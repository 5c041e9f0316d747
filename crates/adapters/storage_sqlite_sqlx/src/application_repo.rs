//! `SQLite` implementation of [`ApplicationRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use jobtrack_app::ports::ApplicationRepository;
use jobtrack_domain::application::{Application, NewApplication};
use jobtrack_domain::error::{JobTrackError, NotFoundError};
use jobtrack_domain::id::ApplicationId;
use jobtrack_domain::time::{format_date, parse_date};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Application`].
struct Wrapper(Application);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Application> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let date_applied: String = row.try_get("date_applied")?;

        let date_applied =
            parse_date(&date_applied).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Application {
            id: ApplicationId::new(id),
            company: row.try_get("company")?,
            position: row.try_get("position")?,
            status: row.try_get("status")?,
            date_applied,
            notes: row.try_get("notes")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO applications (company, position, status, date_applied, notes) \
    VALUES (?, ?, ?, ?, ?) \
    RETURNING id, company, position, status, date_applied, notes";
const SELECT_BY_ID: &str = "SELECT id, company, position, status, date_applied, notes \
    FROM applications WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, company, position, status, date_applied, notes \
    FROM applications ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM applications WHERE id = ?";

/// `SQLite`-backed job application repository.
pub struct SqliteApplicationRepository {
    pool: SqlitePool,
}

impl SqliteApplicationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ApplicationRepository for SqliteApplicationRepository {
    fn create(
        &self,
        application: NewApplication,
    ) -> impl Future<Output = Result<Application, JobTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&application.company)
                .bind(&application.position)
                .bind(&application.status)
                .bind(format_date(application.date_applied))
                .bind(&application.notes)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: ApplicationId,
    ) -> impl Future<Output = Result<Option<Application>, JobTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Application>, JobTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: ApplicationId) -> impl Future<Output = Result<(), JobTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Application",
                    id: id.to_string(),
                }
                .into());
            }
            Ok(())
        }
    }
}
