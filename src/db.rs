use std::path::Path;

use sqlx::{Pool, Sqlite, SqlitePool};

use crate::err::RegistryError;
use crate::student::{Student, StudentForm};

const DB_FILE_NAME: &str = "registry.db";

/// Persistence gateway for the `students` table. This is the only component
/// that touches storage; the unique index on `registration_number` is the
/// final authority on uniqueness.
#[derive(Clone)]
pub struct StudentStore {
    pub db: Pool<Sqlite>,
}

impl StudentStore {
    /// Opens (or creates) the database file under `data_dir` and runs migrations.
    pub async fn build(data_dir: &Path) -> Result<Self, RegistryError> {
        // create the data directory if it doesn't exist
        std::fs::create_dir_all(data_dir)?;

        let path = data_dir.join(DB_FILE_NAME);
        // sqlite won't create the file on connect, so create it first
        if !path.exists() {
            std::fs::File::create(&path)?;
        }

        Self::connect(&format!("sqlite://{}", path.display())).await
    }

    /// Connects to an explicit database URL and runs migrations.
    pub async fn connect(url: &str) -> Result<Self, RegistryError> {
        let pool = SqlitePool::connect(url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(StudentStore { db: pool })
    }

    /// Connects using `DATABASE_URL`, loading `.env` first if present.
    pub async fn from_env() -> Result<Self, RegistryError> {
        dotenv::dotenv().ok();
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| RegistryError::Config("DATABASE_URL is not set".to_string()))?;
        Self::connect(&url).await
    }

    /// All stored records, in storage order.
    pub async fn list_all(&self) -> Result<Vec<Student>, RegistryError> {
        let students = sqlx::query_as(r"SELECT * FROM students;")
            .fetch_all(&self.db)
            .await?;
        Ok(students)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Student>, RegistryError> {
        let student = sqlx::query_as(r"SELECT * FROM students WHERE id = ?1;")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(student)
    }

    /// Looks up a record by registration number. `exclude_id` skips the given
    /// record so an edit can keep its own number.
    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<Student>, RegistryError> {
        let student = match exclude_id {
            Some(id) => {
                sqlx::query_as(
                    r"SELECT * FROM students WHERE registration_number = ?1 AND id != ?2;",
                )
                .bind(registration_number)
                .bind(id)
                .fetch_optional(&self.db)
                .await?
            }
            None => {
                sqlx::query_as(r"SELECT * FROM students WHERE registration_number = ?1;")
                    .bind(registration_number)
                    .fetch_optional(&self.db)
                    .await?
            }
        };
        Ok(student)
    }

    /// Persists a new record and returns it with its assigned id.
    ///
    /// A concurrent write that slips past the application-level uniqueness
    /// check is rejected here by the unique index and surfaces as a
    /// database error.
    pub async fn insert(&self, form: &StudentForm) -> Result<Student, RegistryError> {
        let result = sqlx::query(
            r"INSERT INTO students (full_name, registration_number, course, year_of_study)
                VALUES (?1, ?2, ?3, ?4);",
        )
        .bind(form.full_name.as_str())
        .bind(form.registration_number.as_str())
        .bind(form.course.as_str())
        .bind(form.year_of_study)
        .execute(&self.db)
        .await?;

        let student = sqlx::query_as(r"SELECT * FROM students WHERE id = ?1;")
            .bind(result.last_insert_rowid())
            .fetch_one(&self.db)
            .await?;
        Ok(student)
    }

    /// Overwrites every editable field of the record with the given id.
    /// Returns `false` when no row matched, i.e. the record vanished between
    /// load and save.
    pub async fn update(&self, id: i64, form: &StudentForm) -> Result<bool, RegistryError> {
        let result = sqlx::query(
            r"UPDATE students
                SET full_name = ?1, registration_number = ?2, course = ?3, year_of_study = ?4
                WHERE id = ?5;",
        )
        .bind(form.full_name.as_str())
        .bind(form.registration_number.as_str())
        .bind(form.course.as_str())
        .bind(form.year_of_study)
        .bind(id)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Removes the record if present; deleting an absent id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), RegistryError> {
        sqlx::query(r"DELETE FROM students WHERE id = ?1;")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
