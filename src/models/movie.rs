//! Movie resource: row type, creation payload, and single-row queries.
//!
//! Reads run against the slave pool, writes against the master pool; the
//! caller picks the pool, these methods just take one.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, MySqlPool};

/// Duration bounds (minutes) accepted for a new movie.
const DURATION_RANGE: std::ops::RangeInclusive<i32> = 1..=1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub duration: i32,
    pub genre: String,
}

/// Creation payload with field-level validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub duration: i32,
    pub genre: String,
}

impl NewMovie {
    /// Presence/range checks on the request payload.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.genre.trim().is_empty() {
            return Err("genre is required".to_string());
        }
        if !DURATION_RANGE.contains(&self.duration) {
            return Err(format!(
                "duration must be between {} and {}",
                DURATION_RANGE.start(),
                DURATION_RANGE.end()
            ));
        }
        Ok(())
    }
}

impl Movie {
    /// Fetch all movies.
    pub async fn all(pool: &MySqlPool) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>("SELECT id, name, duration, genre FROM movies")
            .fetch_all(pool)
            .await
    }

    /// Fetch one movie by id.
    pub async fn find_by_id(pool: &MySqlPool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>("SELECT id, name, duration, genre FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie and return the stored row with its generated id.
    pub async fn create(pool: &MySqlPool, new_movie: NewMovie) -> Result<Movie, sqlx::Error> {
        let result = sqlx::query("INSERT INTO movies (name, genre, duration) VALUES (?, ?, ?)")
            .bind(&new_movie.name)
            .bind(&new_movie.genre)
            .bind(new_movie.duration)
            .execute(pool)
            .await?;

        Ok(Movie {
            id: result.last_insert_id() as i64,
            name: new_movie.name,
            duration: new_movie.duration,
            genre: new_movie.genre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NewMovie {
        NewMovie {
            name: "Seven Samurai".to_string(),
            duration: 207,
            genre: "Drama".to_string(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut movie = payload();
        movie.name = "   ".to_string();

        let err = movie.validate().unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn test_blank_genre_rejected() {
        let mut movie = payload();
        movie.genre = String::new();

        let err = movie.validate().unwrap_err();
        assert!(err.contains("genre"));
    }

    #[test]
    fn test_duration_bounds() {
        let mut movie = payload();

        movie.duration = 0;
        assert!(movie.validate().is_err());

        movie.duration = 1001;
        assert!(movie.validate().is_err());

        movie.duration = 1;
        assert!(movie.validate().is_ok());

        movie.duration = 1000;
        assert!(movie.validate().is_ok());
    }
}
