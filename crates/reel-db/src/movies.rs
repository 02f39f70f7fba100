//! PostgreSQL implementation of MovieRepository.

use async_trait::async_trait;
use reel_core::{Error, Movie, MovieRepository, Result};
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use crate::escape_like;

#[derive(Clone)]
pub struct PgMovieRepository {
    pool: Pool<Postgres>,
}

impl PgMovieRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn row_to_movie(row: &sqlx::postgres::PgRow) -> Movie {
        Movie {
            id: row.get("id"),
            title: row.get("title"),
            year: row.get("year"),
            rated: row.get("rated"),
            runtime: row.get("runtime"),
            genre: row.get("genre"),
            director: row.get("director"),
        }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        let rows = sqlx::query(
            "SELECT id, title, year, rated, runtime, genre, director FROM movie",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(Self::row_to_movie).collect())
    }

    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Movie>> {
        // LIKE, not ILIKE: the match is case-sensitive. Wildcards in the
        // fragment are escaped so they match as literals.
        let pattern = format!("%{}%", escape_like(fragment));
        let rows = sqlx::query(
            r#"
            SELECT id, title, year, rated, runtime, genre, director
            FROM movie
            WHERE title LIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(Self::row_to_movie).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let row = sqlx::query(
            "SELECT id, title, year, rated, runtime, genre, director FROM movie WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.as_ref().map(Self::row_to_movie))
    }

    async fn save(&self, movie: Movie) -> Result<Movie> {
        // No incoming id means a fresh insert; the store assigns a
        // time-ordered identifier.
        let id = movie
            .id
            .clone()
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        let row = sqlx::query(
            r#"
            INSERT INTO movie (id, title, year, rated, runtime, genre, director)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                year = EXCLUDED.year,
                rated = EXCLUDED.rated,
                runtime = EXCLUDED.runtime,
                genre = EXCLUDED.genre,
                director = EXCLUDED.director
            RETURNING id, title, year, rated, runtime, genre, director
            "#,
        )
        .bind(&id)
        .bind(&movie.title)
        .bind(&movie.year)
        .bind(&movie.rated)
        .bind(&movie.runtime)
        .bind(&movie.genre)
        .bind(&movie.director)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(movie_id = %id, "Movie saved");
        Ok(Self::row_to_movie(&row))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        // Rows-affected is deliberately not inspected; deleting a missing
        // id succeeds the same as deleting an existing one.
        sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM movie")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(())
    }
}
