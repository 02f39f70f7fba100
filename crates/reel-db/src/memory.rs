//! In-memory implementation of MovieRepository.
//!
//! Backs unit tests and ephemeral deployments where no PostgreSQL
//! instance is available. Records are kept in insertion order, which is
//! also the order queries return them in.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use reel_core::{Error, Movie, MovieRepository, Result};
use uuid::Uuid;

/// In-memory movie store.
///
/// Clones share the same underlying records, so a handle kept by a test
/// observes everything the application writes through its own handle.
#[derive(Clone, Default)]
pub struct InMemoryMovieRepository {
    records: Arc<Mutex<Vec<Movie>>>,
    fail_all: Arc<AtomicBool>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a store error.
    ///
    /// Lets tests drive the internal-error paths deterministically.
    pub fn fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(Error::Store("injected store failure".to_string()));
        }
        Ok(())
    }

    fn records(&self) -> MutexGuard<'_, Vec<Movie>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        self.check_available()?;
        Ok(self.records().clone())
    }

    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Movie>> {
        self.check_available()?;
        Ok(self
            .records()
            .iter()
            .filter(|m| m.title.as_deref().map_or(false, |t| t.contains(fragment)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>> {
        self.check_available()?;
        Ok(self
            .records()
            .iter()
            .find(|m| m.id.as_deref() == Some(id))
            .cloned())
    }

    async fn save(&self, movie: Movie) -> Result<Movie> {
        self.check_available()?;
        let movie = match movie.id {
            Some(_) => movie,
            None => Movie {
                id: Some(Uuid::now_v7().to_string()),
                ..movie
            },
        };

        let mut records = self.records();
        match records.iter_mut().find(|m| m.id == movie.id) {
            Some(slot) => *slot = movie.clone(),
            None => records.push(movie.clone()),
        }
        Ok(movie)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.check_available()?;
        self.records().retain(|m| m.id.as_deref() != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.check_available()?;
        self.records().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: Some(title.to_string()),
            year: Some("1980".to_string()),
            rated: Some("R".to_string()),
            runtime: Some("146 min".to_string()),
            genre: Some("Horror".to_string()),
            director: Some("Stanley Kubrick".to_string()),
            ..Movie::default()
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_round_trips() {
        let repo = InMemoryMovieRepository::new();

        let created = repo.save(movie("The Shining")).await.unwrap();
        let id = created.id.clone().expect("store-assigned id");
        assert!(!id.is_empty());
        assert_eq!(created.title.as_deref(), Some("The Shining"));

        let fetched = repo.find_by_id(&id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn save_with_id_replaces_the_record() {
        let repo = InMemoryMovieRepository::new();

        let created = repo.save(movie("The Shining")).await.unwrap();
        let replaced = repo
            .save(Movie {
                year: Some("1997".to_string()),
                ..created.clone()
            })
            .await
            .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.year.as_deref(), Some("1997"));
        // Replacement happens in place, no second record appears.
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn title_search_is_case_sensitive_substring() {
        let repo = InMemoryMovieRepository::new();
        repo.save(movie("2001: A Space Odyssey")).await.unwrap();
        repo.save(movie("The Shining")).await.unwrap();

        let hits = repo.find_by_title_containing("Space").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_deref(), Some("2001: A Space Odyssey"));

        assert!(repo.find_by_title_containing("space").await.unwrap().is_empty());
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryMovieRepository::new();
        let created = repo.save(movie("Alien")).await.unwrap();
        let id = created.id.unwrap();

        repo.delete_by_id(&id).await.unwrap();
        repo.delete_by_id(&id).await.unwrap();
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_all_clears_every_record() {
        let repo = InMemoryMovieRepository::new();
        repo.save(movie("Alien")).await.unwrap();
        repo.save(movie("Aliens")).await.unwrap();

        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fail_all_surfaces_store_errors() {
        let repo = InMemoryMovieRepository::new();
        repo.fail_all(true);

        match repo.find_all().await {
            Err(Error::Store(_)) => {}
            other => panic!("Expected store error, got {:?}", other.map(|v| v.len())),
        }

        repo.fail_all(false);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
