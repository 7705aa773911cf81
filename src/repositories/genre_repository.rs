// src/repositories/genre_repository.rs

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::genre::Genre;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait GenreRepository: Send + Sync {
    fn insert(&self, conn: &Connection, genre: &Genre) -> AppResult<Genre>;
    fn update(&self, conn: &Connection, genre: &Genre) -> AppResult<()>;
    fn find_by_id(&self, conn: &Connection, id: i64) -> AppResult<Option<Genre>>;
    /// Resolve ids, silently dropping the ones with no row
    fn find_all_by_ids(&self, conn: &Connection, ids: &[i64]) -> AppResult<Vec<Genre>>;
    fn find_page(&self, conn: &Connection, offset: i64, limit: i64) -> AppResult<Vec<Genre>>;
    fn count(&self, conn: &Connection) -> AppResult<i64>;
    fn find_by_name(&self, conn: &Connection, name: &str) -> AppResult<Option<Genre>>;
    /// Movies referencing this genre, in association order
    fn movie_ids(&self, conn: &Connection, genre_id: i64) -> AppResult<Vec<i64>>;
    fn delete(&self, conn: &Connection, id: i64) -> AppResult<()>;
}

#[derive(Debug, Default)]
pub struct SqliteGenreRepository;

impl SqliteGenreRepository {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn row_to_genre(row: &Row) -> Result<Genre, rusqlite::Error> {
        Ok(Genre {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}

impl GenreRepository for SqliteGenreRepository {
    fn insert(&self, conn: &Connection, genre: &Genre) -> AppResult<Genre> {
        conn.execute("INSERT INTO genres (name) VALUES (?1)", params![genre.name])?;

        Ok(Genre {
            id: conn.last_insert_rowid(),
            name: genre.name.clone(),
        })
    }

    fn update(&self, conn: &Connection, genre: &Genre) -> AppResult<()> {
        let rows_affected = conn.execute(
            "UPDATE genres SET name = ?1 WHERE id = ?2",
            params![genre.name, genre.id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::not_found_with_id("Genre", genre.id));
        }
        Ok(())
    }

    fn find_by_id(&self, conn: &Connection, id: i64) -> AppResult<Option<Genre>> {
        let mut stmt = conn.prepare_cached("SELECT id, name FROM genres WHERE id = ?1")?;

        Ok(stmt.query_row(params![id], Self::row_to_genre).optional()?)
    }

    fn find_all_by_ids(&self, conn: &Connection, ids: &[i64]) -> AppResult<Vec<Genre>> {
        let mut genres: Vec<Genre> = Vec::with_capacity(ids.len());
        for &id in ids {
            if genres.iter().any(|g| g.id == id) {
                continue;
            }
            if let Some(genre) = self.find_by_id(conn, id)? {
                genres.push(genre);
            }
        }
        Ok(genres)
    }

    fn find_page(&self, conn: &Connection, offset: i64, limit: i64) -> AppResult<Vec<Genre>> {
        let mut stmt = conn.prepare(
            "SELECT id, name FROM genres ORDER BY id LIMIT ?1 OFFSET ?2"
        )?;

        let genres: Vec<Genre> = stmt.query_map(params![limit, offset], Self::row_to_genre)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }

    fn count(&self, conn: &Connection) -> AppResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))?)
    }

    fn find_by_name(&self, conn: &Connection, name: &str) -> AppResult<Option<Genre>> {
        let mut stmt = conn.prepare(
            "SELECT id, name FROM genres WHERE name = ?1 ORDER BY id LIMIT 1"
        )?;

        Ok(stmt.query_row(params![name], Self::row_to_genre).optional()?)
    }

    fn movie_ids(&self, conn: &Connection, genre_id: i64) -> AppResult<Vec<i64>> {
        let mut stmt = conn.prepare(
            "SELECT movie_id FROM movie_genre WHERE genre_id = ?1 ORDER BY rowid"
        )?;

        let ids: Vec<i64> = stmt.query_map(params![genre_id], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    fn delete(&self, conn: &Connection, id: i64) -> AppResult<()> {
        let rows_affected = conn.execute("DELETE FROM genres WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found_with_id("Genre", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize_database, register_functions};

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        register_functions(&conn).unwrap();
        initialize_database(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_assigns_ids() {
        let conn = setup();
        let repo = SqliteGenreRepository::new();

        let drama = repo.insert(&conn, &Genre::new("Drama".to_string())).unwrap();
        let comedy = repo.insert(&conn, &Genre::new("Comedy".to_string())).unwrap();

        assert!(drama.id > 0);
        assert!(comedy.id > drama.id);
        assert_eq!(repo.find_by_id(&conn, drama.id).unwrap(), Some(drama));
        assert_eq!(repo.count(&conn).unwrap(), 2);
    }

    #[test]
    fn test_find_all_by_ids_drops_unknown_and_duplicates() {
        let conn = setup();
        let repo = SqliteGenreRepository::new();
        let drama = repo.insert(&conn, &Genre::new("Drama".to_string())).unwrap();
        let comedy = repo.insert(&conn, &Genre::new("Comedy".to_string())).unwrap();

        let found = repo
            .find_all_by_ids(&conn, &[comedy.id, 999, drama.id, comedy.id])
            .unwrap();

        assert_eq!(found, vec![comedy, drama]);
    }

    #[test]
    fn test_find_page() {
        let conn = setup();
        let repo = SqliteGenreRepository::new();
        for name in ["A", "B", "C", "D", "E"] {
            repo.insert(&conn, &Genre::new(name.to_string())).unwrap();
        }

        let page: Vec<String> = repo
            .find_page(&conn, 2, 2)
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(page, vec!["C", "D"]);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let conn = setup();
        let repo = SqliteGenreRepository::new();
        repo.insert(&conn, &Genre::new("Drama".to_string())).unwrap();

        assert!(repo.find_by_name(&conn, "Drama").unwrap().is_some());
        assert!(repo.find_by_name(&conn, "drama").unwrap().is_none());
    }

    #[test]
    fn test_update_and_delete_missing_row() {
        let conn = setup();
        let repo = SqliteGenreRepository::new();

        let ghost = Genre { id: 77, name: "Ghost".to_string() };
        assert!(matches!(repo.update(&conn, &ghost), Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(&conn, 77), Err(AppError::NotFound(_))));
    }
}
