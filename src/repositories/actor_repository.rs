// src/repositories/actor_repository.rs

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::actor::Actor;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ActorRepository: Send + Sync {
    fn insert(&self, conn: &Connection, actor: &Actor) -> AppResult<Actor>;
    fn update(&self, conn: &Connection, actor: &Actor) -> AppResult<()>;
    fn find_by_id(&self, conn: &Connection, id: i64) -> AppResult<Option<Actor>>;
    /// Resolve ids, silently dropping the ones with no row
    fn find_all_by_ids(&self, conn: &Connection, ids: &[i64]) -> AppResult<Vec<Actor>>;
    fn find_page(&self, conn: &Connection, offset: i64, limit: i64) -> AppResult<Vec<Actor>>;
    fn count(&self, conn: &Connection) -> AppResult<i64>;
    /// Case-insensitive substring match on the name
    fn search_by_name(&self, conn: &Connection, name: &str) -> AppResult<Vec<Actor>>;
    fn find_by_name_and_birth_date(
        &self,
        conn: &Connection,
        name: &str,
        birth_date: &str,
    ) -> AppResult<Option<Actor>>;
    /// Movies referencing this actor, in association order
    fn movie_ids(&self, conn: &Connection, actor_id: i64) -> AppResult<Vec<i64>>;
    fn delete(&self, conn: &Connection, id: i64) -> AppResult<()>;
}

#[derive(Debug, Default)]
pub struct SqliteActorRepository;

impl SqliteActorRepository {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn row_to_actor(row: &Row) -> Result<Actor, rusqlite::Error> {
        Ok(Actor {
            id: row.get("id")?,
            name: row.get("name")?,
            birth_date: row.get("birth_date")?,
        })
    }
}

impl ActorRepository for SqliteActorRepository {
    fn insert(&self, conn: &Connection, actor: &Actor) -> AppResult<Actor> {
        conn.execute(
            "INSERT INTO actors (name, birth_date) VALUES (?1, ?2)",
            params![actor.name, actor.birth_date],
        )?;

        Ok(Actor {
            id: conn.last_insert_rowid(),
            ..actor.clone()
        })
    }

    fn update(&self, conn: &Connection, actor: &Actor) -> AppResult<()> {
        let rows_affected = conn.execute(
            "UPDATE actors SET name = ?1, birth_date = ?2 WHERE id = ?3",
            params![actor.name, actor.birth_date, actor.id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::not_found_with_id("Actor", actor.id));
        }
        Ok(())
    }

    fn find_by_id(&self, conn: &Connection, id: i64) -> AppResult<Option<Actor>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, birth_date FROM actors WHERE id = ?1"
        )?;

        Ok(stmt.query_row(params![id], Self::row_to_actor).optional()?)
    }

    fn find_all_by_ids(&self, conn: &Connection, ids: &[i64]) -> AppResult<Vec<Actor>> {
        let mut actors: Vec<Actor> = Vec::with_capacity(ids.len());
        for &id in ids {
            if actors.iter().any(|a| a.id == id) {
                continue;
            }
            if let Some(actor) = self.find_by_id(conn, id)? {
                actors.push(actor);
            }
        }
        Ok(actors)
    }

    fn find_page(&self, conn: &Connection, offset: i64, limit: i64) -> AppResult<Vec<Actor>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, birth_date FROM actors ORDER BY id LIMIT ?1 OFFSET ?2"
        )?;

        let actors: Vec<Actor> = stmt.query_map(params![limit, offset], Self::row_to_actor)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn count(&self, conn: &Connection) -> AppResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM actors", [], |row| row.get(0))?)
    }

    fn search_by_name(&self, conn: &Connection, name: &str) -> AppResult<Vec<Actor>> {
        // instr() rather than LIKE so '%' and '_' in the input match literally
        let mut stmt = conn.prepare(
            "SELECT id, name, birth_date FROM actors
             WHERE instr(unicode_lower(name), unicode_lower(?1)) > 0
             ORDER BY id"
        )?;

        let actors: Vec<Actor> = stmt.query_map(params![name], Self::row_to_actor)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn find_by_name_and_birth_date(
        &self,
        conn: &Connection,
        name: &str,
        birth_date: &str,
    ) -> AppResult<Option<Actor>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, birth_date FROM actors
             WHERE name = ?1 AND birth_date = ?2
             ORDER BY id LIMIT 1"
        )?;

        Ok(stmt.query_row(params![name, birth_date], Self::row_to_actor).optional()?)
    }

    fn movie_ids(&self, conn: &Connection, actor_id: i64) -> AppResult<Vec<i64>> {
        let mut stmt = conn.prepare(
            "SELECT movie_id FROM movie_actor WHERE actor_id = ?1 ORDER BY rowid"
        )?;

        let ids: Vec<i64> = stmt.query_map(params![actor_id], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    fn delete(&self, conn: &Connection, id: i64) -> AppResult<()> {
        let rows_affected = conn.execute("DELETE FROM actors WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found_with_id("Actor", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize_database, register_functions};
    use chrono::NaiveDate;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        register_functions(&conn).unwrap();
        initialize_database(&conn).unwrap();
        conn
    }

    fn actor(name: &str, y: i32, m: u32, d: u32) -> Actor {
        Actor::new(name.to_string(), NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_insert_and_find() {
        let conn = setup();
        let repo = SqliteActorRepository::new();

        let jane = repo.insert(&conn, &actor("Jane Doe", 1980, 5, 1)).unwrap();

        assert!(jane.id > 0);
        let found = repo.find_by_id(&conn, jane.id).unwrap().unwrap();
        assert_eq!(found.birth_date, "1980-05-01");
        assert!(repo.find_by_id(&conn, jane.id + 1).unwrap().is_none());
    }

    #[test]
    fn test_search_by_name_ignores_case() {
        let conn = setup();
        let repo = SqliteActorRepository::new();
        repo.insert(&conn, &actor("Jane Doe", 1980, 5, 1)).unwrap();
        repo.insert(&conn, &actor("John Smith", 1975, 1, 2)).unwrap();
        repo.insert(&conn, &actor("Mary Jane Watson", 1990, 3, 4)).unwrap();

        let names: Vec<String> = repo
            .search_by_name(&conn, "JANE")
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Jane Doe", "Mary Jane Watson"]);

        // Wildcards are literal
        assert!(repo.search_by_name(&conn, "%").unwrap().is_empty());
    }

    #[test]
    fn test_search_by_name_folds_non_ascii_case() {
        let conn = setup();
        let repo = SqliteActorRepository::new();
        repo.insert(&conn, &actor("Zoë Kravitz", 1988, 12, 1)).unwrap();
        repo.insert(&conn, &actor("Émilie Dequenne", 1981, 8, 29)).unwrap();

        let hits = repo.search_by_name(&conn, "ZOË").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Zoë Kravitz");
        assert_eq!(repo.search_by_name(&conn, "émilie").unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_name_and_birth_date_requires_both() {
        let conn = setup();
        let repo = SqliteActorRepository::new();
        repo.insert(&conn, &actor("Jane Doe", 1980, 5, 1)).unwrap();

        assert!(repo
            .find_by_name_and_birth_date(&conn, "Jane Doe", "1980-05-01")
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_name_and_birth_date(&conn, "Jane Doe", "1980-05-02")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_update_overwrites_row() {
        let conn = setup();
        let repo = SqliteActorRepository::new();
        let mut jane = repo.insert(&conn, &actor("Jane Doe", 1980, 5, 1)).unwrap();

        jane.rename("Jane Roe".to_string());
        repo.update(&conn, &jane).unwrap();

        assert_eq!(repo.find_by_id(&conn, jane.id).unwrap().unwrap().name, "Jane Roe");
    }
}
