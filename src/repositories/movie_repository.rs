// src/repositories/movie_repository.rs
//
// Movie persistence, including both join tables.
//
// A Movie is always read with its actors and genres resolved, in association
// (join row insertion) order. Writing a Movie rewrites its join rows, so the
// association lists on the entity are the source of truth.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::actor::Actor;
use crate::domain::genre::Genre;
use crate::domain::movie::Movie;
use crate::error::{AppError, AppResult};
use crate::repositories::actor_repository::SqliteActorRepository;
use crate::repositories::genre_repository::SqliteGenreRepository;

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// Insert the row and its associations; returns the movie with its new id
    fn insert(&self, conn: &Connection, movie: &Movie) -> AppResult<Movie>;
    /// Overwrite the row and replace both association lists
    fn update(&self, conn: &Connection, movie: &Movie) -> AppResult<()>;
    fn find_by_id(&self, conn: &Connection, id: i64) -> AppResult<Option<Movie>>;
    fn find_page(&self, conn: &Connection, offset: i64, limit: i64) -> AppResult<Vec<Movie>>;
    fn count(&self, conn: &Connection) -> AppResult<i64>;
    fn find_by_release_year(&self, conn: &Connection, year: i32) -> AppResult<Vec<Movie>>;
    /// Case-insensitive substring match on the title
    fn search_by_title(&self, conn: &Connection, title: &str) -> AppResult<Vec<Movie>>;
    fn find_by_actor(&self, conn: &Connection, actor_id: i64) -> AppResult<Vec<Movie>>;
    fn find_by_genre(&self, conn: &Connection, genre_id: i64) -> AppResult<Vec<Movie>>;
    /// Delete the row. Join rows must already be gone.
    fn delete(&self, conn: &Connection, id: i64) -> AppResult<()>;
}

#[derive(Debug, Default)]
pub struct SqliteMovieRepository;

const MOVIE_COLUMNS: &str = "m.id, m.title, m.release_year, m.duration";

impl SqliteMovieRepository {
    pub fn new() -> Self {
        Self
    }

    /// Map the movie row only; associations are filled in by `load_associations`
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        Ok(Movie {
            id: row.get("id")?,
            title: row.get("title")?,
            release_year: row.get("release_year")?,
            duration: row.get("duration")?,
            genres: Vec::new(),
            actors: Vec::new(),
        })
    }

    fn load_associations(conn: &Connection, movie: &mut Movie) -> AppResult<()> {
        let mut actor_stmt = conn.prepare_cached(
            "SELECT a.id, a.name, a.birth_date
             FROM movie_actor ma
             JOIN actors a ON a.id = ma.actor_id
             WHERE ma.movie_id = ?1
             ORDER BY ma.rowid"
        )?;
        movie.actors = actor_stmt
            .query_map(params![movie.id], SqliteActorRepository::row_to_actor)?
            .collect::<Result<Vec<Actor>, _>>()?;

        let mut genre_stmt = conn.prepare_cached(
            "SELECT g.id, g.name
             FROM movie_genre mg
             JOIN genres g ON g.id = mg.genre_id
             WHERE mg.movie_id = ?1
             ORDER BY mg.rowid"
        )?;
        movie.genres = genre_stmt
            .query_map(params![movie.id], SqliteGenreRepository::row_to_genre)?
            .collect::<Result<Vec<Genre>, _>>()?;

        Ok(())
    }

    fn write_associations(conn: &Connection, movie: &Movie) -> AppResult<()> {
        conn.execute("DELETE FROM movie_actor WHERE movie_id = ?1", params![movie.id])?;
        conn.execute("DELETE FROM movie_genre WHERE movie_id = ?1", params![movie.id])?;

        let mut actor_stmt = conn.prepare_cached(
            "INSERT OR IGNORE INTO movie_actor (movie_id, actor_id) VALUES (?1, ?2)"
        )?;
        for actor in &movie.actors {
            actor_stmt.execute(params![movie.id, actor.id])?;
        }

        let mut genre_stmt = conn.prepare_cached(
            "INSERT OR IGNORE INTO movie_genre (movie_id, genre_id) VALUES (?1, ?2)"
        )?;
        for genre in &movie.genres {
            genre_stmt.execute(params![movie.id, genre.id])?;
        }

        Ok(())
    }

    /// Run a movie query and resolve associations for every row
    fn query_movies<P: rusqlite::Params>(
        conn: &Connection,
        sql: &str,
        params: P,
    ) -> AppResult<Vec<Movie>> {
        let mut stmt = conn.prepare(sql)?;
        let mut movies: Vec<Movie> = stmt.query_map(params, Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        for movie in movies.iter_mut() {
            Self::load_associations(conn, movie)?;
        }
        Ok(movies)
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn insert(&self, conn: &Connection, movie: &Movie) -> AppResult<Movie> {
        conn.execute(
            "INSERT INTO movies (title, release_year, duration) VALUES (?1, ?2, ?3)",
            params![movie.title, movie.release_year, movie.duration],
        )?;

        let saved = Movie {
            id: conn.last_insert_rowid(),
            ..movie.clone()
        };
        Self::write_associations(conn, &saved)?;

        log::debug!("Inserted movie {} with id {}", saved, saved.id);
        Ok(saved)
    }

    fn update(&self, conn: &Connection, movie: &Movie) -> AppResult<()> {
        let rows_affected = conn.execute(
            "UPDATE movies SET title = ?1, release_year = ?2, duration = ?3 WHERE id = ?4",
            params![movie.title, movie.release_year, movie.duration, movie.id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Movie"));
        }

        Self::write_associations(conn, movie)
    }

    fn find_by_id(&self, conn: &Connection, id: i64) -> AppResult<Option<Movie>> {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM movies m WHERE m.id = ?1",
            MOVIE_COLUMNS
        ))?;

        let movie = stmt.query_row(params![id], Self::row_to_movie).optional()?;
        match movie {
            Some(mut movie) => {
                Self::load_associations(conn, &mut movie)?;
                Ok(Some(movie))
            }
            None => Ok(None),
        }
    }

    fn find_page(&self, conn: &Connection, offset: i64, limit: i64) -> AppResult<Vec<Movie>> {
        Self::query_movies(
            conn,
            &format!("SELECT {} FROM movies m ORDER BY m.id LIMIT ?1 OFFSET ?2", MOVIE_COLUMNS),
            params![limit, offset],
        )
    }

    fn count(&self, conn: &Connection) -> AppResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?)
    }

    fn find_by_release_year(&self, conn: &Connection, year: i32) -> AppResult<Vec<Movie>> {
        Self::query_movies(
            conn,
            &format!("SELECT {} FROM movies m WHERE m.release_year = ?1 ORDER BY m.id", MOVIE_COLUMNS),
            params![year],
        )
    }

    fn search_by_title(&self, conn: &Connection, title: &str) -> AppResult<Vec<Movie>> {
        // instr() rather than LIKE so '%' and '_' in the input match literally
        Self::query_movies(
            conn,
            &format!(
                "SELECT {} FROM movies m WHERE instr(unicode_lower(m.title), unicode_lower(?1)) > 0 ORDER BY m.id",
                MOVIE_COLUMNS
            ),
            params![title],
        )
    }

    fn find_by_actor(&self, conn: &Connection, actor_id: i64) -> AppResult<Vec<Movie>> {
        Self::query_movies(
            conn,
            &format!(
                "SELECT {} FROM movie_actor ma
                 JOIN movies m ON m.id = ma.movie_id
                 WHERE ma.actor_id = ?1
                 ORDER BY ma.rowid",
                MOVIE_COLUMNS
            ),
            params![actor_id],
        )
    }

    fn find_by_genre(&self, conn: &Connection, genre_id: i64) -> AppResult<Vec<Movie>> {
        Self::query_movies(
            conn,
            &format!(
                "SELECT {} FROM movie_genre mg
                 JOIN movies m ON m.id = mg.movie_id
                 WHERE mg.genre_id = ?1
                 ORDER BY mg.rowid",
                MOVIE_COLUMNS
            ),
            params![genre_id],
        )
    }

    fn delete(&self, conn: &Connection, id: i64) -> AppResult<()> {
        let rows_affected = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Movie"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize_database, register_functions};
    use crate::repositories::{ActorRepository, GenreRepository};
    use chrono::NaiveDate;

    struct Fixture {
        conn: Connection,
        movies: SqliteMovieRepository,
        jane: Actor,
        john: Actor,
        drama: Genre,
        scifi: Genre,
    }

    fn setup() -> Fixture {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        register_functions(&conn).unwrap();
        initialize_database(&conn).unwrap();

        let actors = SqliteActorRepository::new();
        let genres = SqliteGenreRepository::new();
        let date = NaiveDate::from_ymd_opt(1980, 5, 1).unwrap();
        let jane = actors.insert(&conn, &Actor::new("Jane Doe".to_string(), date)).unwrap();
        let john = actors.insert(&conn, &Actor::new("John Smith".to_string(), date)).unwrap();
        let drama = genres.insert(&conn, &Genre::new("Drama".to_string())).unwrap();
        let scifi = genres.insert(&conn, &Genre::new("Sci-Fi".to_string())).unwrap();

        Fixture { conn, movies: SqliteMovieRepository::new(), jane, john, drama, scifi }
    }

    fn movie(title: &str, year: i32, duration: i32) -> Movie {
        Movie::new(title.to_string(), year, duration)
    }

    #[test]
    fn test_insert_persists_associations_in_order() {
        let f = setup();
        let mut nova = movie("Nova", 1999, 90);
        nova.set_actors(vec![f.john.clone(), f.jane.clone()]);
        nova.set_genres(vec![f.scifi.clone()]);

        let saved = f.movies.insert(&f.conn, &nova).unwrap();
        let loaded = f.movies.find_by_id(&f.conn, saved.id).unwrap().unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.actor_ids(), vec![f.john.id, f.jane.id]);
        assert_eq!(loaded.genre_ids(), vec![f.scifi.id]);
    }

    #[test]
    fn test_update_replaces_association_lists() {
        let f = setup();
        let mut nova = movie("Nova", 1999, 90);
        nova.set_actors(vec![f.jane.clone()]);
        nova.set_genres(vec![f.drama.clone(), f.scifi.clone()]);
        let mut saved = f.movies.insert(&f.conn, &nova).unwrap();

        saved.set_actors(vec![f.john.clone()]);
        saved.remove_genre(f.drama.id);
        f.movies.update(&f.conn, &saved).unwrap();

        let loaded = f.movies.find_by_id(&f.conn, saved.id).unwrap().unwrap();
        assert_eq!(loaded.actor_ids(), vec![f.john.id]);
        assert_eq!(loaded.genre_ids(), vec![f.scifi.id]);
    }

    #[test]
    fn test_search_by_title_is_case_insensitive_substring() {
        let f = setup();
        f.movies.insert(&f.conn, &movie("Supernova", 1999, 90)).unwrap();
        f.movies.insert(&f.conn, &movie("Nova", 2001, 95)).unwrap();
        f.movies.insert(&f.conn, &movie("Alien", 1979, 117)).unwrap();

        let titles: Vec<String> = f.movies
            .search_by_title(&f.conn, "NOVA")
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Supernova", "Nova"]);
    }

    #[test]
    fn test_search_by_title_folds_non_ascii_case() {
        let f = setup();
        f.movies.insert(&f.conn, &movie("Le Fabuleux Destin d'Amélie Poulain", 2001, 122)).unwrap();
        f.movies.insert(&f.conn, &movie("Amelie", 2001, 122)).unwrap();

        let hits = f.movies.search_by_title(&f.conn, "AMÉLIE").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Le Fabuleux Destin d'Amélie Poulain");
    }

    #[test]
    fn test_find_by_actor_and_genre() {
        let f = setup();
        let mut first = movie("First", 1999, 90);
        first.set_actors(vec![f.jane.clone()]);
        first.set_genres(vec![f.drama.clone()]);
        let first = f.movies.insert(&f.conn, &first).unwrap();

        let mut second = movie("Second", 2000, 90);
        second.set_actors(vec![f.jane.clone(), f.john.clone()]);
        let second = f.movies.insert(&f.conn, &second).unwrap();

        let by_jane: Vec<i64> = f.movies.find_by_actor(&f.conn, f.jane.id).unwrap()
            .iter().map(|m| m.id).collect();
        assert_eq!(by_jane, vec![first.id, second.id]);

        let by_drama = f.movies.find_by_genre(&f.conn, f.drama.id).unwrap();
        assert_eq!(by_drama.len(), 1);
        assert_eq!(by_drama[0].title, "First");
        assert!(f.movies.find_by_genre(&f.conn, f.scifi.id).unwrap().is_empty());
    }

    #[test]
    fn test_page_count_and_year() {
        let f = setup();
        for (i, year) in [1999, 2000, 1999].iter().enumerate() {
            f.movies.insert(&f.conn, &movie(&format!("M{}", i), *year, 90)).unwrap();
        }

        assert_eq!(f.movies.count(&f.conn).unwrap(), 3);
        assert_eq!(f.movies.find_page(&f.conn, 1, 10).unwrap().len(), 2);
        assert_eq!(f.movies.find_by_release_year(&f.conn, 1999).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_with_live_join_rows_is_refused() {
        let f = setup();
        let mut nova = movie("Nova", 1999, 90);
        nova.set_genres(vec![f.drama.clone()]);
        let mut saved = f.movies.insert(&f.conn, &nova).unwrap();

        assert!(f.movies.delete(&f.conn, saved.id).is_err());

        saved.set_genres(Vec::new());
        f.movies.update(&f.conn, &saved).unwrap();
        f.movies.delete(&f.conn, saved.id).unwrap();
        assert!(f.movies.find_by_id(&f.conn, saved.id).unwrap().is_none());
    }
}
