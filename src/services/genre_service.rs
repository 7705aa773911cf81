// src/services/genre_service.rs
use crate::db::{read_only, read_write, ConnectionPool};
use crate::domain::genre::{validate_genre, Genre};
use crate::dto::{GenreDto, Page};
use crate::error::{AppError, AppResult};
use crate::repositories::{GenreRepository, MovieRepository};
use crate::services::pagination::PageRequest;
use std::sync::Arc;

pub struct GenreService {
    pool: Arc<ConnectionPool>,
    genre_repo: Arc<dyn GenreRepository>,
    movie_repo: Arc<dyn MovieRepository>,
}

impl GenreService {
    pub fn new(
        pool: Arc<ConnectionPool>,
        genre_repo: Arc<dyn GenreRepository>,
        movie_repo: Arc<dyn MovieRepository>,
    ) -> Self {
        Self {
            pool,
            genre_repo,
            movie_repo,
        }
    }

    pub fn list_genres(&self, request: PageRequest) -> AppResult<Page<GenreDto>> {
        request.validate()?;

        read_only(&self.pool, |conn| {
            let content = self
                .genre_repo
                .find_page(conn, request.offset(), request.size)?;
            let total = self.genre_repo.count(conn)?;

            Ok(Page::new(content, request.page, request.size, total).map(GenreDto::from))
        })
    }

    pub fn get_genre(&self, id: i64) -> AppResult<GenreDto> {
        read_only(&self.pool, |conn| {
            self.genre_repo
                .find_by_id(conn, id)?
                .map(GenreDto::from)
                .ok_or_else(|| AppError::not_found_with_id("Genre", id))
        })
    }

    pub fn create_genre(&self, dto: GenreDto) -> AppResult<GenreDto> {
        let name = Self::required_name(&dto)?;
        let genre = Genre::new(name);
        validate_genre(&genre)?;

        let saved = read_write(&self.pool, |conn| self.genre_repo.insert(conn, &genre))?;
        log::info!("Created genre {} ({})", saved.id, saved.name);

        Ok(GenreDto::from(saved))
    }

    pub fn update_genre(&self, id: i64, dto: GenreDto) -> AppResult<GenreDto> {
        let name = Self::required_name(&dto)?;

        read_write(&self.pool, |conn| {
            let mut genre = self
                .genre_repo
                .find_by_id(conn, id)?
                .ok_or_else(|| AppError::not_found_with_id("Genre", id))?;

            genre.rename(name);
            validate_genre(&genre)?;
            self.genre_repo.update(conn, &genre)?;

            Ok(GenreDto::from(genre))
        })
    }

    /// Without `force`, a genre still attached to movies is kept. With it, the
    /// genre is detached from every movie first; all in one transaction.
    pub fn delete_genre(&self, id: i64, force: bool) -> AppResult<()> {
        read_write(&self.pool, |conn| {
            let genre = self
                .genre_repo
                .find_by_id(conn, id)?
                .ok_or_else(|| AppError::not_found_with_id("Genre", id))?;
            let movie_ids = self.genre_repo.movie_ids(conn, id)?;

            if !movie_ids.is_empty() {
                if !force {
                    return Err(AppError::DuplicateResource(format!(
                        "Cannot delete genre '{}' because it is associated with {} movie(s).",
                        genre.name,
                        movie_ids.len()
                    )));
                }

                for movie_id in &movie_ids {
                    if let Some(mut movie) = self.movie_repo.find_by_id(conn, *movie_id)? {
                        movie.remove_genre(id);
                        self.movie_repo.update(conn, &movie)?;
                    }
                }
                log::warn!(
                    "Force-deleting genre {} detached it from {} movie(s)",
                    id,
                    movie_ids.len()
                );
            }

            self.genre_repo.delete(conn, id)
        })
    }

    fn required_name(dto: &GenreDto) -> AppResult<String> {
        match dto.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
            _ => Err(AppError::invalid_input("Genre name cannot be empty or blank.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, get_connection, initialize_database};
    use crate::domain::Movie;
    use crate::repositories::{
        MockGenreRepository, MockMovieRepository, SqliteGenreRepository, SqliteMovieRepository,
    };

    fn setup() -> (GenreService, Arc<ConnectionPool>) {
        let pool = Arc::new(create_memory_pool().unwrap());
        initialize_database(&get_connection(&pool).unwrap()).unwrap();

        let service = GenreService::new(
            pool.clone(),
            Arc::new(SqliteGenreRepository::new()),
            Arc::new(SqliteMovieRepository::new()),
        );
        (service, pool)
    }

    fn named(name: &str) -> GenreDto {
        GenreDto { id: None, name: Some(name.to_string()) }
    }

    fn attach(pool: &ConnectionPool, genre_id: i64, title: &str) -> i64 {
        let conn = get_connection(pool).unwrap();
        let genres = SqliteGenreRepository::new();
        let mut movie = Movie::new(title.to_string(), 2000, 100);
        movie.set_genres(vec![genres.find_by_id(&conn, genre_id).unwrap().unwrap()]);
        SqliteMovieRepository::new().insert(&conn, &movie).unwrap().id
    }

    #[test]
    fn test_create_and_get() {
        let (service, _) = setup();

        let drama = service.create_genre(named("Drama")).unwrap();
        let id = drama.id.unwrap();

        assert_eq!(service.get_genre(id).unwrap(), drama);
        assert_eq!(
            service.get_genre(id + 1).unwrap_err().to_string(),
            format!("Genre not found with id: {}", id + 1)
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let (service, _) = setup();

        let err = service.create_genre(named("   ")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Genre name cannot be empty or blank.");

        let id = service.create_genre(named("Drama")).unwrap().id.unwrap();
        assert!(matches!(
            service.update_genre(id, GenreDto::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_list_pages() {
        let (service, _) = setup();
        for name in ["A", "B", "C"] {
            service.create_genre(named(name)).unwrap();
        }

        let page = service.list_genres(PageRequest::new(1, 2)).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_delete_refused_while_attached() {
        let (service, pool) = setup();
        let id = service.create_genre(named("Drama")).unwrap().id.unwrap();
        attach(&pool, id, "Nova");

        let err = service.delete_genre(id, false).unwrap_err();
        assert!(matches!(err, AppError::DuplicateResource(_)));
        assert_eq!(
            err.to_string(),
            "Cannot delete genre 'Drama' because it is associated with 1 movie(s)."
        );
        assert!(service.get_genre(id).is_ok());
    }

    #[test]
    fn test_force_delete_detaches_movies() {
        let (service, pool) = setup();
        let id = service.create_genre(named("Drama")).unwrap().id.unwrap();
        let movie_id = attach(&pool, id, "Nova");

        service.delete_genre(id, true).unwrap();

        let conn = get_connection(&pool).unwrap();
        let movie = SqliteMovieRepository::new().find_by_id(&conn, movie_id).unwrap().unwrap();
        assert!(movie.genres.is_empty());
        drop(conn);
        assert!(matches!(service.get_genre(id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_delete_unattached_genre_ignores_force() {
        let (service, _) = setup();

        let id = service.create_genre(named("Drama")).unwrap().id.unwrap();
        service.delete_genre(id, false).unwrap();
        assert!(matches!(service.get_genre(id), Err(AppError::NotFound(_))));

        let id = service.create_genre(named("Comedy")).unwrap().id.unwrap();
        service.delete_genre(id, true).unwrap();
        assert!(matches!(service.get_genre(id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_bad_page_never_reaches_the_store() {
        let pool = Arc::new(create_memory_pool().unwrap());
        let mut genres = MockGenreRepository::new();
        genres.expect_find_page().never();
        genres.expect_count().never();

        let service = GenreService::new(pool, Arc::new(genres), Arc::new(MockMovieRepository::new()));

        assert!(matches!(
            service.list_genres(PageRequest::new(0, 0)),
            Err(AppError::Validation(_))
        ));
    }
}
