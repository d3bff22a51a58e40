use std::collections::BTreeMap;

use error_stack::Report;
use tracing::{info, warn};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::repository::{DependOnMovieRepository, Repository};
use kernel::prelude::entity::{Movie, MovieId, MovieName, MoviePrice, MovieStock, RentedCopies};
use kernel::KernelError;

use crate::transfer::{
    CreateMovieDto, DeleteMovieDto, GetMovieDto, MovieDto, UpdateInventoryDto,
};

/// Movies with at least one copy on the shelf, keyed by id.
#[async_trait::async_trait]
pub trait ListAvailableMoviesService: 'static + Sync + Send + DependOnMovieRepository {
    async fn list_available_movies(
        &self,
    ) -> error_stack::Result<BTreeMap<i64, MovieDto>, KernelError> {
        async move {
            let mut connection = self.database_connection().transact().await?;

            let movies = self
                .movie_repository()
                .all(&mut connection, Some(&|movie: &Movie| movie.is_available()))
                .await?;

            movies
                .into_values()
                .map(|movie| MovieDto::try_from(movie).map(|dto| (dto.id, dto)))
                .collect::<error_stack::Result<BTreeMap<_, _>, KernelError>>()
        }
        .await
        .inspect_err(|report| warn!("Listing available movies failed: {report:?}"))
    }
}

impl<T> ListAvailableMoviesService for T where T: DependOnMovieRepository {}

#[async_trait::async_trait]
pub trait GetMovieService: 'static + Sync + Send + DependOnMovieRepository {
    async fn get_movie(&self, dto: GetMovieDto) -> error_stack::Result<Option<MovieDto>, KernelError> {
        let id = MovieId::new(dto.id);
        async move {
            let mut connection = self.database_connection().transact().await?;
            let movie = self.movie_repository().get(&mut connection, &id).await?;
            movie.map(MovieDto::try_from).transpose()
        }
        .await
        .inspect_err(|report| warn!("Lookup of movie {} failed: {report:?}", id.as_ref()))
    }
}

impl<T> GetMovieService for T where T: DependOnMovieRepository {}

#[async_trait::async_trait]
pub trait AddMovieService: 'static + Sync + Send + DependOnMovieRepository {
    async fn add_movie(&self, dto: CreateMovieDto) -> error_stack::Result<i64, KernelError> {
        let name = dto.name.clone();
        let id = async move {
            let mut connection = self.database_connection().transact().await?;

            let movie = Movie::new(
                dto.id.map(MovieId::new),
                MovieName::new(dto.name),
                MovieStock::new(dto.stock),
                RentedCopies::default(),
                MoviePrice::new(dto.price_per_day)?,
            )?;
            let id = self.movie_repository().add(&mut connection, movie).await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(id)
        }
        .await
        .inspect_err(|report| warn!("Movie {name} was not added: {report:?}"))?;

        info!("Added movie {}", id.as_ref());
        Ok(id.into())
    }
}

impl<T> AddMovieService for T where T: DependOnMovieRepository {}

/// Copies still out with customers keep a movie in the catalog until they are returned.
#[async_trait::async_trait]
pub trait RemoveMovieService: 'static + Sync + Send + DependOnMovieRepository {
    async fn remove_movie(&self, dto: DeleteMovieDto) -> error_stack::Result<(), KernelError> {
        let id = MovieId::new(dto.id);
        async move {
            let mut connection = self.database_connection().transact().await?;

            let movie = find_movie(self, &mut connection, &id).await?;
            if movie.is_rented() {
                return Err(Report::new(KernelError::Operation).attach_printable(format!(
                    "Movie {} still has {} copies rented",
                    id.as_ref(),
                    movie.rented().as_ref()
                )));
            }
            self.movie_repository()
                .remove(&mut connection, &movie)
                .await?;
            connection.commit().await
        }
        .await
        .inspect_err(|report| warn!("Movie {} was not removed: {report:?}", id.as_ref()))?;

        info!("Removed movie {}", id.as_ref());
        Ok(())
    }
}

impl<T> RemoveMovieService for T where T: DependOnMovieRepository {}

#[async_trait::async_trait]
pub trait UpdateInventoryService: 'static + Sync + Send + DependOnMovieRepository {
    async fn add_to_inventory(
        &self,
        dto: UpdateInventoryDto,
    ) -> error_stack::Result<MovieDto, KernelError> {
        let id = MovieId::new(dto.id);
        async move {
            let mut connection = self.database_connection().transact().await?;

            let mut movie = find_movie(self, &mut connection, &id).await?;
            movie.add_to_inventory(dto.copies);
            self.movie_repository()
                .add(&mut connection, movie.clone())
                .await?;
            connection.commit().await?;

            MovieDto::try_from(movie)
        }
        .await
        .inspect_err(|report| warn!("Restocking movie {} failed: {report:?}", id.as_ref()))
    }

    async fn remove_from_inventory(
        &self,
        dto: UpdateInventoryDto,
    ) -> error_stack::Result<MovieDto, KernelError> {
        let id = MovieId::new(dto.id);
        async move {
            let mut connection = self.database_connection().transact().await?;

            let mut movie = find_movie(self, &mut connection, &id).await?;
            movie.remove_from_inventory(dto.copies);
            self.movie_repository()
                .add(&mut connection, movie.clone())
                .await?;
            connection.commit().await?;

            MovieDto::try_from(movie)
        }
        .await
        .inspect_err(|report| warn!("Reducing stock of movie {} failed: {report:?}", id.as_ref()))
    }
}

impl<T> UpdateInventoryService for T where T: DependOnMovieRepository {}

pub(crate) async fn find_movie<T: DependOnMovieRepository + ?Sized>(
    module: &T,
    connection: &mut <T::DatabaseConnection as DatabaseConnection>::Transaction,
    id: &MovieId,
) -> error_stack::Result<Movie, KernelError> {
    module
        .movie_repository()
        .get(connection, id)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("Movie {} not found", id.as_ref()))
        })
}
