//! The two search variants over the catalog store.
//!
//! `fast_search` issues the three ordered streams up front and merges
//! them in one pass; `browse` is the dependent-join variant that loops
//! per movie. Both return the same listing shape, availability included.

use serde::Serialize;
use vidstore_core::availability::{classify, Availability};
use vidstore_core::merge_join::{display_name, group_by_movie, names_for};
use vidstore_core::types::DbId;
use vidstore_db::models::movie::{Movie, PersonName};
use vidstore_db::repositories::{MovieRepo, RentalRepo, SearchRepo};

use crate::{EngineError, RentalEngine};

/// One movie in a search result, with its people and availability.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListing {
    pub movie_id: DbId,
    pub title: String,
    pub year: Option<i64>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub availability: Availability,
}

impl RentalEngine {
    /// Sort-merge search: three up-front catalog queries ordered by movie
    /// id, merged without asking the store to pre-join.
    ///
    /// Movies with zero directors or actors keep their place in the
    /// listing with empty lists. Output is ascending by movie id.
    pub async fn fast_search(
        &self,
        viewer: DbId,
        title: &str,
    ) -> Result<Vec<MovieListing>, EngineError> {
        let movies = SearchRepo::matching_movies(&self.catalog, title).await?;
        let director_rows = SearchRepo::directors_by_title(&self.catalog, title).await?;
        let actor_rows = SearchRepo::actors_by_title(&self.catalog, title).await?;

        let directors = group_by_movie(director_rows.into_iter().map(Into::into).collect());
        let actors = group_by_movie(actor_rows.into_iter().map(Into::into).collect());

        let mut listings = Vec::with_capacity(movies.len());
        for movie in movies {
            let holder = RentalRepo::current_renter(&self.customers, movie.id).await?;
            listings.push(MovieListing {
                movie_id: movie.id,
                title: movie.title,
                year: movie.year,
                directors: names_for(&directors, movie.id),
                actors: names_for(&actors, movie.id),
                availability: classify(holder, viewer),
            });
        }

        tracing::debug!(title, results = listings.len(), "fast search finished");
        Ok(listings)
    }

    /// Dependent-join search: per matching movie, nested lookups for its
    /// directors, actors and availability.
    pub async fn browse(
        &self,
        viewer: DbId,
        title: &str,
    ) -> Result<Vec<MovieListing>, EngineError> {
        let movies = MovieRepo::search_by_title(&self.catalog, title).await?;

        let mut listings = Vec::with_capacity(movies.len());
        for movie in movies {
            let directors = MovieRepo::directors_of(&self.catalog, movie.id).await?;
            let actors = MovieRepo::actors_of(&self.catalog, movie.id).await?;
            let holder = RentalRepo::current_renter(&self.customers, movie.id).await?;
            listings.push(listing(movie, directors, actors, classify(holder, viewer)));
        }

        tracing::debug!(title, results = listings.len(), "browse finished");
        Ok(listings)
    }
}

fn listing(
    movie: Movie,
    directors: Vec<PersonName>,
    actors: Vec<PersonName>,
    availability: Availability,
) -> MovieListing {
    MovieListing {
        movie_id: movie.id,
        title: movie.title,
        year: movie.year,
        directors: display_names(directors),
        actors: display_names(actors),
        availability,
    }
}

fn display_names(people: Vec<PersonName>) -> Vec<String> {
    people
        .into_iter()
        .filter_map(|p| display_name(p.first_name.as_deref(), p.last_name.as_deref()))
        .collect()
}
