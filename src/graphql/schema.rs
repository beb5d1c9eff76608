//! GraphQL schema types.
//!
//! These types are returned by queries and define the shape of responses.
//! Relationship fields (`Movie.director`, `Director.movies`) resolve lazily:
//! the store is only consulted when a client actually selects them.

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use std::sync::Arc;

use crate::store::{DirectorRecord, Filter, MovieRecord, Store};

/// A movie, possibly referencing a director.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Movie {
    /// Store-assigned identifier
    pub id: ID,
    /// Title
    pub name: String,
    /// Genre label
    pub genre: String,
    /// Release year (text)
    pub year: String,
    /// Soft reference to the director; may dangle
    #[graphql(skip)]
    pub director_id: Option<String>,
}

#[ComplexObject]
impl Movie {
    /// The movie's director. Null when the movie has no director id, or when
    /// the id no longer matches any director (the reference is unenforced).
    async fn director(&self, ctx: &Context<'_>) -> Result<Option<Director>> {
        let store = ctx.data::<Arc<Store>>()?;
        let Some(director_id) = self.director_id.as_deref() else {
            return Ok(None);
        };
        Ok(store
            .directors
            .find_by_id(director_id)?
            .map(Director::from))
    }
}

/// A director and, on demand, their filmography.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Director {
    /// Store-assigned identifier
    pub id: ID,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: i32,
}

#[ComplexObject]
impl Director {
    /// All movies referencing this director. Empty list when none do.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let store = ctx.data::<Arc<Store>>()?;
        let filter = Filter::new().eq("directorId", self.id.as_str());
        Ok(store
            .movies
            .find(&filter)?
            .into_iter()
            .map(Movie::from)
            .collect())
    }
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: ID(record.id),
            name: record.name,
            genre: record.genre,
            year: record.year,
            director_id: record.director_id,
        }
    }
}

impl From<DirectorRecord> for Director {
    fn from(record: DirectorRecord) -> Self {
        Self {
            id: ID(record.id),
            name: record.name,
            age: record.age,
        }
    }
}
