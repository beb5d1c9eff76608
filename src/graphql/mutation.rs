//! GraphQL Mutation resolvers.
//!
//! Each mutation is one non-transactional write against a single collection.
//! `addMovie`/`updateMovie` never verify that `directorId` exists — the
//! reference is soft and allowed to dangle. Update/delete of an unknown id
//! is a no-op that returns null rather than an error.

use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;
use tracing::debug;

use super::schema::{Director, Movie};
use crate::store::{DirectorRecord, MovieRecord, Store};

/// Root mutation type
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a director. Returns the record with its assigned id.
    async fn add_director(&self, ctx: &Context<'_>, name: String, age: i32) -> Result<Director> {
        let store = ctx.data::<Arc<Store>>()?;
        let record = store
            .directors
            .insert(|id| DirectorRecord { id, name, age })?;
        debug!(id = %record.id, "director created");
        Ok(Director::from(record))
    }

    /// Create a movie. `directorId` is optional and not checked against the
    /// directors collection. Returns the record with its assigned id.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        year: String,
        director_id: Option<ID>,
    ) -> Result<Movie> {
        let store = ctx.data::<Arc<Store>>()?;
        let record = store.movies.insert(|id| MovieRecord {
            id,
            name,
            genre,
            year,
            director_id: director_id.map(|d| d.0),
        })?;
        debug!(id = %record.id, "movie created");
        Ok(Movie::from(record))
    }

    /// Delete a director by id. Returns the record as it existed before
    /// deletion, or null when the id matched nothing. Movies referencing the
    /// director are left untouched (their references dangle).
    async fn delete_director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let store = ctx.data::<Arc<Store>>()?;
        let deleted = store.directors.find_by_id_and_delete(id.as_str())?;
        if deleted.is_some() {
            debug!(id = %id.as_str(), "director deleted");
        }
        Ok(deleted.map(Director::from))
    }

    /// Delete a movie by id. Returns the record as it existed before
    /// deletion, or null when the id matched nothing.
    async fn delete_movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let store = ctx.data::<Arc<Store>>()?;
        let deleted = store.movies.find_by_id_and_delete(id.as_str())?;
        if deleted.is_some() {
            debug!(id = %id.as_str(), "movie deleted");
        }
        Ok(deleted.map(Movie::from))
    }

    /// Replace a director's name and age. Returns the updated record, or
    /// null when the id matched nothing (no record is created).
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        age: i32,
    ) -> Result<Option<Director>> {
        let store = ctx.data::<Arc<Store>>()?;
        let updated = store.directors.find_by_id_and_update(id.as_str(), |d| {
            d.name = name;
            d.age = age;
        })?;
        Ok(updated.map(Director::from))
    }

    /// Replace a movie's name, genre, year, and director reference. Returns
    /// the updated record, or null when the id matched nothing.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        genre: String,
        year: String,
        director_id: ID,
    ) -> Result<Option<Movie>> {
        let store = ctx.data::<Arc<Store>>()?;
        let updated = store.movies.find_by_id_and_update(id.as_str(), |m| {
            m.name = name;
            m.genre = genre;
            m.year = year;
            m.director_id = Some(director_id.0);
        })?;
        Ok(updated.map(Movie::from))
    }
}
