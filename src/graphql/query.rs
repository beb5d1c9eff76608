//! GraphQL Query resolvers.
//!
//! Read operations over the movie and director collections. Every lookup
//! miss is a null result, not an error.

use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;

use super::schema::{Director, Movie};
use crate::store::{Filter, Store};

/// Root query type
pub struct Query;

#[Object]
impl Query {
    /// Fetch one movie by id. Null when no movie has that id.
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.movies.find_by_id(id.as_str())?.map(Movie::from))
    }

    /// Fetch one director by id. Null when no director has that id.
    async fn director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.directors.find_by_id(id.as_str())?.map(Director::from))
    }

    /// List all movies, in store-native order.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store
            .movies
            .find(&Filter::new())?
            .into_iter()
            .map(Movie::from)
            .collect())
    }

    /// List all directors, in store-native order.
    async fn directors(&self, ctx: &Context<'_>) -> Result<Vec<Director>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store
            .directors
            .find(&Filter::new())?
            .into_iter()
            .map(Director::from)
            .collect())
    }
}
