//! GraphQL API for Cinegraph.
//!
//! Two related object types over the document store, with lazy relationship
//! resolution in both directions.
//!
//! ## Example
//!
//! ```graphql
//! # Point lookup with the relationship selected
//! { movie(id: "abc") { name director { name } } }
//!
//! # List with the reverse relationship
//! { directors { name movies { name year } } }
//!
//! # Writes
//! mutation { addDirector(name: "Nolan", age: 50) { id } }
//! ```

pub mod mutation;
pub mod query;
pub mod schema;

use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use crate::store::Store;
use mutation::Mutation;
use query::Query;

/// The Cinegraph GraphQL schema type
pub type CinegraphSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the GraphQL schema with the store as context
pub fn build_schema(store: Arc<Store>) -> CinegraphSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .limit_depth(8) // Movie -> director -> movies can recurse
        .limit_complexity(200)
        .finish()
}

/// Execute a GraphQL document and return the JSON result
pub async fn execute(schema: &CinegraphSchema, document: &str) -> String {
    let result = schema.execute(document).await;
    serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
}
