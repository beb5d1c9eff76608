//! # Cinegraph
//!
//! A small GraphQL API over two related collections: movies and directors.
//!
//! ## Key Features
//!
//! - **Lazy relationships**: `Movie.director` and `Director.movies` hit the
//!   store only when a client selects them
//! - **Soft references**: a movie's `directorId` is never enforced; dangling
//!   references resolve to null instead of erroring
//! - **Embedded store**: in-process collections with optional JSON snapshot
//!   persistence (atomic writes)
//! - **Single route**: POST /graphql executes documents, GET /graphql serves
//!   the playground
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cinegraph::{build_schema, execute, Store};
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let store = Arc::new(Store::in_memory());
//! let schema = build_schema(store);
//!
//! let result = execute(&schema, "{ movies { name genre } }").await;
//! println!("{result}");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod server;
pub mod store;

// Re-exports for convenience
pub use error::{CinegraphError, Result};

pub use config::Config;
pub use graphql::{build_schema, execute, CinegraphSchema};
pub use store::{Collection, DirectorRecord, Document, Filter, MovieRecord, Store};
