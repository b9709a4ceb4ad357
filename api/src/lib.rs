#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
pub mod db;
#[allow(clippy::pedantic)]
pub mod entities;
pub mod error;
pub mod handlers;
pub mod invocation;
pub mod mutations;
pub mod objects;
pub mod queries;
pub mod resolver;
pub mod store;

use async_graphql::{
    extensions::{ApolloTracing, Logger},
    EmptySubscription, Schema,
};
use handlers::{graphql_handler, health, invoke, playground};
use hub_core::clap;
use mutations::Mutation;
use poem::{get, middleware::AddData, post, Endpoint, EndpointExt, Route};
use queries::Query;
use resolver::CustomerResolver;

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

#[derive(Debug, clap::Args)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 3009)]
    pub port: u16,

    #[command(flatten)]
    pub db: db::DbArgs,
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub resolver: CustomerResolver,
}

impl AppState {
    #[must_use]
    pub fn new(resolver: CustomerResolver) -> Self {
        Self {
            schema: build_schema(resolver.clone()),
            resolver,
        }
    }
}

/// Builds the GraphQL Schema, attaching the resolver to the context
#[must_use]
pub fn build_schema(resolver: CustomerResolver) -> AppSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(ApolloTracing)
        .extension(Logger)
        .data(resolver)
        .finish()
}

/// Mounts the invocation, GraphQL and health endpoints.
#[must_use]
pub fn routes(state: AppState) -> impl Endpoint {
    Route::new()
        .at("/invoke", post(invoke))
        .at("/graphql", post(graphql_handler).get(playground))
        .at("/health", get(health))
        .with(AddData::new(state))
}
