use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    response::{self, IntoResponse},
    routing::get,
    Router,
};
use graphql::AppSchema;
use sqlx::{Pool, Sqlite};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod id;
pub mod member_type;
pub mod post;
pub mod profile;
pub mod relations;
pub mod user;

pub type DB = Pool<Sqlite>;

async fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint("/").finish())
}

// Graphql entry: POST runs documents, GET serves the playground.
pub fn app(schema: AppSchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post_service(GraphQL::new(schema)))
        .layer(CorsLayer::permissive())
}
