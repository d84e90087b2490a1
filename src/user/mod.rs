pub mod graphql;
pub mod model;
