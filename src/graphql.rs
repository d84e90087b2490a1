use crate::{
    config::SchemaLimits,
    member_type::graphql::MemberTypeQuery,
    post::graphql::{PostMutation, PostQuery},
    profile::graphql::{ProfileMutation, ProfileQuery},
    relations::graphql::RelationsMutation,
    user::graphql::{UserMutation, UserQuery},
    DB,
};

use async_graphql::{EmptySubscription, MergedObject, Schema, SchemaBuilder};

#[derive(MergedObject, Default)]
#[graphql(name = "RootQueryType")]
pub struct Query(MemberTypeQuery, UserQuery, ProfileQuery, PostQuery);

#[derive(MergedObject, Default)]
#[graphql(name = "Mutations")]
pub struct Mutation(UserMutation, ProfileMutation, PostMutation, RelationsMutation);

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Schema without a database attached; enough to print the SDL.
pub fn schema_builder(limits: &SchemaLimits) -> SchemaBuilder<Query, Mutation, EmptySubscription> {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .limit_depth(limits.max_depth)
        .limit_complexity(limits.max_complexity)
}

pub fn get_schema(db: DB, limits: &SchemaLimits) -> AppSchema {
    schema_builder(limits).data(db).finish()
}
