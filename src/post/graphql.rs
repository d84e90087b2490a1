use async_graphql::{Context, FieldResult, Object};

use crate::{
    error::{IntoFlag, OrNull},
    id::Id,
    DB,
};

use super::model::{ChangePostInput, CreatePostInput, Post};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> FieldResult<Vec<Post>> {
        let pool = ctx.data::<DB>()?;
        let posts = Post::read_all(pool).await?;
        Ok(posts)
    }

    async fn post(&self, ctx: &Context<'_>, id: Id) -> FieldResult<Option<Post>> {
        let pool = ctx.data::<DB>()?;
        Ok(Post::read_one(pool, &id).await.or_null(ctx).flatten())
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        dto: CreatePostInput,
    ) -> FieldResult<Option<Post>> {
        let pool = ctx.data::<DB>()?;
        Ok(Post::create(pool, dto).await.or_null(ctx))
    }

    async fn change_post(
        &self,
        ctx: &Context<'_>,
        id: Id,
        dto: ChangePostInput,
    ) -> FieldResult<Option<Post>> {
        let pool = ctx.data::<DB>()?;
        Ok(Post::update(pool, &id, dto).await.or_null(ctx))
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: Id) -> FieldResult<bool> {
        let pool = ctx.data::<DB>()?;
        Ok(Post::delete(pool, &id).await.into_flag("deletePost"))
    }
}
