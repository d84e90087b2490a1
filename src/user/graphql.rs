use async_graphql::{Context, FieldResult, Object};

use crate::{
    error::{IntoFlag, OrNull},
    id::Id,
    DB,
};

use super::model::{ChangeUserInput, CreateUserInput, User};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> FieldResult<Vec<User>> {
        let pool = ctx.data::<DB>()?;
        let users = User::read_all(pool).await?;
        Ok(users)
    }

    async fn user(&self, ctx: &Context<'_>, id: Id) -> FieldResult<Option<User>> {
        let pool = ctx.data::<DB>()?;
        Ok(User::read_one(pool, &id).await.or_null(ctx).flatten())
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        dto: CreateUserInput,
    ) -> FieldResult<Option<User>> {
        let pool = ctx.data::<DB>()?;
        Ok(User::create(pool, dto).await.or_null(ctx))
    }

    async fn change_user(
        &self,
        ctx: &Context<'_>,
        id: Id,
        dto: ChangeUserInput,
    ) -> FieldResult<Option<User>> {
        let pool = ctx.data::<DB>()?;
        Ok(User::update(pool, &id, dto).await.or_null(ctx))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: Id) -> FieldResult<bool> {
        let pool = ctx.data::<DB>()?;
        Ok(User::delete(pool, &id).await.into_flag("deleteUser"))
    }
}
