use async_graphql::{Context, FieldResult, Object};

use crate::{
    error::{IntoFlag, OrNull},
    id::Id,
    DB,
};

use super::model::{ChangeProfileInput, CreateProfileInput, Profile};

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    async fn profiles(&self, ctx: &Context<'_>) -> FieldResult<Vec<Profile>> {
        let pool = ctx.data::<DB>()?;
        let profiles = Profile::read_all(pool).await?;
        Ok(profiles)
    }

    async fn profile(&self, ctx: &Context<'_>, id: Id) -> FieldResult<Option<Profile>> {
        let pool = ctx.data::<DB>()?;
        Ok(Profile::read_one(pool, &id).await.or_null(ctx).flatten())
    }
}

#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    // Fails when the user already has a profile or a referenced key is unknown.
    async fn create_profile(
        &self,
        ctx: &Context<'_>,
        dto: CreateProfileInput,
    ) -> FieldResult<Option<Profile>> {
        let pool = ctx.data::<DB>()?;
        Ok(Profile::create(pool, dto).await.or_null(ctx))
    }

    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: Id,
        dto: ChangeProfileInput,
    ) -> FieldResult<Option<Profile>> {
        let pool = ctx.data::<DB>()?;
        Ok(Profile::update(pool, &id, dto).await.or_null(ctx))
    }

    async fn delete_profile(&self, ctx: &Context<'_>, id: Id) -> FieldResult<bool> {
        let pool = ctx.data::<DB>()?;
        Ok(Profile::delete(pool, &id).await.into_flag("deleteProfile"))
    }
}
