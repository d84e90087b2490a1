use async_graphql::{Context, FieldResult, Object};

use crate::{error::OrNull, DB};

use super::model::{MemberType, MemberTypeId};

#[derive(Default)]
pub struct MemberTypeQuery;

#[Object]
impl MemberTypeQuery {
    async fn member_types(&self, ctx: &Context<'_>) -> FieldResult<Vec<MemberType>> {
        let pool = ctx.data::<DB>()?;
        let member_types = MemberType::read_all(pool).await?;
        Ok(member_types)
    }

    async fn member_type(
        &self,
        ctx: &Context<'_>,
        id: MemberTypeId,
    ) -> FieldResult<Option<MemberType>> {
        let pool = ctx.data::<DB>()?;
        Ok(MemberType::read_one(pool, id).await.or_null(ctx).flatten())
    }
}
