use async_graphql::{Context, FieldResult, Object};

use crate::{error::IntoFlag, id::Id, DB};

use super::model::Relations;

#[derive(Default)]
pub struct RelationsMutation;

#[Object]
impl RelationsMutation {
    async fn subscribe_to(
        &self,
        ctx: &Context<'_>,
        user_id: Id,
        author_id: Id,
    ) -> FieldResult<bool> {
        let pool = ctx.data::<DB>()?;
        Ok(Relations::subscribe(pool, &user_id, &author_id)
            .await
            .into_flag("subscribeTo"))
    }

    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        user_id: Id,
        author_id: Id,
    ) -> FieldResult<bool> {
        let pool = ctx.data::<DB>()?;
        Ok(Relations::unsubscribe(pool, &user_id, &author_id)
            .await
            .into_flag("unsubscribeFrom"))
    }
}
