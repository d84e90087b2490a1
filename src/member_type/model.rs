use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{error::StoreError, DB};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberTypeId {
    Basic,
    Business,
}

#[derive(Debug, Clone, FromRow, SimpleObject)]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

impl MemberType {
    pub async fn read_one(db: &DB, id: MemberTypeId) -> Result<Option<MemberType>, StoreError> {
        let member_type =
            sqlx::query_as::<_, MemberType>(r#"SELECT * FROM "MemberType" WHERE id = ?"#)
                .bind(id)
                .fetch_optional(db)
                .await?;
        Ok(member_type)
    }

    pub async fn read_all(db: &DB) -> Result<Vec<MemberType>, StoreError> {
        let member_types = sqlx::query_as::<_, MemberType>(r#"SELECT * FROM "MemberType""#)
            .fetch_all(db)
            .await?;
        Ok(member_types)
    }
}
