use async_graphql::{Context, FieldResult, InputObject, Object};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::{OrNull, StoreError},
    id::Id,
    member_type::model::{MemberType, MemberTypeId},
    DB,
};

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Id,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Id,
    pub member_type_id: MemberTypeId,
}

#[derive(Debug, InputObject)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Id,
    pub member_type_id: MemberTypeId,
}

#[derive(Debug, Default, InputObject)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}

#[Object]
impl Profile {
    pub async fn id(&self) -> Id {
        self.id
    }

    pub async fn is_male(&self) -> bool {
        self.is_male
    }

    pub async fn year_of_birth(&self) -> i32 {
        self.year_of_birth
    }

    pub async fn user_id(&self) -> Id {
        self.user_id
    }

    pub async fn member_type_id(&self) -> MemberTypeId {
        self.member_type_id
    }

    pub async fn member_type(&self, ctx: &Context<'_>) -> FieldResult<Option<MemberType>> {
        let pool = ctx.data::<DB>()?;
        Ok(MemberType::read_one(pool, self.member_type_id)
            .await
            .or_null(ctx)
            .flatten())
    }
}

impl Profile {
    pub async fn create(db: &DB, profile: CreateProfileInput) -> Result<Profile, StoreError> {
        let mut tx = db.begin().await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"INSERT INTO "Profile" (id, is_male, year_of_birth, user_id, member_type_id)
                VALUES (?, ?, ?, ?, ?)
                RETURNING *"#,
        )
        .bind(Id::new_v4())
        .bind(profile.is_male)
        .bind(profile.year_of_birth)
        .bind(profile.user_id)
        .bind(profile.member_type_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(profile)
    }

    pub async fn read_one(db: &DB, id: &Id) -> Result<Option<Profile>, StoreError> {
        let profile = sqlx::query_as::<_, Profile>(r#"SELECT * FROM "Profile" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(profile)
    }

    pub async fn read_by_user(db: &DB, user_id: &Id) -> Result<Option<Profile>, StoreError> {
        let profile =
            sqlx::query_as::<_, Profile>(r#"SELECT * FROM "Profile" WHERE user_id = ?"#)
                .bind(user_id)
                .fetch_optional(db)
                .await?;
        Ok(profile)
    }

    pub async fn read_all(db: &DB) -> Result<Vec<Profile>, StoreError> {
        let profiles = sqlx::query_as::<_, Profile>(r#"SELECT * FROM "Profile""#)
            .fetch_all(db)
            .await?;
        Ok(profiles)
    }

    pub async fn update(
        db: &DB,
        id: &Id,
        profile: ChangeProfileInput,
    ) -> Result<Profile, StoreError> {
        let mut tx = db.begin().await?;
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE "Profile" SET
                is_male = COALESCE(?, is_male),
                year_of_birth = COALESCE(?, year_of_birth),
                member_type_id = COALESCE(?, member_type_id)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(profile.is_male)
        .bind(profile.year_of_birth)
        .bind(profile.member_type_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::not_found("Profile", id))?;
        tx.commit().await?;
        Ok(profile)
    }

    pub async fn delete(db: &DB, id: &Id) -> Result<(), StoreError> {
        let mut tx = db.begin().await?;
        let deleted = sqlx::query(r#"DELETE FROM "Profile" WHERE id = ?"#)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(StoreError::not_found("Profile", id));
        }
        tx.commit().await?;
        Ok(())
    }
}
