use async_graphql::{Context, FieldResult, InputObject, Object};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::{OrNull, StoreError},
    id::Id,
    post::model::Post,
    profile::model::Profile,
    relations::model::Relations,
    DB,
};

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Default, InputObject)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

#[Object]
impl User {
    pub async fn id(&self) -> Id {
        self.id
    }

    pub async fn name(&self) -> String {
        self.name.to_owned()
    }

    pub async fn balance(&self) -> f64 {
        self.balance
    }

    pub async fn profile(&self, ctx: &Context<'_>) -> FieldResult<Option<Profile>> {
        let pool = ctx.data::<DB>()?;
        Ok(Profile::read_by_user(pool, &self.id).await.or_null(ctx).flatten())
    }

    pub async fn posts(&self, ctx: &Context<'_>) -> FieldResult<Vec<Post>> {
        let pool = ctx.data::<DB>()?;
        let posts = Post::read_by_author(pool, &self.id).await?;
        Ok(posts)
    }

    /// Authors this user is subscribed to.
    pub async fn user_subscribed_to(&self, ctx: &Context<'_>) -> FieldResult<Vec<User>> {
        let pool = ctx.data::<DB>()?;
        let authors = Relations::authors_of(pool, &self.id).await?;
        Ok(authors)
    }

    /// Users subscribed to this user.
    pub async fn subscribed_to_user(&self, ctx: &Context<'_>) -> FieldResult<Vec<User>> {
        let pool = ctx.data::<DB>()?;
        let subscribers = Relations::subscribers_of(pool, &self.id).await?;
        Ok(subscribers)
    }
}

impl User {
    pub async fn create(db: &DB, user: CreateUserInput) -> Result<User, StoreError> {
        let mut tx = db.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO "User" (id, name, balance)
                VALUES (?, ?, ?)
                RETURNING *"#,
        )
        .bind(Id::new_v4())
        .bind(user.name)
        .bind(user.balance)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(user)
    }

    pub async fn read_one(db: &DB, id: &Id) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM "User" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    pub async fn read_all(db: &DB) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM "User""#)
            .fetch_all(db)
            .await?;
        Ok(users)
    }

    pub async fn update(db: &DB, id: &Id, user: ChangeUserInput) -> Result<User, StoreError> {
        let mut tx = db.begin().await?;
        let new_user = sqlx::query_as::<_, User>(
            r#"
            UPDATE "User" SET
                name = COALESCE(?, name),
                balance = COALESCE(?, balance)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(user.name)
        .bind(user.balance)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::not_found("User", id))?;
        tx.commit().await?;
        Ok(new_user)
    }

    /// Removes the user. Profile, posts and subscription edges go with it.
    pub async fn delete(db: &DB, id: &Id) -> Result<(), StoreError> {
        let mut tx = db.begin().await?;
        let deleted = sqlx::query(r#"DELETE FROM "User" WHERE id = ?"#)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(StoreError::not_found("User", id));
        }
        tx.commit().await?;
        Ok(())
    }
}
