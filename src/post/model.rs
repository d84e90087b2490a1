use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{error::StoreError, id::Id, DB};

#[derive(Debug, Clone, FromRow, SimpleObject, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub title: String,
    pub content: String,
    pub author_id: Id,
}

#[derive(Debug, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author_id: Id,
}

#[derive(Debug, Default, InputObject)]
pub struct ChangePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    pub async fn create(db: &DB, post: CreatePostInput) -> Result<Post, StoreError> {
        let mut tx = db.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"INSERT INTO "Post" (id, title, content, author_id)
                VALUES (?, ?, ?, ?)
                RETURNING *"#,
        )
        .bind(Id::new_v4())
        .bind(post.title)
        .bind(post.content)
        .bind(post.author_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(post)
    }

    pub async fn read_one(db: &DB, id: &Id) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(r#"SELECT * FROM "Post" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(post)
    }

    pub async fn read_by_author(db: &DB, author_id: &Id) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(r#"SELECT * FROM "Post" WHERE author_id = ?"#)
            .bind(author_id)
            .fetch_all(db)
            .await?;
        Ok(posts)
    }

    pub async fn read_all(db: &DB) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(r#"SELECT * FROM "Post""#)
            .fetch_all(db)
            .await?;
        Ok(posts)
    }

    pub async fn update(db: &DB, id: &Id, post: ChangePostInput) -> Result<Post, StoreError> {
        let mut tx = db.begin().await?;
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE "Post" SET
                title = COALESCE(?, title),
                content = COALESCE(?, content)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(post.title)
        .bind(post.content)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::not_found("Post", id))?;
        tx.commit().await?;
        Ok(post)
    }

    pub async fn delete(db: &DB, id: &Id) -> Result<(), StoreError> {
        let mut tx = db.begin().await?;
        let deleted = sqlx::query(r#"DELETE FROM "Post" WHERE id = ?"#)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(StoreError::not_found("Post", id));
        }
        tx.commit().await?;
        Ok(())
    }
}
