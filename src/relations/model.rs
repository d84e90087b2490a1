use sqlx::FromRow;

use crate::{error::StoreError, id::Id, user::model::User, DB};

/// Edge stating that `subscriber_id` follows `author_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SubscriberOnAuthor {
    pub subscriber_id: Id,
    pub author_id: Id,
}

pub struct Relations;

impl Relations {
    /// Fails with a conflict when the edge already exists and with a missing
    /// reference when either user is unknown.
    pub async fn subscribe(
        db: &DB,
        subscriber_id: &Id,
        author_id: &Id,
    ) -> Result<SubscriberOnAuthor, StoreError> {
        let mut tx = db.begin().await?;

        let edge = sqlx::query_as::<_, SubscriberOnAuthor>(
            r#"INSERT INTO "SubscribersOnAuthors" (subscriber_id, author_id)
                VALUES (?, ?)
                RETURNING *"#,
        )
        .bind(subscriber_id)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(edge)
    }

    pub async fn unsubscribe(
        db: &DB,
        subscriber_id: &Id,
        author_id: &Id,
    ) -> Result<(), StoreError> {
        let mut tx = db.begin().await?;
        let deleted = sqlx::query(
            r#"DELETE FROM "SubscribersOnAuthors" WHERE subscriber_id = ? AND author_id = ?"#,
        )
        .bind(subscriber_id)
        .bind(author_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
        if deleted == 0 {
            return Err(StoreError::not_found(
                "Subscription",
                format!("{subscriber_id} -> {author_id}"),
            ));
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn authors_of(db: &DB, subscriber_id: &Id) -> Result<Vec<User>, StoreError> {
        let authors = sqlx::query_as::<_, User>(
            r#"SELECT u.* FROM "User" u
            INNER JOIN "SubscribersOnAuthors" s ON u.id = s.author_id
            WHERE s.subscriber_id = ?"#,
        )
        .bind(subscriber_id)
        .fetch_all(db)
        .await?;
        Ok(authors)
    }

    pub async fn subscribers_of(db: &DB, author_id: &Id) -> Result<Vec<User>, StoreError> {
        let subscribers = sqlx::query_as::<_, User>(
            r#"SELECT u.* FROM "User" u
            INNER JOIN "SubscribersOnAuthors" s ON u.id = s.subscriber_id
            WHERE s.author_id = ?"#,
        )
        .bind(author_id)
        .fetch_all(db)
        .await?;
        Ok(subscribers)
    }
}
