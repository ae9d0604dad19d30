use sqlx::{AnyPool, Row};
use thiserror::Error;

use super::models::{NewWord, Tag, Word};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unscoped bulk delete refused without explicit opt-in")]
    UnscopedDelete,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Opt-in marker for bulk operations. A full-table delete must never be the
/// default behavior of a delete call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    Guarded,
    AllowUnscoped,
}

/// Stateless storage access for words and their tags. Holds only the shared
/// pool, so it is cheap to clone and safe for concurrent requests.
#[derive(Clone)]
pub struct WordRepository {
    pool: AnyPool,
}

impl WordRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Persist a word and its tags in one transaction. Every submitted tag
    /// name becomes its own tag row; names are not deduplicated.
    pub async fn create(&self, word: NewWord) -> Result<i64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("INSERT INTO words (original, translation) VALUES ($1, $2) RETURNING id")
            .bind(&word.original)
            .bind(&word.translation)
            .fetch_one(&mut *tx)
            .await?;
        let word_id: i64 = row.try_get("id")?;

        for name in &word.tags {
            let row = sqlx::query("INSERT INTO tags (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *tx)
                .await?;
            let tag_id: i64 = row.try_get("id")?;

            sqlx::query("INSERT INTO word_tags (word_id, tag_id) VALUES ($1, $2)")
                .bind(word_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(word_id)
    }

    /// Every word with its tags populated, in insertion order.
    ///
    /// Words and tags are fetched separately: the Any driver cannot decode
    /// the NULL columns a LEFT JOIN would produce for untagged words, and
    /// COALESCE covers the never-populated color.
    pub async fn get_all(&self) -> Result<Vec<Word>, RepositoryError> {
        let word_rows = sqlx::query("SELECT id, original, translation FROM words ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut words: Vec<Word> = Vec::with_capacity(word_rows.len());
        for row in word_rows {
            words.push(Word {
                id: row.try_get("id")?,
                original: row.try_get("original")?,
                translation: row.try_get("translation")?,
                tags: Vec::new(),
            });
        }

        let tag_rows = sqlx::query(
            "SELECT wt.word_id, t.id AS tag_id, t.name, COALESCE(t.color, '') AS color
             FROM word_tags wt
             INNER JOIN tags t ON t.id = wt.tag_id
             ORDER BY wt.word_id, t.id",
        )
        .fetch_all(&self.pool)
        .await?;

        for row in tag_rows {
            let word_id: i64 = row.try_get("word_id")?;
            let color: String = row.try_get("color")?;
            if let Ok(index) = words.binary_search_by_key(&word_id, |w| w.id) {
                words[index].tags.push(Tag {
                    id: row.try_get("tag_id")?,
                    name: row.try_get("name")?,
                    color: if color.is_empty() { None } else { Some(color) },
                });
            }
        }
        Ok(words)
    }

    /// Remove every word and its join rows in one transaction. Tag rows are
    /// left behind; nothing cascades onto them. Refused unless the caller
    /// passes `DeleteScope::AllowUnscoped`.
    pub async fn delete_all(&self, scope: DeleteScope) -> Result<(), RepositoryError> {
        if scope != DeleteScope::AllowUnscoped {
            return Err(RepositoryError::UnscopedDelete);
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM word_tags").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM words").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}
