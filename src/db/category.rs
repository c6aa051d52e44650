use color_eyre::Result;

use super::models::Category;
use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    pub async fn categories_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create_category(&self, kind: &str) -> Result<i64> {
        let id = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::info!("new category created with id: {id}");
        Ok(id)
    }

    /// Insert `kinds` in order when the catalog is empty. Returns how many
    /// categories were inserted; an already populated catalog is left alone.
    pub async fn seed_categories(&self, kinds: &[&str]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;

        if existing > 0 {
            tracing::debug!("category catalog already holds {existing} entries, skipping seed");
            return Ok(0);
        }

        for kind in kinds {
            sqlx::query("INSERT INTO categories (type) VALUES (?)")
                .bind(kind)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!("seeded {} categories", kinds.len());
        Ok(kinds.len())
    }
}
