use mediahub_contracts::{CatalogItem, MediaCapabilities, Result};
use mediahub_model::{CatalogDataset, Relation};
use sqlx::{Sqlite, Transaction};
use tracing::info;

use super::SqliteLibrary;

impl SqliteLibrary {
    /// Append every collection of `dataset`, keeping its order. Returns the
    /// number of items written.
    pub async fn import(&self, dataset: &CatalogDataset) -> Result<usize> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|err| self.backend_error(err))?;

        let mut written = 0;
        written += self.insert_all(&mut tx, &dataset.movies).await?;
        written += self.insert_all(&mut tx, &dataset.tracks).await?;
        written += self.insert_all(&mut tx, &dataset.albums).await?;
        written += self.insert_all(&mut tx, &dataset.artists).await?;
        written += self.insert_all(&mut tx, &dataset.pictures).await?;
        written += self.insert_all(&mut tx, &dataset.shows).await?;
        written += self.insert_all(&mut tx, &dataset.seasons).await?;
        written += self.insert_all(&mut tx, &dataset.episodes).await?;

        tx.commit().await.map_err(|err| self.backend_error(err))?;
        info!(provider = %self.name(), items = written, "imported dataset");
        Ok(written)
    }

    async fn insert_all<T: CatalogItem>(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        items: &[T],
    ) -> Result<usize> {
        if items.is_empty() {
            return Ok(0);
        }

        let next: i64 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM items WHERE kind = ?",
        )
        .bind(T::KIND.as_str())
        .fetch_one(&mut **tx)
        .await
        .map_err(|err| self.backend_error(err))?;

        for (offset, item) in items.iter().enumerate() {
            self.insert_item(tx, item, next + offset as i64).await?;
        }
        Ok(items.len())
    }

    async fn insert_item<T: CatalogItem>(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        item: &T,
        position: i64,
    ) -> Result<()> {
        let payload =
            serde_json::to_string(item).map_err(|err| self.backend_error(err))?;
        let millis = |date: Option<chrono::DateTime<chrono::Utc>>| {
            date.map(|d| d.timestamp_millis())
        };
        let season_id = item
            .season_id()
            .or_else(|| item.parent(Relation::Season))
            .map(str::to_owned);

        let result = sqlx::query(
            "INSERT INTO items (kind, position, id, title, date_added, year, \
             genre_first, rating, category_first, track_number, \
             composer_first, season_id, episode_number, season_number, \
             date_aired, date_taken, album_id, artist_id, show_id, payload) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(T::KIND.as_str())
        .bind(position)
        .bind(item.id().to_owned())
        .bind(item.title().map(str::to_owned))
        .bind(millis(item.date_added()))
        .bind(item.year())
        .bind(item.genres().first().cloned())
        .bind(item.rating().filter(|r| !r.is_nan()).map(f64::from))
        .bind(item.categories().first().cloned())
        .bind(item.track_number().map(i64::from))
        .bind(item.composers().first().cloned())
        .bind(season_id)
        .bind(item.episode_number().map(i64::from))
        .bind(item.season_number().map(i64::from))
        .bind(millis(item.date_aired()))
        .bind(millis(item.date_taken()))
        .bind(item.parent(Relation::Album).map(str::to_owned))
        .bind(item.parent(Relation::Artist).map(str::to_owned))
        .bind(item.parent(Relation::Show).map(str::to_owned))
        .bind(payload)
        .execute(&mut **tx)
        .await
        .map_err(|err| self.backend_error(err))?;
        let item_key = result.last_insert_rowid();

        let values = [
            ("genre", item.genres()),
            ("category", item.categories()),
            ("composer", item.composers()),
        ];
        for (field, list) in values {
            for (position, value) in list.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO item_values (item_key, field, position, value) \
                     VALUES (?, ?, ?, ?)",
                )
                .bind(item_key)
                .bind(field)
                .bind(position as i64)
                .bind(value.clone())
                .execute(&mut **tx)
                .await
                .map_err(|err| self.backend_error(err))?;
            }
        }
        Ok(())
    }
}
