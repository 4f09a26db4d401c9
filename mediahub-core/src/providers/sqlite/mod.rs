//! SQLite-backed provider with filter, order and range push-down.
//!
//! All collections share one `items` table keyed by [`ItemKind`]. Rows carry
//! the JSON payload of the richest record of their kind; basic records decode
//! from the same payload.

mod import;
pub mod lowering;

use async_trait::async_trait;
use mediahub_contracts::{
    CatalogError, CatalogItem, ItemSource, MovieLibrary, MusicLibrary,
    NativeQuery, PictureLibrary, Result, TvShowLibrary, single_match,
};
use mediahub_model::prelude::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Row, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub use lowering::SqlLowering;

use crate::MIGRATOR;

#[derive(Debug, Clone)]
pub struct SqliteLibrary {
    name: String,
    pool: SqlitePool,
}

impl SqliteLibrary {
    /// Open (creating if needed) the database at `database_url` and apply
    /// migrations.
    pub async fn connect(
        name: impl Into<String>,
        database_url: &str,
    ) -> Result<Self> {
        let name = name.into();
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|err| CatalogError::backend(&name, err))?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|err| CatalogError::backend(&name, err))?;
        Self::from_pool(name, pool).await
    }

    /// Private in-memory database on a single connection.
    pub async fn in_memory(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|err| CatalogError::backend(&name, err))?;
        // The database is dropped with its last connection, so keep one
        // open for the lifetime of the pool
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|err| CatalogError::backend(&name, err))?;
        Self::from_pool(name, pool).await
    }

    pub async fn from_pool(
        name: impl Into<String>,
        pool: SqlitePool,
    ) -> Result<Self> {
        let library = Self {
            name: name.into(),
            pool,
        };
        MIGRATOR
            .run(&library.pool)
            .await
            .map_err(|err| library.backend_error(err))?;
        info!(provider = %library.name, "sqlite catalogue ready");
        Ok(library)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn backend_error(
        &self,
        err: impl Into<mediahub_contracts::BoxError>,
    ) -> CatalogError {
        CatalogError::backend(&self.name, err)
    }

    async fn fetch_payloads<T: CatalogItem>(
        &self,
        mut qb: QueryBuilder<'_, Sqlite>,
    ) -> Result<Vec<T>> {
        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| self.backend_error(err))?;

        rows.into_iter()
            .map(|row| {
                let payload: String = row
                    .try_get("payload")
                    .map_err(|err| self.backend_error(err))?;
                serde_json::from_str(&payload)
                    .map_err(|err| self.backend_error(err))
            })
            .collect()
    }

    /// Distinct values of a multi-valued field across `kinds`, in byte
    /// order.
    async fn distinct_values(
        &self,
        kinds: &[ItemKind],
        field: &'static str,
    ) -> Result<Vec<String>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT DISTINCT v.value FROM item_values v \
             JOIN items i ON i.item_key = v.item_key WHERE v.field = ",
        );
        qb.push_bind(field);
        qb.push(" AND i.kind IN (");
        let mut separated = qb.separated(", ");
        for kind in kinds {
            separated.push_bind(kind.as_str());
        }
        separated.push_unseparated(") ORDER BY v.value ASC");

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| self.backend_error(err))?;
        rows.into_iter()
            .map(|row| {
                row.try_get::<String, _>("value")
                    .map_err(|err| self.backend_error(err))
            })
            .collect()
    }

    async fn genres_of(&self, kinds: &[ItemKind]) -> Result<Vec<Genre>> {
        let values = self.distinct_values(kinds, "genre").await?;
        Ok(values.into_iter().map(Genre::new).collect())
    }

    async fn categories_of(&self, kinds: &[ItemKind]) -> Result<Vec<Category>> {
        let values = self.distinct_values(kinds, "category").await?;
        Ok(values.into_iter().map(Category::from_title).collect())
    }
}

#[async_trait]
impl<T: CatalogItem> ItemSource<T> for SqliteLibrary {
    async fn all(&self) -> Result<Vec<T>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT i.payload FROM items i WHERE i.kind = ",
        );
        qb.push_bind(T::KIND.as_str());
        qb.push(" ORDER BY i.position ASC, i.item_key ASC");
        self.fetch_payloads(qb).await
    }

    async fn get_by_id(&self, id: &str) -> Result<T> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT i.payload FROM items i WHERE i.kind = ",
        );
        qb.push_bind(T::KIND.as_str());
        qb.push(" AND i.id = ");
        qb.push_bind(id.to_owned());
        qb.push(" ORDER BY i.position ASC, i.item_key ASC");
        let matches: Vec<T> = self.fetch_payloads(qb).await?;
        single_match(matches, id)
    }

    fn native(&self) -> Option<&dyn NativeQuery<T>> {
        Some(self)
    }
}

#[async_trait]
impl<T: CatalogItem> NativeQuery<T> for SqliteLibrary {
    async fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Vec<T>> {
        let mut lowering = SqlLowering::select(T::KIND);
        descriptor.accept(&mut lowering)?;
        debug!(provider = %self.name, sql = lowering.sql(), "push-down fetch");
        self.fetch_payloads(lowering.into_builder()).await
    }

    async fn count(&self, descriptor: &QueryDescriptor) -> Result<u64> {
        let mut lowering = SqlLowering::count(T::KIND);
        descriptor.accept(&mut lowering)?;
        debug!(provider = %self.name, sql = lowering.sql(), "push-down count");
        let row = lowering
            .into_builder()
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|err| self.backend_error(err))?;
        let total: i64 =
            row.try_get("total").map_err(|err| self.backend_error(err))?;
        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl MovieLibrary for SqliteLibrary {
    fn movies(&self) -> &dyn ItemSource<MovieBasic> {
        self
    }

    fn movies_detailed(&self) -> &dyn ItemSource<MovieDetailed> {
        self
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.genres_of(&[ItemKind::Movie]).await
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.categories_of(&[ItemKind::Movie]).await
    }
}

#[async_trait]
impl MusicLibrary for SqliteLibrary {
    fn tracks(&self) -> &dyn ItemSource<MusicTrackBasic> {
        self
    }

    fn tracks_detailed(&self) -> &dyn ItemSource<MusicTrackDetailed> {
        self
    }

    fn albums(&self) -> &dyn ItemSource<MusicAlbumBasic> {
        self
    }

    fn artists(&self) -> &dyn ItemSource<MusicArtistBasic> {
        self
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.genres_of(&[ItemKind::MusicTrack, ItemKind::MusicAlbum])
            .await
    }
}

#[async_trait]
impl PictureLibrary for SqliteLibrary {
    fn pictures(&self) -> &dyn ItemSource<PictureBasic> {
        self
    }

    fn pictures_detailed(&self) -> &dyn ItemSource<PictureDetailed> {
        self
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.categories_of(&[ItemKind::Picture]).await
    }
}

#[async_trait]
impl TvShowLibrary for SqliteLibrary {
    fn shows(&self) -> &dyn ItemSource<TvShowBasic> {
        self
    }

    fn shows_detailed(&self) -> &dyn ItemSource<TvShowDetailed> {
        self
    }

    fn seasons(&self) -> &dyn ItemSource<TvSeasonBasic> {
        self
    }

    fn seasons_detailed(&self) -> &dyn ItemSource<TvSeasonDetailed> {
        self
    }

    fn episodes(&self) -> &dyn ItemSource<TvEpisodeBasic> {
        self
    }

    fn episodes_detailed(&self) -> &dyn ItemSource<TvEpisodeDetailed> {
        self
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.genres_of(&[ItemKind::TvShow]).await
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.categories_of(&[ItemKind::TvShow]).await
    }
}
