//! Lowers query descriptors into SQLite statements over the `items` table.
//!
//! Every ordering ends with `position ASC`, the insertion order also used by
//! `ItemSource::all`, so push-down reproduces the stable in-memory sort.
//! Missing values sort last in both directions through `NULLS LAST`.

use mediahub_contracts::CatalogError;
use mediahub_model::{
    DescriptorVisitor, ItemKind, OrderKey, Predicate, Range, Relation,
    SortComponent, SortOrder,
};
use sqlx::{QueryBuilder, Sqlite};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Projection {
    Payload,
    Count,
}

pub struct SqlLowering<'a> {
    qb: QueryBuilder<'a, Sqlite>,
    projection: Projection,
}

impl fmt::Debug for SqlLowering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlLowering")
            .field("projection", &self.projection)
            .field("sql", &self.qb.sql())
            .field("query_builder", &"<sqlx::QueryBuilder<Sqlite>>")
            .finish()
    }
}

impl<'a> SqlLowering<'a> {
    /// `SELECT i.payload ...` restricted to `kind`.
    pub fn select(kind: ItemKind) -> Self {
        Self::start("SELECT i.payload FROM items i", kind, Projection::Payload)
    }

    /// `SELECT COUNT(*) ...` restricted to `kind`. Order and range are not
    /// lowered.
    pub fn count(kind: ItemKind) -> Self {
        Self::start(
            "SELECT COUNT(*) AS total FROM items i",
            kind,
            Projection::Count,
        )
    }

    fn start(head: &str, kind: ItemKind, projection: Projection) -> Self {
        let mut qb = QueryBuilder::new(head);
        qb.push(" WHERE i.kind = ");
        qb.push_bind(kind.as_str());
        Self { qb, projection }
    }

    pub fn sql(&self) -> &str {
        self.qb.sql()
    }

    pub fn into_builder(self) -> QueryBuilder<'a, Sqlite> {
        self.qb
    }

    fn push_membership(&mut self, field: &'static str, value: &str) {
        self.qb.push(
            " AND EXISTS (SELECT 1 FROM item_values v \
             WHERE v.item_key = i.item_key AND v.field = ",
        );
        self.qb.push_bind(field);
        self.qb.push(" AND v.value = ");
        self.qb.push_bind(value.to_owned());
        self.qb.push(")");
    }
}

impl DescriptorVisitor for SqlLowering<'_> {
    type Error = CatalogError;

    fn visit_predicate(
        &mut self,
        predicate: &Predicate,
    ) -> Result<(), CatalogError> {
        match predicate {
            Predicate::GenreContains(genre) => {
                self.push_membership("genre", genre)
            }
            Predicate::CategoryContains(category) => {
                self.push_membership("category", category)
            }
            Predicate::RelatedTo { relation, id } => {
                self.qb.push(" AND ");
                self.qb.push(relation_column(*relation));
                self.qb.push(" = ");
                self.qb.push_bind(id.clone());
            }
            Predicate::IdEquals(id) => {
                self.qb.push(" AND i.id = ");
                self.qb.push_bind(id.clone());
            }
        }
        Ok(())
    }

    fn visit_order(&mut self, keys: &[OrderKey]) -> Result<(), CatalogError> {
        if self.projection == Projection::Count {
            return Ok(());
        }
        self.qb.push(" ORDER BY ");
        for key in keys {
            let direction = match key.order {
                SortOrder::Ascending => " ASC NULLS LAST, ",
                SortOrder::Descending => " DESC NULLS LAST, ",
            };
            for component in key.sort_by.components() {
                self.qb.push(component_column(*component));
                self.qb.push(direction);
            }
        }
        self.qb.push("i.position ASC, i.item_key ASC");
        Ok(())
    }

    fn visit_range(
        &mut self,
        range: Option<Range>,
    ) -> Result<(), CatalogError> {
        if self.projection == Projection::Count {
            return Ok(());
        }
        if let Some(range) = range {
            self.qb.push(" LIMIT ");
            self.qb.push_bind(to_sql_int(range.count()));
            self.qb.push(" OFFSET ");
            self.qb.push_bind(to_sql_int(range.start()));
        }
        Ok(())
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn component_column(component: SortComponent) -> &'static str {
    match component {
        SortComponent::Title => "i.title",
        SortComponent::DateAdded => "i.date_added",
        SortComponent::Year => "i.year",
        SortComponent::Genre => "i.genre_first",
        SortComponent::Rating => "i.rating",
        SortComponent::Category => "i.category_first",
        SortComponent::TrackNumber => "i.track_number",
        SortComponent::Composer => "i.composer_first",
        SortComponent::SeasonId => "i.season_id",
        SortComponent::EpisodeNumber => "i.episode_number",
        SortComponent::SeasonNumber => "i.season_number",
        SortComponent::DateAired => "i.date_aired",
        SortComponent::DateTaken => "i.date_taken",
    }
}

fn relation_column(relation: Relation) -> &'static str {
    match relation {
        Relation::Album => "i.album_id",
        Relation::Artist => "i.artist_id",
        Relation::Show => "i.show_id",
        Relation::Season => "i.season_id",
    }
}
