use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable entity key (an ISO country code in the dashboard family).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId(id.to_string())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Auxiliary field carried through unchanged. Never aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

/// One row of input data.
///
/// Field aliases match the wire names used by the dashboard datasets
/// (`iso`, `emissions`, `parentId`). Any field not listed here lands in
/// `metrics` via the flatten, e.g. the per-country `laws` count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(alias = "iso")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, alias = "parentId", alias = "parent")]
    pub parent_id: Option<EntityId>,
    /// Non-negative metric to aggregate. Absent means 0. Negative inputs are
    /// not rejected here; aggregation clamps them to 0.
    #[serde(default, alias = "emissions")]
    pub value: f64,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, MetricValue>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            parent_id: None,
            value,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_id = Some(EntityId::new(parent));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId(String),
    Parse(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate entity id: {id}"),
            CatalogError::Parse(msg) => write!(f, "record parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validated, insertion-ordered set of entity records.
///
/// Insertion order is load-bearing: it is the tie-break order for the
/// value-sorted hierarchy layout, so two loads of the same data produce
/// identical layouts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntityCatalog {
    records: Vec<EntityRecord>,
    by_id: BTreeMap<EntityId, usize>,
}

impl EntityCatalog {
    pub fn from_records(
        records: impl IntoIterator<Item = EntityRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = EntityCatalog::default();
        for record in records {
            if catalog.by_id.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId(record.id.to_string()));
            }
            catalog.by_id.insert(record.id.clone(), catalog.records.len());
            catalog.records.push(record);
        }
        Ok(catalog)
    }

    /// Decodes a JSON array of records. The convenience entry point for
    /// embedders that already hold the dataset bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let records: Vec<EntityRecord> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_records(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    pub fn get(&self, id: &EntityId) -> Option<&EntityRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Insertion index of `id`, the deterministic tie-break key.
    pub fn position(&self, id: &EntityId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Records ordered by display name (the dropdown ordering), ties broken
    /// by id so the ordering stays total.
    pub fn sorted_by_name(&self) -> Vec<&EntityRecord> {
        let mut out: Vec<&EntityRecord> = self.records.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        out
    }
}
