use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::ObjectId;

/// Metadata for one object: an ordered list of property name/value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectRecord {
    properties: Vec<(String, String)>,
}

impl ObjectRecord {
    /// Create a record with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property insert.
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property, replacing an existing one with the same
    /// (case-insensitive) name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self
            .properties
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
    }

    /// Look up a property value by case-insensitive name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Object metadata keyed by [`ObjectId`].
///
/// Cheap to clone: storage is shared, and a clone taken by an in-flight
/// search keeps seeing the objects that existed when it started.
#[derive(Debug, Clone, Default)]
pub struct ObjectDatabase {
    /// Ids in ascending order.
    ids: Arc<Vec<ObjectId>>,
    records: Arc<FxHashMap<ObjectId, ObjectRecord>>,
}

impl ObjectDatabase {
    /// Create an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from `(id, record)` pairs. Later duplicates replace
    /// earlier ones.
    pub fn from_objects(
        objects: impl IntoIterator<Item = (ObjectId, ObjectRecord)>,
    ) -> Self {
        let mut db = Self::new();
        for (id, record) in objects {
            db.insert(id, record);
        }
        db
    }

    /// Insert or replace an object.
    pub fn insert(&mut self, id: ObjectId, record: ObjectRecord) {
        let ids = Arc::make_mut(&mut self.ids);
        if let Err(pos) = ids.binary_search(&id) {
            ids.insert(pos, id);
        }
        drop(Arc::make_mut(&mut self.records).insert(id, record));
    }

    /// Number of objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.ids.len()
    }

    /// Size of a per-object array able to hold every id (max id + 1).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ids.last().map_or(0, |id| id.index() + 1)
    }

    /// Look up an object.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&ObjectRecord> {
        self.records.get(&id)
    }

    /// Id at `position` in ascending order.
    pub(crate) fn id_at(&self, position: usize) -> Option<ObjectId> {
        self.ids.get(position).copied()
    }
}
