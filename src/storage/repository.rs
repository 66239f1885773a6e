//! Entity repositories
//!
//! Every entity type lives in one document holding a single array under a
//! fixed property, e.g. `{ "students": [...] }`. A repository reads and writes
//! that whole array; there is no per-record storage.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use super::{RemoteFileStore, StoreError, StoreResult};
use crate::models::{ClassSession, Payment, Student, Teacher};

/// A record persisted as one element of a document's array
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Document path on the host
    const PATH: &'static str;
    /// Property holding the array inside the document
    const PROPERTY: &'static str;
    /// Singular name used in messages
    const LABEL: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Identifier for a new record: one past the largest existing id, or 1
///
/// `None` once the largest id is `i64::MAX`.
pub fn next_id<T: Record>(list: &[T]) -> Option<i64> {
    list.iter().map(Record::id).fold(0, i64::max).checked_add(1)
}

/// Replace the element with the same id; false if there is none
pub fn replace_by_id<T: Record>(list: &mut [T], record: T) -> bool {
    match list.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Drop every element with `id`; false if there was none
pub fn remove_by_id<T: Record>(list: &mut Vec<T>, id: i64) -> bool {
    let before = list.len();
    list.retain(|r| r.id() != id);
    list.len() != before
}

/// Reads and writes the list of one entity type
pub struct Repository<T> {
    store: RemoteFileStore,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    pub fn new(store: RemoteFileStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Load the list, or an empty list if the document can't be read
    ///
    /// An empty result does not mean the load succeeded; use
    /// [`Repository::try_get_all`] where that matters.
    pub async fn get_all(&self) -> Vec<T> {
        match self.try_get_all().await {
            Ok(list) => list,
            Err(e) => {
                error!("Failed to load {} data: {}", T::LABEL, e);
                Vec::new()
            }
        }
    }

    /// Load the list, propagating read failures
    pub async fn try_get_all(&self) -> StoreResult<Vec<T>> {
        let document = self.store.read(T::PATH).await?;
        unwrap_list(document)
    }

    /// Overwrite the document with `list`
    pub async fn save(&self, list: &[T]) -> StoreResult<()> {
        let mut document = Map::new();
        let items = serde_json::to_value(list)
            .map_err(|e| StoreError::write(T::PATH, None, e.to_string()))?;
        document.insert(T::PROPERTY.to_string(), items);

        self.store.write(T::PATH, &Value::Object(document)).await?;
        info!("Saved {} {} records", list.len(), T::LABEL);
        Ok(())
    }

    /// Append `record` under a fresh id, assigned against the latest document
    pub async fn create(&self, mut record: T) -> StoreResult<T> {
        let mut list = self.load_for_write().await?;
        let id = next_id(&list).ok_or_else(|| {
            StoreError::write(T::PATH, None, format!("no {} id left to assign", T::LABEL))
        })?;
        record.set_id(id);
        list.push(record.clone());
        self.save(&list).await?;
        Ok(record)
    }

    /// Replace the stored record with the same id
    ///
    /// Nothing is written when no record matches.
    pub async fn update(&self, record: T) -> StoreResult<T> {
        let mut list = self.load_for_write().await?;
        let id = record.id();
        if !replace_by_id(&mut list, record.clone()) {
            debug!("No {} with id {}, skipping update", T::LABEL, id);
            return Err(StoreError::NotFound { label: T::LABEL, id });
        }
        self.save(&list).await?;
        Ok(record)
    }

    /// Remove the record with `id`
    ///
    /// Nothing is written when no record matches.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut list = self.load_for_write().await?;
        if !remove_by_id(&mut list, id) {
            debug!("No {} with id {}, skipping delete", T::LABEL, id);
            return Err(StoreError::NotFound { label: T::LABEL, id });
        }
        self.save(&list).await
    }

    /// Strict read for mutations; a document that does not exist yet is empty
    async fn load_for_write(&self) -> StoreResult<Vec<T>> {
        match self.try_get_all().await {
            Err(e) if e.status() == Some(404) => Ok(Vec::new()),
            other => other,
        }
    }
}

fn unwrap_list<T: Record>(document: Value) -> StoreResult<Vec<T>> {
    let items = match document {
        Value::Object(mut map) => map.remove(T::PROPERTY),
        _ => None,
    };

    match items {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).map_err(|e| {
            StoreError::fetch(
                T::PATH,
                None,
                format!("malformed {} list: {}", T::PROPERTY, e),
            )
        }),
    }
}

/// Every entity list, loaded together
#[derive(Debug, Clone, Default)]
pub struct AcademyData {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub classes: Vec<ClassSession>,
    pub payments: Vec<Payment>,
}

/// The four repositories over one file store
#[derive(Clone)]
pub struct Repositories {
    pub students: Repository<Student>,
    pub teachers: Repository<Teacher>,
    pub classes: Repository<ClassSession>,
    pub payments: Repository<Payment>,
}

impl Repositories {
    pub fn new(store: RemoteFileStore) -> Self {
        Self {
            students: Repository::new(store.clone()),
            teachers: Repository::new(store.clone()),
            classes: Repository::new(store.clone()),
            payments: Repository::new(store),
        }
    }

    /// Issue all four reads at once and wait for every one
    pub async fn load_all(&self) -> AcademyData {
        let (students, teachers, classes, payments) = tokio::join!(
            self.students.get_all(),
            self.teachers.get_all(),
            self.classes.get_all(),
            self.payments.get_all(),
        );

        AcademyData {
            students,
            teachers,
            classes,
            payments,
        }
    }
}

/// Records that have a repository in [`Repositories`]
pub trait Collection: Record {
    fn repository(repos: &Repositories) -> &Repository<Self>;
}

impl Collection for Student {
    fn repository(repos: &Repositories) -> &Repository<Self> {
        &repos.students
    }
}

impl Collection for Teacher {
    fn repository(repos: &Repositories) -> &Repository<Self> {
        &repos.teachers
    }
}

impl Collection for ClassSession {
    fn repository(repos: &Repositories) -> &Repository<Self> {
        &repos.classes
    }
}

impl Collection for Payment {
    fn repository(repos: &Repositories) -> &Repository<Self> {
        &repos.payments
    }
}
