//! Generic document collection backed by one JSON file
//!
//! A collection holds documents of one body type, each keyed by a
//! store-generated [`ObjectId`]. Reads go to disk on every call so they see
//! the latest committed snapshot; writes are read-modify-write cycles that
//! replace the whole file atomically.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::ObjectId;

use super::file_io::{read_json, write_json_atomic};

/// A stored document: the store-assigned id plus the entity body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub body: T,
}

/// On-disk layout of a collection file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CollectionFile<T> {
    #[serde(default = "Vec::new")]
    documents: Vec<Document<T>>,
}

impl<T> Default for CollectionFile<T> {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
        }
    }
}

/// Result of [`Collection::update_unless`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// Another document matched the conflict predicate; nothing was written
    Conflict,
    Missing,
}

/// Handle to one collection of documents
pub struct Collection<T> {
    name: &'static str,
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
    _body: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(name: &'static str, path: PathBuf) -> Self {
        Self {
            name,
            path,
            write_lock: Mutex::new(()),
            _body: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read(&self) -> Result<Vec<Document<T>>, TrackerError> {
        let file: CollectionFile<T> = read_json(&self.path)?;
        Ok(file.documents)
    }

    fn write(&self, documents: Vec<Document<T>>) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, &CollectionFile { documents })
    }

    /// Run a read-modify-write cycle under the collection's write lock
    ///
    /// Nothing is written if `f` returns `None`.
    fn modify<R>(
        &self,
        f: impl FnOnce(&mut Vec<Document<T>>) -> Option<R>,
    ) -> Result<Option<R>, TrackerError> {
        let _guard = self.write_lock.lock().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire {} write lock: {}", self.name, e))
        })?;

        let mut documents = self.read()?;
        match f(&mut documents) {
            Some(result) => {
                self.write(documents)?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// All documents, in insertion order
    pub fn find_all(&self) -> Result<Vec<Document<T>>, TrackerError> {
        self.read()
    }

    pub fn find_by_id(&self, id: ObjectId) -> Result<Option<Document<T>>, TrackerError> {
        Ok(self.read()?.into_iter().find(|doc| doc.id == id))
    }

    /// Insert a new document and return its generated id
    pub fn insert(&self, body: T) -> Result<ObjectId, TrackerError> {
        let id = ObjectId::new();
        self.modify(|documents| {
            documents.push(Document { id, body });
            Some(())
        })?;
        Ok(id)
    }

    /// Apply `f` to the document with `id`; returns whether it matched
    pub fn update(&self, id: ObjectId, f: impl FnOnce(&mut T)) -> Result<bool, TrackerError> {
        let matched = self.modify(|documents| {
            let doc = documents.iter_mut().find(|doc| doc.id == id)?;
            f(&mut doc.body);
            Some(())
        })?;
        Ok(matched.is_some())
    }

    /// Apply `f` to the document with `id` unless some other document
    /// matches `conflict`
    ///
    /// The conflict check and the write share one read-modify-write cycle.
    pub fn update_unless(
        &self,
        id: ObjectId,
        conflict: impl Fn(&T) -> bool,
        f: impl FnOnce(&mut T),
    ) -> Result<UpdateOutcome, TrackerError> {
        let mut outcome = UpdateOutcome::Missing;
        self.modify(|documents| {
            if documents
                .iter()
                .any(|doc| doc.id != id && conflict(&doc.body))
            {
                outcome = UpdateOutcome::Conflict;
                return None;
            }
            let doc = documents.iter_mut().find(|doc| doc.id == id)?;
            f(&mut doc.body);
            outcome = UpdateOutcome::Updated;
            Some(())
        })?;
        Ok(outcome)
    }

    /// Update the first document matching `predicate`, or insert `body`
    ///
    /// Returns the id of the touched document and whether it was inserted.
    /// The lookup and the write happen under one write lock, so this is only
    /// race-free against writers in the same process.
    pub fn upsert_one(
        &self,
        predicate: impl Fn(&T) -> bool,
        update: impl FnOnce(&mut T),
        body: T,
    ) -> Result<(ObjectId, bool), TrackerError> {
        let touched = self.modify(|documents| {
            match documents.iter_mut().find(|doc| predicate(&doc.body)) {
                Some(doc) => {
                    update(&mut doc.body);
                    Some((doc.id, false))
                }
                None => {
                    let id = ObjectId::new();
                    documents.push(Document { id, body });
                    Some((id, true))
                }
            }
        })?;
        touched.ok_or_else(|| TrackerError::Storage(format!("Upsert into {} failed", self.name)))
    }

    /// Delete the document with `id`; returns whether it existed
    pub fn delete(&self, id: ObjectId) -> Result<bool, TrackerError> {
        let removed = self.modify(|documents| {
            let index = documents.iter().position(|doc| doc.id == id)?;
            documents.remove(index);
            Some(())
        })?;
        Ok(removed.is_some())
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.len())
    }
}
