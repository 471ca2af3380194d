//! Person storage.
//!
//! [`PersonStore`] is the repository seam the contact service is built on.
//! [`InMemoryPersonStore`] keeps records in insertion order with name and id
//! indexes, all behind one lock so that check-then-write sequences are atomic.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::{NewPerson, Person};

/// Repository of person records.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Number of stored records.
    async fn len(&self) -> usize;

    /// Whether the store holds no records.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// All records in insertion order.
    async fn all(&self) -> Vec<Person>;

    /// First record whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Option<Person>;

    /// Append a new record with a fresh id.
    ///
    /// Fails with [`Error::DuplicateName`] and leaves the store untouched when
    /// the name is already present.
    async fn insert(&self, new: NewPerson) -> Result<Person>;

    /// Replace the phone of the record with this name, keeping its position.
    async fn update_phone(&self, name: &str, phone: String) -> Option<Person>;
}

#[derive(Debug, Default)]
struct Records {
    persons: Vec<Person>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl Records {
    fn push(&mut self, person: Person) {
        let index = self.persons.len();
        // first occurrence wins, matching storage-order lookup
        self.by_name.entry(person.name.clone()).or_insert(index);
        self.by_id.insert(person.id.clone(), index);
        self.persons.push(person);
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }
}

/// In-process person store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    records: RwLock<Records>,
}

impl InMemoryPersonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records in order.
    ///
    /// Records are trusted as-is: ids and names are indexed but not checked.
    pub fn with_records(persons: impl IntoIterator<Item = Person>) -> Self {
        let mut records = Records::default();
        for person in persons {
            records.push(person);
        }
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn len(&self) -> usize {
        self.records.read().await.persons.len()
    }

    async fn all(&self) -> Vec<Person> {
        self.records.read().await.persons.clone()
    }

    async fn find_by_name(&self, name: &str) -> Option<Person> {
        let records = self.records.read().await;
        records
            .by_name
            .get(name)
            .map(|&index| records.persons[index].clone())
    }

    async fn insert(&self, new: NewPerson) -> Result<Person> {
        let mut records = self.records.write().await;

        if records.by_name.contains_key(&new.name) {
            return Err(Error::DuplicateName(new.name));
        }

        let id = records.fresh_id();
        let person = new.into_person(id);
        records.push(person.clone());

        Ok(person)
    }

    async fn update_phone(&self, name: &str, phone: String) -> Option<Person> {
        let mut records = self.records.write().await;
        let index = *records.by_name.get(name)?;

        let updated = Person {
            phone: Some(phone),
            ..records.persons[index].clone()
        };
        records.persons[index] = updated.clone();

        Some(updated)
    }
}
