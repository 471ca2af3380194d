//! Contact service: the business operations behind the GraphQL resolvers.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::service::store::{InMemoryPersonStore, PersonStore};
use crate::types::{NewPerson, Person, PhoneFilter};

/// Records present at process start.
pub fn seed_persons() -> Vec<Person> {
    let seed = [
        ("Gabriela", Some("3254876205"), "Bogotá", "12321454"),
        ("Marcus", Some("3145657852"), "Cartagena", "100598762"),
        ("Sara", Some("3135612697"), "Casanare", "108793510"),
        ("Cata", None, "Casanare", "108793545"),
    ];

    seed.into_iter()
        .map(|(name, phone, city, id)| Person {
            name: name.to_string(),
            phone: phone.map(str::to_string),
            street: "calle".to_string(),
            city: city.to_string(),
            id: id.to_string(),
        })
        .collect()
}

/// Contact list operations over a [`PersonStore`].
pub struct ContactService {
    store: Arc<dyn PersonStore>,
    metrics: Arc<Metrics>,
}

impl ContactService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self {
            store,
            metrics: Metrics::new(),
        }
    }

    /// Create a service over an in-memory store holding the seed records.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryPersonStore::with_records(seed_persons())))
    }

    /// Create a service over an empty in-memory store.
    pub fn empty() -> Self {
        Self::new(Arc::new(InMemoryPersonStore::new()))
    }

    /// Metrics collector shared with the HTTP layer.
    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }

    /// Number of persons currently stored.
    pub async fn count(&self) -> usize {
        self.store.len().await
    }

    /// List persons in storage order, optionally filtered by phone presence.
    pub async fn list(&self, phone_filter: Option<PhoneFilter>) -> Vec<Person> {
        let persons = self.store.all().await;

        match phone_filter {
            None => persons,
            Some(filter) => {
                debug!("Listing persons with filter {}", filter);
                persons.into_iter().filter(|p| filter.matches(p)).collect()
            }
        }
    }

    /// Find a person by exact name.
    pub async fn find_by_name(&self, name: &str) -> Option<Person> {
        self.store.find_by_name(name).await
    }

    /// Add a person. Names must be unique.
    pub async fn add(&self, new: NewPerson) -> Result<Person> {
        match self.store.insert(new).await {
            Ok(person) => {
                self.metrics.inc_persons_added();
                info!("Added person: {} (id: {})", person.name, person.id);
                Ok(person)
            }
            Err(Error::DuplicateName(name)) => {
                self.metrics.inc_duplicate_rejections();
                warn!("Rejected duplicate name: {}", name);
                Err(Error::DuplicateName(name))
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the phone number of the named person.
    ///
    /// Returns `None` when no person has that name.
    pub async fn edit_phone(&self, name: &str, phone: String) -> Option<Person> {
        let updated = self.store.update_phone(name, phone).await;

        match &updated {
            Some(person) => {
                self.metrics.inc_phones_edited();
                info!("Updated phone for {} (id: {})", person.name, person.id);
            }
            None => debug!("No person named {} to update", name),
        }

        updated
    }
}
