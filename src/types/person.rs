//! Contact record types.

use serde::{Deserialize, Serialize};

/// A contact record as held in the store.
///
/// `street` and `city` are stored flat; the GraphQL `address` field is a
/// projection built by [`Person::address`] on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Contact name, unique across the store
    pub name: String,
    /// Phone number; `None` when no phone is on file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street line of the address
    pub street: String,
    /// City of the address
    pub city: String,
    /// Identifier assigned at creation, never changed
    pub id: String,
}

impl Person {
    /// Build the derived address view for this person.
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }

    /// Whether a non-empty phone number is on file.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Postal address derived from a person's `street` and `city`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, async_graphql::SimpleObject)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// Input for creating a person. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

impl NewPerson {
    /// Create a new person input. An empty phone is stored as no phone.
    pub fn new(
        name: impl Into<String>,
        phone: Option<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.filter(|p| !p.is_empty()),
            street: street.into(),
            city: city.into(),
        }
    }

    /// Attach an id, producing the stored record.
    pub fn into_person(self, id: String) -> Person {
        Person {
            name: self.name,
            phone: self.phone,
            street: self.street,
            city: self.city,
            id,
        }
    }
}

/// Filter for listing persons by phone presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhoneFilter {
    /// Only persons with a phone on file
    HasPhone,
    /// Only persons without a phone
    NoPhone,
}

impl PhoneFilter {
    /// Check whether a person passes this filter.
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PhoneFilter::HasPhone => person.has_phone(),
            PhoneFilter::NoPhone => !person.has_phone(),
        }
    }
}

impl std::fmt::Display for PhoneFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhoneFilter::HasPhone => write!(f, "HAS_PHONE"),
            PhoneFilter::NoPhone => write!(f, "NO_PHONE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(phone: Option<&str>) -> Person {
        NewPerson::new("Ana", phone.map(str::to_string), "carrera 7", "Medellín")
            .into_person("abc".to_string())
    }

    #[test]
    fn test_address_is_projected_from_fields() {
        let p = person(Some("300"));
        assert_eq!(
            p.address(),
            Address {
                street: "carrera 7".to_string(),
                city: "Medellín".to_string(),
            }
        );
    }

    #[test]
    fn test_address_follows_field_changes() {
        let mut p = person(None);
        p.city = "Cali".to_string();
        assert_eq!(p.address().city, "Cali");
    }

    #[test]
    fn test_empty_phone_is_absent() {
        let new = NewPerson::new("Ana", Some(String::new()), "s", "c");
        assert!(new.phone.is_none());
        assert!(!new.into_person("1".to_string()).has_phone());
    }

    #[test]
    fn test_phone_filter_matches() {
        let with = person(Some("3001234567"));
        let without = person(None);

        assert!(PhoneFilter::HasPhone.matches(&with));
        assert!(!PhoneFilter::HasPhone.matches(&without));
        assert!(PhoneFilter::NoPhone.matches(&without));
        assert!(!PhoneFilter::NoPhone.matches(&with));
    }

    #[test]
    fn test_empty_stored_phone_counts_as_no_phone() {
        let mut p = person(Some("300"));
        p.phone = Some(String::new());

        assert!(!p.has_phone());
        assert!(PhoneFilter::NoPhone.matches(&p));
        assert!(!PhoneFilter::HasPhone.matches(&p));
    }

    #[test]
    fn test_phone_filter_serialization() {
        assert_eq!(
            serde_json::to_string(&PhoneFilter::HasPhone).unwrap(),
            "\"HAS_PHONE\""
        );
        let parsed: PhoneFilter = serde_json::from_str("\"NO_PHONE\"").unwrap();
        assert_eq!(parsed, PhoneFilter::NoPhone);
        assert_eq!(PhoneFilter::NoPhone.to_string(), "NO_PHONE");
    }

    #[test]
    fn test_person_without_phone_omits_field() {
        let json = serde_json::to_string(&person(None)).unwrap();
        assert!(!json.contains("phone"));

        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert!(parsed.phone.is_none());
    }
}
