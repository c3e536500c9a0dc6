//! Page-local text search over fetched entities.
//!
//! Matching is a case-insensitive substring test against a fixed set of
//! haystack fields per entity kind. Filtering never mutates its input and
//! is idempotent for a fixed query.

use std::borrow::Cow;

use crate::models::{Patient, Professional, Service, ServiceStatus};

/// An entity that can be matched by the free-text search box.
pub trait Searchable {
    /// Fields checked for the query. The item matches when ANY of them
    /// contains the query. Missing values are empty strings.
    fn haystacks(&self) -> Vec<Cow<'_, str>>;

    /// `needle` must already be trimmed and lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.haystacks()
            .iter()
            .any(|h| h.to_lowercase().contains(needle))
    }
}

impl Searchable for Patient {
    fn haystacks(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.contact_info.as_str()),
            Cow::Borrowed(self.address.as_str()),
        ]
    }
}

impl Searchable for Professional {
    fn haystacks(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.specialty.as_str()),
            Cow::Borrowed(self.contact_info.as_str()),
        ]
    }
}

impl Searchable for Service {
    /// One joined haystack, so a query may span adjacent fields.
    fn haystacks(&self) -> Vec<Cow<'_, str>> {
        let joined = [
            self.patient_name(),
            self.professional_name(),
            self.professional_specialty(),
            self.service_type.as_str(),
        ]
        .join(" ");
        vec![Cow::Owned(joined)]
    }
}

/// Trim and lower-case a raw search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Items matching `query`; all items, in order, when the query is blank.
pub fn filter_items<E>(items: &[E], query: &str) -> Vec<E>
where
    E: Searchable + Clone,
{
    let needle = normalize_query(query);
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect()
}

/// Services matching `query` AND, when given, having exactly `status`.
pub fn filter_services(
    items: &[Service],
    query: &str,
    status: Option<ServiceStatus>,
) -> Vec<Service> {
    let needle = normalize_query(query);
    items
        .iter()
        .filter(|s| needle.is_empty() || s.matches(&needle))
        .filter(|s| status.map_or(true, |st| s.raw_status == st.as_str()))
        .cloned()
        .collect()
}

/// Filter state held by a list page.
pub trait FilterCriteria<E>: Default {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    fn apply(&self, items: &[E]) -> Vec<E>;
}

/// Free-text search only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    pub text: String,
}

impl<E: Searchable + Clone> FilterCriteria<E> for TextQuery {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn apply(&self, items: &[E]) -> Vec<E> {
        filter_items(items, &self.text)
    }
}

/// Free-text search plus an optional exact status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceQuery {
    pub text: String,
    pub status: Option<ServiceStatus>,
}

impl FilterCriteria<Service> for ServiceQuery {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn apply(&self, items: &[Service]) -> Vec<Service> {
        filter_services(items, &self.text, self.status)
    }
}
