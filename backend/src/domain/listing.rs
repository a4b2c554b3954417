//! Search and categorical filtering over in-memory record collections.
//!
//! Filtering is defined over a collection plus field selectors, so any record
//! type can be filtered without sharing a base type. A record matches when
//! the lower-cased search term is a substring of at least one searchable
//! field and every categorical filter either holds its "show all" sentinel
//! or equals the record's field exactly. Results keep collection order.

use serde::Serialize;
use utoipa::ToSchema;

use super::catalogue::{Claim, Client, Payment, Policy};

/// Projection of a record onto one of its string fields.
pub type FieldSelector<T> = fn(&T) -> &str;

/// Sentinel selecting every client status.
pub const ALL_CLIENT_STATUSES: &str = "All";
/// Sentinel selecting every policy type.
pub const ALL_POLICY_TYPES: &str = "All Types";
/// Sentinel selecting every claim status.
pub const ALL_CLAIM_STATUSES: &str = "All";
/// Sentinel selecting every payment status.
pub const ALL_PAYMENT_STATUSES: &str = "All Statuses";
/// Sentinel selecting every payment type.
pub const ALL_PAYMENT_TYPES: &str = "All Types";
/// Sentinel selecting incoming and outgoing payments alike.
pub const ALL_PAYMENT_DIRECTIONS: &str = "all";

#[derive(Debug, Clone)]
struct Categorical<T> {
    selector: FieldSelector<T>,
    value: String,
    show_all: &'static str,
}

impl<T> Categorical<T> {
    fn matches(&self, record: &T) -> bool {
        self.value == self.show_all || (self.selector)(record) == self.value
    }
}

/// Predicate built from a search term and categorical filters.
///
/// # Examples
/// ```
/// use insure_backend::domain::EntityFilter;
///
/// fn word(value: &String) -> &str {
///     value.as_str()
/// }
///
/// let words = vec!["Alpha".to_owned(), "beta".to_owned(), "Gamma".to_owned()];
/// let filter = EntityFilter::<String>::new(&[word]).search("A");
/// assert_eq!(filter.apply(&words).len(), 3);
///
/// let filter = EntityFilter::<String>::new(&[word]).search("MM");
/// assert_eq!(filter.apply(&words), [&words[2]]);
/// ```
#[derive(Debug, Clone)]
pub struct EntityFilter<T> {
    needle: String,
    search_fields: Vec<FieldSelector<T>>,
    categorical: Vec<Categorical<T>>,
}

impl<T> EntityFilter<T> {
    /// Start a filter that searches the given fields and matches everything.
    pub fn new(search_fields: &[FieldSelector<T>]) -> Self {
        Self {
            needle: String::new(),
            search_fields: search_fields.to_vec(),
            categorical: Vec::new(),
        }
    }

    /// Set the free-text search term; matching is case-insensitive.
    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.needle = term.to_lowercase();
        self
    }

    /// Add a categorical filter.
    ///
    /// `None` and the `show_all` sentinel both select every record.
    #[must_use]
    pub fn category(
        mut self,
        selector: FieldSelector<T>,
        show_all: &'static str,
        value: Option<&str>,
    ) -> Self {
        self.categorical.push(Categorical {
            selector,
            value: value.unwrap_or(show_all).to_owned(),
            show_all,
        });
        self
    }

    /// Whether a single record satisfies the search and every category.
    pub fn matches(&self, record: &T) -> bool {
        self.matches_search(record) && self.categorical.iter().all(|c| c.matches(record))
    }

    fn matches_search(&self, record: &T) -> bool {
        self.needle.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&self.needle))
    }

    /// Borrow the matching records in collection order.
    pub fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    /// Keep the matching records in collection order.
    pub fn retain(&self, records: Vec<T>) -> Vec<T> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Filtered records with the empty-state placeholder the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    /// Matching records in collection order.
    pub items: Vec<T>,
    /// Size of the collection before filtering.
    pub total: usize,
    /// Present only when `items` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "No claims found")]
    pub placeholder: Option<String>,
}

impl<T> Listing<T> {
    /// Filter `records` and attach a "No {noun} found" placeholder when nothing matches.
    pub fn filtered(records: Vec<T>, filter: &EntityFilter<T>, noun: &str) -> Self {
        let total = records.len();
        let items = filter.retain(records);
        let placeholder = items.is_empty().then(|| format!("No {noun} found"));
        Self {
            items,
            total,
            placeholder,
        }
    }
}

/// Clients: search name, email and id; filter by status.
pub fn client_filter(search: &str, status: Option<&str>) -> EntityFilter<Client> {
    EntityFilter::new(&[Client::name, Client::email, Client::id])
        .search(search)
        .category(|c| c.status().as_str(), ALL_CLIENT_STATUSES, status)
}

/// Policies: search client, policy number and type; filter by type.
pub fn policy_filter(search: &str, policy_type: Option<&str>) -> EntityFilter<Policy> {
    EntityFilter::new(&[Policy::client, Policy::policy_number, policy_type_label])
        .search(search)
        .category(policy_type_label, ALL_POLICY_TYPES, policy_type)
}

fn policy_type_label(policy: &Policy) -> &str {
    policy.policy_type().as_str()
}

/// Claims: search id, client name and policy number; filter by status.
pub fn claim_filter(search: &str, status: Option<&str>) -> EntityFilter<Claim> {
    EntityFilter::new(&[Claim::id, Claim::client_name, Claim::policy_number])
        .search(search)
        .category(|c| c.status().as_str(), ALL_CLAIM_STATUSES, status)
}

/// Category values for the payments list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentCategories<'a> {
    pub status: Option<&'a str>,
    pub payment_type: Option<&'a str>,
    /// `incoming`, `outgoing` or `all`.
    pub direction: Option<&'a str>,
}

/// Payments: search id, client and policy number; filter by status, type
/// and ledger direction.
pub fn payment_filter(search: &str, categories: PaymentCategories<'_>) -> EntityFilter<Payment> {
    EntityFilter::new(&[Payment::id, Payment::client, Payment::policy_number])
        .search(search)
        .category(|p| p.status().as_str(), ALL_PAYMENT_STATUSES, categories.status)
        .category(
            |p| p.payment_type().as_str(),
            ALL_PAYMENT_TYPES,
            categories.payment_type,
        )
        .category(
            |p| p.direction().as_str(),
            ALL_PAYMENT_DIRECTIONS,
            categories.direction,
        )
}
