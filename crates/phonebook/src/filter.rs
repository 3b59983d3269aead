//! Name filtering for the contact list.

use crate::Contact;

/// Whether `name` contains `query`, ignoring case.
///
/// An empty query matches every name.
///
/// # Examples
/// ```
/// use phonebook::name_matches;
///
/// assert!(name_matches("Arto Hellas", "hell"));
/// assert!(name_matches("Arto Hellas", ""));
/// assert!(!name_matches("Arto Hellas", "ada"));
/// ```
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Contacts whose name matches `query`, in list order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| name_matches(&contact.name, query))
        .collect()
}
