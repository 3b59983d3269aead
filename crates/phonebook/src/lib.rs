//! Client-side phonebook state.
//!
//! The crate models what a phonebook screen needs without tying it to a UI
//! toolkit: the contact list, the add form, a live name filter, confirmation
//! prompts, and a short-lived notification banner. All server traffic goes
//! through [`ContactsGateway`]; [`HttpContactsGateway`] speaks to the
//! `/api/persons` endpoints.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use mockable::DefaultClock;
//! use phonebook::{HttpContactsGateway, PhonebookView, Prompt};
//!
//! struct AlwaysYes;
//!
//! impl Prompt for AlwaysYes {
//!     fn confirm(&self, _message: &str) -> bool {
//!         true
//!     }
//! }
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let base = "http://localhost:3003".parse()?;
//! let gateway = HttpContactsGateway::new(base, Duration::from_secs(5))?;
//! let mut view = PhonebookView::new(gateway, AlwaysYes, Arc::new(DefaultClock));
//! view.load().await?;
//! view.set_new_name("Ada Lovelace");
//! view.set_new_number("39-44-5323523");
//! view.submit().await;
//! # Ok(())
//! # }
//! ```

mod contact;
mod filter;
mod gateway;
mod notification;
mod view;

pub use contact::{Contact, NewContact};
pub use filter::{filter_contacts, name_matches};
pub use gateway::{ContactsGateway, GatewayError, HttpContactsGateway};
pub use notification::{NOTIFICATION_TTL, Notification, Severity};
pub use view::{Outcome, PhonebookView, Prompt};
