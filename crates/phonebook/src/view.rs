//! Phonebook screen state and its submit/remove flows.

use std::mem;
use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, warn};

use crate::filter::filter_contacts;
use crate::{Contact, ContactsGateway, GatewayError, NewContact, Notification, Severity};

/// Yes/no confirmation shown before replacing or deleting a contact.
pub trait Prompt {
    /// Ask the user `message`; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;
}

/// What a submit or remove ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new contact was stored.
    Created,
    /// An existing contact got a new number.
    Updated,
    /// The contact was deleted.
    Deleted,
    /// The user declined, or there was nothing to act on. No request was sent.
    Cancelled,
    /// The server refused the request or could not be reached.
    Failed,
}

/// Client-side phonebook state.
///
/// Mutations go to the server first and are applied locally once it
/// answers. Each one leaves a [`Notification`] behind.
pub struct PhonebookView<G, P> {
    gateway: G,
    prompt: P,
    clock: Arc<dyn Clock>,
    contacts: Vec<Contact>,
    new_name: String,
    new_number: String,
    filter: String,
    notification: Option<Notification>,
}

impl<G: ContactsGateway, P: Prompt> PhonebookView<G, P> {
    /// Empty view; call [`Self::load`] to fetch the list.
    pub fn new(gateway: G, prompt: P, clock: Arc<dyn Clock>) -> Self {
        Self {
            gateway,
            prompt,
            clock,
            contacts: Vec::new(),
            new_name: String::new(),
            new_number: String::new(),
            filter: String::new(),
            notification: None,
        }
    }

    /// Replace the local list with the server's.
    ///
    /// # Errors
    ///
    /// Returns the gateway error and shows it in the banner.
    pub async fn load(&mut self) -> Result<(), GatewayError> {
        match self.gateway.list().await {
            Ok(contacts) => {
                debug!(count = contacts.len(), "contacts loaded");
                self.contacts = contacts;
                Ok(())
            }
            Err(err) => {
                self.notify(err.to_string(), Severity::Error);
                Err(err)
            }
        }
    }

    /// Every contact held locally.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts matching the current filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&Contact> {
        filter_contacts(&self.contacts, &self.filter)
    }

    /// Name field of the add form.
    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Number field of the add form.
    #[must_use]
    pub fn new_number(&self) -> &str {
        &self.new_number
    }

    /// Current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Update the name field.
    pub fn set_new_name(&mut self, value: impl Into<String>) {
        self.new_name = value.into();
    }

    /// Update the number field.
    pub fn set_new_number(&mut self, value: impl Into<String>) {
        self.new_number = value.into();
    }

    /// Update the filter text.
    pub fn set_filter(&mut self, value: impl Into<String>) {
        self.filter = value.into();
    }

    /// The banner, unless it has expired.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        let now = self.clock.utc();
        self.notification
            .as_ref()
            .filter(|banner| !banner.is_expired(now))
    }

    /// Add the contact in the form, or offer to replace the number of an
    /// existing contact with the same name. The form is cleared either way.
    pub async fn submit(&mut self) -> Outcome {
        let name = mem::take(&mut self.new_name);
        let number = mem::take(&mut self.new_number);
        let draft = NewContact::new(name, number);

        let existing = self
            .contacts
            .iter()
            .find(|contact| contact.name == draft.name)
            .map(|contact| contact.id.clone());

        match existing {
            Some(id) => self.replace(&id, draft).await,
            None => self.create(draft).await,
        }
    }

    async fn create(&mut self, draft: NewContact) -> Outcome {
        match self.gateway.create(&draft).await {
            Ok(contact) => {
                self.notify(format!("Added {}", contact.name), Severity::Success);
                self.contacts.push(contact);
                Outcome::Created
            }
            Err(err) => self.fail(&draft.name, &err),
        }
    }

    async fn replace(&mut self, id: &str, draft: NewContact) -> Outcome {
        let question = format!(
            "{} is already added to phonebook, replace the old number with a new one?",
            draft.name
        );
        if !self.prompt.confirm(&question) {
            return Outcome::Cancelled;
        }

        match self.gateway.update(id, &draft).await {
            Ok(updated) => {
                self.notify(format!("Updated {}", updated.name), Severity::Success);
                if let Some(slot) = self.contacts.iter_mut().find(|c| c.id == updated.id) {
                    *slot = updated;
                }
                Outcome::Updated
            }
            Err(GatewayError::NotFound) => self.forget(id, &draft.name),
            Err(err) => self.fail(&draft.name, &err),
        }
    }

    /// Ask for confirmation, then delete the contact with `id`.
    pub async fn remove(&mut self, id: &str) -> Outcome {
        let Some(name) = self
            .contacts
            .iter()
            .find(|contact| contact.id == id)
            .map(|contact| contact.name.clone())
        else {
            debug!(id, "remove requested for unknown contact");
            return Outcome::Cancelled;
        };

        if !self.prompt.confirm(&format!("Delete {name}?")) {
            return Outcome::Cancelled;
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.contacts.retain(|contact| contact.id != id);
                self.notify(format!("Deleted {name}"), Severity::Success);
                Outcome::Deleted
            }
            Err(GatewayError::NotFound) => self.forget(id, &name),
            Err(err) => self.fail(&name, &err),
        }
    }

    /// Drop a contact the server no longer has.
    fn forget(&mut self, id: &str, name: &str) -> Outcome {
        warn!(id, name, "contact already removed from server");
        self.contacts.retain(|contact| contact.id != id);
        self.notify(
            format!("Information of {name} has already been removed from server"),
            Severity::Error,
        );
        Outcome::Failed
    }

    fn fail(&mut self, name: &str, err: &GatewayError) -> Outcome {
        warn!(name, error = %err, "contact request failed");
        self.notify(err.to_string(), Severity::Error);
        Outcome::Failed
    }

    fn notify(&mut self, message: String, severity: Severity) {
        self.notification = Some(Notification::new(message, severity, self.clock.utc()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Create(NewContact),
        Update(String, NewContact),
        Delete(String),
    }

    #[derive(Default)]
    struct Server {
        contacts: Vec<Contact>,
        calls: Vec<Call>,
        next_id: usize,
        reject_with: Option<GatewayError>,
    }

    /// In-memory stand-in for the REST API.
    #[derive(Clone, Default)]
    struct FakeGateway(Arc<Mutex<Server>>);

    impl FakeGateway {
        fn with(contacts: &[(&str, &str, &str)]) -> Self {
            let gateway = Self::default();
            gateway.server().contacts = contacts
                .iter()
                .map(|(id, name, number)| Contact {
                    id: (*id).to_owned(),
                    name: (*name).to_owned(),
                    number: (*number).to_owned(),
                })
                .collect();
            gateway
        }

        fn server(&self) -> std::sync::MutexGuard<'_, Server> {
            self.0.lock().expect("gateway mutex")
        }

        fn calls(&self) -> Vec<Call> {
            self.server().calls.clone()
        }

        fn drop_remote(&self, id: &str) {
            self.server().contacts.retain(|c| c.id != id);
        }
    }

    #[async_trait]
    impl ContactsGateway for FakeGateway {
        async fn list(&self) -> Result<Vec<Contact>, GatewayError> {
            let mut server = self.server();
            server.calls.push(Call::List);
            Ok(server.contacts.clone())
        }

        async fn create(&self, contact: &NewContact) -> Result<Contact, GatewayError> {
            let mut server = self.server();
            server.calls.push(Call::Create(contact.clone()));
            if let Some(err) = server.reject_with.clone() {
                return Err(err);
            }
            server.next_id += 1;
            let stored = Contact {
                id: format!("new-{}", server.next_id),
                name: contact.name.clone(),
                number: contact.number.clone(),
            };
            server.contacts.push(stored.clone());
            Ok(stored)
        }

        async fn update(&self, id: &str, contact: &NewContact) -> Result<Contact, GatewayError> {
            let mut server = self.server();
            server
                .calls
                .push(Call::Update(id.to_owned(), contact.clone()));
            let slot = server
                .contacts
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(GatewayError::NotFound)?;
            slot.name = contact.name.clone();
            slot.number = contact.number.clone();
            Ok(slot.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), GatewayError> {
            let mut server = self.server();
            server.calls.push(Call::Delete(id.to_owned()));
            let before = server.contacts.len();
            server.contacts.retain(|c| c.id != id);
            if server.contacts.len() == before {
                return Err(GatewayError::NotFound);
            }
            Ok(())
        }
    }

    /// Answers every question the same way and records what was asked.
    struct ScriptedPrompt {
        answer: bool,
        asked: Mutex<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Mutex::new(Vec::new()),
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().expect("prompt mutex").clone()
        }
    }

    impl Prompt for Arc<ScriptedPrompt> {
        fn confirm(&self, message: &str) -> bool {
            self.asked
                .lock()
                .expect("prompt mutex")
                .push(message.to_owned());
            self.answer
        }
    }

    struct StepClock(Mutex<DateTime<Utc>>);

    impl StepClock {
        fn advance(&self, delta: TimeDelta) {
            *self.0.lock().expect("clock mutex") += delta;
        }
    }

    impl Clock for StepClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.0.lock().expect("clock mutex")
        }
    }

    #[fixture]
    fn clock() -> Arc<StepClock> {
        let start = Utc
            .with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        Arc::new(StepClock(Mutex::new(start)))
    }

    type View = PhonebookView<FakeGateway, Arc<ScriptedPrompt>>;

    async fn loaded(
        gateway: &FakeGateway,
        answer: bool,
        clock: Arc<StepClock>,
    ) -> (View, Arc<ScriptedPrompt>) {
        let prompt = Arc::new(ScriptedPrompt::answering(answer));
        let mut view = PhonebookView::new(gateway.clone(), prompt.clone(), clock);
        view.load().await.expect("load");
        (view, prompt)
    }

    fn banner(view: &View) -> Option<(String, Severity)> {
        view.notification()
            .map(|n| (n.message().to_owned(), n.severity()))
    }

    #[rstest]
    #[tokio::test]
    async fn filter_matches_names_case_insensitively(clock: Arc<StepClock>) {
        let gateway = FakeGateway::with(&[
            ("1", "Arto Hellas", "040-123456"),
            ("2", "Ada Lovelace", "39-44-5323523"),
        ]);
        let (mut view, _) = loaded(&gateway, true, clock).await;

        view.set_filter("LOVE");
        let names: Vec<&str> = view.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ada Lovelace"]);

        view.set_filter("");
        assert_eq!(view.visible().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn submit_new_name_creates_and_clears_form(clock: Arc<StepClock>) {
        let gateway = FakeGateway::default();
        let (mut view, prompt) = loaded(&gateway, true, clock).await;
        view.set_new_name("Dan Abramov");
        view.set_new_number("12-43-234345");

        assert_eq!(view.submit().await, Outcome::Created);
        assert_eq!(view.contacts().len(), 1);
        assert_eq!(view.new_name(), "");
        assert_eq!(view.new_number(), "");
        assert!(prompt.asked().is_empty());
        assert_eq!(
            banner(&view),
            Some(("Added Dan Abramov".to_owned(), Severity::Success))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn existing_name_asks_then_replaces_number(clock: Arc<StepClock>) {
        let gateway = FakeGateway::with(&[("1", "Arto Hellas", "040-123456")]);
        let (mut view, prompt) = loaded(&gateway, true, clock).await;
        view.set_new_name("Arto Hellas");
        view.set_new_number("040-999999");

        assert_eq!(view.submit().await, Outcome::Updated);
        assert_eq!(
            prompt.asked(),
            ["Arto Hellas is already added to phonebook, replace the old number with a new one?"]
        );
        assert_eq!(view.contacts().len(), 1);
        assert_eq!(view.contacts()[0].number, "040-999999");
        assert_eq!(
            banner(&view),
            Some(("Updated Arto Hellas".to_owned(), Severity::Success))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn declined_replace_sends_nothing_but_clears_form(clock: Arc<StepClock>) {
        let gateway = FakeGateway::with(&[("1", "Arto Hellas", "040-123456")]);
        let (mut view, _) = loaded(&gateway, false, clock).await;
        view.set_new_name("Arto Hellas");
        view.set_new_number("040-999999");

        assert_eq!(view.submit().await, Outcome::Cancelled);
        assert_eq!(gateway.calls(), [Call::List]);
        assert_eq!(view.new_name(), "");
        assert_eq!(view.new_number(), "");
        assert_eq!(view.contacts()[0].number, "040-123456");
    }

    #[rstest]
    #[tokio::test]
    async fn stale_replace_drops_local_entry(clock: Arc<StepClock>) {
        let gateway = FakeGateway::with(&[
            ("1", "Arto Hellas", "040-123456"),
            ("2", "Ada Lovelace", "39-44-5323523"),
        ]);
        let (mut view, _) = loaded(&gateway, true, clock).await;
        gateway.drop_remote("1");
        view.set_new_name("Arto Hellas");
        view.set_new_number("040-999999");

        assert_eq!(view.submit().await, Outcome::Failed);
        let names: Vec<&str> = view.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ada Lovelace"]);
        assert_eq!(
            banner(&view),
            Some((
                "Information of Arto Hellas has already been removed from server".to_owned(),
                Severity::Error
            ))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn server_rejection_is_shown_in_banner(clock: Arc<StepClock>) {
        let gateway = FakeGateway::default();
        gateway.server().reject_with = Some(GatewayError::Rejected {
            status: 400,
            message: "contact number is missing".to_owned(),
        });
        let (mut view, _) = loaded(&gateway, true, clock).await;
        view.set_new_name("Nameless Number");

        assert_eq!(view.submit().await, Outcome::Failed);
        assert!(view.contacts().is_empty());
        assert_eq!(
            banner(&view),
            Some(("contact number is missing".to_owned(), Severity::Error))
        );
    }

    #[rstest]
    #[case(true, Outcome::Deleted, 0)]
    #[case(false, Outcome::Cancelled, 1)]
    #[tokio::test]
    async fn remove_asks_first(
        clock: Arc<StepClock>,
        #[case] answer: bool,
        #[case] outcome: Outcome,
        #[case] remaining: usize,
    ) {
        let gateway = FakeGateway::with(&[("1", "Arto Hellas", "040-123456")]);
        let (mut view, prompt) = loaded(&gateway, answer, clock).await;

        assert_eq!(view.remove("1").await, outcome);
        assert_eq!(prompt.asked(), ["Delete Arto Hellas?"]);
        assert_eq!(view.contacts().len(), remaining);
        assert_eq!(gateway.server().contacts.len(), remaining);
    }

    #[rstest]
    #[tokio::test]
    async fn stale_delete_drops_local_entry(clock: Arc<StepClock>) {
        let gateway = FakeGateway::with(&[
            ("1", "Arto Hellas", "040-123456"),
            ("2", "Ada Lovelace", "39-44-5323523"),
        ]);
        let (mut view, _) = loaded(&gateway, true, clock).await;
        gateway.drop_remote("1");

        assert_eq!(view.remove("1").await, Outcome::Failed);
        assert_eq!(gateway.calls(), [Call::List, Call::Delete("1".to_owned())]);
        let names: Vec<&str> = view.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ada Lovelace"]);
        assert_eq!(
            banner(&view),
            Some((
                "Information of Arto Hellas has already been removed from server".to_owned(),
                Severity::Error
            ))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn remove_of_unknown_id_asks_and_sends_nothing(clock: Arc<StepClock>) {
        let gateway = FakeGateway::with(&[("1", "Arto Hellas", "040-123456")]);
        let (mut view, prompt) = loaded(&gateway, true, clock).await;

        assert_eq!(view.remove("missing").await, Outcome::Cancelled);
        assert!(prompt.asked().is_empty());
        assert_eq!(gateway.calls(), [Call::List]);
        assert_eq!(view.contacts().len(), 1);
        assert!(view.notification().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn banner_expires_after_ttl(clock: Arc<StepClock>) {
        let gateway = FakeGateway::default();
        let (mut view, _) = loaded(&gateway, true, clock.clone()).await;
        view.set_new_name("Mary Poppendieck");
        view.set_new_number("39-23-6423122");
        view.submit().await;

        clock.advance(TimeDelta::milliseconds(3_900));
        assert!(view.notification().is_some());
        clock.advance(TimeDelta::milliseconds(100));
        assert!(view.notification().is_none());
    }
}
