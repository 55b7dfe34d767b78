//! The create-contact form: markup, field input and the submit handler.
//!
//! # Design
//! The rendered tree lives behind `Arc<RwLock<_>>` so the host can inspect or
//! mutate it while a submission is in flight. `submit` holds the lock only
//! for the synchronous steps before and after the network await, which
//! leaves overlapping submissions possible. Nothing guards against them.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::client::ContactClient;
use crate::error::{ContactError, FormError};
use crate::markup::Element;
use crate::transport::HttpTransport;
use crate::types::{ContactDraft, ContactRecord};

pub const LOADING_SHADE_ID: &str = "loading-shade";

const LOADING_SHADE_CLASS: &str = "loading-shade-create-form";
const HIDDEN_CLASS: &str = "hidden";

pub const NAME_FIELD: &str = "name";
pub const NUMBER_FIELD: &str = "number";
pub const EMAIL_FIELD: &str = "email";

/// Visibility of the loading overlay, expressed through its class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Hidden,
    Visible,
}

impl LoadingState {
    pub fn class_name(&self) -> String {
        match self {
            LoadingState::Hidden => format!("{LOADING_SHADE_CLASS} {HIDDEN_CLASS}"),
            LoadingState::Visible => LOADING_SHADE_CLASS.to_string(),
        }
    }

    pub fn of(element: &Element) -> Self {
        if element.has_class(HIDDEN_CLASS) {
            LoadingState::Hidden
        } else {
            LoadingState::Visible
        }
    }
}

/// The submit event handed to the form. `prevent_default` stops the host
/// from performing its native form navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How a dispatched submission ended. Both arms leave the overlay hidden.
#[derive(Debug)]
pub enum Submission {
    Created(ContactRecord),
    Failed(ContactError),
}

#[derive(Clone)]
pub struct CreateContactForm {
    document: Arc<RwLock<Element>>,
    client: ContactClient,
    transport: Arc<dyn HttpTransport>,
}

impl CreateContactForm {
    pub fn new(client: ContactClient, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            document: Arc::new(RwLock::new(render())),
            client,
            transport,
        }
    }

    /// Shared handle on the rendered tree.
    pub fn document(&self) -> Arc<RwLock<Element>> {
        Arc::clone(&self.document)
    }

    pub async fn to_html(&self) -> String {
        self.document.read().await.to_html()
    }

    /// Type `value` into the input named `field`.
    pub async fn set_field(&self, field: &str, value: &str) -> Result<(), FormError> {
        let mut document = self.document.write().await;
        let input = document
            .find_by_name_mut(field)
            .ok_or_else(|| FormError::FieldMissing(field.to_string()))?;
        input.set_attr("value", value);
        Ok(())
    }

    /// `None` once the overlay has been removed from the tree.
    pub async fn loading_state(&self) -> Option<LoadingState> {
        self.document
            .read()
            .await
            .find_by_id(LOADING_SHADE_ID)
            .map(LoadingState::of)
    }

    /// Handle a submit event.
    ///
    /// A missing overlay is reported before anything is sent. Once the
    /// request is dispatched, success and failure are only logged and both
    /// hide the overlay again.
    pub async fn submit(&self, event: &mut SubmitEvent) -> Result<Submission, FormError> {
        event.prevent_default();
        debug!("submit create form");

        let draft = {
            let mut document = self.document.write().await;
            let shade = document
                .find_by_id_mut(LOADING_SHADE_ID)
                .ok_or(FormError::LoadingShadeMissing)?;
            shade.class_name = LoadingState::Visible.class_name();
            read_draft(&document)?
        };

        let outcome = match self.client.create_contact(self.transport.as_ref(), draft).await {
            Ok(record) => {
                info!(?record, "contact created");
                Submission::Created(record)
            }
            Err(err) => {
                error!(error = %err, "error creating contact");
                Submission::Failed(err)
            }
        };

        if let Some(shade) = self.document.write().await.find_by_id_mut(LOADING_SHADE_ID) {
            shade.class_name = LoadingState::Hidden.class_name();
        }
        Ok(outcome)
    }
}

fn read_draft(document: &Element) -> Result<ContactDraft, FormError> {
    let value = |field: &str| {
        document
            .find_by_name(field)
            .map(|input| input.attr("value").unwrap_or_default().to_string())
            .ok_or_else(|| FormError::FieldMissing(field.to_string()))
    };
    Ok(ContactDraft {
        name: value(NAME_FIELD)?,
        phone: value(NUMBER_FIELD)?,
        email: value(EMAIL_FIELD)?,
    })
}

fn text_input(name: &str, placeholder: &str, input_type: &str) -> Element {
    Element::new("input")
        .with_class("card__input")
        .with_attr("name", name)
        .with_attr("placeholder", placeholder)
        .with_attr("type", input_type)
        .with_attr("value", "")
}

/// Build the form markup: title, the three inputs plus submit button, and
/// the loading overlay as a sibling of the form.
pub fn render() -> Element {
    let loader = (0..3).fold(Element::new("div").with_class("loader"), |loader, _| {
        loader.with_child(Element::new("li").with_class("ball"))
    });

    let loading_shade = Element::new("div")
        .with_id(LOADING_SHADE_ID)
        .with_class(&LoadingState::Hidden.class_name())
        .with_child(loader);

    let title = Element::new("div").with_class("title").with_text("Nuevo contacto");

    let form = Element::new("form")
        .with_class("card__form")
        .with_child(text_input(NAME_FIELD, "Nombre", "text"))
        .with_child(text_input(NUMBER_FIELD, "Numero", "tel"))
        .with_child(text_input(EMAIL_FIELD, "Correo", "email"))
        .with_child(
            Element::new("button")
                .with_class("card__btn")
                .with_attr("type", "submit")
                .with_text("Guardar"),
        );

    Element::new("div")
        .with_class("card__front")
        .with_child(title)
        .with_child(form)
        .with_child(loading_shade)
}
