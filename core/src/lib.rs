//! Client core for creating contacts.
//!
//! # Overview
//! Builds the `POST /contact` request, parses the server's reply into a
//! `ContactRecord`, and drives a create-contact form whose loading overlay
//! tracks the in-flight submission.
//!
//! # Design
//! - `ContactClient` is stateless; it holds only `base_url`.
//! - Request building and response parsing are plain data (`HttpRequest`,
//!   `HttpResponse`); the round trip goes through an `HttpTransport`.
//! - `CreateContactForm` renders into an owned `Element` tree instead of a
//!   browser document.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod markup;
pub mod transport;
pub mod types;

pub use client::ContactClient;
pub use error::{ContactError, FormError, TransportError};
pub use form::{CreateContactForm, LoadingState, SubmitEvent, Submission};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use markup::Element;
pub use transport::{HttpTransport, UreqTransport};
pub use types::{ContactDraft, ContactId, ContactRecord};
