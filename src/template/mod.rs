//! WhatsApp template mapping and rendering.
//!
//! This module provides:
//! - Template definitions with numbered {{n}} body placeholders
//! - Named-variable mapping into template-specific positional order
//! - Provider payload rendering (body parameters, URL button parameters)
//! - In-memory template storage loadable from a JSON catalog
//!
//! # Example
//!
//! ```ignore
//! let store = Catalog::from_file(&settings.catalog.path)?.into_store();
//!
//! // Named variables in any order; the template's default ordering wins
//! let variables = json!({
//!     "url_token": "tok-123",
//!     "name": "Alice",
//!     "invoice_id": "INV-42"
//! });
//!
//! let payload = store.render("payment_due", "en", variables.as_object().unwrap())?;
//! ```

mod catalog;
mod mapper;
mod render;
mod store;
mod types;

pub use catalog::Catalog;
pub use mapper::{map_named_vars, DefaultOrdering, OrderingTable};
pub use render::{
    render_template_payload, LanguageCode, Parameter, PayloadComponent, RenderedPayload,
};
pub use store::{create_template_store, TemplateStore};
pub use types::{Button, Component, Template, TemplateError, TemplateResult};
