// Configuration layer
pub mod config;

// Domain layer (template mapping and rendering)
pub mod template;

// Re-export the primary API surface
pub use template::{
    map_named_vars, render_template_payload, Catalog, OrderingTable, RenderedPayload, Template,
    TemplateStore,
};
