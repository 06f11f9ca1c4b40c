//! Report annotations
//!
//! Display text for projections. Consumers treat the output as opaque.

pub mod summary;

pub use summary::render_summary;
