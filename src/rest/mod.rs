//! Resource addressing for the SmartFile API.
//!
//! - [`PathTemplate`] and [`Segment`]: static URL templates and their
//!   resolution against a base URL
//! - [`ResourceEndpoint`]: a CRUD handle built from a template and the
//!   shared session
//! - [`Capabilities`] and [`ResourceOperation`]: which operations a family
//!   supports
//!
//! Typed handles for the concrete families live in [`crate::resources`].

mod endpoint;
mod path;

pub use endpoint::{Capabilities, ResourceEndpoint, ResourceOperation};
pub use path::{join_segment, PathTemplate, Segment};
