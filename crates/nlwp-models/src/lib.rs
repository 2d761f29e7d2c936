//! # nlwp-models — NLWeb Protocol Data Models
//!
//! The message types of the NLWeb protocol as the server implementation
//! defines them: `AskRequest`/`AskResponse` for the ask operation and
//! `WhoRequest`/`WhoResponse` for endpoint discovery, plus their nested
//! types.
//!
//! Every model derives [`utoipa::ToSchema`], so each type can export its
//! OpenAPI schema object at runtime. The [`registry`] module publishes
//! these exports by model name; `nlwp-conformance` consumes them as the
//! implementation side of the specification/implementation comparison.
//!
//! ## Naming
//!
//! The implementation spells the metadata field `meta` on the wire, while
//! the TypeSpec specification spells it `_meta`. That divergence is
//! intentional and is reconciled by the conformance checker, not here.

pub mod models;
pub mod registry;

pub use models::{AskRequest, AskResponse, Endpoint, Meta, Mode, ResultItem, WhoRequest, WhoResponse};
pub use registry::{model_schema, ExportedModel, PROTOCOL_MODELS};
