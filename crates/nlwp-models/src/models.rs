//! # Protocol Message Types
//!
//! Request and response bodies for the two NLWeb operations, `ask` and
//! `who`. Field optionality here is authoritative for the implementation
//! side: a non-`Option` field is required on the wire and appears in the
//! derived schema's `required` list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Free-form metadata carried alongside a request or response.
///
/// The protocol does not constrain its keys.
pub type Meta = BTreeMap<String, serde_json::Value>;

/// How the server should treat the results of an ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Return the ranked result list as-is.
    List,
    /// Summarize the top results into a short answer.
    Summarize,
    /// Generate a full answer grounded in the results.
    Generate,
}

/// Request body for the `ask` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AskRequest {
    /// Natural-language query text.
    pub query: String,

    /// Restrict the query to a single site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Earlier queries in the same conversation, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Vec<String>>,

    /// Request incremental delivery of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub meta: Option<Meta>,
}

/// A single ranked result returned by `ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultItem {
    pub url: String,

    pub name: String,

    /// Site the result was drawn from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Relevance score, higher is better.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Structured schema.org representation of the result, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub schema_object: Option<BTreeMap<String, serde_json::Value>>,
}

/// Response body for the `ask` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    /// Identifier correlating this response with its request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    pub results: Vec<ResultItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub meta: Option<Meta>,
}

/// Request body for the `who` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WhoRequest {
    /// Natural-language description of the information need.
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub meta: Option<Meta>,
}

/// An endpoint able to answer queries of the described kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Endpoint {
    pub name: String,

    pub base_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Operations the endpoint supports, e.g. `ask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}

/// Response body for the `who` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WhoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    pub endpoints: Vec<Endpoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub meta: Option<Meta>,
}
