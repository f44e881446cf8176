use crate::schema::SchemaNode;
use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs an endpoint can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Returned when a verb name is not one of the supported HTTP verbs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP verb `{0}`")]
pub struct ParseVerbError(pub String);

impl HttpVerb {
    pub const ALL: [HttpVerb; 7] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
        HttpVerb::Head,
        HttpVerb::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
        }
    }
}

impl TryFrom<&Method> for HttpVerb {
    type Error = ParseVerbError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        HttpVerb::ALL
            .into_iter()
            .find(|verb| Method::from(*verb) == *method)
            .ok_or_else(|| ParseVerbError(method.to_string()))
    }
}

impl From<HttpVerb> for Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Patch => Method::PATCH,
            HttpVerb::Delete => Method::DELETE,
            HttpVerb::Head => Method::HEAD,
            HttpVerb::Options => Method::OPTIONS,
        }
    }
}

impl FromStr for HttpVerb {
    type Err = ParseVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = Method::from_bytes(s.trim().to_ascii_uppercase().as_bytes())
            .map_err(|_| ParseVerbError(s.to_string()))?;
        HttpVerb::try_from(&method)
    }
}

impl TryFrom<String> for HttpVerb {
    type Error = ParseVerbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a client places a parameter's value in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterPosition {
    Route,
    Query,
    Body,
    Form,
    Header,
}

impl fmt::Display for ParameterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterPosition::Route => write!(f, "Route"),
            ParameterPosition::Query => write!(f, "Query"),
            ParameterPosition::Body => write!(f, "Body"),
            ParameterPosition::Form => write!(f, "Form"),
            ParameterPosition::Header => write!(f, "Header"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointParameter {
    pub name: String,
    pub schema: SchemaNode,
    pub position: ParameterPosition,
}

/// One callable endpoint of the API surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Slash-joined path without leading or trailing separators.
    pub route: String,
    pub name: String,
    pub controller: String,
    pub verb: HttpVerb,
    pub parameters: Vec<EndpointParameter>,
    pub response: SchemaNode,
}

impl EndpointDescriptor {
    pub fn parameter(&self, name: &str) -> Option<&EndpointParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
