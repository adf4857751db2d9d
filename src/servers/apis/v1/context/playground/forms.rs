//! API forms for the [`playground`](crate::servers::apis::v1::context::playground)
//! API context.
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::api::ApiId;
use crate::core::forwarder::ProxyRequest;

/// The description of the request the client wants to send to the origin.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyForm {
    pub method: Option<String>,
    pub url: Option<String>,
    pub headers: Option<Map<String, Value>>,
    pub body: Option<Value>,
    pub api_id: Option<String>,
}

impl ProxyForm {
    /// It builds the core request. The `path_api_id` takes precedence over
    /// the `apiId` in the form.
    ///
    /// A blank or malformed api id is ignored and the request is forwarded
    /// without being gated or recorded.
    #[must_use]
    pub fn into_proxy_request(self, path_api_id: Option<&str>) -> ProxyRequest {
        let api_id = path_api_id.or(self.api_id.as_deref()).and_then(parse_api_id);

        let headers = self.headers.map(header_values).unwrap_or_default();

        ProxyRequest {
            method: self.method,
            url: self.url,
            headers,
            body: self.body,
            api_id,
        }
    }
}

fn parse_api_id(api_id: &str) -> Option<ApiId> {
    if api_id.trim().is_empty() {
        return None;
    }

    match ApiId::from_str(api_id) {
        Ok(api_id) => Some(api_id),
        Err(err) => {
            debug!(target: "API", %err, "ignoring malformed playground api id");
            None
        }
    }
}

fn header_values(headers: Map<String, Value>) -> BTreeMap<String, String> {
    headers
        .into_iter()
        .filter_map(|(name, value)| header_text(value).map(|text| (name, text)))
        .collect()
}

/// Arrays are joined with `, `. Objects are sent as json text.
fn header_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(values) => Some(values.into_iter().filter_map(header_text).collect::<Vec<_>>().join(", ")),
        object @ Value::Object(_) => Some(object.to_string()),
    }
}
