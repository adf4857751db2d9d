//! API resources for the [`playground`](crate::servers::apis::v1::context::playground)
//! API context.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::forwarder::{BadGateway, ForwardedResponse};

pub const BAD_GATEWAY_STATUS: u16 = 502;
pub const BAD_GATEWAY_STATUS_TEXT: &str = "Bad Gateway";

/// What the origin answered.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Forwarded {
    /// The origin status code.
    pub status: u16,
    pub status_text: String,
    /// The origin body. JSON when it can be parsed, otherwise the body text.
    pub data: Value,
    /// The origin headers with lowercase names.
    pub headers: BTreeMap<String, String>,
    /// Milliseconds from the request being sent to the response being read.
    pub duration: u64,
    /// Bytes of `data` serialized as JSON.
    pub size: usize,
}

impl From<ForwardedResponse> for Forwarded {
    fn from(response: ForwardedResponse) -> Self {
        Self {
            status: response.status,
            status_text: response.status_text,
            data: response.data,
            headers: response.headers,
            duration: response.duration,
            size: response.size,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
    pub code: String,
}

/// The origin could not be reached.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Unreachable {
    pub status: u16,
    pub status_text: String,
    pub data: TransportError,
    pub duration: u64,
}

impl From<BadGateway> for Unreachable {
    fn from(bad_gateway: BadGateway) -> Self {
        Self {
            status: BAD_GATEWAY_STATUS,
            status_text: BAD_GATEWAY_STATUS_TEXT.to_owned(),
            data: TransportError {
                message: bad_gateway.message,
                code: bad_gateway.code,
            },
            duration: bad_gateway.duration,
        }
    }
}
