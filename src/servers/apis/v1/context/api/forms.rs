//! API forms for the [`api`](crate::servers::apis::v1::context::api) API context.
use serde::{Deserialize, Serialize};

/// A new listed API. A random id is used when `id` is missing.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterApiForm {
    #[serde(rename = "id")]
    pub opt_id: Option<String>,
    pub name: String,
}
