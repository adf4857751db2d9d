//! API resources for the [`settings`](crate::servers::apis::v1::context::settings) API context.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::settings::{Setting, GLOBAL_PLAYGROUND_ENABLED};

/// The global playground toggle.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaygroundSetting {
    pub key: String,
    /// The stored value, `null` if the toggle has never been set.
    pub value: Value,
    /// Whether the playground accepts requests.
    pub enabled: bool,
}

impl From<Option<Setting>> for PlaygroundSetting {
    fn from(setting: Option<Setting>) -> Self {
        match setting {
            None => PlaygroundSetting {
                key: GLOBAL_PLAYGROUND_ENABLED.to_owned(),
                value: Value::Null,
                enabled: true,
            },
            Some(setting) => PlaygroundSetting {
                enabled: !setting.is_explicitly_false(),
                key: setting.key,
                value: setting.value,
            },
        }
    }
}
