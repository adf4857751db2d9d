use serde::{Deserialize, Serialize};

use super::database::Database;
use super::playground::Playground;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Core {
    // Database configuration.
    #[serde(default)]
    pub database: Database,

    // Request proxy configuration.
    #[serde(default)]
    pub playground: Playground,
}
