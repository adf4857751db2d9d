use std::str::FromStr;
use std::sync::Arc;

use api_hub_configuration::{Configuration, HttpApi};
use api_hub_playground::bootstrap::app::initialize_with_configuration;
use api_hub_playground::core::api::{ApiEntity, ApiId};
use api_hub_playground::core::Playground;
use api_hub_playground::servers::apis::server::{ApiServer, Launcher, Running, Stopped};

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub playground: Arc<Playground>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// It lists an API with the playground enabled.
    pub fn add_api(&self, id: &str) -> ApiEntity {
        self.playground
            .register_api(ApiId::from_str(id).unwrap(), &format!("{id} name"))
            .unwrap()
    }

    pub fn get_api(&self, id: &str) -> ApiEntity {
        self.playground.get_api(&ApiId::from_str(id).unwrap()).unwrap()
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Configuration) -> Self {
        let playground = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let server = ApiServer::new(Launcher::new(config.bind_address));

        Self {
            config,
            playground,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        let access_tokens = Arc::new(self.config.access_tokens.clone());

        Environment {
            config: self.config,
            playground: self.playground.clone(),
            server: self.server.start(self.playground, access_tokens).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Configuration) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            playground: self.playground,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            bind_address: self.server.state.binding.to_string(),
            api_token: self.config.access_tokens.get("admin").cloned(),
        }
    }
}
