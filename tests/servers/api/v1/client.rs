use reqwest::Response;
use serde::Serialize;
use serde_json::Value;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/v1/".to_string(),
        }
    }

    // Playground

    pub async fn proxy(&self, form: &Value) -> Response {
        self.post_form("playground/proxy", form).await
    }

    pub async fn proxy_for_api(&self, api_id: &str, form: &Value) -> Response {
        self.post_form(&format!("playground/proxy/{api_id}"), form).await
    }

    // Listed APIs

    pub async fn register_api(&self, form: &RegisterApiForm) -> Response {
        self.post_form("apis", form).await
    }

    pub async fn get_apis(&self) -> Response {
        self.get("apis").await
    }

    pub async fn get_api(&self, api_id: &str) -> Response {
        self.get(&format!("api/{api_id}")).await
    }

    pub async fn enable_api_playground(&self, api_id: &str) -> Response {
        self.post_empty(&format!("api/{api_id}/playground")).await
    }

    pub async fn disable_api_playground(&self, api_id: &str) -> Response {
        self.delete(&format!("api/{api_id}/playground")).await
    }

    // Settings

    pub async fn get_playground_setting(&self) -> Response {
        self.get("settings/playground").await
    }

    pub async fn enable_playground(&self) -> Response {
        self.post_empty("settings/playground").await
    }

    pub async fn disable_playground(&self) -> Response {
        self.delete("settings/playground").await
    }

    pub async fn reset_playground_setting(&self) -> Response {
        self.post_empty("settings/playground/reset").await
    }

    pub async fn get(&self, path: &str) -> Response {
        reqwest::Client::new()
            .get(self.base_url(path))
            .query(&self.query_with_token())
            .send()
            .await
            .unwrap()
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path))
            .query(&self.query_with_token())
            .send()
            .await
            .unwrap()
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path))
            .query(&self.query_with_token())
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path))
            .query(&self.query_with_token())
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> Response {
        reqwest::Client::new()
            .delete(self.base_url(path))
            .query(&self.query_with_token())
            .send()
            .await
            .unwrap()
    }

    fn query_with_token(&self) -> Vec<(&str, String)> {
        match &self.connection_info.api_token {
            Some(token) => vec![("token", token.clone())],
            None => vec![],
        }
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(path: &str) -> Response {
    reqwest::Client::builder().build().unwrap().get(path).send().await.unwrap()
}

#[derive(Serialize, Debug)]
pub struct RegisterApiForm {
    #[serde(rename = "id")]
    pub opt_id: Option<String>,
    pub name: String,
}
