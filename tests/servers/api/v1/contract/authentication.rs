use api_hub_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::common::origin::Origin;
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token, ConnectionInfo};
use crate::servers::api::v1::asserts::{assert_forwarded, assert_token_not_valid, assert_unauthorized};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_a_token_query_param() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let response = Client::new(env.get_connection_info()).get_apis().await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let response = Client::new(connection_with_no_token(&env.get_connection_info().bind_address))
        .get_apis()
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_empty() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let response = Client::new(ConnectionInfo::authenticated(&env.get_connection_info().bind_address, ""))
        .get_apis()
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let response = Client::new(connection_with_invalid_token(&env.get_connection_info().bind_address))
        .get_apis()
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_require_a_token_for_the_playground_proxy() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;
    let origin = Origin::start().await;

    let response = Client::new(connection_with_no_token(&env.get_connection_info().bind_address))
        .proxy(&json!({ "url": origin.url("/forecast") }))
        .await;

    assert_forwarded(response).await;

    origin.stop();
    env.stop().await;
}
