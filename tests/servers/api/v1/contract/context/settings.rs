use api_hub_playground::servers::apis::v1::context::settings::resources::PlaygroundSetting;
use api_hub_test_helpers::configuration;
use serde_json::{json, Value};
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::connection_with_no_token;
use crate::servers::api::v1::asserts::{assert_failed_to_get_playground_setting, assert_ok, assert_unauthorized};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

async fn get_playground_setting(client: &Client) -> PlaygroundSetting {
    let response = client.get_playground_setting().await;

    assert_eq!(response.status(), 200);

    response.json::<PlaygroundSetting>().await.unwrap()
}

#[tokio::test]
async fn the_playground_should_be_enabled_when_the_global_toggle_was_never_set() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let setting = get_playground_setting(&Client::new(env.get_connection_info())).await;

    assert_eq!(setting.key, "GLOBAL_PLAYGROUND_ENABLED");
    assert_eq!(setting.value, Value::Null);
    assert!(setting.enabled);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_disabling_enabling_and_resetting_the_global_toggle() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let client = Client::new(env.get_connection_info());

    assert_ok(client.disable_playground().await).await;
    let setting = get_playground_setting(&client).await;
    assert_eq!(setting.value, json!(false));
    assert!(!setting.enabled);

    assert_ok(client.enable_playground().await).await;
    let setting = get_playground_setting(&client).await;
    assert_eq!(setting.value, json!(true));
    assert!(setting.enabled);

    assert_ok(client.reset_playground_setting().await).await;
    let setting = get_playground_setting(&client).await;
    assert_eq!(setting.value, Value::Null);
    assert!(setting.enabled);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_reading_the_global_toggle_when_the_database_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    force_database_error(&env.playground);

    let response = Client::new(env.get_connection_info()).get_playground_setting().await;

    assert_failed_to_get_playground_setting(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_changing_the_global_toggle_for_unauthenticated_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let response = Client::new(connection_with_no_token(&env.get_connection_info().bind_address))
        .disable_playground()
        .await;

    assert_unauthorized(response).await;

    let setting = get_playground_setting(&Client::new(env.get_connection_info())).await;
    assert!(setting.enabled);

    env.stop().await;
}
