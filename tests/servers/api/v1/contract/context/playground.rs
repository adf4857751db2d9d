use api_hub_playground::core::error::{MAINTENANCE_MESSAGE, OWNER_DISABLED_MESSAGE};
use api_hub_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::common::origin::{unreachable_url, Origin};
use crate::servers::api::v1::asserts::{
    assert_bad_gateway, assert_forwarded, assert_message, assert_ok, assert_validation_error,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

mod for_a_listed_api {
    use super::*;

    #[tokio::test]
    async fn should_forward_the_request_and_record_a_successful_call() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "method": "GET", "url": origin.url("/forecast"), "apiId": "weather-api" }))
            .await;

        let forwarded = assert_forwarded(response).await;

        assert_eq!(forwarded.status, 200);
        assert_eq!(forwarded.status_text, "OK");
        assert_eq!(forwarded.data, json!({ "temperature": 21 }));
        assert_eq!(forwarded.headers.get("x-origin").map(String::as_str), Some("local"));
        assert_eq!(forwarded.size, r#"{"temperature":21}"#.len());

        let api = env.get_api("weather-api");
        assert_eq!(api.stats.calls, 1);
        assert_eq!(api.playground_stats.total_requests, 1);
        assert_eq!(api.playground_stats.total_errors, 0);
        assert_eq!(api.playground_stats.avg_response_time, forwarded.duration);
        assert!(api.playground_stats.last_used.is_some());

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_refuse_the_request_when_the_owner_disabled_the_playground() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        assert_ok(client.disable_api_playground("weather-api").await).await;

        let response = client
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "weather-api" }))
            .await;

        assert_message(response, 403, OWNER_DISABLED_MESSAGE).await;

        let api = env.get_api("weather-api");
        assert_eq!(api.playground_stats.total_requests, 0);
        assert_eq!(api.stats.calls, 0);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_refuse_the_request_when_the_playground_is_under_maintenance() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        assert_ok(client.disable_playground().await).await;

        let response = client
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "weather-api" }))
            .await;

        assert_message(response, 403, MAINTENANCE_MESSAGE).await;

        assert_eq!(env.get_api("weather-api").playground_stats.total_requests, 0);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_accept_requests_again_after_the_global_toggle_is_reset() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        assert_ok(client.disable_playground().await).await;
        assert_ok(client.reset_playground_setting().await).await;

        let response = client
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "weather-api" }))
            .await;

        assert_forwarded(response).await;

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_a_bad_gateway_and_record_an_error_when_the_origin_is_unreachable() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": unreachable_url(), "apiId": "weather-api" }))
            .await;

        let unreachable = assert_bad_gateway(response, "CONNECTION_FAILED").await;

        assert!(!unreachable.data.message.is_empty());

        let api = env.get_api("weather-api");
        assert_eq!(api.playground_stats.total_requests, 1);
        assert_eq!(api.playground_stats.total_errors, 1);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_pass_the_origin_errors_through_and_record_them_as_errors() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/failure"), "apiId": "weather-api" }))
            .await;

        let forwarded = assert_forwarded(response).await;

        assert_eq!(forwarded.status, 500);
        assert_eq!(forwarded.status_text, "Internal Server Error");
        assert_eq!(forwarded.data, json!({ "error": "boom" }));

        let api = env.get_api("weather-api");
        assert_eq!(api.playground_stats.total_requests, 1);
        assert_eq!(api.playground_stats.total_errors, 1);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_a_bad_gateway_when_the_origin_does_not_answer_in_time() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/slow"), "apiId": "weather-api" }))
            .await;

        let unreachable = assert_bad_gateway(response, "TIMEOUT").await;

        assert!(unreachable.duration >= 2000);
        assert_eq!(env.get_api("weather-api").playground_stats.total_errors, 1);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_take_the_api_id_from_the_path_before_the_body() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("from-path");
        env.add_api("from-body");

        let response = Client::new(env.get_connection_info())
            .proxy_for_api("from-path", &json!({ "url": origin.url("/forecast"), "apiId": "from-body" }))
            .await;

        assert_forwarded(response).await;

        assert_eq!(env.get_api("from-path").playground_stats.total_requests, 1);
        assert_eq!(env.get_api("from-body").playground_stats.total_requests, 0);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_keep_counting_the_requests() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        for path in ["/forecast", "/failure", "/forecast"] {
            client
                .proxy_for_api("weather-api", &json!({ "url": origin.url(path) }))
                .await;
        }

        let api = env.get_api("weather-api");
        assert_eq!(api.stats.calls, 3);
        assert_eq!(api.playground_stats.total_requests, 3);
        assert_eq!(api.playground_stats.total_errors, 1);

        origin.stop();
        env.stop().await;
    }
}

mod without_a_listed_api {
    use super::*;

    #[tokio::test]
    async fn should_forward_the_request_when_there_is_no_api_id() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/text") }))
            .await;

        let forwarded = assert_forwarded(response).await;

        assert_eq!(forwarded.data, json!("plain text"));

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_be_affected_by_the_global_toggle() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        let client = Client::new(env.get_connection_info());

        assert_ok(client.disable_playground().await).await;

        let response = client.proxy(&json!({ "url": origin.url("/forecast") })).await;

        assert_forwarded(response).await;

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_forward_the_request_when_the_api_is_not_listed() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "not-listed" }))
            .await;

        assert_forwarded(response).await;

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_forward_the_request_when_the_api_id_is_malformed() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "a".repeat(200) }))
            .await;

        let forwarded = assert_forwarded(response).await;

        assert_eq!(forwarded.status, 200);
        assert_eq!(env.get_api("weather-api").playground_stats.total_requests, 0);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_forward_the_request_when_the_api_cannot_be_looked_up() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        force_database_error(&env.playground);

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "weather-api" }))
            .await;

        assert_forwarded(response).await;

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_refuse_the_request_when_the_api_cannot_be_looked_up_and_the_policy_is_deny() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral_with_strict_lookup()).await;
        let origin = Origin::start().await;

        force_database_error(&env.playground);

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/forecast"), "apiId": "weather-api" }))
            .await;

        assert_eq!(response.status(), 503);

        origin.stop();
        env.stop().await;
    }
}

mod building_the_outbound_request {
    use super::*;

    #[tokio::test]
    async fn should_send_the_method_headers_and_json_body() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({
                "method": "post",
                "url": origin.url("/echo"),
                "headers": { "x-custom": 7 },
                "body": { "name": "item" }
            }))
            .await;

        let echo = assert_forwarded(response).await.data;

        assert_eq!(echo["method"], "POST");
        assert_eq!(echo["custom"], "7");
        assert_eq!(echo["contentType"], "application/json");
        assert_eq!(echo["body"], r#"{"name":"item"}"#);

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_send_a_string_body_as_it_is() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "method": "PUT", "url": origin.url("/echo"), "body": "a=1&b=2" }))
            .await;

        let echo = assert_forwarded(response).await.data;

        assert_eq!(echo["body"], "a=1&b=2");

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_drop_the_body_of_a_get_request() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        let origin = Origin::start().await;

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/echo"), "body": { "ignored": true } }))
            .await;

        let echo = assert_forwarded(response).await.data;

        assert_eq!(echo["method"], "GET");
        assert_eq!(echo["body"], "");

        origin.stop();
        env.stop().await;
    }

    #[tokio::test]
    async fn should_identify_itself_with_the_configured_user_agent() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let cfg = configuration::ephemeral();
        let user_agent = cfg.core.playground.user_agent.clone();

        let env = Started::new(&cfg).await;
        let origin = Origin::start().await;

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "url": origin.url("/echo") }))
            .await;

        let echo = assert_forwarded(response).await.data;

        assert_eq!(echo["userAgent"], json!(user_agent));

        origin.stop();
        env.stop().await;
    }
}

mod rejecting_malformed_requests {
    use super::*;

    #[tokio::test]
    async fn should_reject_a_request_without_url_and_record_nothing() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "method": "GET", "apiId": "weather-api" }))
            .await;

        let message = assert_validation_error(response).await;

        assert!(message.message.contains("url"));
        assert_eq!(env.get_api("weather-api").playground_stats.total_requests, 0);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_reject_a_body_that_is_not_json() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;

        let response = Client::new(env.get_connection_info())
            .post_raw("playground/proxy", "{ not json")
            .await;

        assert_validation_error(response).await;

        env.stop().await;
    }
}

mod requests_that_cannot_be_sent {
    use super::*;

    #[tokio::test]
    async fn should_return_a_bad_gateway_and_record_an_error_for_an_invalid_url() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        for url in ["not a url", "/relative/path", "ftp://files.example.com/file"] {
            let response = client.proxy(&json!({ "url": url, "apiId": "weather-api" })).await;

            assert_bad_gateway(response, "INVALID_URL").await;
        }

        let api = env.get_api("weather-api");
        assert_eq!(api.playground_stats.total_requests, 3);
        assert_eq!(api.playground_stats.total_errors, 3);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_a_bad_gateway_and_record_an_error_for_an_invalid_method() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        env.add_api("weather-api");

        let response = Client::new(env.get_connection_info())
            .proxy(&json!({ "method": "GE T", "url": "http://127.0.0.1/", "apiId": "weather-api" }))
            .await;

        assert_bad_gateway(response, "INVALID_METHOD").await;

        let api = env.get_api("weather-api");
        assert_eq!(api.playground_stats.total_requests, 1);
        assert_eq!(api.playground_stats.total_errors, 1);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_a_bad_gateway_and_record_an_error_for_an_invalid_header() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        let invalid_name = json!({ "url": "http://127.0.0.1/", "headers": { "bad header": "value" }, "apiId": "weather-api" });
        let invalid_value = json!({ "url": "http://127.0.0.1/", "headers": { "x-value": "line\nbreak" }, "apiId": "weather-api" });

        assert_bad_gateway(client.proxy(&invalid_name).await, "INVALID_HEADER").await;
        assert_bad_gateway(client.proxy(&invalid_value).await, "INVALID_HEADER").await;

        let api = env.get_api("weather-api");
        assert_eq!(api.playground_stats.total_requests, 2);
        assert_eq!(api.playground_stats.total_errors, 2);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_refuse_them_when_the_playground_is_under_maintenance() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral()).await;
        env.add_api("weather-api");

        let client = Client::new(env.get_connection_info());

        assert_ok(client.disable_playground().await).await;

        let response = client
            .proxy(&json!({ "url": "http://127.0.0.1/", "headers": { "bad header": "value" }, "apiId": "weather-api" }))
            .await;

        assert_message(response, 403, MAINTENANCE_MESSAGE).await;

        assert_eq!(env.get_api("weather-api").playground_stats.total_requests, 0);

        env.stop().await;
    }
}
