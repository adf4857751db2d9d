// code-review: some asserts are only used by one context.
#![allow(dead_code)]

use api_hub_playground::servers::apis::v1::context::api::resources::Api;
use api_hub_playground::servers::apis::v1::context::playground::resources::{Forwarded, Unreachable};
use api_hub_playground::servers::apis::v1::responses::Message;
use reqwest::Response;

// Resource responses

pub async fn assert_forwarded(response: Response) -> Forwarded {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Forwarded>().await.unwrap()
}

pub async fn assert_bad_gateway(response: Response, code: &str) -> Unreachable {
    assert_eq!(response.status(), 502);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let unreachable = response.json::<Unreachable>().await.unwrap();

    assert_eq!(unreachable.status, 502);
    assert_eq!(unreachable.status_text, "Bad Gateway");
    assert_eq!(unreachable.data.code, code);

    unreachable
}

pub async fn assert_api(response: Response) -> Api {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Api>().await.unwrap()
}

pub async fn assert_api_list(response: Response) -> Vec<Api> {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Vec<Api>>().await.unwrap()
}

// OK response

pub async fn assert_ok(response: Response) {
    let response_status = response.status();
    let response_headers = response.headers().get("content-type").cloned().unwrap();
    let response_text = response.text().await.unwrap();

    let details = format!(
        r#"
   status: ´{response_status}´
  headers: ´{response_headers:?}´
     text: ´"{response_text}"´"#
    );

    assert_eq!(response_status, 200, "details:{details}.");
    assert_eq!(response_headers, "application/json", "\ndetails:{details}.");
    assert_eq!(response_text, "{\"status\":\"ok\"}", "\ndetails:{details}.");
}

// Not forwarded responses

pub async fn assert_message(response: Response, status: u16, message: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.json::<Message>().await.unwrap(), Message::new(message));
}

pub async fn assert_validation_error(response: Response) -> Message {
    assert_eq!(response.status(), 400);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Message>().await.unwrap()
}

// Error responses

pub async fn assert_bad_request(response: Response, body: &str) {
    assert_eq!(response.status(), 400);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/plain; charset=utf-8");
    assert_eq!(response.text().await.unwrap(), body);
}

pub async fn assert_not_found(response: Response) {
    assert_eq!(response.status(), 404);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/plain; charset=utf-8");
}

pub async fn assert_conflict(response: Response) {
    assert_eq!(response.status(), 409);
}

pub async fn assert_token_not_valid(response: Response) {
    assert_unhandled_rejection(response, "token not valid").await;
}

pub async fn assert_unauthorized(response: Response) {
    assert_unhandled_rejection(response, "unauthorized").await;
}

pub async fn assert_failed_to_list_apis(response: Response) {
    assert_unhandled_rejection(response, "failed to list apis").await;
}

pub async fn assert_failed_to_get_playground_setting(response: Response) {
    assert_unhandled_rejection(response, "failed to get playground setting").await;
}

async fn assert_unhandled_rejection(response: Response, reason: &str) {
    assert_eq!(response.status(), 500);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/plain; charset=utf-8");

    let reason_text = format!("Unhandled rejection: Err {{ reason: \"{reason}");
    let response_text = response.text().await.unwrap();
    assert!(
        response_text.contains(&reason_text),
        ":\n  response: `\"{response_text}\"`\n  does not contain: `\"{reason_text}\"`."
    );
}
