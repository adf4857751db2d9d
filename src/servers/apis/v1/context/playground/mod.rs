//! Playground API context.
//!
//! This API context is responsible for forwarding the requests the API hub
//! users build in the browser to the origin servers of the listed APIs.
//!
//! The endpoints are public, they do not require a token.
//!
//! # Endpoints
//!
//! - [Proxy a request](#proxy-a-request)
//! - [Proxy a request for a listed API](#proxy-a-request-for-a-listed-api)
//!
//! # Proxy a request
//!
//! `POST /api/v1/playground/proxy`
//!
//! **Request body**
//!
//! Attribute | Type | Required | Description
//! ---|---|---|---
//! `method` | string | no | The HTTP method. It defaults to `GET`.
//! `url` | string | yes | The absolute `http` or `https` URL of the origin.
//! `headers` | object | no | The request headers. Numbers and booleans are sent as text, `null` values are skipped.
//! `body` | any | no | The request body. It is ignored for `GET` requests. A string is sent as is, anything else as JSON.
//! `apiId` | string | no | The id of the listed API. Without it, or when it is malformed, the request is not gated and its usage is not recorded.
//!
//! **Example request**
//!
//! ```bash
//! curl -s -X POST "http://127.0.0.1:1212/api/v1/playground/proxy" \
//!   -H "Content-Type: application/json" \
//!   -d '{"method":"GET","url":"https://api.example.com/forecast","apiId":"weather-api"}'
//! ```
//!
//! **Example response** `200`
//!
//! The origin answered. The origin status is in the body, the response
//! status is always `200`, also when the origin returns an error.
//!
//! ```json
//! {
//!   "status": 200,
//!   "statusText": "OK",
//!   "data": { "temperature": 21 },
//!   "headers": { "content-type": "application/json" },
//!   "duration": 137,
//!   "size": 18
//! }
//! ```
//!
//! **Example response** `502`
//!
//! The request could not be sent or the origin could not be reached.
//!
//! ```json
//! {
//!   "status": 502,
//!   "statusText": "Bad Gateway",
//!   "data": { "message": "error sending request for url ...", "code": "CONNECTION_FAILED" },
//!   "duration": 12
//! }
//! ```
//!
//! The `code` is one of `INVALID_URL`, `INVALID_METHOD`, `INVALID_HEADER`,
//! `TIMEOUT`, `CONNECTION_FAILED`, `TOO_MANY_REDIRECTS`, `BODY_READ_FAILED`,
//! `REQUEST_FAILED` or `TRANSPORT_ERROR`.
//!
//! **Other responses**
//!
//! All of them have a `{ "message": "..." }` body.
//!
//! Status | Reason
//! ---|---
//! `400` | The body is not a json proxy request, or it has no `url`.
//! `403` | The playground is under maintenance, or the owner of the API disabled it.
//! `503` | The API could not be looked up and the lookup error policy is `deny`.
//!
//! # Proxy a request for a listed API
//!
//! `POST /api/v1/playground/proxy/:api_id`
//!
//! Same as the previous endpoint. The `api_id` path param takes precedence
//! over the `apiId` attribute in the body.
//!
//! ```bash
//! curl -s -X POST "http://127.0.0.1:1212/api/v1/playground/proxy/weather-api" \
//!   -H "Content-Type: application/json" \
//!   -d '{"url":"https://api.example.com/forecast"}'
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
