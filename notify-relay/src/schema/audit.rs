//! Gateway audit log entry.
//!
//! One entry describes one API call handled by the storage gateway. Header
//! sub-records keep the literal HTTP header names as keys. As with bucket
//! events, `null` reads as the zero value.

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditLog {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(rename = "deploymentid", deserialize_with = "null_as_default")]
    pub deployment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trigger: String,
    #[serde(alias = "Api", deserialize_with = "null_as_default")]
    pub api: AuditApi,
    #[serde(rename = "remotehost", deserialize_with = "null_as_default")]
    pub remote_host: String,
    #[serde(rename = "requestID", deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(rename = "userAgent", deserialize_with = "null_as_default")]
    pub user_agent: String,
    #[serde(
        rename = "requestQuery",
        alias = "RequestQuery",
        deserialize_with = "null_as_default"
    )]
    pub request_query: RequestQuery,
    #[serde(
        rename = "requestHeader",
        alias = "RequestHeader",
        deserialize_with = "null_as_default"
    )]
    pub request_header: RequestHeader,
    #[serde(
        rename = "responseHeader",
        alias = "ResponseHeader",
        deserialize_with = "null_as_default"
    )]
    pub response_header: ResponseHeader,
}

/// The API call itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditApi {
    /// Operation name, e.g. `PutObject`
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bucket: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: i64,
    /// Bytes received
    #[serde(deserialize_with = "null_as_default")]
    pub rx: i64,
    /// Bytes transmitted
    #[serde(deserialize_with = "null_as_default")]
    pub tx: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_to_response: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestQuery {
    #[serde(rename = "x-id", deserialize_with = "null_as_default")]
    pub x_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RequestHeader {
    #[serde(rename = "Amz-Sdk-Invocation-Id", deserialize_with = "null_as_default")]
    pub amz_sdk_invocation_id: String,
    #[serde(rename = "Amz-Sdk-Request", deserialize_with = "null_as_default")]
    pub amz_sdk_request: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authorization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub connection: String,
    #[serde(rename = "Content-Length", deserialize_with = "null_as_default")]
    pub content_length: String,
    #[serde(rename = "Content-Type", deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(rename = "User-Agent", deserialize_with = "null_as_default")]
    pub user_agent: String,
    #[serde(rename = "X-Amz-Content-Sha256", deserialize_with = "null_as_default")]
    pub x_amz_content_sha256: String,
    #[serde(rename = "X-Amz-Date", deserialize_with = "null_as_default")]
    pub x_amz_date: String,
    #[serde(rename = "X-Amz-User-Agent", deserialize_with = "null_as_default")]
    pub x_amz_user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResponseHeader {
    #[serde(rename = "Accept-Ranges", deserialize_with = "null_as_default")]
    pub accept_ranges: String,
    #[serde(rename = "Content-Length", deserialize_with = "null_as_default")]
    pub content_length: String,
    #[serde(rename = "Content-Security-Policy", deserialize_with = "null_as_default")]
    pub content_security_policy: String,
    #[serde(rename = "ETag", deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server: String,
    #[serde(rename = "Strict-Transport-Security", deserialize_with = "null_as_default")]
    pub strict_transport_security: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vary: String,
    #[serde(rename = "X-Amz-Request-Id", deserialize_with = "null_as_default")]
    pub x_amz_request_id: String,
    #[serde(rename = "X-Content-Type-Options", deserialize_with = "null_as_default")]
    pub x_content_type_options: String,
    #[serde(rename = "X-Xss-Protection", deserialize_with = "null_as_default")]
    pub x_xss_protection: String,
}
