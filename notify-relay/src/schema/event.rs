//! Bucket notification envelope.
//!
//! Mirrors the storage gateway's notification structure. Reference:
//! https://docs.aws.amazon.com/AmazonS3/latest/dev/notification-content-structure.html
//!
//! Every field reads `null` as its zero value. Container keys also accept
//! their capitalized spellings (`S3`, `Object`, ...), which some gateways
//! emit.

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Envelope holding every event delivered in one notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageEventRecords {
    #[serde(rename = "Records", alias = "records", deserialize_with = "null_as_default")]
    pub records: Vec<StorageEvent>,
}

/// A single bucket or object event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub event_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub aws_region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_time: String,
    /// Event type, e.g. `s3:ObjectCreated:Put`
    #[serde(deserialize_with = "null_as_default")]
    pub event_name: String,
    #[serde(alias = "UserIdentity", deserialize_with = "null_as_default")]
    pub user_identity: UserIdentity,
    #[serde(alias = "RequestParameters", deserialize_with = "null_as_default")]
    pub request_parameters: RequestParameters,
    #[serde(alias = "ResponseElements", deserialize_with = "null_as_default")]
    pub response_elements: ResponseElements,
    #[serde(alias = "S3", deserialize_with = "null_as_default")]
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(deserialize_with = "null_as_default")]
    pub principal_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestParameters {
    #[serde(rename = "sourceIPAddress", deserialize_with = "null_as_default")]
    pub source_ip_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseElements {
    #[serde(rename = "x-amz-request-id", deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(rename = "x-amz-id-2", deserialize_with = "null_as_default")]
    pub id_2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3Entity {
    #[serde(deserialize_with = "null_as_default")]
    pub s3_schema_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub configuration_id: String,
    #[serde(alias = "Bucket", deserialize_with = "null_as_default")]
    pub bucket: S3Bucket,
    #[serde(alias = "Object", deserialize_with = "null_as_default")]
    pub object: S3Object,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3Bucket {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "OwnerIdentity", deserialize_with = "null_as_default")]
    pub owner_identity: UserIdentity,
    #[serde(deserialize_with = "null_as_default")]
    pub arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3Object {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// Object size in bytes
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub e_tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version_id: String,
    /// Orders events for the same key; compare lexically after padding
    #[serde(deserialize_with = "null_as_default")]
    pub sequencer: String,
}
