use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HandlerError;

pub const STORAGE_CONFIRMATION_MESSAGE: &str = "S3 Event Processed Successfully!";
pub const RESULT_MESSAGE_PREFIX: &str = "Processed result: ";
pub const UNKNOWN_SIZE_LABEL: &str = "N/A";

/// Decodes a raw invocation payload into one of the event shapes below.
pub fn decode_event<T: DeserializeOwned>(payload: Value) -> Result<T, HandlerError> {
    serde_json::from_value(payload).map_err(HandlerError::from)
}

// ── storage notification ───────────────────────────────────────────

/// Object-created notification as delivered by S3.
///
/// Every field is optional at the serde level so that absent keys surface as
/// [`HandlerError::MissingField`] with a path, instead of an opaque decode
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageNotificationEvent {
    #[serde(rename = "Records")]
    pub records: Option<Vec<StorageRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageRecord {
    pub s3: Option<StorageEntity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageEntity {
    pub bucket: Option<StorageBucket>,
    pub object: Option<StorageObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageBucket {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageObject {
    pub key: Option<String>,
    pub size: Option<u64>,
}

/// A record that passed the required-field checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectNotice<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
    /// `None` means the size is unknown, not zero.
    pub size: Option<u64>,
}

impl ObjectNotice<'_> {
    pub fn size_label(&self) -> String {
        self.size
            .map(|size| size.to_string())
            .unwrap_or_else(|| UNKNOWN_SIZE_LABEL.to_string())
    }
}

impl StorageNotificationEvent {
    /// Checks every record up front and returns them in input order.
    pub fn object_notices(&self) -> Result<Vec<ObjectNotice<'_>>, HandlerError> {
        let records = self
            .records
            .as_ref()
            .ok_or_else(|| HandlerError::missing_field("Records"))?;

        records
            .iter()
            .enumerate()
            .map(|(index, record)| record.object_notice(index))
            .collect()
    }
}

impl StorageRecord {
    fn object_notice(&self, index: usize) -> Result<ObjectNotice<'_>, HandlerError> {
        let path = |suffix: &str| format!("Records[{index}].{suffix}");

        let entity = self
            .s3
            .as_ref()
            .ok_or_else(|| HandlerError::missing_field(path("s3")))?;
        let bucket = entity
            .bucket
            .as_ref()
            .and_then(|bucket| bucket.name.as_deref())
            .ok_or_else(|| HandlerError::missing_field(path("s3.bucket.name")))?;
        let object = entity
            .object
            .as_ref()
            .ok_or_else(|| HandlerError::missing_field(path("s3.object")))?;
        let key = object
            .key
            .as_deref()
            .ok_or_else(|| HandlerError::missing_field(path("s3.object.key")))?;

        Ok(ObjectNotice {
            bucket,
            key,
            size: object.size,
        })
    }
}

// ── upstream result ────────────────────────────────────────────────

/// Output of the previous stage in a step-function pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpstreamResultEvent {
    pub body: Option<String>,
}

impl UpstreamResultEvent {
    pub fn require_body(&self) -> Result<&str, HandlerError> {
        self.body
            .as_deref()
            .ok_or_else(|| HandlerError::missing_field("body"))
    }
}

// ── responses ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}

/// Body of the storage confirmation: the message encoded as a JSON string.
pub fn storage_confirmation_body() -> String {
    Value::String(STORAGE_CONFIRMATION_MESSAGE.to_string()).to_string()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    #[default]
    Success,
    Fail,
}

impl ResultStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown result status `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageResult {
    pub status: ResultStatus,
    pub message: String,
}

impl StageResult {
    pub fn processed(status: ResultStatus, body: &str) -> Self {
        Self {
            status,
            message: format!("{RESULT_MESSAGE_PREFIX}{body}"),
        }
    }
}
