//! Request bodies and decoded responses for the dispatcher

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{Error, Result};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Encoded request body. Encoding happens before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    Form(String),
    Json(Vec<u8>),
}

impl Body {
    /// Form-encode a flat struct, using its serde field names as keys.
    ///
    /// Nested objects and arrays have no form representation and are
    /// rejected; `null` fields are left out.
    pub fn form<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        let fields = match serde_json::to_value(payload).map_err(Error::encoding)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::Form(String::new())),
            other => {
                return Err(Error::encoding(format!(
                    "form payload must be a struct or map, got {}",
                    json_kind(&other)
                )));
            }
        };

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &fields {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    serializer.append_pair(key, s);
                }
                Value::Number(n) => {
                    serializer.append_pair(key, &n.to_string());
                }
                Value::Bool(b) => {
                    serializer.append_pair(key, if *b { "true" } else { "false" });
                }
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::encoding(format!(
                        "form field {key:?} is {}, only flat values can be form-encoded",
                        json_kind(value)
                    )));
                }
            }
        }
        Ok(Self::Form(serializer.finish()))
    }

    /// Form body with no fields
    pub fn empty_form() -> Self {
        Self::Form(String::new())
    }

    pub fn json<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        serde_json::to_vec(payload).map(Self::Json).map_err(Error::encoding)
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Form(_) => Some(FORM_CONTENT_TYPE),
            Self::Json(_) => Some(JSON_CONTENT_TYPE),
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Empty => Vec::new(),
            Self::Form(s) => s.into_bytes(),
            Self::Json(bytes) => bytes,
        }
    }

    /// Short description for the API call log. Form bodies carry
    /// credentials on the settings endpoints so only the field count is kept.
    pub(crate) fn log_summary(&self) -> String {
        match self {
            Self::Empty => "None".to_string(),
            Self::Form(s) if s.is_empty() => "[form: 0 fields]".to_string(),
            Self::Form(s) => format!("[form: {} fields]", s.split('&').count()),
            Self::Json(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A fully read successful response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body only when the server declares it as JSON
    pub fn decode<T: DeserializeOwned>(self) -> Result<Payload<T>> {
        if self.is_json() {
            let value = serde_json::from_slice(&self.body)?;
            Ok(Payload::Decoded(value))
        } else {
            Ok(Payload::Raw {
                content_type: self.content_type().map(str::to_string),
                body: self.body,
            })
        }
    }
}

/// Outcome of a successful call: a decoded JSON body, or the raw bytes of a
/// body the server did not declare as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Decoded(T),
    Raw {
        content_type: Option<String>,
        body: Vec<u8>,
    },
}

impl<T> Payload<T> {
    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }

    pub fn decoded(self) -> Option<T> {
        match self {
            Self::Decoded(value) => Some(value),
            Self::Raw { .. } => None,
        }
    }

    /// The decoded value, or an error naming the content type the server
    /// sent instead of JSON.
    pub fn into_json(self) -> Result<T> {
        match self {
            Self::Decoded(value) => Ok(value),
            Self::Raw { content_type, .. } => Err(Error::UnexpectedContentType {
                content_type: content_type.unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChangePasswordRequest, SkinPart};
    use reqwest::header::HeaderValue;
    use std::collections::HashMap;

    fn response(content_type: Option<&str>, body: &str) -> ApiResponse {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        ApiResponse {
            status: StatusCode::OK,
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn form_uses_serde_field_names() {
        let payload = ChangePasswordRequest {
            old_password: "hunter2".to_string(),
            new_password: "correct horse&battery".to_string(),
        };
        let body = Body::form(&payload).unwrap();
        assert_eq!(body.content_type(), Some(FORM_CONTENT_TYPE));
        assert_eq!(body.log_summary(), "[form: 2 fields]");

        let encoded = body.into_bytes();
        assert!(String::from_utf8_lossy(&encoded).contains("newPass=correct+horse%26battery"));
        let mut pairs: Vec<(String, String)> = form_urlencoded::parse(&encoded).into_owned().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("newPass".to_string(), "correct horse&battery".to_string()),
                ("oldPass".to_string(), "hunter2".to_string()),
            ]
        );
    }

    #[test]
    fn form_rejects_nested_values() {
        let mut parts = HashMap::new();
        parts.insert("top", SkinPart { id: "002".to_string(), color: 5 });
        let err = Body::form(&parts).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn form_rejects_non_struct_payloads() {
        assert!(matches!(Body::form(&vec!["a", "b"]), Err(Error::Encoding(_))));
        assert!(matches!(Body::form("plain"), Err(Error::Encoding(_))));
    }

    #[test]
    fn json_body_serializes_part_map() {
        let mut parts = HashMap::new();
        parts.insert("top".to_string(), SkinPart { id: "002".to_string(), color: 5 });
        let body = Body::json(&parts).unwrap();
        assert_eq!(body.content_type(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body.into_bytes(), br#"{"top":{"id":"002","color":5}}"#.to_vec());
    }

    #[test]
    fn json_content_type_with_charset_is_decoded() {
        let payload: Payload<HashMap<String, String>> =
            response(Some("application/json; charset=utf-8"), r#"{"message":"ok"}"#)
                .decode()
                .unwrap();
        let decoded = payload.decoded().unwrap();
        assert_eq!(decoded["message"], "ok");
    }

    #[test]
    fn plain_text_is_left_raw() {
        let payload: Payload<HashMap<String, String>> =
            response(Some("text/plain"), "Item X claimed").decode().unwrap();
        assert!(!payload.is_decoded());
        assert_eq!(
            payload,
            Payload::Raw {
                content_type: Some("text/plain".to_string()),
                body: b"Item X claimed".to_vec(),
            }
        );
    }

    #[test]
    fn raw_payload_into_json_names_content_type() {
        let payload: Payload<()> = response(Some("text/html"), "<html/>").decode().unwrap();
        match payload.into_json() {
            Err(Error::UnexpectedContentType { content_type }) => assert_eq!(content_type, "text/html"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn truncated_json_is_a_decode_error() {
        let result: Result<Payload<HashMap<String, String>>> =
            response(Some("application/json"), r#"{"message":"#).decode();
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
