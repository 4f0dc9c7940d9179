use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub recipient_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub recipient_name: Option<String>,
}

/// Scalars become their string form; null, arrays and objects become `None`.
///
/// A wrongly typed field never discards the rest of the request.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientString)
}

struct LenientString;

impl<'de> Visitor<'de> for LenientString {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or scalar value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendEmailResponse {
    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message: "Email sent successfully!".to_string(),
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn failed(message: &str, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            message_id: None,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_name_does_not_discard_recipient() {
        let request: SendEmailRequest =
            serde_json::from_str(r#"{"recipientEmail":"a@b.com","recipientName":42}"#).unwrap();

        assert_eq!(request.recipient_email.as_deref(), Some("a@b.com"));
        assert_eq!(request.recipient_name.as_deref(), Some("42"));
    }

    #[test]
    fn structured_and_null_values_are_absent() {
        let request: SendEmailRequest = serde_json::from_str(
            r#"{"recipientEmail":{"address":"a@b.com"},"recipientName":null}"#,
        )
        .unwrap();

        assert!(request.recipient_email.is_none());
        assert!(request.recipient_name.is_none());

        let request: SendEmailRequest =
            serde_json::from_str(r#"{"recipientEmail":["a@b.com"],"recipientName":[1,[2]]}"#)
                .unwrap();

        assert!(request.recipient_email.is_none());
        assert!(request.recipient_name.is_none());
    }
}
