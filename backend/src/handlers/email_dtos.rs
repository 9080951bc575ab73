use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required email fields: to, subject, data (recipientName, updatesLink). Data must be an object.";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailData {
    pub recipient_name: String,
    pub updates_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub data: EmailData,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError;

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", MISSING_FIELDS_MESSAGE)
    }
}

impl std::error::Error for ValidationError {}

// Absent, null, non-string and blank all count as missing.
fn required_str<'a>(object: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl SendEmailRequest {
    /// Checks a raw JSON body and pulls out the fields the mailer needs.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError)?;

        let to = required_str(object, "to").ok_or(ValidationError)?;
        let subject = required_str(object, "subject").ok_or(ValidationError)?;
        let data = object
            .get("data")
            .and_then(Value::as_object)
            .ok_or(ValidationError)?;

        let recipient_name = required_str(data, "recipientName").ok_or(ValidationError)?;
        let updates_link = required_str(data, "updatesLink").ok_or(ValidationError)?;
        let content = data
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(SendEmailRequest {
            to: to.to_string(),
            subject: subject.to_string(),
            data: EmailData {
                recipient_name: recipient_name.to_string(),
                updates_link: updates_link.to_string(),
                content,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "to": "alice@example.com",
            "subject": "Your Latest Trivex Update!",
            "data": {
                "recipientName": "Alice Johnson",
                "updatesLink": "https://www.trivex.com/latest-news"
            }
        })
    }

    #[test]
    fn accepts_a_complete_body() {
        let request = SendEmailRequest::from_json(&valid_body()).unwrap();

        assert_eq!(request.to, "alice@example.com");
        assert_eq!(request.data.recipient_name, "Alice Johnson");
        assert_eq!(request.data.updates_link, "https://www.trivex.com/latest-news");
        assert_eq!(request.data.content, None);
    }

    #[test]
    fn keeps_optional_content() {
        let mut body = valid_body();
        body["data"]["content"] = json!("Starlinker beta is live.");

        let request = SendEmailRequest::from_json(&body).unwrap();
        assert_eq!(request.data.content.as_deref(), Some("Starlinker beta is live."));
    }

    #[test]
    fn rejects_each_missing_required_field() {
        for pointer in ["to", "subject", "data"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(pointer);
            assert_eq!(SendEmailRequest::from_json(&body), Err(ValidationError), "{pointer}");
        }
        for nested in ["recipientName", "updatesLink"] {
            let mut body = valid_body();
            body["data"].as_object_mut().unwrap().remove(nested);
            assert_eq!(SendEmailRequest::from_json(&body), Err(ValidationError), "{nested}");
        }
    }

    #[test]
    fn rejects_empty_null_and_non_string_values() {
        let mut empty_subject = valid_body();
        empty_subject["subject"] = json!("");
        let mut null_link = valid_body();
        null_link["data"]["updatesLink"] = Value::Null;
        let mut numeric_to = valid_body();
        numeric_to["to"] = json!(42);

        for body in [empty_subject, null_link, numeric_to] {
            assert_eq!(SendEmailRequest::from_json(&body), Err(ValidationError));
        }
    }

    #[test]
    fn rejects_whitespace_only_name_and_link() {
        let mut blank_name = valid_body();
        blank_name["data"]["recipientName"] = json!("   ");
        let mut blank_link = valid_body();
        blank_link["data"]["updatesLink"] = json!("\t\n");

        for body in [blank_name, blank_link] {
            assert_eq!(SendEmailRequest::from_json(&body), Err(ValidationError));
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut body = valid_body();
        body["to"] = json!("  alice@example.com ");
        body["data"]["recipientName"] = json!(" Alice Johnson ");

        let request = SendEmailRequest::from_json(&body).unwrap();
        assert_eq!(request.to, "alice@example.com");
        assert_eq!(request.data.recipient_name, "Alice Johnson");
    }

    #[test]
    fn rejects_non_object_data() {
        for data in [json!("Alice"), json!(["Alice"]), json!(7)] {
            let mut body = valid_body();
            body["data"] = data;
            assert_eq!(SendEmailRequest::from_json(&body), Err(ValidationError));
        }
        assert_eq!(SendEmailRequest::from_json(&json!([1, 2])), Err(ValidationError));
    }

    #[test]
    fn error_message_lists_required_fields() {
        assert_eq!(ValidationError.to_string(), MISSING_FIELDS_MESSAGE);
    }
}
