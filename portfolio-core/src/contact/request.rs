use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use super::FormFields;
use crate::config::EmailConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

/// Body of the EmailJS `email/send` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    #[serde(skip)]
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(cfg: &EmailConfig, fields: &FormFields) -> Self {
        EmailRequest {
            endpoint: cfg.endpoint.clone(),
            service_id: cfg.service_id.clone(),
            template_id: cfg.template_id.clone(),
            public_key: cfg.public_key.clone(),
            template_params: TemplateParams {
                from_name: fields.name.clone(),
                from_email: fields.email.clone(),
                to_email: cfg.to_email.clone(),
                message: fields.message.clone(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `mailto:` URL with subject and body prefilled.
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        utf8_percent_encode(subject, NON_ALPHANUMERIC),
        utf8_percent_encode(body, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_emailjs_wire_fields() {
        let fields = FormFields {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        let req = EmailRequest::new(&EmailConfig::default(), &fields);
        let json: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "YOUR_SERVICE_ID",
                "template_id": "YOUR_TEMPLATE_ID",
                "user_id": "YOUR_PUBLIC_KEY",
                "template_params": {
                    "from_name": "A",
                    "from_email": "a@b.com",
                    "to_email": "youngkillian0308@gmail.com",
                    "message": "hi"
                }
            })
        );
    }

    #[test]
    fn mailto_encodes_components() {
        assert_eq!(
            mailto_link("me@x.io", "Hi there", "a&b=c\nd"),
            "mailto:me@x.io?subject=Hi%20there&body=a%26b%3Dc%0Ad"
        );
    }
}
