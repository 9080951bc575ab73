use yew::prelude::*;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;

pub const CATEGORIES: [&str; 5] = [
    "Investing in Trivex",
    "Partnering as a Startup",
    "Enterprise Collaboration",
    "R&D and Academia",
    "Joining the Team",
];

const ACKNOWLEDGEMENT_SUBJECT: &str = "We received your inquiry";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailData {
    pub recipient_name: String,
    pub updates_link: String,
    pub content: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SendEmailPayload {
    pub to: String,
    pub subject: String,
    pub data: EmailData,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
    details: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Checks the inquiry and turns it into the acknowledgement email request.
/// The error is the message shown under the form.
pub fn build_payload(inquiry: &Inquiry, site_url: &str) -> Result<SendEmailPayload, String> {
    let name = inquiry.name.trim();
    let email = inquiry.email.trim();
    let message = inquiry.message.trim();

    if name.is_empty() {
        return Err("Please enter your name.".to_string());
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address.".to_string());
    }
    if !CATEGORIES.contains(&inquiry.category.as_str()) {
        return Err("Please select a category.".to_string());
    }
    if message.is_empty() {
        return Err("Please tell us about your project or inquiry.".to_string());
    }

    Ok(SendEmailPayload {
        to: email.to_string(),
        subject: ACKNOWLEDGEMENT_SUBJECT.to_string(),
        data: EmailData {
            recipient_name: name.to_string(),
            updates_link: site_url.to_string(),
            content: format!(
                "Thank you for reaching out about \"{}\". Our team will get back to you shortly. Here is a copy of your message:\n\n{}",
                inquiry.category, message
            ),
        },
    })
}

async fn submit(payload: SendEmailPayload) -> Result<(), String> {
    let request = Request::post(&format!("{}/api/send-email", config::get_backend_url()))
        .json(&payload)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| format!("Request failed: {}", e))?;
    if response.ok() {
        return Ok(());
    }

    log::error!("Inquiry submission failed with status: {}", response.status());
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse { error, details: Some(details) }) => Err(format!("{} {}", error, details)),
        Ok(ErrorResponse { error, details: None }) => Err(error),
        Err(_) => Err("Failed to send your inquiry.".to_string()),
    }
}

#[function_component]
pub fn ContactSection() -> Html {
    let inquiry = use_state(Inquiry::default);
    let status = use_state(|| SubmitStatus::Idle);

    let on_name = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            inquiry.set(Inquiry { name: input.value(), ..(*inquiry).clone() });
        })
    };
    let on_email = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            inquiry.set(Inquiry { email: input.value(), ..(*inquiry).clone() });
        })
    };
    let on_category = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            inquiry.set(Inquiry { category: select.value(), ..(*inquiry).clone() });
        })
    };
    let on_message = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            inquiry.set(Inquiry { message: input.value(), ..(*inquiry).clone() });
        })
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            let payload = match build_payload(&inquiry, config::get_site_url()) {
                Ok(payload) => payload,
                Err(message) => {
                    status.set(SubmitStatus::Failed(message));
                    return;
                }
            };

            status.set(SubmitStatus::Sending);
            let status = status.clone();
            let inquiry = inquiry.clone();
            spawn_local(async move {
                match submit(payload).await {
                    Ok(()) => {
                        log::info!("Inquiry submitted");
                        inquiry.set(Inquiry::default());
                        status.set(SubmitStatus::Sent);
                    }
                    Err(message) => {
                        log::error!("Inquiry submission failed: {}", message);
                        status.set(SubmitStatus::Failed(message));
                    }
                }
            });
        })
    };

    let sending = *status == SubmitStatus::Sending;

    html! {
        <section id="contact" class="section">
            <style>
                {r#"
                .contact-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    background-color: rgba(17, 24, 39, 0.7);
                    border-radius: 1rem;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .contact-card h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .contact-card > p {
                    font-size: 1.125rem;
                    color: #9CA3AF;
                    margin: 1rem 0 2.5rem;
                }
                .contact-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .contact-card input,
                .contact-card select,
                .contact-card textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background-color: #1F2937;
                    border: 1px solid #374151;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    color: #FFFFFF;
                    font-family: inherit;
                    font-size: 1rem;
                }
                .contact-card input:focus,
                .contact-card select:focus,
                .contact-card textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #22D3EE;
                }
                .contact-field {
                    margin-bottom: 1.5rem;
                }
                .contact-submit {
                    background-color: #06B6D4;
                    color: #111827;
                    font-weight: 700;
                    padding: 1rem 2.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: background-color 0.3s ease;
                }
                .contact-submit:hover {
                    background-color: #22D3EE;
                }
                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .contact-status {
                    margin-top: 1.5rem;
                }
                .contact-status.success {
                    color: #34D399;
                }
                .contact-status.error {
                    color: #F87171;
                }
                "#}
            </style>
            <div class="container">
                <div class="contact-card border-accent scroll-reveal">
                    <h2>{"Let's Engineer the Future Together."}</h2>
                    <p>{"Have a groundbreaking idea or a complex challenge? We thrive on the impossible. Partner with us."}</p>
                    <form {onsubmit}>
                        <div class="contact-row">
                            <input type="text" placeholder="Your Name" required=true value={inquiry.name.clone()} oninput={on_name} />
                            <input type="email" placeholder="Your Email" required=true value={inquiry.email.clone()} oninput={on_email} />
                        </div>
                        <div class="contact-field">
                            <select required=true onchange={on_category}>
                                <option value="" selected={inquiry.category.is_empty()}>{"I'm interested in... (Select a Category)"}</option>
                                { for CATEGORIES.iter().map(|category| html! {
                                    <option value={*category} selected={inquiry.category == *category}>{*category}</option>
                                }) }
                            </select>
                        </div>
                        <div class="contact-field">
                            <textarea placeholder="Tell us about your project or inquiry..." rows="5" required=true value={inquiry.message.clone()} oninput={on_message} />
                        </div>
                        <button type="submit" class="contact-submit" disabled={sending}>
                            { if sending { "Sending..." } else { "Submit Inquiry" } }
                        </button>
                    </form>
                    {
                        match &*status {
                            SubmitStatus::Idle | SubmitStatus::Sending => html! {},
                            SubmitStatus::Sent => html! {
                                <p class="contact-status success">{"Thank you! Your inquiry has been received. Check your inbox for a confirmation."}</p>
                            },
                            SubmitStatus::Failed(message) => html! {
                                <p class="contact-status error">{message.clone()}</p>
                            },
                        }
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "  Ada ".to_string(),
            email: "ada@example.com".to_string(),
            category: "R&D and Academia".to_string(),
            message: "Analog computing".to_string(),
        }
    }

    #[test]
    fn valid_inquiry_becomes_acknowledgement() {
        let payload = build_payload(&inquiry(), "https://www.trivex.com").unwrap();

        assert_eq!(payload.to, "ada@example.com");
        assert_eq!(payload.data.recipient_name, "Ada");
        assert_eq!(payload.data.updates_link, "https://www.trivex.com");
        assert!(payload.data.content.contains("R&D and Academia"));
        assert!(payload.data.content.contains("Analog computing"));
    }

    #[test]
    fn payload_uses_endpoint_field_names() {
        let payload = build_payload(&inquiry(), "https://www.trivex.com").unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["data"]["recipientName"], "Ada");
        assert_eq!(value["data"]["updatesLink"], "https://www.trivex.com");
        assert!(value["data"]["content"].is_string());
        assert!(value["subject"].is_string());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut bad = inquiry();
        bad.name = "   ".to_string();
        assert_eq!(build_payload(&bad, "x").unwrap_err(), "Please enter your name.");
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut bad = inquiry();
        bad.email = "ada.example.com".to_string();
        assert!(build_payload(&bad, "x").is_err());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut bad = inquiry();
        bad.category = String::new();
        assert_eq!(build_payload(&bad, "x").unwrap_err(), "Please select a category.");
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut bad = inquiry();
        bad.message = "\n".to_string();
        assert!(build_payload(&bad, "x").is_err());
    }
}
