//! Form hand-off to an external chat link.
//!
//! A submitted form is rendered into a fixed human-readable template and
//! packed into a pre-filled chat URL. Opening the URL is the whole
//! submission: nothing is sent by this crate and no reply is awaited.

use std::borrow::Cow;

const RULE: &str = "━━━━━━━━━━━━━━━";
const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";

/// Validation failure for a hand-off form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormError {
    /// A required field is empty after trimming.
    MissingField(&'static str),
}

impl core::fmt::Display for FormError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormError::MissingField(field) => {
                write!(f, "Please fill all required fields ({} is empty)", field)
            }
        }
    }
}

impl std::error::Error for FormError {}

/// A form that can be rendered into a chat message.
pub trait HandoffMessage {
    /// Checks required fields.
    fn validate(&self) -> Result<(), FormError>;

    /// Renders the message body, fields trimmed.
    fn render(&self) -> String;
}

/// Pre-filled chat link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLink {
    phone: String,
}

impl ChatLink {
    /// `phone` is the international number without `+` or separators.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Builds the chat URL carrying `text`.
    pub fn url(&self, text: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            encode_uri_component(text)
        )
    }

    /// Validates and renders `message`, returning the URL to open.
    pub fn handoff<M: HandoffMessage>(&self, message: &M) -> Result<String, FormError> {
        message.validate()?;
        Ok(self.url(&message.render()))
    }
}

/// Percent-encodes like `encodeURIComponent`, which leaves `!'()*` intact.
pub fn encode_uri_component(text: &str) -> String {
    let encoded = urlencoding::encode(text);
    match encoded {
        Cow::Borrowed(unchanged) => unchanged.to_owned(),
        Cow::Owned(encoded) => encoded
            .replace("%21", "!")
            .replace("%27", "'")
            .replace("%28", "(")
            .replace("%29", ")")
            .replace("%2A", "*"),
    }
}

/// Contact page form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl HandoffMessage for ContactRequest {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }

    fn render(&self) -> String {
        Template::new("*New Contact Form Submission*")
            .field("👤 Name", &self.name)
            .field("📧 Email", &self.email)
            .field("📞 Phone", or(&self.phone, NOT_PROVIDED))
            .body(Some("💬 Message"), self.message.trim())
            .render()
    }
}

/// Custom plan request modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomPlanRequest {
    pub name: String,
    pub email: String,
    pub budget: String,
    pub details: String,
}

impl HandoffMessage for CustomPlanRequest {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)
    }

    fn render(&self) -> String {
        Template::new("*Custom Plan Request*")
            .field("👤 Name", &self.name)
            .field("📧 Email", &self.email)
            .field("💰 Budget", or(&self.budget, NOT_SPECIFIED))
            .body(Some("📋 Project Details"), or(&self.details, NOT_PROVIDED))
            .render()
    }
}

/// Free trial section form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeTrialRequest {
    pub name: String,
    pub email: String,
    pub idea: String,
}

impl HandoffMessage for FreeTrialRequest {
    fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)
    }

    fn render(&self) -> String {
        Template::new("*Free Trial Request*")
            .field("👤 Name", &self.name)
            .field("📧 Email", &self.email)
            .body(Some("📋 Project Idea"), or(&self.idea, NOT_PROVIDED))
            .render()
    }
}

/// Confirmation relayed after the checkout widget reports success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub plan: String,
    pub amount_rupees: u64,
    pub payment_id: String,
    /// Name in the closing line.
    pub brand: String,
}

impl HandoffMessage for PaymentConfirmation {
    fn validate(&self) -> Result<(), FormError> {
        require("payment_id", &self.payment_id)
    }

    fn render(&self) -> String {
        let amount = format!("₹{}", group_indian(self.amount_rupees));
        let closing = format!("Thank you for choosing {}!", self.brand.trim());
        Template::new("*Payment Successful* ✅")
            .field("📦 Plan", &self.plan)
            .field("💰 Amount", &amount)
            .field("🔑 Payment ID", &self.payment_id)
            .body(None, &closing)
            .render()
    }
}

/// Formats with Indian digit grouping: the last three digits, then pairs.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.push_str(std::str::from_utf8(pair).unwrap_or_default());
    }
    out.push(',');
    out.push_str(tail);
    out
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

struct Template<'a> {
    header: &'a str,
    fields: Vec<(&'a str, &'a str)>,
    body_label: Option<&'a str>,
    body: &'a str,
}

impl<'a> Template<'a> {
    fn new(header: &'a str) -> Self {
        Self {
            header,
            fields: Vec::new(),
            body_label: None,
            body: "",
        }
    }

    fn field(mut self, label: &'a str, value: &'a str) -> Self {
        self.fields.push((label, value.trim()));
        self
    }

    fn body(mut self, label: Option<&'a str>, body: &'a str) -> Self {
        self.body_label = label;
        self.body = body;
        self
    }

    fn render(&self) -> String {
        let mut lines = vec![self.header.to_owned(), RULE.to_owned()];
        lines.extend(
            self.fields
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value)),
        );
        lines.push(RULE.to_owned());
        if let Some(label) = self.body_label {
            lines.push(format!("{}:", label));
        }
        lines.push(self.body.to_owned());
        lines.join("\n").trim().to_owned()
    }
}
