//! Checkout hand-off to a vendor payment widget.
//!
//! The widget is a black box behind [`PaymentGateway`]: this module only
//! builds its options record, opens it, and relays the vendor's success
//! callback into the chat-link hand-off. No payment logic lives here.

use crate::handoff::{ChatLink, FormError, PaymentConfirmation};
use serde::{Deserialize, Serialize};

/// Merchant settings passed to the widget and used for confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Public key for the payment widget.
    pub key: String,
    /// Merchant name shown in the widget header.
    pub name: String,
    /// Short name used in the confirmation message.
    #[serde(default)]
    pub brand: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    /// Number receiving chat hand-offs.
    pub chat_phone: String,
}

fn default_currency() -> String {
    "INR".to_owned()
}

fn default_theme_color() -> String {
    "#10b981".to_owned()
}

impl MerchantConfig {
    /// Parses a JSON config. Missing `brand` falls back to `name`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: MerchantConfig = serde_json::from_str(json)?;
        if config.brand.trim().is_empty() {
            config.brand = config.name.clone();
        }
        Ok(config)
    }

    pub fn chat_link(&self) -> ChatLink {
        ChatLink::new(self.chat_phone.clone())
    }
}

/// Buyer details the widget pre-fills. Empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub color: String,
}

/// Options record handed to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOptions {
    pub key: String,
    /// Amount in minor currency units (paise).
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub prefill: Prefill,
    pub theme: Theme,
}

impl CheckoutOptions {
    /// Serializes to the JSON shape the widget expects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Success payload from the widget callback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentReceipt {
    #[serde(alias = "razorpay_payment_id")]
    pub payment_id: String,
}

/// Load state of the vendor script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayLoad {
    Loading,
    Ready,
    Failed,
}

/// The widget refused to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub reason: String,
}

impl core::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "gateway error: {}", self.reason)
    }
}

impl std::error::Error for GatewayError {}

/// Vendor payment widget.
pub trait PaymentGateway {
    /// Whether the vendor script has loaded.
    fn load_state(&self) -> GatewayLoad;

    /// Opens the widget's own modal. The outcome arrives later through
    /// [`Checkout::on_success`] or [`Checkout::on_failure`].
    fn open(&mut self, options: &CheckoutOptions) -> Result<(), GatewayError>;
}

/// Errors surfaced to the user around checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Script still loading; try again shortly.
    GatewayLoading,
    /// Script failed to load or refused to open.
    GatewayUnavailable,
    /// Zero amount.
    InvalidAmount,
    /// Amount does not fit in minor units.
    AmountOverflow,
    /// Plan has no fixed price; use the custom plan request.
    NotPayable(Plan),
    /// Success callback with no checkout in progress.
    NoPendingPayment,
    /// Vendor reported failure.
    PaymentFailed(String),
    /// Confirmation could not be rendered.
    Handoff(FormError),
}

impl core::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CheckoutError::GatewayLoading => write!(f, "Payment gateway loading..."),
            CheckoutError::GatewayUnavailable => write!(f, "payment gateway unavailable"),
            CheckoutError::InvalidAmount => write!(f, "payment amount must be non-zero"),
            CheckoutError::AmountOverflow => write!(f, "payment amount too large"),
            CheckoutError::NotPayable(plan) => {
                write!(f, "{} plan has no fixed price", plan.name())
            }
            CheckoutError::NoPendingPayment => write!(f, "no payment in progress"),
            CheckoutError::PaymentFailed(reason) => write!(f, "payment failed: {}", reason),
            CheckoutError::Handoff(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CheckoutError {}

impl From<FormError> for CheckoutError {
    fn from(err: FormError) -> Self {
        CheckoutError::Handoff(err)
    }
}

/// Pricing plans offered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Starter,
    Growth,
    Custom,
}

impl Plan {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Plan::Starter => "Starter",
            Plan::Growth => "Growth",
            Plan::Custom => "Custom",
        }
    }

    /// One-time price in rupees; `None` for tailored pricing.
    pub fn amount_rupees(&self) -> Option<u64> {
        match self {
            Plan::Starter => Some(29_999),
            Plan::Growth => Some(49_999),
            Plan::Custom => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingPayment {
    plan: String,
    amount_rupees: u64,
}

/// Drives one widget for a page.
pub struct Checkout<G: PaymentGateway> {
    merchant: MerchantConfig,
    gateway: G,
    pending: Option<PendingPayment>,
}

impl<G: PaymentGateway> Checkout<G> {
    pub fn new(merchant: MerchantConfig, gateway: G) -> Self {
        Self {
            merchant,
            gateway,
            pending: None,
        }
    }

    /// Builds the widget options for a plan label and rupee amount.
    pub fn options(&self, plan: &str, amount_rupees: u64) -> Result<CheckoutOptions, CheckoutError> {
        if amount_rupees == 0 {
            return Err(CheckoutError::InvalidAmount);
        }
        let amount = amount_rupees
            .checked_mul(100)
            .ok_or(CheckoutError::AmountOverflow)?;

        Ok(CheckoutOptions {
            key: self.merchant.key.clone(),
            amount,
            currency: self.merchant.currency.clone(),
            name: self.merchant.name.clone(),
            description: format!("{} Plan", plan),
            prefill: Prefill::default(),
            theme: Theme {
                color: self.merchant.theme_color.clone(),
            },
        })
    }

    /// Opens the widget for `plan` at `amount_rupees`.
    ///
    /// # Errors
    /// * `GatewayLoading` - script not loaded yet
    /// * `GatewayUnavailable` - script failed to load or refused to open
    /// * `InvalidAmount` / `AmountOverflow` - amount unusable
    pub fn initiate(&mut self, plan: &str, amount_rupees: u64) -> Result<(), CheckoutError> {
        match self.gateway.load_state() {
            GatewayLoad::Ready => {}
            GatewayLoad::Loading => return Err(CheckoutError::GatewayLoading),
            GatewayLoad::Failed => {
                warn!("payment gateway script failed to load");
                return Err(CheckoutError::GatewayUnavailable);
            }
        }

        let options = self.options(plan, amount_rupees)?;
        if let Err(err) = self.gateway.open(&options) {
            warn!("payment gateway refused to open: {}", err.reason.as_str());
            return Err(CheckoutError::GatewayUnavailable);
        }

        self.pending = Some(PendingPayment {
            plan: plan.to_owned(),
            amount_rupees,
        });
        Ok(())
    }

    /// Opens the widget for a catalogue plan.
    pub fn initiate_plan(&mut self, plan: Plan) -> Result<(), CheckoutError> {
        let amount = plan.amount_rupees().ok_or(CheckoutError::NotPayable(plan))?;
        self.initiate(plan.name(), amount)
    }

    /// Relays a vendor success callback, returning the confirmation chat URL.
    pub fn on_success(&mut self, receipt: PaymentReceipt) -> Result<String, CheckoutError> {
        let pending = self.pending.as_ref().ok_or(CheckoutError::NoPendingPayment)?;
        let confirmation = PaymentConfirmation {
            plan: pending.plan.clone(),
            amount_rupees: pending.amount_rupees,
            payment_id: receipt.payment_id,
            brand: self.merchant.brand.clone(),
        };
        // A rejected receipt keeps the payment pending for a retry.
        let url = self.merchant.chat_link().handoff(&confirmation)?;
        self.pending = None;
        Ok(url)
    }

    /// Relays a vendor failure callback.
    pub fn on_failure(&mut self, reason: impl Into<String>) -> CheckoutError {
        self.pending = None;
        let reason = reason.into();
        warn!("payment failed: {}", reason.as_str());
        CheckoutError::PaymentFailed(reason)
    }

    /// Returns true while a widget is open.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn merchant(&self) -> &MerchantConfig {
        &self.merchant
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }
}
