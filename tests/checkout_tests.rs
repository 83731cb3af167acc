//! Integration tests for the checkout hand-off
#![cfg(feature = "handoff")]

use autoplay_carousel::checkout::{
    Checkout, CheckoutError, CheckoutOptions, GatewayError, GatewayLoad, MerchantConfig,
    PaymentGateway, PaymentReceipt, Plan,
};
use autoplay_carousel::handoff::{FormError, encode_uri_component};

struct MockGateway {
    load: GatewayLoad,
    refuse: bool,
    opened: Vec<CheckoutOptions>,
}

impl MockGateway {
    fn new(load: GatewayLoad) -> Self {
        Self {
            load,
            refuse: false,
            opened: Vec::new(),
        }
    }
}

impl PaymentGateway for MockGateway {
    fn load_state(&self) -> GatewayLoad {
        self.load
    }

    fn open(&mut self, options: &CheckoutOptions) -> Result<(), GatewayError> {
        if self.refuse {
            return Err(GatewayError {
                reason: "blocked".into(),
            });
        }
        self.opened.push(options.clone());
        Ok(())
    }
}

fn merchant() -> MerchantConfig {
    MerchantConfig::from_json(
        r#"{
            "key": "rzp_test_key",
            "name": "UrbanMint Digital",
            "brand": "UrbanMint",
            "chat_phone": "918287778313"
        }"#,
    )
    .unwrap()
}

#[test]
fn merchant_config_fills_defaults() {
    let config = merchant();
    assert_eq!(config.currency, "INR");
    assert_eq!(config.theme_color, "#10b981");

    let unbranded =
        MerchantConfig::from_json(r#"{"key": "k", "name": "Acme", "chat_phone": "1"}"#).unwrap();
    assert_eq!(unbranded.brand, "Acme");

    assert!(MerchantConfig::from_json(r#"{"name": "missing key"}"#).is_err());
}

#[test]
fn initiate_opens_widget_with_minor_unit_amount() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Ready));
    checkout.initiate_plan(Plan::Starter).unwrap();
    assert!(checkout.is_pending());

    let opened = &checkout.gateway().opened;
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].amount, 2_999_900);
    assert_eq!(opened[0].currency, "INR");
    assert_eq!(opened[0].description, "Starter Plan");
    assert_eq!(opened[0].theme.color, "#10b981");

    let json: serde_json::Value = serde_json::from_str(&opened[0].to_json().unwrap()).unwrap();
    assert_eq!(json["amount"], 2_999_900);
    assert_eq!(json["prefill"]["email"], "");
    assert_eq!(json["name"], "UrbanMint Digital");
}

#[test]
fn loading_gateway_asks_user_to_wait() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Loading));
    let err = checkout.initiate("Growth", 49_999).unwrap_err();
    assert_eq!(err, CheckoutError::GatewayLoading);
    assert_eq!(err.to_string(), "Payment gateway loading...");
    assert!(checkout.gateway().opened.is_empty());
}

#[test]
fn failed_script_or_refused_open_is_unavailable() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Failed));
    assert_eq!(
        checkout.initiate("Growth", 49_999),
        Err(CheckoutError::GatewayUnavailable)
    );

    let mut gateway = MockGateway::new(GatewayLoad::Ready);
    gateway.refuse = true;
    let mut checkout = Checkout::new(merchant(), gateway);
    let err = checkout.initiate("Growth", 49_999).unwrap_err();
    assert_eq!(err.to_string(), "payment gateway unavailable");
    assert!(!checkout.is_pending());
}

#[test]
fn custom_plan_and_bad_amounts_are_not_payable() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Ready));
    assert_eq!(
        checkout.initiate_plan(Plan::Custom),
        Err(CheckoutError::NotPayable(Plan::Custom))
    );
    assert_eq!(
        checkout.initiate("Starter", 0),
        Err(CheckoutError::InvalidAmount)
    );
    assert_eq!(
        checkout.initiate("Starter", u64::MAX),
        Err(CheckoutError::AmountOverflow)
    );
}

#[test]
fn success_callback_becomes_chat_confirmation() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Ready));
    checkout.initiate_plan(Plan::Growth).unwrap();

    let receipt: PaymentReceipt =
        serde_json::from_str(r#"{"razorpay_payment_id": "pay_ABC"}"#).unwrap();
    let url = checkout.on_success(receipt).unwrap();

    assert!(url.starts_with("https://wa.me/918287778313?text="));
    assert!(url.contains(&encode_uri_component("💰 Amount: ₹49,999")));
    assert!(url.contains(&encode_uri_component("🔑 Payment ID: pay_ABC")));
    assert!(url.ends_with(&encode_uri_component("Thank you for choosing UrbanMint!")));
    assert!(!checkout.is_pending());

    let again = checkout.on_success(PaymentReceipt {
        payment_id: "pay_ABC".into(),
    });
    assert_eq!(again, Err(CheckoutError::NoPendingPayment));
}

#[test]
fn failure_callback_clears_pending_payment() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Ready));
    checkout.initiate_plan(Plan::Starter).unwrap();

    let err = checkout.on_failure("card declined");
    assert_eq!(err, CheckoutError::PaymentFailed("card declined".into()));
    assert!(!checkout.is_pending());
}

#[test]
fn rejected_receipt_keeps_payment_pending_for_retry() {
    let mut checkout = Checkout::new(merchant(), MockGateway::new(GatewayLoad::Ready));
    checkout.initiate_plan(Plan::Starter).unwrap();

    let blank = checkout.on_success(PaymentReceipt {
        payment_id: "  ".into(),
    });
    assert_eq!(
        blank,
        Err(CheckoutError::Handoff(FormError::MissingField("payment_id")))
    );
    assert!(checkout.is_pending());

    let url = checkout
        .on_success(PaymentReceipt {
            payment_id: "pay_1".into(),
        })
        .unwrap();
    assert!(url.contains(&encode_uri_component("📦 Plan: Starter")));
    assert!(url.contains(&encode_uri_component("🔑 Payment ID: pay_1")));
    assert!(!checkout.is_pending());
}
