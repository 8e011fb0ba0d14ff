//! Adapter: a legacy cents-based gateway behind a modern processor trait

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[ScenarioSpec {
    id: "pay",
    label: "Pay $12.50",
    key: 'a',
}];

const DEMO_AMOUNT: f64 = 12.50;

/// Raw reply of the legacy gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyReply {
    /// 0 means accepted
    pub status_code: u16,
    pub txn: String,
}

/// Existing service with a fixed, awkward interface
pub struct LegacyPaymentGateway;

impl LegacyPaymentGateway {
    pub fn make_payment(&self, amount_cents: u64, currency_code: &str) -> LegacyReply {
        LegacyReply {
            status_code: 0,
            txn: format!("TXN-{currency_code}-{amount_cents:06}"),
        }
    }
}

/// What the checkout code wants to get back
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub success: bool,
    pub amount: f64,
    pub reference: String,
}

/// Target interface
pub trait PaymentProcessor {
    fn pay(&self, amount: f64, out: &mut Transcript) -> Receipt;
}

/// Wraps the legacy gateway and translates both directions
pub struct PaymentAdapter {
    gateway: LegacyPaymentGateway,
}

impl PaymentAdapter {
    pub fn new(gateway: LegacyPaymentGateway) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for PaymentAdapter {
    fn pay(&self, amount: f64, out: &mut Transcript) -> Receipt {
        let cents = to_cents(amount);
        out.step(format!("PaymentAdapter converts ${amount:.2} -> {cents} cents, currency USD"));
        out.step(format!("LegacyPaymentGateway::make_payment({cents}, \"USD\")"));
        let reply = self.gateway.make_payment(cents, "USD");
        out.step(format!(
            "Legacy reply: status_code={}, txn={}",
            reply.status_code, reply.txn
        ));
        Receipt {
            success: reply.status_code == 0,
            amount,
            reference: reply.txn,
        }
    }
}

fn to_cents(amount: f64) -> u64 {
    (amount * 100.0).round().max(0.0) as u64
}

/// Checkout written only against the target interface
fn checkout(processor: &dyn PaymentProcessor, amount: f64, out: &mut Transcript) {
    out.info(format!("Checkout calls processor.pay({amount:.2})"));
    let receipt = processor.pay(amount, out);
    out.result(format!(
        "Receipt: success={}, amount=${:.2}, reference={}",
        receipt.success, receipt.amount, receipt.reference
    ));
}

pub struct AdapterDemo;

impl AdapterDemo {
    fn pay(&self) -> Transcript {
        let mut t = Transcript::new();
        let adapter = PaymentAdapter::new(LegacyPaymentGateway);
        checkout(&adapter, DEMO_AMOUNT, &mut t);
        t
    }
}

impl PatternDemo for AdapterDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Adapter
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "pay" => Some(self.pay()),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let good = self.pay();

        let mut bad = Transcript::new();
        let gateway = LegacyPaymentGateway;
        let cents = to_cents(DEMO_AMOUNT);
        bad.info("Checkout converts to cents itself");
        bad.step(format!("gateway.make_payment({cents}, \"USD\")"));
        let reply = gateway.make_payment(cents, "USD");
        bad.step(format!(
            "Checkout interprets status_code={} by hand",
            reply.status_code
        ));
        bad.warning("Legacy details leak into every caller; swapping gateways touches all of them");

        Comparison {
            good,
            bad,
            note: "The adapter keeps the legacy API at arm's length: callers see one modern \
                   interface and the translation lives in a single place.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_converts_amount_to_cents() {
        let adapter = PaymentAdapter::new(LegacyPaymentGateway);
        let mut t = Transcript::new();
        let receipt = adapter.pay(12.5, &mut t);
        assert!(receipt.success);
        assert_eq!(receipt.reference, "TXN-USD-001250");
        assert!(t.contains("1250 cents"));
    }

    #[test]
    fn test_to_cents_rounds() {
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(to_cents(19.999), 2000);
        assert_eq!(to_cents(-3.0), 0);
    }

    #[test]
    fn test_pay_scenario_goes_through_legacy_call() {
        let t = AdapterDemo.run("pay").unwrap();
        let texts: Vec<&str> = t.texts().collect();
        assert_eq!(texts[0], "Checkout calls processor.pay(12.50)");
        assert!(texts
            .iter()
            .any(|line| line.starts_with("LegacyPaymentGateway::make_payment")));
        assert_eq!(
            texts.last(),
            Some(&"Receipt: success=true, amount=$12.50, reference=TXN-USD-001250")
        );
    }
}
