//! Payment transactions and their summary totals.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::label::labelled_enum;
use super::validation::validate_non_empty_field;
use super::{CatalogueValidationError, Money, MoneyDto};

labelled_enum! {
    /// Direction and purpose of a payment.
    pub enum PaymentType {
        PremiumPayment => "Premium Payment",
        ClaimPayout => "Claim Payout",
        Refund => "Refund",
    }
}

labelled_enum! {
    /// Side of the ledger a payment lands on.
    pub enum PaymentDirection {
        Incoming => "incoming",
        Outgoing => "outgoing",
    }
}

impl PaymentType {
    /// Premiums come in; payouts and refunds go out.
    pub const fn direction(self) -> PaymentDirection {
        match self {
            Self::PremiumPayment => PaymentDirection::Incoming,
            Self::ClaimPayout | Self::Refund => PaymentDirection::Outgoing,
        }
    }
}

labelled_enum! {
    /// Settlement state of a payment.
    pub enum PaymentStatus {
        Successful => "Successful",
        Pending => "Pending",
        Processing => "Processing",
        Failed => "Failed",
    }
}

labelled_enum! {
    /// Instrument used to move the money.
    pub enum PaymentMethod {
        CreditCard => "Credit Card",
        BankTransfer => "Bank Transfer",
        DirectDebit => "Direct Debit",
    }
}

/// Input payload for [`Payment::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDraft {
    pub id: String,
    pub client: String,
    pub policy_number: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub payment_type: PaymentType,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}

/// Transaction row shown on the Payments page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[schema(example = "TRX-4562")]
    id: String,
    client: String,
    policy_number: String,
    #[schema(value_type = String, format = Date)]
    date: NaiveDate,
    #[schema(value_type = MoneyDto)]
    amount: Money,
    #[serde(rename = "type")]
    payment_type: PaymentType,
    method: PaymentMethod,
    status: PaymentStatus,
}

impl Payment {
    /// Validate and construct a payment.
    pub fn new(draft: PaymentDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: validate_non_empty_field(draft.id, "payment.id")?,
            client: validate_non_empty_field(draft.client, "payment.client")?,
            policy_number: validate_non_empty_field(draft.policy_number, "payment.policy_number")?,
            date: draft.date,
            amount: draft.amount,
            payment_type: draft.payment_type,
            method: draft.method,
            status: draft.status,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn client(&self) -> &str {
        self.client.as_str()
    }
    pub fn policy_number(&self) -> &str {
        self.policy_number.as_str()
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn amount(&self) -> Money {
        self.amount
    }
    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }
    pub fn method(&self) -> PaymentMethod {
        self.method
    }
    pub fn status(&self) -> PaymentStatus {
        self.status
    }
    pub fn direction(&self) -> PaymentDirection {
        self.payment_type.direction()
    }

    fn settles(&self) -> bool {
        self.status != PaymentStatus::Failed
    }
}

/// Incoming and outgoing totals over a set of payments.
///
/// Failed transactions are excluded from both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    /// Sum of premium payments.
    #[schema(value_type = MoneyDto)]
    pub total_incoming: Money,
    /// Sum of claim payouts and refunds.
    #[schema(value_type = MoneyDto)]
    pub total_outgoing: Money,
}

impl PaymentSummary {
    /// Summarise the supplied payments.
    ///
    /// # Examples
    /// ```
    /// use insure_backend::domain::{PaymentSummary, Money};
    ///
    /// let summary = PaymentSummary::from_payments(&[]);
    /// assert_eq!(summary.total_incoming, Money::ZERO);
    /// ```
    pub fn from_payments(payments: &[Payment]) -> Self {
        let total = |direction: PaymentDirection| -> Money {
            payments
                .iter()
                .filter(|payment| payment.settles() && payment.direction() == direction)
                .map(Payment::amount)
                .sum()
        };
        Self {
            total_incoming: total(PaymentDirection::Incoming),
            total_outgoing: total(PaymentDirection::Outgoing),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Summary totals over mixed payment sets.
    use super::*;
    use rstest::rstest;

    fn payment(id: &str, cents: u64, payment_type: PaymentType, status: PaymentStatus) -> Payment {
        Payment::new(PaymentDraft {
            id: id.to_owned(),
            client: "Emma Wilson".to_owned(),
            policy_number: "HOME-2023-4532".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 5, 8).expect("valid date"),
            amount: Money::from_cents(cents),
            payment_type,
            method: PaymentMethod::BankTransfer,
            status,
        })
        .expect("valid payment")
    }

    #[rstest]
    fn failed_payments_count_on_neither_side() {
        let payments = [
            payment("TRX-1", 45_000, PaymentType::PremiumPayment, PaymentStatus::Successful),
            payment("TRX-2", 10_000, PaymentType::PremiumPayment, PaymentStatus::Pending),
            payment("TRX-3", 99_999, PaymentType::PremiumPayment, PaymentStatus::Failed),
            payment("TRX-4", 120_000, PaymentType::ClaimPayout, PaymentStatus::Processing),
            payment("TRX-5", 5_000, PaymentType::Refund, PaymentStatus::Successful),
            payment("TRX-6", 7_777, PaymentType::Refund, PaymentStatus::Failed),
        ];

        let summary = PaymentSummary::from_payments(&payments);

        assert_eq!(summary.total_incoming, Money::from_cents(55_000));
        assert_eq!(summary.total_outgoing, Money::from_cents(125_000));
    }

    #[rstest]
    #[case(PaymentType::PremiumPayment, 1_200, 0)]
    #[case(PaymentType::ClaimPayout, 0, 1_200)]
    #[case(PaymentType::Refund, 0, 1_200)]
    fn each_type_lands_on_one_side(
        #[case] payment_type: PaymentType,
        #[case] incoming: u64,
        #[case] outgoing: u64,
    ) {
        let summary = PaymentSummary::from_payments(&[payment(
            "TRX-9",
            1_200,
            payment_type,
            PaymentStatus::Successful,
        )]);
        assert_eq!(summary.total_incoming.cents(), incoming);
        assert_eq!(summary.total_outgoing.cents(), outgoing);
    }

    #[rstest]
    #[case(PaymentType::PremiumPayment, PaymentDirection::Incoming)]
    #[case(PaymentType::ClaimPayout, PaymentDirection::Outgoing)]
    #[case(PaymentType::Refund, PaymentDirection::Outgoing)]
    fn payment_types_have_one_direction(
        #[case] payment_type: PaymentType,
        #[case] direction: PaymentDirection,
    ) {
        assert_eq!(payment_type.direction(), direction);
    }

    #[rstest]
    fn blank_ids_are_rejected() {
        let result = Payment::new(PaymentDraft {
            id: "  ".to_owned(),
            client: "Emma Wilson".to_owned(),
            policy_number: "HOME-2023-4532".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 5, 8).expect("valid date"),
            amount: Money::ZERO,
            payment_type: PaymentType::Refund,
            method: PaymentMethod::CreditCard,
            status: PaymentStatus::Pending,
        });
        assert!(result.is_err());
    }
}
