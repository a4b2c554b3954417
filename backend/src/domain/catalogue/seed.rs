//! Demonstration records served by the fixture catalogue.

use super::validation::calendar_date;
use super::{
    CatalogueValidationError, Claim, ClaimDraft, ClaimStatus, Client, ClientDraft, ClientStatus,
    Money, Payment, PaymentDraft, PaymentMethod, PaymentStatus, PaymentType, Policy, PolicyDraft,
    PolicyStatus, PolicyType,
};

type Seeded<T> = Result<Vec<T>, CatalogueValidationError>;

/// Client book.
pub fn clients() -> Seeded<Client> {
    use ClientStatus::{Active, Inactive};
    #[rustfmt::skip]
    let rows = [
        ("CL-1001", "Robert Johnson", "robert.j@example.com", "(555) 123-4567", "123 Main St, New York, NY", 2, Active, (2023, 4, 15)),
        ("CL-1002", "Emma Wilson", "emma.w@example.com", "(555) 234-5678", "456 Oak Ave, Chicago, IL", 1, Active, (2023, 7, 22)),
        ("CL-1003", "Michael Brown", "michael.b@example.com", "(555) 345-6789", "789 Pine Rd, Los Angeles, CA", 3, Active, (2024, 1, 10)),
        ("CL-1004", "Sarah Davis", "sarah.d@example.com", "(555) 456-7890", "321 Elm St, Houston, TX", 1, Inactive, (2023, 9, 5)),
        ("CL-1005", "James Miller", "james.m@example.com", "(555) 567-8901", "654 Maple Dr, Phoenix, AZ", 2, Active, (2024, 2, 28)),
        ("CL-1006", "Jennifer Taylor", "jennifer.t@example.com", "(555) 678-9012", "987 Cedar Ln, Philadelphia, PA", 1, Active, (2024, 3, 12)),
        ("CL-1007", "David Anderson", "david.a@example.com", "(555) 789-0123", "258 Birch Blvd, San Antonio, TX", 0, Inactive, (2023, 11, 19)),
    ];
    rows.into_iter()
        .map(|(id, name, email, phone, address, policies, status, joined)| {
            Client::new(ClientDraft {
                id: id.to_owned(),
                name: name.to_owned(),
                email: email.to_owned(),
                phone: phone.to_owned(),
                address: address.to_owned(),
                policies,
                status,
                join_date: calendar_date(joined, "client.join_date")?,
            })
        })
        .collect()
}

/// Policy register.
pub fn policies() -> Seeded<Policy> {
    use PolicyStatus::{Active, Expired, ExpiringSoon};
    use PolicyType::{Auto, Business, Health, Home, Life, Travel};
    #[rustfmt::skip]
    let rows = [
        ("POL-2501", "Robert Johnson", Auto, "AUTO-2023-1001", (2023, 4, 15), (2024, 4, 15), 120_000, Active),
        ("POL-2502", "Emma Wilson", Home, "HOME-2023-4532", (2023, 7, 22), (2024, 7, 22), 245_000, Active),
        ("POL-2503", "Michael Brown", Life, "LIFE-2024-0087", (2024, 1, 10), (2025, 1, 10), 360_000, Active),
        ("POL-2504", "Sarah Davis", Health, "HLTH-2023-7765", (2023, 9, 5), (2024, 9, 5), 480_000, ExpiringSoon),
        ("POL-2505", "James Miller", Auto, "AUTO-2024-1287", (2024, 2, 28), (2025, 2, 28), 95_000, Active),
        ("POL-2506", "Jennifer Taylor", Business, "BUSI-2024-3321", (2024, 3, 12), (2025, 3, 12), 520_000, Active),
        ("POL-2507", "David Anderson", Travel, "TRVL-2023-5543", (2023, 11, 19), (2024, 11, 19), 35_000, Expired),
    ];
    rows.into_iter()
        .map(|(id, client, policy_type, number, start, end, premium, status)| {
            Policy::new(PolicyDraft {
                id: id.to_owned(),
                client: client.to_owned(),
                policy_type,
                policy_number: number.to_owned(),
                start_date: calendar_date(start, "policy.start_date")?,
                end_date: calendar_date(end, "policy.end_date")?,
                premium: Money::from_cents(premium),
                status,
            })
        })
        .collect()
}

/// Claims ledger.
pub fn claims() -> Seeded<Claim> {
    use ClaimStatus::{Approved, InReview, Pending, Rejected};
    #[rustfmt::skip]
    let rows: [(_, _, _, _, _, _, _, &[&str]); 5] = [
        ("CLM-2023-001", "John Smith", "POL-1234", (2023, 5, 10), 150_000, Approved, "Car accident damage repair", &["accident_report.pdf", "repair_estimate.pdf"]),
        ("CLM-2023-002", "Sarah Johnson", "POL-5678", (2023, 5, 15), 75_000, Pending, "Medical expenses from injury", &["medical_report.pdf"]),
        ("CLM-2023-003", "Michael Brown", "POL-9012", (2023, 5, 20), 300_000, Rejected, "Property damage from storm", &["property_photos.pdf", "contractor_estimate.pdf"]),
        ("CLM-2023-004", "Emily Davis", "POL-3456", (2023, 5, 25), 200_000, InReview, "Home theft insurance claim", &["police_report.pdf", "item_list.pdf"]),
        ("CLM-2023-005", "David Wilson", "POL-7890", (2023, 5, 30), 120_000, Approved, "Travel insurance claim for lost luggage", &["airline_report.pdf"]),
    ];
    rows.into_iter()
        .map(|(id, client, number, date, amount, status, description, documents)| {
            Claim::new(ClaimDraft {
                id: id.to_owned(),
                client_name: client.to_owned(),
                policy_number: number.to_owned(),
                date: calendar_date(date, "claim.date")?,
                amount: Money::from_cents(amount),
                status,
                description: description.to_owned(),
                documents: documents.iter().map(|doc| (*doc).to_owned()).collect(),
            })
        })
        .collect()
}

/// Payment transactions, newest first.
pub fn payments() -> Seeded<Payment> {
    use PaymentMethod::{BankTransfer, CreditCard, DirectDebit};
    use PaymentStatus::{Failed, Pending, Processing, Successful};
    use PaymentType::{ClaimPayout, PremiumPayment, Refund};
    #[rustfmt::skip]
    let rows = [
        ("TRX-4562", "Robert Johnson", "AUTO-2023-1001", (2025, 5, 10), 45_000, PremiumPayment, CreditCard, Successful),
        ("TRX-4561", "Emma Wilson", "HOME-2023-4532", (2025, 5, 8), 61_250, PremiumPayment, BankTransfer, Successful),
        ("TRX-4558", "Sarah Davis", "HLTH-2023-7765", (2025, 5, 5), 125_000, ClaimPayout, BankTransfer, Pending),
        ("TRX-4556", "Michael Brown", "LIFE-2024-0087", (2025, 5, 3), 90_000, PremiumPayment, DirectDebit, Successful),
        ("TRX-4551", "James Miller", "AUTO-2024-1287", (2025, 4, 29), 23_750, PremiumPayment, CreditCard, Failed),
        ("TRX-4548", "Jennifer Taylor", "BUSI-2024-3321", (2025, 4, 28), 130_000, PremiumPayment, BankTransfer, Successful),
        ("TRX-4546", "David Anderson", "TRVL-2023-5543", (2025, 4, 25), 70_000, Refund, BankTransfer, Processing),
    ];
    rows.into_iter()
        .map(|(id, client, number, date, amount, payment_type, method, status)| {
            Payment::new(PaymentDraft {
                id: id.to_owned(),
                client: client.to_owned(),
                policy_number: number.to_owned(),
                date: calendar_date(date, "payment.date")?,
                amount: Money::from_cents(amount),
                payment_type,
                method,
                status,
            })
        })
        .collect()
}
