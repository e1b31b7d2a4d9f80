//! Built-in sample data
//!
//! The records the portal ships with when no dataset file is configured.
//! `vr-1003` belongs to a store outside the default allow-list.

use crate::models::{
    ApprovalStatus, Dataset, Payment, Rating, ReplenishmentStatus, ReturnItem, ReturnNote,
    VisitReport, YesNo,
};

fn rating(value: u8) -> Rating {
    Rating {
        value,
        remarks: None,
    }
}

fn rating_with(value: u8, remarks: &str) -> Rating {
    Rating {
        value,
        remarks: Some(remarks.to_string()),
    }
}

/// Sample field visit reports
pub fn field_visits() -> Vec<VisitReport> {
    vec![
        VisitReport {
            id: "vr-1001".into(),
            datetime: "2025-10-05T10:30:00Z".into(),
            employee_id: "EMP-021".into(),
            employee_name: "Anita Rao".into(),
            store_id: "S-1001".into(),
            store_name: "Medplus Koramangala".into(),
            local_head_name: "R. Sharma".into(),
            store_environment: rating_with(2, "Dust near billing counter"),
            staff_grooming: rating(4),
            staff_quality: rating(3),
            staff_present: 6,
            pvt_label_pharma: rating_with(2, "No shelf talkers"),
            pvt_label_non_pharma: rating(3),
            tos_replenishment: ReplenishmentStatus::Pending,
            outstanding_payments: YesNo::No,
            sop_deviations: Some("Expired promo standee on floor".into()),
            other_observations: Some("High evening footfall".into()),
        },
        VisitReport {
            id: "vr-1002".into(),
            datetime: "2025-10-06T14:10:00Z".into(),
            employee_id: "EMP-033".into(),
            employee_name: "Vikram Kulkarni".into(),
            store_id: "S-1001".into(),
            store_name: "Medplus Koramangala".into(),
            local_head_name: "R. Sharma".into(),
            store_environment: rating(5),
            staff_grooming: rating(5),
            staff_quality: rating(4),
            staff_present: 5,
            pvt_label_pharma: rating(4),
            pvt_label_non_pharma: rating(4),
            tos_replenishment: ReplenishmentStatus::Completed,
            outstanding_payments: YesNo::No,
            sop_deviations: None,
            other_observations: Some("All displays updated".into()),
        },
        VisitReport {
            id: "vr-1003".into(),
            datetime: "2025-10-06T11:45:00Z".into(),
            employee_id: "EMP-021".into(),
            employee_name: "Anita Rao".into(),
            store_id: "S-2002".into(),
            store_name: "Medplus Indiranagar".into(),
            local_head_name: "K. Menon".into(),
            store_environment: rating(4),
            staff_grooming: rating(3),
            staff_quality: rating_with(1, "Billing errors observed"),
            staff_present: 4,
            pvt_label_pharma: rating(3),
            pvt_label_non_pharma: rating(3),
            tos_replenishment: ReplenishmentStatus::Completed,
            outstanding_payments: YesNo::Yes,
            sop_deviations: None,
            other_observations: None,
        },
    ]
}

/// Sample payments
pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "1".into(),
            payment_id: "PAY-2024-001".into(),
            store_id: "S-1001".into(),
            name: "Monthly Payment".into(),
            created_date: "2024-01-15".into(),
            approved_date: Some("2024-01-16".into()),
            status: ApprovalStatus::Approved,
            amount: 30000,
            mode_of_payment: "NEFT".into(),
        },
        Payment {
            id: "2".into(),
            payment_id: "PAY-2024-002".into(),
            store_id: "S-1001".into(),
            name: "Advance Payment".into(),
            created_date: "2024-01-20".into(),
            approved_date: None,
            status: ApprovalStatus::Pending,
            amount: 15000,
            mode_of_payment: "UPI".into(),
        },
    ]
}

/// Sample returns
pub fn returns() -> Vec<ReturnNote> {
    vec![
        ReturnNote {
            id: "1".into(),
            return_id: "RET-2024-001".into(),
            store_id: "S-1001".into(),
            tax_invoice: "INV-2024-001".into(),
            created_by: "John Doe".into(),
            total: 5000,
            received_date: "2024-01-10".into(),
            return_note_id: "RN-001".into(),
            status: ApprovalStatus::Approved,
        },
        ReturnNote {
            id: "2".into(),
            return_id: "RET-2024-002".into(),
            store_id: "S-1001".into(),
            tax_invoice: "INV-2024-002".into(),
            created_by: "John Doe".into(),
            total: 3500,
            received_date: "2024-01-15".into(),
            return_note_id: "RN-002".into(),
            status: ApprovalStatus::Pending,
        },
    ]
}

/// Sample return line items
pub fn return_items() -> Vec<ReturnItem> {
    vec![
        ReturnItem {
            product_name: "Paracetamol 500mg".into(),
            product_id: "PROD-001".into(),
            batch_id: "BATCH-001".into(),
            pack_size: "10 tablets".into(),
            exp_date: "2025-12-31".into(),
            inv_id: "INV-2024-001".into(),
            ord_id: "ORD-2024-001".into(),
            price: 50,
            returned_quantity: 20,
            total: 1000,
        },
        ReturnItem {
            product_name: "Amoxicillin 250mg".into(),
            product_id: "PROD-002".into(),
            batch_id: "BATCH-002".into(),
            pack_size: "15 capsules".into(),
            exp_date: "2025-10-31".into(),
            inv_id: "INV-2024-001".into(),
            ord_id: "ORD-2024-001".into(),
            price: 100,
            returned_quantity: 40,
            total: 4000,
        },
    ]
}

/// All sample records
pub fn dataset() -> Dataset {
    Dataset {
        field_visits: field_visits(),
        payments: payments(),
        returns: returns(),
        return_items: return_items(),
    }
}
