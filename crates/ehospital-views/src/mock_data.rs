//! Hardcoded clinical tables for the dashboard pages.
//!
//! All data in this module is fictional and fixed. It stands in for the
//! hospital systems a production dashboard would query.

use crate::panel::{Card, StaticTable};

// ── Simulated AI results ──────────────────────────────────────────────────────

/// Simulated diagnostic risk scores shown to doctors.
pub fn diagnostic_risk_cards() -> Vec<Card> {
    vec![
        Card::new("Heart Disease Risk", "6%"),
        Card::new("Diabetes Risk", "12%"),
        Card::new("Cancer Alert", "Low"),
    ]
}

/// Placeholder for the LLM clinical recommendation. No model is called.
pub fn llm_recommendation_placeholder() -> &'static str {
    "This area will call an LLM API to generate a preliminary report."
}

/// The patient-facing version of the simulated risk scores.
pub fn patient_ai_assessment() -> &'static str {
    "Simulated AI Risk Scores:\n\
     - Heart Disease: 6%\n\
     - Diabetes: 12%\n\
     - Cancer: Low"
}

// ── Lab results ───────────────────────────────────────────────────────────────

pub fn blood_test_results() -> StaticTable {
    StaticTable::from_rows(
        &["Parameter", "Result", "Normal Range", "Status"],
        &[
            &["Hemoglobin", "13.5 g/dL", "12–16 g/dL", "Normal"],
            &["WBC Count", "6,200 /µL", "4,000–10,000 /µL", "Normal"],
            &["Platelets", "250,000 /µL", "150,000–400,000 /µL", "Normal"],
            &["Cholesterol", "180 mg/dL", "<200 mg/dL", "Normal"],
        ],
    )
}

pub fn urine_test_results() -> StaticTable {
    StaticTable::from_rows(
        &["Parameter", "Result", "Normal Range", "Status"],
        &[
            &["pH", "6.5", "4.5–8.0", "Normal"],
            &["Protein", "Negative", "Negative", "Normal"],
            &["Glucose", "Negative", "Negative", "Normal"],
            &["Ketones", "Negative", "Negative", "Normal"],
        ],
    )
}

// ── Patient schedule and history ──────────────────────────────────────────────

pub fn upcoming_events() -> StaticTable {
    StaticTable::from_rows(
        &["Date", "Department", "Details"],
        &[
            &["2025-03-05", "Ophthalmology", "Eye examination @Ottawa Central Hospital"],
            &["2025-03-09", "Psychology", "Counseling session with Dr. Lai @155 Daly Ave"],
        ],
    )
}

pub fn historical_prescriptions() -> StaticTable {
    StaticTable::from_rows(
        &["Date", "Hospital", "Department", "Prescription Details"],
        &[
            &[
                "2024-10-01",
                "Ottawa Central Hospital",
                "Cardiology",
                "Amlodipine 5mg daily — Blood pressure control",
            ],
            &[
                "2024-11-15",
                "Ottawa General",
                "Endocrinology",
                "Metformin 500mg twice daily — Blood sugar control",
            ],
            &[
                "2025-01-05",
                "Ottawa Central Hospital",
                "Psychiatry",
                "Sertraline 50mg daily — Anxiety management",
            ],
        ],
    )
}

// ── Clinical staff ────────────────────────────────────────────────────────────

pub fn test_report_status() -> StaticTable {
    StaticTable::from_rows(
        &["Test ID", "Patient", "Status"],
        &[
            &["1001", "John", "Processing"],
            &["1002", "Mary", "Ready"],
            &["1003", "Lisa", "Processing"],
        ],
    )
}

pub fn staff_alerts() -> Vec<&'static str> {
    vec!["Patient Lisa: Heart rate abnormal — nurse alerted"]
}

// ── Analytics ─────────────────────────────────────────────────────────────────

pub fn analytics_kpis() -> Vec<Card> {
    vec![
        Card::new("Diagnosis volume", "120"),
        Card::new("Appointment volume", "320"),
        Card::new("AI Accuracy", "87%"),
        Card::new("Patient retention", "74%"),
    ]
}

/// Per-disease precision / recall / F1 of the (simulated) diagnostic model.
pub fn model_performance() -> StaticTable {
    const ROWS: [(&str, f64, f64, f64); 3] = [
        ("Heart", 0.82, 0.75, 0.78),
        ("Diabetes", 0.76, 0.68, 0.71),
        ("Cancer", 0.69, 0.60, 0.64),
    ];

    StaticTable {
        headers: ["Disease", "Precision", "Recall", "F1"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: ROWS
            .iter()
            .map(|(disease, precision, recall, f1)| {
                vec![
                    disease.to_string(),
                    format!("{:.2}", precision),
                    format!("{:.2}", recall),
                    format!("{:.2}", f1),
                ]
            })
            .collect(),
    }
}

// ── Home ──────────────────────────────────────────────────────────────────────

pub fn system_overview() -> &'static str {
    "This is a dashboard for an e-Hospital platform with four user roles:\n\
     - Doctors\n\
     - Patients\n\
     - Clinical staff\n\
     - Analysts / Management"
}

pub fn portal_footer() -> &'static str {
    "© 2025 Patient Portal | Health Monitoring System"
}
