//! Scripted demo of rating and claims processing
//!
//! Walks one policy holder through a home and an auto quote, then takes a
//! water damage claim from first report to closure. Every step logs through
//! `tracing`; the collected results come back as a [`DemoReport`].

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Duration;
use core_kernel::{Clock, IdGenerator};
use domain_claims::{
    ClaimContext, ClaimRequest, ClaimSnapshot, ClaimsProcessor, ComplianceReport,
    ComplianceStatus, ProcessorConfig, SettlementResult,
};
use domain_party::{ClaimRecord, PolicyHolder};
use domain_policy::{
    calculate_flood_risk_score, get_location_risk, FloodRiskCategory, FloodRiskInput,
    PolicyQuote, PremiumCalculator, RatingTables,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Everything the demo produced
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub home_quote: PolicyQuote,
    pub auto_quote: PolicyQuote,
    pub flood_risk_score: u32,
    pub flood_risk_category: FloodRiskCategory,
    pub claim: ClaimSnapshot,
    pub settlement: SettlementResult,
    pub compliance: ComplianceStatus,
    pub compliance_report: ComplianceReport,
}

fn limits(items: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
    items
        .iter()
        .map(|(name, amount)| (name.to_string(), *amount))
        .collect()
}

/// Runs the demo against the given collaborators
///
/// # Errors
///
/// Returns error if the processor configuration is invalid or a claim
/// operation is refused
pub fn run_demo(
    config: ProcessorConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
) -> anyhow::Result<DemoReport> {
    let now = clock.now();
    let calculator = PremiumCalculator::new(RatingTables::default(), clock.clone());

    let holder = PolicyHolder::new(
        "John Doe",
        "123 Main St, Anytown, USA 12345",
        (now - Duration::days(44 * 365)).date_naive(),
        720,
    )
    .with_claim_history(vec![ClaimRecord::new(
        now - Duration::days(2 * 365),
        "AUTO",
        dec!(2500),
        "PAID",
    )]);

    let location = get_location_risk("60601");
    let home_premium = calculator.calculate_home_premium(
        dec!(350000),
        12,
        "MASONRY",
        location.as_str(),
        &holder,
    );
    let home_quote = calculator.quote(
        home_premium,
        "HO-3",
        dec!(1000),
        limits(&[
            ("dwelling", dec!(350000)),
            ("personal_property", dec!(175000)),
            ("liability", dec!(300000)),
            ("medical", dec!(5000)),
        ]),
    );
    tracing::info!(premium = %home_quote.annual_premium, location = location.as_str(), "Home quote issued");

    let auto_premium = calculator.calculate_auto_premium(dec!(25000), 4, true, true, &holder);
    let auto_quote = calculator.quote(
        auto_premium,
        "FULL",
        dec!(500),
        limits(&[
            ("bodily_injury", dec!(250000)),
            ("property_damage", dec!(100000)),
            ("collision", dec!(25000)),
            ("comprehensive", dec!(25000)),
        ]),
    );
    tracing::info!(premium = %auto_quote.annual_premium, "Auto quote issued");

    let (flood_risk_score, flood_risk_category) = calculate_flood_risk_score(&FloodRiskInput {
        elevation: Some(dec!(35)),
        distance_to_water: Some(dec!(0.4)),
        flood_zone: Some("AE".to_string()),
        prior_claims: Some(1),
    });

    let ctx = ClaimContext::new(clock, ids);
    let mut processor = ClaimsProcessor::new(config, ctx)?;

    let reported_date = now - Duration::hours(2);
    let claimant_info = BTreeMap::from([
        ("name".to_string(), "Robert Johnson".to_string()),
        ("phone".to_string(), "555-123-4567".to_string()),
        ("email".to_string(), "robert.johnson@example.com".to_string()),
        ("address".to_string(), "123 Main St, Sacramento, CA 95814".to_string()),
        ("state".to_string(), "CA".to_string()),
    ]);
    let claim_id = processor
        .create_claim(ClaimRequest {
            policy_number: "CA-23-123456-H".to_string(),
            claim_type: "HOME".to_string(),
            incident_date: reported_date - Duration::minutes(24 * 60 + 45),
            reported_date,
            description: "Water damage due to broken pipe in upstairs bathroom. Affected ceiling, walls, and flooring in downstairs living room.".to_string(),
            claimant_info,
            estimated_value: dec!(12500),
        })
        .id();

    processor.add_document(
        claim_id,
        "Water_Damage_Photo_1.jpg",
        "PHOTO",
        "/storage/photos/water_damage_1.jpg",
        "CLAIMANT",
    )?;
    processor.add_document(
        claim_id,
        "Plumber_Invoice.pdf",
        "INVOICE",
        "/storage/documents/plumber_invoice.pdf",
        "CLAIMANT",
    )?;
    processor.add_document(
        claim_id,
        "Adjuster_Inspection_Report.pdf",
        "REPORT",
        "/storage/documents/inspection_report.pdf",
        "ADJ001",
    )?;
    processor.verify_coverage(
        claim_id,
        true,
        "Policy covers water damage from internal plumbing issues",
        "ADJ001",
    )?;

    let damages = limits(&[
        ("structural", dec!(8000)),
        ("personal_property", dec!(2500)),
        ("additional_living_expenses", dec!(1500)),
    ]);
    let settlement = processor.calculate_settlement(claim_id, &damages, dec!(1000), dec!(50000))?;
    tracing::info!(%claim_id, amount = %settlement.settlement_amount, "Settlement calculated");

    processor.close_claim(
        claim_id,
        "Claim settled and payment issued to policyholder",
        "ADJ001",
    )?;

    let claim = processor
        .get_claim(claim_id)
        .ok_or_else(|| anyhow::anyhow!("claim {claim_id} disappeared"))?;
    let compliance = claim.check_compliance_status(processor.context().now());

    Ok(DemoReport {
        home_quote,
        auto_quote,
        flood_risk_score,
        flood_risk_category,
        claim: claim.snapshot(),
        settlement,
        compliance,
        compliance_report: processor.get_compliance_report(),
    })
}
