//! Analyze the sample sales funnel and print the report the way a dashboard
//! renderer would consume it.

use funnel_metrics::{analyze, FunnelStage};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let stages = vec![
        FunnelStage::new("Visitors", 10000),
        FunnelStage::new("Page Views", 6500),
        FunnelStage::new("Add to Cart", 2800),
        FunnelStage::new("Checkout", 1200),
        FunnelStage::new("Purchase", 850),
    ];

    let report = analyze(&stages).expect("sample funnel is valid");

    println!("Sales Conversion Funnel");
    println!("{:-<64}", "");
    for stage in &report.stages {
        println!(
            "{:<14} {:>7} users  {:>6.1}% conversion  {:>6.1}% drop-off  [{}]",
            stage.name,
            stage.value,
            stage.conversion_rate,
            stage.drop_off_rate,
            stage.severity()
        );
    }
    println!("{:-<64}", "");
    println!(
        "Overall: {:.1}% ({} of {} converted, {} lost)",
        report.summary.overall_conversion_rate,
        report.summary.total_conversions,
        report.summary.total_entries,
        report.summary.total_attrition
    );
}
