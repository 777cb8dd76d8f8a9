use biogov::quiz::assess_json;
use biogov::vat::REVENUE_THRESHOLD;
use serde_json::json;

fn main() {
    // RUST_LOG=biogov=debug shows each classification
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== VAT Status Assessment ===\n");

    let submissions = [
        ("Freelancer, under threshold", "under 120k", "no"),
        ("Freelancer, registering voluntarily", "under 120k", "yes"),
        ("High turnover", "500k+", "no"),
    ];

    for (label, revenue, voluntary) in &submissions {
        let submission = json!({
            "activity": "freelance",
            "revenue": revenue,
            "clients": "private",
            "employees": "0",
            "voluntary": voluntary,
        });
        match assess_json(&submission) {
            Ok(result) => {
                println!("  {label}:");
                println!(
                    "    status={} ({}), estimated time {}",
                    result.status.code(),
                    result.status_text,
                    result.metadata.estimated_time_to_complete
                );
                for item in &result.checklist {
                    println!(
                        "    {}. {} [{}]",
                        item.step,
                        item.title,
                        item.estimated_time.as_deref().unwrap_or("—")
                    );
                }
            }
            Err(e) => println!("  {label} => INVALID: {e}"),
        }
    }

    println!("\n=== Malformed Submission ===\n");

    let malformed = json!({
        "activity": "freelance",
        "revenue": "under 120k",
        "clients": "private",
        "voluntary": "no",
    });
    match assess_json(&malformed) {
        Ok(result) => println!("  unexpectedly accepted: {}", result.status.code()),
        Err(e) => println!("  rejected: {e}"),
    }

    println!("\n  Threshold: annual turnover < {REVENUE_THRESHOLD} ILS");
}
