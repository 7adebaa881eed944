//! Example demonstrating a full logging session
//!
//! This example stages a couple of activities, prints the batch summary,
//! and submits them to the backend in one request.
//!
//! Note: submission requires the ecotrace backend to be reachable.
//! To run: cargo run --example log_activities

use ecotrace_client::HttpGateway;
use ecotrace_core::config::ClientConfig;
use ecotrace_core::models::{Category, ImpactBand};
use ecotrace_session::LoggerSession;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("Ecotrace - Activity Logging Example");
    println!("===================================\n");

    // Resolve configuration: defaults, then ECOTRACE_* environment variables
    let config = ClientConfig::with_defaults().load_from_env();
    println!("Backend: {}", config.api_base_url.value);
    println!("Timeout: {}s\n", config.request_timeout_secs.value);

    let gateway = match HttpGateway::from_config(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            println!("✗ Failed to build HTTP gateway: {}", e);
            return;
        }
    };

    let mut session = LoggerSession::new(gateway)
        .on_activities_added(|count| println!("  (view refresh hook fired for {} entries)", count));

    // A 12 km petrol-car commute
    session.draft_mut().set_amount("12");
    session.draft_mut().set_description("Commute to the office");
    println!("Draft estimate: {:.2} kg CO2", session.draft().estimated_co2());
    if let Err(e) = session.add_activity() {
        println!("✗ Could not add activity: {}", e);
        return;
    }

    // Two vegetarian meals
    session.draft_mut().set_category(Category::Food);
    session.draft_mut().set_subtype("vegetarian_meal");
    session.draft_mut().set_amount("2");
    println!("Draft estimate: {:.2} kg CO2", session.draft().estimated_co2());
    if let Err(e) = session.add_activity() {
        println!("✗ Could not add activity: {}", e);
        return;
    }

    let total = session.total_co2();
    println!("\nBatch of {} activities", session.entry_count());
    println!("  Total: {:.2} kg CO2 ({})", total, ImpactBand::for_kg(total).message());
    println!("  Eco savings vs. worst case: {:.2} kg CO2", session.eco_savings());

    println!("\nSubmitting...");
    println!("(This will fail if the backend is not running)\n");

    match session.submit_all().await {
        Ok(count) => {
            println!("✓ {} activities submitted in one batch", count);
            if let Some(notice) = session.success_notice() {
                println!("  Notice: {}", notice);
            }
        }
        Err(e) => {
            println!("✗ Submission failed: {}", e);
            println!("  The batch is preserved; {} entries remain for retry.", session.entry_count());
        }
    }
}
