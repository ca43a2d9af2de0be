// branch-client/examples/branch_store.rs
// Fetch branches and optionally toggle reservations
//
// Usage: cargo run --example branch_store -- [enable|disable <branch_id>]

use std::sync::Arc;

use branch_client::{BranchStore, ClientConfig, count_reservable_tables};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "branch_client=info,branch_store=info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using branch API at {}", config.base_url);

    let store = Arc::new(BranchStore::from_config(&config)?);

    store.fetch_branches().await;
    if let Some(msg) = store.error_message().await {
        tracing::error!("{msg}");
        return Ok(());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [action, branch_id] = args.as_slice() {
        let outcome = match action.as_str() {
            "enable" => store.enable_reservation(branch_id).await,
            "disable" => store.disable_reservation(branch_id).await,
            other => {
                println!("Unknown action: {other} (expected enable|disable)");
                return Ok(());
            }
        };
        tracing::info!(branch_id = %branch_id, ?outcome, "Reservation toggled");
        if let Some(msg) = store.error_message().await {
            tracing::error!("{msg}");
        }
    }

    for branch in store.branches().await {
        println!(
            "{:<12} {:<24} ref={:<10} reservations={} slot={}min tables={}",
            branch.id,
            branch.name,
            branch.reference,
            branch.accepts_reservations,
            branch.reservation_duration,
            count_reservable_tables(Some(&branch)),
        );
    }

    Ok(())
}
