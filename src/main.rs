use kitchen_pipeline::lifecycle::{setup_tracing, Kitchen, KitchenConfig};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = KitchenConfig::from_env().map_err(|e| e.to_string())?;
    info!(
        order_size = config.order_size,
        rounds = config.rounds,
        time_unit_ms = config.time_unit_ms,
        "Opening kitchen"
    );

    let kitchen = Kitchen::new(config).map_err(|e| e.to_string())?;
    let rounds = kitchen.config().rounds;

    let result = kitchen
        .serve(rounds)
        .instrument(tracing::info_span!("service"))
        .await;

    match result {
        Ok(reports) => {
            for report in &reports {
                info!(
                    round = report.round,
                    order = %report.order,
                    meal = %report.meal,
                    "Customer left happy"
                );
            }
            kitchen.shutdown();
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Service stopped");
            kitchen.shutdown();
            Err(e.to_string())
        }
    }
}
