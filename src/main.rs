use anyhow::Result;
use monitoramento_uptime::config::Config;
use monitoramento_uptime::types::Monitoring;
use monitoramento_uptime::uptime_robot::UptimeRobotClient;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializa o sistema de logging (tracing)
    tracing_subscriber::fmt::init();

    let config: Config = Config::load()?;
    if let Err(e) = config.validate() {
        anyhow::bail!("Configuração inválida: {}", e);
    }
    info!("Configuração carregada: {:?}", config);

    let client: UptimeRobotClient = UptimeRobotClient::new(&config)?;
    let monitorings: Vec<Monitoring> = client.fetch_monitorings(&config.monitor_ids).await?;

    if monitorings.len() < config.monitor_ids.len() {
        warn!(
            "Foram pedidos {} monitores, mas o UptimeRobot retornou {}.",
            config.monitor_ids.len(),
            monitorings.len()
        );
    }
    for monitoring in &monitorings {
        info!(
            "[MONITOR {}] online={} dias={} uptime 90d={:?}",
            monitoring.id,
            monitoring.is_online,
            monitoring.series.len(),
            monitoring.uptime.trimester
        );
    }

    println!("{}", serde_json::to_string_pretty(&monitorings)?);
    Ok(())
}
