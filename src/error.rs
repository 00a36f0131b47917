use thiserror::Error;

/// Falhas ao buscar ou interpretar dados do UptimeRobot.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("falha na requisição ao UptimeRobot: {0}")]
    Http(#[from] reqwest::Error),

    #[error("UptimeRobot recusou a requisição: {0}")]
    Rejected(String),

    #[error("monitor {0} não encontrado na resposta do UptimeRobot")]
    MonitorNotFound(u64),

    #[error("create_datetime inválido no monitor {monitor_id}: {timestamp}")]
    InvalidTimestamp { monitor_id: u64, timestamp: i64 },
}
