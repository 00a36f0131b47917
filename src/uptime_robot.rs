//! uptime_robot.rs — Cliente da API getMonitors do UptimeRobot
//!
//! Busca monitores com seus logs de queda e entrega objetos `Monitoring` prontos.
//! Sem retry e sem paginação: uma requisição por chamada.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::UpstreamError;
use crate::monitoring::map_to_domain_object;
use crate::types::{IncidentLog, Monitoring};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

/// Razões de uptime pedidas ao provedor: 1, 7, 30 e 90 dias.
const CUSTOM_UPTIME_RATIOS: &str = "1-7-30-90";
/// Apenas logs do tipo "down".
const DOWN_LOG_TYPE: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStat {
    Ok,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

/// Monitor como retornado pelo getMonitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UptimeRobotMonitor {
    pub id: u64,
    #[serde(default)]
    pub friendly_name: String,
    pub create_datetime: i64,
    pub status: u8,
    #[serde(default)]
    pub logs: Vec<IncidentLog>,
    #[serde(default)]
    pub all_time_uptime_ratio: String,
    #[serde(default)]
    pub custom_uptime_ratio: String,
    #[serde(default)]
    pub custom_down_durations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UptimeRobotResponse {
    pub stat: ResponseStat,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub monitors: Vec<UptimeRobotMonitor>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl UptimeRobotResponse {
    /// Mensagem de erro do provedor quando `stat = fail`.
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(err) => err
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            None => "sem detalhes".to_string(),
        }
    }

    /// Valida o `stat` e mapeia os monitores para o domínio.
    /// Um monitor que não pode ser mapeado é descartado sem afetar os demais.
    pub fn into_monitorings<C: Clock + Copy>(
        self,
        window_start: DateTime<Utc>,
        clock: C,
    ) -> Result<Vec<Monitoring>, UpstreamError> {
        if self.stat == ResponseStat::Fail {
            return Err(UpstreamError::Rejected(self.error_message()));
        }
        let monitorings = self
            .monitors
            .iter()
            .filter_map(|monitor| match map_to_domain_object(monitor, window_start, clock) {
                Ok(monitoring) => Some(monitoring),
                Err(e) => {
                    error!("[MONITOR {}] Monitor descartado: {}", monitor.id, e);
                    None
                }
            })
            .collect();
        Ok(monitorings)
    }
}

/// Início da janela: meia-noite UTC de `lookback_days` dias antes de hoje.
pub fn reporting_window_start(now: DateTime<Utc>, lookback_days: u32) -> DateTime<Utc> {
    now.date_naive()
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Fim da janela em segundos, arredondado para cima.
fn ceil_seconds(instant: DateTime<Utc>) -> i64 {
    if instant.timestamp_subsec_nanos() > 0 {
        instant.timestamp() + 1
    } else {
        instant.timestamp()
    }
}

/// Monta os campos do formulário enviado ao getMonitors.
pub fn request_form(
    monitor_ids: &[u64],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<(&'static str, String)> {
    let monitors = monitor_ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("-");

    vec![
        ("monitors", monitors),
        ("logs", "1".to_string()),
        ("format", "json".to_string()),
        ("custom_uptime_ratios", CUSTOM_UPTIME_RATIOS.to_string()),
        ("log_types", DOWN_LOG_TYPE.to_string()),
        ("logs_end_date", ceil_seconds(to).to_string()),
        ("logs_start_date", from.timestamp().to_string()),
    ]
}

pub struct UptimeRobotClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    lookback_days: u32,
}

impl UptimeRobotClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            lookback_days: config.lookback_days,
        })
    }

    /// Busca os monitores informados e converte cada um em `Monitoring`.
    pub async fn fetch_monitorings(
        &self,
        monitor_ids: &[u64],
    ) -> Result<Vec<Monitoring>, UpstreamError> {
        if monitor_ids.is_empty() {
            return Ok(Vec::new());
        }

        let to = SystemClock.now();
        let from = reporting_window_start(to, self.lookback_days);
        info!(
            "[UPTIMEROBOT] Buscando {} monitores, janela de {} até {}.",
            monitor_ids.len(),
            from,
            to
        );

        let response = self
            .http
            .post(&self.api_url)
            .query(&[("api_key", self.api_key.as_str())])
            .form(&request_form(monitor_ids, from, to))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("[UPTIMEROBOT] Erro na requisição: {:?}", e);
                e
            })?;

        let body: UptimeRobotResponse = response.json().await?;
        debug!(
            "[UPTIMEROBOT] Resposta recebida: stat={:?}, {} monitores.",
            body.stat,
            body.monitors.len()
        );

        body.into_monitorings(from, SystemClock)
    }

    pub async fn fetch_monitoring(&self, monitor_id: u64) -> Result<Monitoring, UpstreamError> {
        self.fetch_monitorings(&[monitor_id])
            .await?
            .into_iter()
            .next()
            .ok_or(UpstreamError::MonitorNotFound(monitor_id))
    }
}
