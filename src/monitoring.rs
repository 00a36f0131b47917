//! monitoring.rs — Monta o objeto de domínio a partir de um monitor do UptimeRobot

use crate::clock::Clock;
use crate::error::UpstreamError;
use crate::series::SeriesConverter;
use crate::types::{Monitoring, UptimeSummary};
use crate::uptime_robot::UptimeRobotMonitor;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Status numérico de um monitor no UptimeRobot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorStatus {
    Paused,
    NotCheckedYet,
    Up,
    SeemsDown,
    Down,
    Unknown(u8),
}

impl MonitorStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => MonitorStatus::Paused,
            1 => MonitorStatus::NotCheckedYet,
            2 => MonitorStatus::Up,
            8 => MonitorStatus::SeemsDown,
            9 => MonitorStatus::Down,
            other => MonitorStatus::Unknown(other),
        }
    }

    /// Só "seems down" e "down" contam como fora do ar.
    pub fn is_online(self) -> bool {
        !matches!(self, MonitorStatus::SeemsDown | MonitorStatus::Down)
    }
}

/// Interpreta `custom_uptime_ratio` ("dia-semana-mês-trimestre").
///
/// Valores ausentes ou não numéricos viram `None`; o monitor continua válido.
pub fn parse_uptime_summary(monitor_id: u64, raw: &str) -> UptimeSummary {
    let parts: Vec<Option<f64>> = raw
        .split('-')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect();
    let value = |index: usize| parts.get(index).copied().flatten();

    let summary = UptimeSummary {
        day: value(0),
        week: value(1),
        month: value(2),
        trimester: value(3),
    };
    if parts.len() != 4 || parts.iter().any(Option::is_none) {
        warn!(
            "[MONITOR {}] custom_uptime_ratio malformado: {:?}.",
            monitor_id, raw
        );
    }
    summary
}

/// Converte um monitor do provedor no objeto `Monitoring`.
///
/// A série cobre de `window_start` (ou da criação do monitor) até o "agora" do relógio.
pub fn map_to_domain_object<C: Clock>(
    monitor: &UptimeRobotMonitor,
    window_start: DateTime<Utc>,
    clock: C,
) -> Result<Monitoring, UpstreamError> {
    let created_at = DateTime::from_timestamp(monitor.create_datetime, 0).ok_or(
        UpstreamError::InvalidTimestamp {
            monitor_id: monitor.id,
            timestamp: monitor.create_datetime,
        },
    )?;

    let mut converter = SeriesConverter::with_clock(window_start, created_at, clock);
    converter.feed(&monitor.logs);
    let series = converter.export();

    let uptime = parse_uptime_summary(monitor.id, &monitor.custom_uptime_ratio);
    let status = MonitorStatus::from_code(monitor.status);

    debug!(
        "[MONITOR {}] '{}' mapeado: status={:?}, {} dias na série, {} incidentes.",
        monitor.id,
        monitor.friendly_name,
        status,
        series.len(),
        monitor.logs.len()
    );

    Ok(Monitoring {
        id: monitor.id,
        series,
        is_online: status.is_online(),
        uptime,
    })
}
