use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Segundos em um dia UTC completo.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Motivo de um incidente, como reportado pelo provedor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogReason {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub detail: String,
}

/// Registro de indisponibilidade vindo do UptimeRobot (não ordenado, pode se sobrepor).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentLog {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub type_: Option<i32>,
    /// Início da queda, em segundos desde a epoch.
    pub datetime: i64,
    /// Duração da queda em segundos.
    pub duration: i64,
    #[serde(default)]
    pub reason: Option<LogReason>,
}

impl IncidentLog {
    pub fn new(datetime: i64, duration: i64) -> Self {
        Self {
            id: None,
            type_: None,
            datetime,
            duration,
            reason: None,
        }
    }

    /// Fim exclusivo do intervalo `[datetime, datetime + duration)`.
    pub fn end(&self) -> i64 {
        self.datetime.saturating_add(self.duration)
    }
}

/// Um dia do calendário da janela, com sua capacidade em segundos.
///
/// O intervalo coberto é `[start, start + capacity_seconds)`. Dias internos
/// começam à meia-noite UTC e têm 86400 segundos; o primeiro pode começar na
/// criação do monitor e o último termina em "agora".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub start: i64,
    pub capacity_seconds: i64,
}

impl CalendarDay {
    pub fn end(&self) -> i64 {
        self.start + self.capacity_seconds
    }
}

/// Contribuição de um incidente para um dia do calendário.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOverlap {
    pub day_index: usize,
    pub seconds: i64,
}

/// Ponto diário da série exportada.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub uptime_ratio: f64,
    pub downtime_seconds: i64,
    pub capacity_seconds: i64,
}

/// Médias de uptime calculadas pelo provedor (1, 7, 30 e 90 dias).
/// `None` quando o provedor mandou um valor ausente ou inválido.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UptimeSummary {
    pub day: Option<f64>,
    pub week: Option<f64>,
    pub month: Option<f64>,
    pub trimester: Option<f64>,
}

/// Objeto de domínio entregue aos consumidores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monitoring {
    pub id: u64,
    pub series: Vec<DailyRecord>,
    pub is_online: bool,
    pub uptime: UptimeSummary,
}
