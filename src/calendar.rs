//! calendar.rs — Geração dos dias UTC da janela de relatório
//!
//! Tudo é calculado em segundos desde a epoch; a data só serve de rótulo.

use crate::types::{CalendarDay, SECONDS_PER_DAY};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Meia-noite UTC de `date`, em segundos desde a epoch.
pub fn midnight_of(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Gera a sequência ordenada de dias entre `max(window_start, created_at)` e o dia de `now`.
///
/// - O primeiro dia começa na meia-noite UTC, mas nunca antes de `created_at`;
///   se o monitor foi criado no meio do dia, a capacidade é o que resta do dia.
/// - O último dia (hoje) termina em `now`, com capacidade mínima de 1 segundo.
/// - Se `created_at > now` (ou a janela começa depois de `now`), retorna vazio.
pub fn generate(
    window_start: DateTime<Utc>,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<CalendarDay> {
    if created_at > now {
        return Vec::new();
    }

    let created_ts = created_at.timestamp();
    let now_ts = now.timestamp();
    let first_date = window_start.max(created_at).date_naive();
    let last_date = now.date_naive();

    first_date
        .iter_days()
        .take_while(|date| *date <= last_date)
        .map(|date| {
            let midnight = midnight_of(date);
            let start = midnight.max(created_ts);
            let end = (midnight + SECONDS_PER_DAY).min(now_ts);
            CalendarDay {
                date,
                start,
                capacity_seconds: (end - start).max(1),
            }
        })
        .collect()
}
