//! series.rs — Conversão de incidentes em série diária de uptime
//!
//! Uma instância por par monitor/janela: alimentada uma vez, exportada e descartada.

use crate::accumulator::DailyRatioAccumulator;
use crate::calendar;
use crate::clock::{Clock, SystemClock};
use crate::distributor::distribute;
use crate::types::{DailyRecord, IncidentLog};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Orquestra calendário, distribuição e acumulação para um monitor.
///
/// O "agora" é lido do relógio no primeiro `feed`/`export`, e o calendário
/// gerado nesse momento fica em cache para as chamadas seguintes.
#[derive(Debug)]
pub struct SeriesConverter<C = SystemClock> {
    window_start: DateTime<Utc>,
    created_at: DateTime<Utc>,
    clock: C,
    accumulator: Option<DailyRatioAccumulator>,
}

impl SeriesConverter<SystemClock> {
    pub fn new(window_start: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        Self::with_clock(window_start, created_at, SystemClock)
    }
}

impl<C: Clock> SeriesConverter<C> {
    pub fn with_clock(window_start: DateTime<Utc>, created_at: DateTime<Utc>, clock: C) -> Self {
        Self {
            window_start,
            created_at,
            clock,
            accumulator: None,
        }
    }

    fn accumulator(&mut self) -> &mut DailyRatioAccumulator {
        let (window_start, created_at) = (self.window_start, self.created_at);
        let clock = &self.clock;
        self.accumulator.get_or_insert_with(|| {
            let now = clock.now();
            let days = calendar::generate(window_start, created_at, now);
            debug!(
                "[SERIES] Calendário gerado: {} dias (janela {}, criação {}, agora {}).",
                days.len(),
                window_start,
                created_at,
                now
            );
            DailyRatioAccumulator::new(days)
        })
    }

    /// Distribui cada incidente pelos dias da janela e acumula os totais.
    /// Incidentes fora da janela são descartados silenciosamente.
    pub fn feed(&mut self, logs: &[IncidentLog]) {
        let accumulator = self.accumulator();
        let mut dropped = 0usize;

        for log in logs {
            let overlaps = distribute(log, accumulator.days());
            if overlaps.is_empty() {
                dropped += 1;
                trace!(
                    "[SERIES] Incidente em {} ({}s) sem interseção com a janela.",
                    log.datetime, log.duration
                );
                continue;
            }
            accumulator.accumulate(&overlaps);
        }

        debug!(
            "[SERIES] {} incidentes processados, {} descartados.",
            logs.len(),
            dropped
        );
    }

    /// Série diária ordenada; sem `feed` prévio, todos os dias com 100% de uptime.
    pub fn export(&mut self) -> Vec<DailyRecord> {
        self.accumulator().finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, TimeZone};
    use std::cell::Cell;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    /// Relógio que avança uma hora a cada leitura.
    struct TickingClock(Cell<DateTime<Utc>>);

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let now = self.0.get();
            self.0.set(now + chrono::Duration::hours(1));
            now
        }
    }

    #[test]
    fn creation_boundary_example() {
        let mut converter = SeriesConverter::with_clock(
            at(2024, 1, 1, 0),
            at(2024, 1, 5, 12),
            FixedClock(at(2024, 1, 6, 18)),
        );
        converter.feed(&[IncidentLog::new(at(2024, 1, 5, 23).timestamp(), 3600)]);
        let series = converter.export();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(series[0].capacity_seconds, 43_200);
        assert_eq!(series[0].downtime_seconds, 3600);
        assert!((series[0].uptime_ratio - 39_600.0 / 43_200.0).abs() < 1e-12);
        assert_eq!(series[1].capacity_seconds, 64_800);
        assert_eq!(series[1].uptime_ratio, 1.0);
    }

    #[test]
    fn now_is_read_once_and_cached() {
        let clock = TickingClock(Cell::new(at(2024, 1, 3, 12)));
        let mut converter = SeriesConverter::with_clock(at(2024, 1, 1, 0), at(2023, 1, 1, 0), &clock);

        let first = converter.export();
        let second = converter.export();

        assert_eq!(first, second);
        assert_eq!(first.last().map(|r| r.capacity_seconds), Some(12 * 3600));
        assert_eq!(clock.0.get(), at(2024, 1, 3, 13));
    }

    #[test]
    fn repeated_feeds_are_additive() {
        let log = IncidentLog::new(at(2024, 1, 2, 1).timestamp(), 600);
        let mut converter =
            SeriesConverter::with_clock(at(2024, 1, 1, 0), at(2023, 1, 1, 0), FixedClock(at(2024, 1, 3, 0)));
        converter.feed(std::slice::from_ref(&log));
        converter.feed(std::slice::from_ref(&log));

        assert_eq!(converter.export()[1].downtime_seconds, 1200);
    }

    #[test]
    fn creation_after_now_exports_empty_series() {
        let mut converter =
            SeriesConverter::with_clock(at(2024, 1, 1, 0), at(2024, 6, 1, 0), FixedClock(at(2024, 1, 3, 0)));
        converter.feed(&[IncidentLog::new(at(2024, 1, 2, 0).timestamp(), 600)]);
        assert!(converter.export().is_empty());
    }
}
