use crate::types::{CalendarDay, DailyRecord, DayOverlap};

/// Totais de indisponibilidade por dia, indexados pela posição no calendário.
#[derive(Debug, Clone)]
pub struct DailyRatioAccumulator {
    days: Vec<CalendarDay>,
    downtime: Vec<i64>,
}

impl DailyRatioAccumulator {
    pub fn new(days: Vec<CalendarDay>) -> Self {
        let downtime = vec![0; days.len()];
        Self { days, downtime }
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Soma as contribuições de um incidente. Não limita à capacidade aqui:
    /// incidentes sobrepostos podem passar do dia até o `finalize`.
    pub fn accumulate(&mut self, overlaps: &[DayOverlap]) {
        for overlap in overlaps {
            if let Some(total) = self.downtime.get_mut(overlap.day_index) {
                *total = total.saturating_add(overlap.seconds);
            }
        }
    }

    /// Converte os totais em razões de uptime, um registro por dia, em ordem.
    pub fn finalize(&self) -> Vec<DailyRecord> {
        self.days
            .iter()
            .zip(&self.downtime)
            .map(|(day, &total)| {
                debug_assert!(day.capacity_seconds > 0, "dia sem capacidade: {:?}", day);
                let capacity = day.capacity_seconds;
                let downtime = total.clamp(0, capacity);
                let ratio = (capacity - downtime) as f64 / capacity as f64;
                DailyRecord {
                    date: day.date,
                    uptime_ratio: ratio.clamp(0.0, 1.0),
                    downtime_seconds: downtime,
                    capacity_seconds: capacity,
                }
            })
            .collect()
    }
}
