//! distributor.rs — Repartição de um incidente entre os dias que ele toca

use crate::types::{CalendarDay, DayOverlap, IncidentLog};

/// Segundos de interseção entre `[start, end)` e o intervalo do dia.
pub fn overlap_seconds(start: i64, end: i64, day: &CalendarDay) -> i64 {
    (end.min(day.end()) - start.max(day.start)).max(0)
}

/// Calcula quanto um incidente contribui para cada dia do calendário.
///
/// Função pura: `days` precisa estar ordenado e sem sobreposição, como sai de
/// `calendar::generate`. Durações não positivas e intervalos fora da janela
/// não contribuem nada. Só dias com interseção não nula aparecem no resultado.
pub fn distribute(log: &IncidentLog, days: &[CalendarDay]) -> Vec<DayOverlap> {
    if log.duration <= 0 {
        return Vec::new();
    }

    let start = log.datetime;
    let end = log.end();
    // Primeiro dia que termina depois do início do incidente
    let first = days.partition_point(|day| day.end() <= start);

    days[first..]
        .iter()
        .take_while(|day| day.start < end)
        .enumerate()
        .filter_map(|(offset, day)| {
            let seconds = overlap_seconds(start, end, day);
            (seconds > 0).then_some(DayOverlap {
                day_index: first + offset,
                seconds,
            })
        })
        .collect()
}
