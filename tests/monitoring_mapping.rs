use chrono::{NaiveDate, TimeZone, Utc};
use monitoramento_uptime::uptime_robot::{reporting_window_start, UptimeRobotResponse};
use monitoramento_uptime::FixedClock;

// Resposta real do getMonitors, reduzida a dois monitores.
const RESPONSE: &str = r#"{
  "stat": "ok",
  "pagination": {"offset": 0, "limit": 50, "total": 2},
  "monitors": [
    {
      "id": 777749809,
      "friendly_name": "API",
      "create_datetime": 1704456000,
      "status": 2,
      "all_time_uptime_ratio": "99.950",
      "custom_uptime_ratio": "100.000-99.405-99.861-99.861",
      "custom_down_durations": "0-3600-3600-3600",
      "logs": [
        {"id": 1, "type": 1, "datetime": 1704495600, "duration": 3600,
         "reason": {"code": "333333", "detail": "Connection Timeout"}}
      ]
    },
    {
      "id": 777712827,
      "friendly_name": "Site",
      "create_datetime": 1577836800,
      "status": 9,
      "all_time_uptime_ratio": "98.000",
      "custom_uptime_ratio": "50.000-90.000-95.000-97.000",
      "custom_down_durations": "43200-43200-43200-43200",
      "logs": []
    }
  ]
}"#;

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 6, 18, 0, 0).unwrap())
}

#[test]
fn maps_every_monitor_with_series_and_status() {
    let body: UptimeRobotResponse = serde_json::from_str(RESPONSE).unwrap();
    let window_start = reporting_window_start(clock().0, 89);
    let monitorings = body.into_monitorings(window_start, clock()).unwrap();

    assert_eq!(monitorings.len(), 2);

    // Criado em 2024-01-05 12:00 UTC, queda às 23:00 por uma hora.
    let api = &monitorings[0];
    assert!(api.is_online);
    assert_eq!(api.series.len(), 2);
    assert_eq!(api.series[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(api.series[0].capacity_seconds, 43_200);
    assert_eq!(api.series[0].downtime_seconds, 3600);
    assert_eq!(api.series[1].uptime_ratio, 1.0);
    assert_eq!(api.uptime.week, Some(99.405));

    let site = &monitorings[1];
    assert!(!site.is_online);
    assert_eq!(site.series.len(), 90);
    assert!(site.series.iter().all(|r| r.uptime_ratio == 1.0));
    assert_eq!(site.uptime.day, Some(50.0));
}

#[test]
fn malformed_uptime_ratio_only_affects_its_own_monitor() {
    let raw = RESPONSE.replace("50.000-90.000-95.000-97.000", "");
    let body: UptimeRobotResponse = serde_json::from_str(&raw).unwrap();
    let monitorings = body
        .into_monitorings(reporting_window_start(clock().0, 89), clock())
        .unwrap();

    assert_eq!(monitorings.len(), 2);
    assert_eq!(monitorings[0].uptime.week, Some(99.405));
    let site = &monitorings[1];
    assert_eq!(site.uptime.day, None);
    assert_eq!(site.uptime.trimester, None);
    assert_eq!(site.series.len(), 90);
}

#[test]
fn unmappable_monitor_is_dropped_and_the_rest_kept() {
    let raw = RESPONSE.replace("\"create_datetime\": 1577836800", "\"create_datetime\": 9223372036854775807");
    let body: UptimeRobotResponse = serde_json::from_str(&raw).unwrap();
    let monitorings = body
        .into_monitorings(reporting_window_start(clock().0, 89), clock())
        .unwrap();

    assert_eq!(monitorings.len(), 1);
    assert_eq!(monitorings[0].id, 777749809);
}

#[test]
fn serialized_output_uses_iso_dates() {
    let body: UptimeRobotResponse = serde_json::from_str(RESPONSE).unwrap();
    let monitorings = body
        .into_monitorings(reporting_window_start(clock().0, 89), clock())
        .unwrap();
    let json = serde_json::to_value(&monitorings).unwrap();

    assert_eq!(json[0]["series"][0]["date"], "2024-01-05");
    assert_eq!(json[0]["is_online"], true);
}
