//! Série diária de uptime para monitores do UptimeRobot.
//!
//! O núcleo (`calendar`, `distributor`, `accumulator`, `series`) é síncrono e
//! sem I/O; `uptime_robot` e `monitoring` fazem a busca e o mapeamento.

pub mod accumulator;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod distributor;
pub mod error;
pub mod monitoring;
pub mod series;
pub mod types;
pub mod uptime_robot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::UpstreamError;
pub use series::SeriesConverter;
pub use types::{CalendarDay, DailyRecord, IncidentLog, Monitoring};
