use config as config_crate;
use serde::{Deserialize, Deserializer, de};

/// Configuração do cliente UptimeRobot e da janela de relatório.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Chave da API do UptimeRobot (`UPTIME_ROBOT_API_KEY`).
    pub api_key: String,
    /// Endpoint do getMonitors.
    pub api_url: String,
    /// IDs dos monitores a consultar (`UPTIME_ROBOT_MONITOR_IDS=1,2`).
    #[serde(default, deserialize_with = "deserialize_monitor_ids")]
    pub monitor_ids: Vec<u64>,
    /// Quantos dias antes de hoje começa a série.
    pub lookback_days: u32,
    /// Timeout da requisição HTTP em segundos.
    pub request_timeout_secs: u64,
}

// Sem derive: a chave da API não pode ir parar nos logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .field("monitor_ids", &self.monitor_ids)
            .field("lookback_days", &self.lookback_days)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Formas em que a lista de monitores chega: array do arquivo, um único ID
/// numérico ou strings vindas de variável de ambiente.
#[derive(Deserialize)]
#[serde(untagged)]
enum MonitorIds {
    Numbers(Vec<u64>),
    Texts(Vec<String>),
    Single(u64),
    Joined(String),
}

fn parse_id<E: de::Error>(raw: &str) -> Result<u64, E> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| E::custom(format!("ID de monitor inválido: {:?}", raw)))
}

fn deserialize_monitor_ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match MonitorIds::deserialize(deserializer)? {
        MonitorIds::Numbers(ids) => Ok(ids),
        MonitorIds::Texts(ids) => ids.iter().map(|id| parse_id(id)).collect(),
        MonitorIds::Single(id) => Ok(vec![id]),
        MonitorIds::Joined(raw) => raw
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(parse_id)
            .collect(),
    }
}

impl Config {
    /// Lê `config.*` (opcional) e as variáveis `UPTIME_ROBOT_*`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = Self::defaults()?
            .add_source(config_crate::File::with_name("config").required(false))
            .add_source(Self::environment());
        Self::from_builder(builder)
    }

    fn environment() -> config_crate::Environment {
        config_crate::Environment::with_prefix("UPTIME_ROBOT")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("monitor_ids")
    }

    fn defaults() -> anyhow::Result<config_crate::ConfigBuilder<config_crate::builder::DefaultState>> {
        let builder = config_crate::Config::builder()
            .set_default("api_url", "https://api.uptimerobot.com/v2/getMonitors")?
            .set_default("lookback_days", 89)?
            .set_default("request_timeout_secs", 30)?;
        Ok(builder)
    }

    fn from_builder(
        builder: config_crate::ConfigBuilder<config_crate::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        let settings = builder.build()?;
        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }

    /// Validação dos parâmetros antes de qualquer requisição.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key não pode ser vazia".into());
        }
        if self.monitor_ids.is_empty() {
            return Err("monitor_ids deve ter pelo menos um monitor".into());
        }
        if self.lookback_days == 0 {
            return Err("lookback_days deve ser maior que zero".into());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs deve ser maior que zero".into());
        }
        Ok(())
    }
}
