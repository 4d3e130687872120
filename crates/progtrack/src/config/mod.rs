use crate::reporting::periods::PeriodPolicy;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub reporting: ReportingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = PeriodPolicy::default();
        let year_min = parse_year("APP_PERIOD_YEAR_MIN", defaults.min_year())?;
        let year_max = parse_year("APP_PERIOD_YEAR_MAX", defaults.max_year())?;
        if year_min > year_max {
            return Err(ConfigError::InvalidYearBounds { year_min, year_max });
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            reporting: ReportingConfig { year_min, year_max },
        })
    }
}

fn parse_year(var: &str, default: i32) -> Result<i32, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse::<i32>().map_err(|_| ConfigError::InvalidYear {
            var: var.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Reporting-period bounds accepted by the service.
#[derive(Debug, Clone)]
pub struct ReportingConfig {
    pub year_min: i32,
    pub year_max: i32,
}

impl ReportingConfig {
    pub fn period_policy(&self) -> PeriodPolicy {
        PeriodPolicy::new(self.year_min, self.year_max)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidYear { var: String },
    InvalidYearBounds { year_min: i32, year_max: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidYear { var } => {
                write!(f, "{} must be a four digit year", var)
            }
            ConfigError::InvalidYearBounds { year_min, year_max } => {
                write!(
                    f,
                    "APP_PERIOD_YEAR_MIN ({}) must not exceed APP_PERIOD_YEAR_MAX ({})",
                    year_min, year_max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
