use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ConfigError;

/// Origins allowed by the CORS lesson unless `CORS_ORIGINS` overrides them
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost.tiangolo.com",
    "https://localhost.tiangolo.com",
    "http://localhost",
    "http://localhost:8080",
];

/// Which lesson application the server hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lesson {
    /// Path, query, cookie and body parameters
    #[default]
    Params,
    /// Response models with field inclusion and exclusion
    Response,
    /// CORS middleware
    Cors,
    /// Authentication stub
    Auth,
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lesson::Params => write!(f, "params"),
            Lesson::Response => write!(f, "response"),
            Lesson::Cors => write!(f, "cors"),
            Lesson::Auth => write!(f, "auth"),
        }
    }
}

impl FromStr for Lesson {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "params" => Ok(Lesson::Params),
            "response" => Ok(Lesson::Response),
            "cors" => Ok(Lesson::Cors),
            "auth" => Ok(Lesson::Auth),
            _ => Err(ConfigError::UnknownLesson(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub lesson: Lesson,
    /// Origins allowed by the CORS lesson
    pub cors_origins: Vec<String>,
    /// Whether cross-origin requests may carry cookies
    pub cors_allow_credentials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            lesson: Lesson::default(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            cors_allow_credentials: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let host = match env::var("HOST") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value,
            })?,
            Err(_) => defaults.host,
        };

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            Err(_) => defaults.port,
        };

        let lesson = match env::var("LESSON") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.lesson,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|value| parse_origins(&value))
            .unwrap_or(defaults.cors_origins);

        let cors_allow_credentials = match env::var("CORS_ALLOW_CREDENTIALS") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidValue {
                name: "CORS_ALLOW_CREDENTIALS",
                value,
            })?,
            Err(_) => defaults.cors_allow_credentials,
        };

        Ok(Self {
            host,
            port,
            lesson,
            cors_origins,
            cors_allow_credentials,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}

/// Parse a boolean the way query strings and env files spell them
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
