//! 配置

use std::fmt;

/// 监听地址，当前版本不可配置
pub const LISTEN_ADDR: &str = "0.0.0.0:8010";

pub const DB_HOST: &str = "localhost";
pub const DB_PORT: u16 = 5432;

/// 数据库连接配置，来自环境变量 `USER`、`PASSWORD`、`DBNAME`
///
/// 三个变量都必须存在；允许为空值（例如 trust 认证下的空密码）。
#[derive(Clone)]
pub struct Config {
    pub user: String,
    pub password: String,
    pub dbname: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => {
                write!(f, "missing required environment variable: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            user: required("USER")?,
            password: required("PASSWORD")?,
            dbname: required("DBNAME")?,
        })
    }
}

// 不输出密码
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user", &self.user)
            .field("password", &"***")
            .field("dbname", &self.dbname)
            .finish()
    }
}
