use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub currency_symbol: String,
    pub data_path: PathBuf,
    pub log_level: String,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            currency_symbol: env::var("SPLITVIEW_CURRENCY").unwrap_or_else(|_| "₹".to_string()),
            data_path: env::var("SPLITVIEW_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("transactions.json")),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
