use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub weather_api_key: String,
    pub weather_api_base_url: String,
    pub home_template_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            weather_api_key: env::var("WEATHER_API_KEY")
                .map_err(|_| anyhow::anyhow!("WEATHER_API_KEY not set"))?,
            weather_api_base_url: env::var("WEATHER_API_BASE_URL")
                .unwrap_or_else(|_| "http://api.weatherapi.com/v1".to_string()),
            home_template_path: env::var("HOME_TEMPLATE_PATH")
                .unwrap_or_else(|_| "templates/home.html".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both branches run in one test because the process environment is
    // shared across the test binary's threads.
    #[test]
    fn from_env_requires_api_key() {
        env::remove_var("WEATHER_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("WEATHER_API_KEY"));

        env::set_var("WEATHER_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.weather_api_key, "test-key");
        assert_eq!(config.weather_api_base_url, "http://api.weatherapi.com/v1");
        assert_eq!(config.home_template_path, "templates/home.html");
        env::remove_var("WEATHER_API_KEY");
    }
}
