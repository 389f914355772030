use serde::{Deserialize, Serialize};

/// Runtime settings for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Root of the holiday service, without a trailing slash
    pub api_base_url: String,
    /// How many entries the upcoming list asks for
    pub upcoming_count: u32,
    pub toast_timeout_ms: u32,
    pub admin_message_timeout_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            upcoming_count: 5,
            toast_timeout_ms: 5000,
            admin_message_timeout_ms: 5000,
        }
    }
}

impl DashboardConfig {
    /// Replace the service URL, ignoring blank overrides
    pub fn with_api_base_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Absolute URL for a service path such as `/feriados/all`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.upcoming_count, 5);
        assert_eq!(config.toast_timeout_ms, 5000);
    }

    #[test]
    fn test_base_url_override() {
        let config = DashboardConfig::default().with_api_base_url(Some("https://feriados.example.com/"));
        assert_eq!(config.endpoint("/feriados/all"), "https://feriados.example.com/feriados/all");

        let unchanged = DashboardConfig::default().with_api_base_url(Some("   "));
        assert_eq!(unchanged.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"upcoming_count": 10}"#).unwrap();
        assert_eq!(config.upcoming_count, 10);
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }
}
