/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Upper bound for one submission sink call, in milliseconds.
    pub submission_timeout_ms: Option<u64>,

    /// Artificial delay added by the in-memory submission sink.
    pub simulated_latency_ms: Option<u64>,

    /// Re-check option-backed fields against the option lists.
    pub strict_options: Option<bool>,

    /// Rows per dashboard page.
    pub page_size: Option<usize>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing sections and keys are reported as `None`; the caller decides
    /// the defaults.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let onboarding = toml_value.get("onboarding");
        let dashboard = toml_value.get("dashboard");

        Ok(Self {
            submission_timeout_ms: onboarding
                .and_then(|o| o.get("submission_timeout_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            simulated_latency_ms: onboarding
                .and_then(|o| o.get("simulated_latency_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            strict_options: onboarding
                .and_then(|o| o.get("strict_options"))
                .and_then(|v| v.as_bool()),
            page_size: dashboard
                .and_then(|d| d.get("page_size"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as usize),
        })
    }

    /// Create empty AppConfig (every value unset)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [onboarding]
            submission_timeout_ms = 5000
            simulated_latency_ms = 2000
            strict_options = true

            [dashboard]
            page_size = 25
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.submission_timeout_ms, Some(5000));
        assert_eq!(config.simulated_latency_ms, Some(2000));
        assert_eq!(config.strict_options, Some(true));
        assert_eq!(config.page_size, Some(25));
    }

    #[test]
    fn test_from_toml_leaves_missing_values_unset() {
        let toml_str = r#"
            [onboarding]
            # nothing configured
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_ignores_wrongly_typed_values() {
        let toml_str = r#"
            [dashboard]
            page_size = "ten"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.page_size, None);
    }

    #[test]
    fn test_negative_numbers_are_floored_at_zero() {
        let toml_str = r#"
            [onboarding]
            simulated_latency_ms = -10
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.simulated_latency_ms, Some(0));
    }
}
