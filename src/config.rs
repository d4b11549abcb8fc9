use std::env;

/// Thresholds used when scanning symbols for risk alerts.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertThresholds {
    /// Volatility fraction (0.1 = 10% ATR relative to price).
    pub volatility: f64,
    /// 5-sample % change below which a rapid decline is reported.
    pub rapid_decline: f64,
    /// 5-sample % change above which a rapid increase is reported.
    pub rapid_increase: f64,
    /// RSI above which a symbol is reported as overbought.
    pub rsi_overbought: f64,
    /// RSI below which a symbol is reported as oversold.
    pub rsi_oversold: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            volatility: 0.1,
            rapid_decline: -5.0,
            rapid_increase: 5.0,
            rsi_overbought: 75.0,
            rsi_oversold: 25.0,
        }
    }
}

/// Defaults for opportunity ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityConfig {
    /// Minimum confidence (50-95) for a prediction to be listed.
    pub min_confidence: f64,
    /// Maximum number of opportunities returned.
    pub limit: usize,
    /// Risk score must be strictly below this value.
    pub max_risk: f64,
}

impl Default for OpportunityConfig {
    fn default() -> Self {
        Self {
            min_confidence: 65.0,
            limit: 5,
            max_risk: 70.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of samples retained per symbol.
    pub history_size: usize,
    /// Risk alert thresholds.
    pub alerts: AlertThresholds,
    /// Opportunity ranking defaults.
    pub opportunities: OpportunityConfig,
    /// Interval between market summary log lines (binary only).
    pub summary_interval_secs: u64,
    /// Capacity of the tick delivery channel (binary only).
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_size: 200,
            alerts: AlertThresholds::default(),
            opportunities: OpportunityConfig::default(),
            summary_interval_secs: 30,
            channel_capacity: 1024,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        // A zero-capacity history would never warm up
        let history_size = env_or("AUGUR_HISTORY_SIZE", defaults.history_size).max(1);

        Self {
            history_size,
            alerts: AlertThresholds {
                volatility: env_or("AUGUR_ALERT_VOLATILITY", defaults.alerts.volatility),
                rapid_decline: env_or("AUGUR_ALERT_RAPID_DECLINE", defaults.alerts.rapid_decline),
                rapid_increase: env_or(
                    "AUGUR_ALERT_RAPID_INCREASE",
                    defaults.alerts.rapid_increase,
                ),
                rsi_overbought: env_or(
                    "AUGUR_ALERT_RSI_OVERBOUGHT",
                    defaults.alerts.rsi_overbought,
                ),
                rsi_oversold: env_or("AUGUR_ALERT_RSI_OVERSOLD", defaults.alerts.rsi_oversold),
            },
            opportunities: OpportunityConfig {
                min_confidence: env_or(
                    "AUGUR_MIN_CONFIDENCE",
                    defaults.opportunities.min_confidence,
                ),
                limit: env_or("AUGUR_TOP_N", defaults.opportunities.limit),
                max_risk: env_or("AUGUR_MAX_RISK", defaults.opportunities.max_risk),
            },
            summary_interval_secs: env_or(
                "AUGUR_SUMMARY_INTERVAL_SECS",
                defaults.summary_interval_secs,
            )
            .max(1),
            channel_capacity: env_or("AUGUR_CHANNEL_CAPACITY", defaults.channel_capacity).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn test_default_history_size() {
        assert_eq!(Config::default().history_size, 200);
    }

    #[test]
    fn test_default_alert_thresholds() {
        let alerts = AlertThresholds::default();
        assert_eq!(alerts.volatility, 0.1);
        assert_eq!(alerts.rapid_decline, -5.0);
        assert_eq!(alerts.rapid_increase, 5.0);
        assert_eq!(alerts.rsi_overbought, 75.0);
        assert_eq!(alerts.rsi_oversold, 25.0);
    }

    #[test]
    fn test_default_opportunities() {
        let opps = OpportunityConfig::default();
        assert_eq!(opps.min_confidence, 65.0);
        assert_eq!(opps.limit, 5);
        assert_eq!(opps.max_risk, 70.0);
    }

    // =========================================================================
    // Environment parsing
    // =========================================================================

    #[test]
    fn test_env_or_falls_back_on_missing_key() {
        let value: usize = env_or("AUGUR_TEST_KEY_THAT_IS_NEVER_SET", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("AUGUR_TEST_GARBAGE_VALUE", "not-a-number");
        let value: f64 = env_or("AUGUR_TEST_GARBAGE_VALUE", 1.5);
        assert_eq!(value, 1.5);
        env::remove_var("AUGUR_TEST_GARBAGE_VALUE");
    }

    #[test]
    fn test_env_or_parses_value() {
        env::set_var("AUGUR_TEST_PARSED_VALUE", " 64 ");
        let value: usize = env_or("AUGUR_TEST_PARSED_VALUE", 1);
        assert_eq!(value, 64);
        env::remove_var("AUGUR_TEST_PARSED_VALUE");
    }
}
