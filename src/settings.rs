use std::fs;

use agecalc::CalculatorConfig;
use anyhow::{Context, Result};
use tracing::info;

use crate::cli::Cli;

/// Builds the calculator configuration: defaults, then the TOML file if
/// given, then individual CLI overrides.
pub fn resolve(cli: &Cli) -> Result<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "reading config");
            let toml_str = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse(&toml_str)?
        }
        None => CalculatorConfig::default(),
    };

    if let Some(steps) = cli.steps_per_day {
        config = config.with_steps_per_day(steps);
    }
    if let Some(year) = cli.min_year {
        config = config.with_min_birth_year(year);
    }
    if let Some(locale) = cli.locale {
        config = config.with_locale(locale);
    }
    Ok(config)
}

fn parse(toml_str: &str) -> Result<CalculatorConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agecalc::Locale;

    #[test]
    fn parse_full_file() {
        let config = parse(
            r#"
min_birth_year = 1920
steps_per_day = 7500
locale = "en"
"#,
        )
        .unwrap();
        assert_eq!(config.min_birth_year(), 1920);
        assert_eq!(config.steps_per_day(), 7500);
        assert_eq!(config.locale(), Locale::English);
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = parse("steps = 1").unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}
