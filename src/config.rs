//! Runtime configuration from environment variables and command-line flags.
//!
//! The environment (optionally populated from a `.env` file by the binary)
//! supplies defaults, flags override them.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LANG: &str = "SUBNET_REPORT_LANG";
pub const ENV_FORMAT: &str = "SUBNET_REPORT_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_REPORT_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const USAGE: &str = "\
usage: subnet-report [--lang es|en] [--format table|csv|json] [--examples] [CIDR...]

Analyse IPv4 CIDR expressions such as 192.168.1.0/24.
With no CIDR arguments, expressions are read one per line from stdin.

environment:
  SUBNET_REPORT_LANG        display language (es, en)
  SUBNET_REPORT_FORMAT      output format (table, csv, json)
  SUBNET_REPORT_LOG_CONFIG  log4rs config file (default log4rs.yml)";

/// Display language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            other => Err(format!("unsupported language '{other}' (expected es or en)")),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Lang::Es => write!(f, "es"),
            Lang::En => write!(f, "en"),
        }
    }
}

/// Output format of the report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format '{other}' (expected table, csv or json)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub lang: Lang,
    pub format: OutputFormat,
    pub log_config: PathBuf,
    /// Analyse the built-in example expressions.
    pub show_examples: bool,
    pub show_help: bool,
    /// CIDR expressions given on the command line.
    pub inputs: Vec<String>,
    /// Ignored environment values. Loading runs before the logger is
    /// installed, so the caller logs these once it is.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lang: Lang::default(),
            format: OutputFormat::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            show_examples: false,
            show_help: false,
            inputs: vec![],
            warnings: vec![],
        }
    }
}

impl Config {
    /// Build the configuration from the process environment and arguments.
    pub fn from_env<I>(args: I) -> Result<Config, Box<dyn Error>>
    where
        I: IntoIterator<Item = String>,
    {
        Config::load(args, |key| std::env::var(key).ok())
    }

    /// Build the configuration from `args` (without the program name) and an
    /// environment lookup.
    ///
    /// Bad environment values are ignored and reported in `warnings`; bad
    /// flags are errors.
    pub fn load<I, F>(args: I, env: F) -> Result<Config, Box<dyn Error>>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(lang) = env(ENV_LANG) {
            match lang.parse() {
                Ok(lang) => config.lang = lang,
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_LANG}: {e}, using '{}'", config.lang)),
            }
        }
        if let Some(format) = env(ENV_FORMAT) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_FORMAT}: {e}, using '{}'", config.format)),
            }
        }
        if let Some(path) = env(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline_value) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
                _ => (arg.clone(), None),
            };
            match flag.as_str() {
                "--lang" | "--format" => {
                    let value = inline_value
                        .or_else(|| args.next())
                        .ok_or_else(|| format!("missing value for {flag}"))?;
                    if flag == "--lang" {
                        config.lang = value.parse::<Lang>()?;
                    } else {
                        config.format = value.parse::<OutputFormat>()?;
                    }
                }
                "--examples" => config.show_examples = true,
                "-h" | "--help" => config.show_help = true,
                _ if flag.starts_with("--") => {
                    return Err(format!("unknown option '{flag}'").into());
                }
                _ => config.inputs.push(arg),
            }
        }

        log::debug!("{config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::load(args(&[]), no_env).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lang, Lang::Es);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_env_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_LANG, "en"),
            (ENV_FORMAT, "json"),
            (ENV_LOG_CONFIG, "/etc/subnet/log.yml"),
        ]);
        let config = Config::load(args(&[]), |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_config, PathBuf::from("/etc/subnet/log.yml"));
    }

    #[test]
    fn test_bad_env_falls_back() {
        let config = Config::load(args(&[]), |k| match k {
            ENV_LANG => Some("fr".to_string()),
            ENV_FORMAT => Some("xml".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.lang, Lang::Es);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(
            config.warnings,
            vec![
                "SUBNET_REPORT_LANG: unsupported language 'fr' (expected es or en), using 'es'",
                "SUBNET_REPORT_FORMAT: unsupported output format 'xml' (expected table, csv or json), using 'table'",
            ]
        );
    }

    #[test]
    fn test_good_env_has_no_warnings() {
        let config = Config::load(args(&["--lang", "en"]), |k| {
            (k == ENV_FORMAT).then(|| "CSV".to_string())
        })
        .unwrap();
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_flags_override_env() {
        let config = Config::load(
            args(&["--lang", "en", "--format=csv", "10.0.0.0/8", "--examples", "192.168.0.1/30"]),
            |k| (k == ENV_LANG).then(|| "es".to_string()),
        )
        .unwrap();
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.show_examples);
        assert_eq!(config.inputs, args(&["10.0.0.0/8", "192.168.0.1/30"]));
    }

    #[test]
    fn test_bad_flags() {
        assert!(Config::load(args(&["--lang"]), no_env).is_err());
        assert!(Config::load(args(&["--lang", "de"]), no_env).is_err());
        assert!(Config::load(args(&["--format=yaml"]), no_env).is_err());
        let err = Config::load(args(&["--verbose"]), no_env).unwrap_err();
        assert_eq!(err.to_string(), "unknown option '--verbose'");
    }

    #[test]
    fn test_lang_from_str() {
        assert_eq!("es".parse::<Lang>().unwrap(), Lang::Es);
        assert_eq!(" EN ".parse::<Lang>().unwrap(), Lang::En);
        assert!("fr".parse::<Lang>().is_err());
        assert_eq!(Lang::default(), Lang::Es);
    }

    #[test]
    fn test_help() {
        assert!(Config::load(args(&["-h"]), no_env).unwrap().show_help);
    }
}
