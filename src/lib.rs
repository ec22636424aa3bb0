//! IPv4 CIDR subnet analysis.
//!
//! Parses `A.B.C.D/P` expressions and derives mask, network, broadcast, host
//! range, address counts and classification, then renders the result as a
//! table, CSV or JSON.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use std::io::BufRead;

pub use error::ParseError;
pub use processing::{parse_subnet, SubnetReport};

/// Preset expressions shown when there is nothing else to analyse.
pub const QUICK_EXAMPLES: [&str; 4] = [
    "192.168.1.0/24",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.1/30",
];

/// One input expression and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub input: String,
    pub result: Result<SubnetReport, ParseError>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Analyse a single expression.
pub fn analyze(input: &str) -> Analysis {
    let result = parse_subnet(input);
    if let Err(e) = &result {
        log::debug!("analyze({}) failed: {e}", input.trim());
    }
    Analysis {
        input: input.to_string(),
        result,
    }
}

/// Analyse every expression, keeping input order.
pub fn analyze_all<I, S>(inputs: I) -> Vec<Analysis>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let analyses: Vec<Analysis> = inputs.into_iter().map(|s| analyze(s.as_ref())).collect();
    let failed = analyses.iter().filter(|a| !a.is_ok()).count();
    log::info!("analyze_all() {} input(s), {failed} failed", analyses.len());
    analyses
}

/// Read expressions one per line, skipping blank lines and `#` comments.
pub fn read_inputs<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        inputs.push(line.to_string());
    }
    Ok(inputs)
}

fn quick_examples() -> Vec<String> {
    QUICK_EXAMPLES.iter().map(|s| s.to_string()).collect()
}

/// Choose what to analyse: the built-in examples when asked for, else the
/// command-line expressions, else `reader` (stdin) lines. An interactive
/// terminal with nothing given gets the examples instead of a blocking read.
pub fn select_inputs<R: BufRead>(
    config: &Config,
    stdin_is_terminal: bool,
    reader: R,
) -> std::io::Result<Vec<String>> {
    if config.show_examples {
        return Ok(quick_examples());
    }
    if !config.inputs.is_empty() {
        return Ok(config.inputs.clone());
    }
    if stdin_is_terminal {
        log::info!("No input given, analysing the built-in examples");
        return Ok(quick_examples());
    }
    read_inputs(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_quick_examples_all_parse() {
        let analyses = analyze_all(QUICK_EXAMPLES);
        assert_eq!(analyses.len(), 4);
        assert!(analyses.iter().all(Analysis::is_ok));
    }

    #[test]
    fn test_analyze_keeps_input() {
        let analysis = analyze(" 10.0.0.1 ");
        assert_eq!(analysis.input, " 10.0.0.1 ");
        assert!(!analysis.is_ok());
    }

    #[test]
    fn test_read_inputs() {
        let text = "# subnets\n192.168.1.0/24\n\n   10.0.0.0/8  \n#10.1.0.0/16\n";
        let inputs = read_inputs(Cursor::new(text)).unwrap();
        assert_eq!(inputs, vec!["192.168.1.0/24", "10.0.0.0/8"]);
    }

    fn config_with(inputs: &[&str], show_examples: bool) -> Config {
        Config {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            show_examples,
            ..Config::default()
        }
    }

    #[test]
    fn test_select_inputs_examples_flag_wins() {
        let config = config_with(&["10.0.0.0/8"], true);
        let inputs = select_inputs(&config, false, Cursor::new("172.16.0.0/12\n")).unwrap();
        assert_eq!(inputs, QUICK_EXAMPLES);
    }

    #[test]
    fn test_select_inputs_args_before_stdin() {
        let config = config_with(&["10.0.0.0/8", "bogus"], false);
        let inputs = select_inputs(&config, false, Cursor::new("172.16.0.0/12\n")).unwrap();
        assert_eq!(inputs, vec!["10.0.0.0/8", "bogus"]);
    }

    #[test]
    fn test_select_inputs_terminal_gets_examples() {
        let config = config_with(&[], false);
        let inputs = select_inputs(&config, true, Cursor::new("172.16.0.0/12\n")).unwrap();
        assert_eq!(inputs, QUICK_EXAMPLES);
    }

    #[test]
    fn test_select_inputs_reads_piped_stdin() {
        let config = config_with(&[], false);
        let inputs = select_inputs(&config, false, Cursor::new("# list\n172.16.0.0/12\n")).unwrap();
        assert_eq!(inputs, vec!["172.16.0.0/12"]);

        let inputs = select_inputs(&config, false, Cursor::new("")).unwrap();
        assert!(inputs.is_empty());
    }
}
