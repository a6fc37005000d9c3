//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

const USAGE: &str = "usage: sheetforge <template> <input> <output>";

/// Configuration loaded from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Document template to substitute into
    pub template_path: PathBuf,
    /// YAML character record to read
    pub input_path: PathBuf,
    /// Where the rendered text is written
    pub output_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from the process arguments
    pub fn from_args() -> Result<Self> {
        Self::parse_args(env::args().skip(1))
    }

    fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        let Some(template_path) = args.next() else {
            bail!("missing template argument\n{USAGE}");
        };
        let Some(input_path) = args.next() else {
            bail!("missing input argument\n{USAGE}");
        };
        let Some(output_path) = args.next() else {
            bail!("missing output argument\n{USAGE}");
        };
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{extra}'\n{USAGE}");
        }
        Ok(Self {
            template_path: PathBuf::from(template_path),
            input_path: PathBuf::from(input_path),
            output_path: PathBuf::from(output_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(values: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        values.iter().map(|s| s.to_string())
    }

    #[test]
    fn test_three_arguments_parse() {
        let config =
            AppConfig::parse_args(args(&["sheet.tex", "harvey.yaml", "harvey.out.tex"])).unwrap();
        assert_eq!(config.template_path, PathBuf::from("sheet.tex"));
        assert_eq!(config.input_path, PathBuf::from("harvey.yaml"));
        assert_eq!(config.output_path, PathBuf::from("harvey.out.tex"));
    }

    #[test]
    fn test_missing_arguments_fail() {
        assert!(AppConfig::parse_args(args(&[])).is_err());
        assert!(AppConfig::parse_args(args(&["sheet.tex"])).is_err());
        assert!(AppConfig::parse_args(args(&["sheet.tex", "harvey.yaml"])).is_err());
    }

    #[test]
    fn test_extra_argument_fails() {
        let err = AppConfig::parse_args(args(&["a", "b", "c", "d"])).unwrap_err();
        assert!(err.to_string().contains("unexpected argument"));
    }
}
