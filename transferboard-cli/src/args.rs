use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "transferboard",
    version,
    about = "football transfer dashboard in the terminal",
    long_about = "Transferboard prints one page of a transfer dashboard view.\n\nExamples:\n  transferboard clubs -e http://localhost:4001/graphql\n  transferboard clubs --filter country=Eng --sort profit --page-size 25\n  transferboard transfers --filter toClub=Chelsea --page 1\n\nTip: Set TRANSFERBOARD_ENDPOINT to keep invocations short."
)]
pub struct CliArgs {
    #[arg(value_enum, help = "View to display.")]
    pub view: ViewKind,

    #[arg(
        short = 'e',
        long = "endpoint",
        env = "TRANSFERBOARD_ENDPOINT",
        value_name = "URL",
        help_heading = "Connection",
        help = "GraphQL endpoint of the transfer service."
    )]
    pub endpoint: String,

    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        default_value_t = 30,
        help_heading = "Connection",
        help = "Request timeout in seconds."
    )]
    pub timeout: u64,

    #[arg(
        long = "connect-timeout",
        value_name = "SECONDS",
        default_value_t = 10,
        help_heading = "Connection",
        help = "Connect timeout in seconds."
    )]
    pub connect_timeout: u64,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 's',
        long = "sort",
        value_name = "COLUMN",
        action = ArgAction::Append,
        help_heading = "Query",
        help = "Click a column header (repeatable; the same column twice flips direction)."
    )]
    pub sort: Vec<String>,

    #[arg(
        short = 'f',
        long = "filter",
        value_name = "NAME=VALUE",
        action = ArgAction::Append,
        value_parser = parse_filter,
        help_heading = "Query",
        help = "Substring filter (repeatable)."
    )]
    pub filter: Vec<(String, String)>,

    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 0,
        help_heading = "Query",
        help = "Zero-based page to show."
    )]
    pub page: usize,

    #[arg(
        long = "page-size",
        value_name = "N",
        help_heading = "Query",
        help = "Rows per page (must be one the view allows)."
    )]
    pub page_size: Option<usize>,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Club spending
    Clubs,
    /// Money in / money out per club
    MoneyInOut,
    /// Fees flowing between countries
    MoneyFlow,
    /// Top transfers by fee
    Transfers,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("missing filter name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::try_parse_from([
            "transferboard",
            "clubs",
            "-e",
            "http://localhost:4001/graphql",
            "--sort",
            "profit",
            "-s",
            "profit",
            "-f",
            "country=Eng",
            "--page-size",
            "25",
            "-vv",
        ])
        .expect("valid args");

        assert_eq!(args.view, ViewKind::Clubs);
        assert_eq!(args.sort, vec!["profit", "profit"]);
        assert_eq!(args.filter, vec![("country".to_string(), "Eng".to_string())]);
        assert_eq!(args.page, 0);
        assert_eq!(args.page_size, Some(25));
        assert_eq!(args.timeout, 30);
        assert_eq!(args.connect_timeout, 10);
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_parse_connect_timeout() {
        let args = CliArgs::try_parse_from([
            "transferboard",
            "money-flow",
            "-e",
            "http://localhost:4001/graphql",
            "--connect-timeout",
            "3",
        ])
        .expect("valid args");

        assert_eq!(args.connect_timeout, 3);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("toClub=Paris Saint-Germain"),
            Ok(("toClub".to_string(), "Paris Saint-Germain".to_string()))
        );
        assert_eq!(parse_filter("country="), Ok(("country".to_string(), String::new())));
        assert!(parse_filter("country").is_err());
        assert!(parse_filter("=Eng").is_err());
    }
}
