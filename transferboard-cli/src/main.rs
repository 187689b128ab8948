mod args;
mod error;
mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};
use transferboard_lib::ClientConfig;
use transferboard_lib::TransferClient;
use transferboard_lib::api::graphql::GraphQlTransport;
use transferboard_lib::list::ListController;
use transferboard_lib::list::ListQueryState;
use transferboard_lib::list::ListView;
use transferboard_lib::views::ClubSpending;
use transferboard_lib::views::MoneyFlow;
use transferboard_lib::views::MoneyInMoneyOut;
use transferboard_lib::views::TopTransfers;

use args::{CliArgs, ViewKind};
use error::CliError;
use render::Render;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.log_level());

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs to `<cache>/latest.log`; runs without a log if it cannot be created.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

async fn run(args: &CliArgs) -> Result<(), CliError> {
    let config = ClientConfig::default()
        .with_timeout(Duration::from_secs(args.timeout))
        .with_connect_timeout(Duration::from_secs(args.connect_timeout));
    let client = TransferClient::builder()
        .endpoint(args.endpoint.as_str())
        .config(&config)
        .build()?;
    info!("Using endpoint {}", client.endpoint());

    match args.view {
        ViewKind::Clubs => show::<ClubSpending>(client, args).await,
        ViewKind::MoneyInOut => show::<MoneyInMoneyOut>(client, args).await,
        ViewKind::MoneyFlow => show::<MoneyFlow>(client, args).await,
        ViewKind::Transfers => show::<TopTransfers>(client, args).await,
    }
}

/// Applies the command-line intents in the order a user would click them,
/// then fetches and prints the resulting page.
fn initial_state<V: ListView>(args: &CliArgs) -> Result<ListQueryState<V>, CliError> {
    let mut state = ListQueryState::<V>::new();

    for (name, value) in &args.filter {
        let filter: V::Filter = name.parse()?;
        state = state.set_filter(filter, value.as_str());
    }
    for column in &args.sort {
        let column: V::Column = column.parse()?;
        state = state.set_sort(column);
    }
    if let Some(page_size) = args.page_size {
        state = state.set_page_size(page_size)?;
    }

    Ok(state.set_page(args.page))
}

async fn show<V>(client: TransferClient, args: &CliArgs) -> Result<(), CliError>
where
    V: ListView,
    V::Row: Render,
{
    let state = initial_state::<V>(args)?;
    let transport = Arc::new(GraphQlTransport::<V>::new(client));
    let mut controller: ListController<V, _> = ListController::with_state(transport, state);

    controller.refresh();
    controller.settle().await;

    let data = controller.view_data();
    if let Some(e) = data.error() {
        return Err(CliError::Fetch(Arc::clone(e)));
    }

    print!("{}", render::render_page(controller.state(), data));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use transferboard_lib::error::ValidationError;
    use transferboard_lib::views::ClubSpendingColumn;
    use transferboard_lib::views::TopTransfersFilter;

    fn args(extra: &[&str]) -> CliArgs {
        let base = ["transferboard", "clubs", "-e", "http://localhost:4001/graphql"];
        CliArgs::try_parse_from(base.iter().chain(extra).copied()).expect("valid args")
    }

    #[test]
    fn test_initial_state_applies_intents_in_order() {
        let state = initial_state::<ClubSpending>(&args(&[
            "--page", "2", "-s", "profit", "-s", "profit", "-f", "country=Eng",
        ]))
        .expect("valid intents");

        assert_eq!(state.sort_column(), ClubSpendingColumn::Profit);
        assert_eq!(state.sort_direction().as_str(), "asc");
        assert_eq!(state.page(), 2);
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn test_initial_state_rejects_foreign_filter() {
        let err = initial_state::<ClubSpending>(&args(&["-f", "toClub=Chelsea"]))
            .expect_err("not a club spending filter");
        assert!(matches!(err, CliError::Validation(ValidationError::UnknownFilter { .. })));

        let state = initial_state::<TopTransfers>(&args(&["-f", "toClub=Chelsea"]))
            .expect("top transfers filter");
        assert_eq!(state.filter(TopTransfersFilter::ToClub), "Chelsea");
    }

    #[test]
    fn test_initial_state_checks_page_size() {
        assert!(initial_state::<TopTransfers>(&args(&["--page-size", "5"])).is_ok());
        let err = initial_state::<ClubSpending>(&args(&["--page-size", "5"]))
            .expect_err("5 is a top transfers size only");
        assert!(matches!(err, CliError::Validation(ValidationError::PageSize { size: 5, .. })));
    }
}
