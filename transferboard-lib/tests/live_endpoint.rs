//! Integration tests against a running transfer GraphQL service.
//!
//! These tests are ignored by default. To run them, create a `.env` file in
//! the transferboard-lib directory with:
//!
//! ```env
//! TRANSFERBOARD_ENDPOINT=http://localhost:4001/graphql
//! ```
//!
//! Then run: `cargo test -p transferboard-lib -- --ignored`

use std::env;
use std::sync::Arc;

use transferboard_lib::ClientConfig;
use transferboard_lib::TransferClient;
use transferboard_lib::api::graphql::GraphQlTransport;
use transferboard_lib::list::ListController;
use transferboard_lib::list::ListView;
use transferboard_lib::views::ClubSpending;
use transferboard_lib::views::MoneyFlow;
use transferboard_lib::views::MoneyFlowFilter;
use transferboard_lib::views::TopTransfers;

fn load_client() -> Option<TransferClient> {
    let _ = dotenvy::dotenv();

    let endpoint = env::var("TRANSFERBOARD_ENDPOINT").ok()?;
    TransferClient::builder()
        .endpoint(endpoint)
        .config(&ClientConfig::default())
        .build()
        .ok()
}

#[tokio::test]
#[ignore = "requires TRANSFERBOARD_ENDPOINT in .env file"]
async fn test_club_spending_first_page() {
    let client = load_client().expect("Missing TRANSFERBOARD_ENDPOINT. See module docs.");
    let mut clubs: ListController<ClubSpending, _> =
        ListController::new(Arc::new(GraphQlTransport::<ClubSpending>::new(client)));

    clubs.refresh();
    clubs.settle().await;

    let data = clubs.view_data();
    assert!(data.error().is_none(), "fetch failed: {:?}", data.error());
    assert!(data.rows().len() <= ClubSpending::DEFAULT_PAGE_SIZE);
    assert!(data.total_count() >= data.rows().len());

    for row in data.rows() {
        println!("{} ({}) {}", row.club, row.country, row.money_spent.format_gbp());
    }
}

#[tokio::test]
#[ignore = "requires TRANSFERBOARD_ENDPOINT in .env file"]
async fn test_money_flow_filter_narrows_count() {
    let client = load_client().expect("Missing TRANSFERBOARD_ENDPOINT. See module docs.");
    let mut flow: ListController<MoneyFlow, _> =
        ListController::new(Arc::new(GraphQlTransport::<MoneyFlow>::new(client)));

    flow.refresh();
    flow.settle().await;
    let unfiltered = flow.view_data().total_count();

    flow.set_filter(MoneyFlowFilter::ToCountry, "Eng");
    flow.settle().await;

    assert!(flow.view_data().error().is_none());
    assert!(flow.view_data().total_count() <= unfiltered);
}

#[tokio::test]
#[ignore = "requires TRANSFERBOARD_ENDPOINT in .env file"]
async fn test_top_transfers_page_size() {
    let client = load_client().expect("Missing TRANSFERBOARD_ENDPOINT. See module docs.");
    let mut transfers: ListController<TopTransfers, _> =
        ListController::new(Arc::new(GraphQlTransport::<TopTransfers>::new(client)));

    transfers.refresh();
    transfers.set_page_size(5).expect("allowed size");
    transfers.settle().await;

    assert!(transfers.view_data().error().is_none());
    assert!(transfers.view_data().rows().len() <= 5);
}
