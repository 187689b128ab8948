//! Money in / money out: the spending data as a second, independent table.

use crate::list::ListView;

use super::club_spending::ClubSpendingColumn;
use super::club_spending::ClubSpendingFilter;
use super::club_spending::ClubSpendingRow;

/// Spending per club, compared by money in against money out.
///
/// Shares the data source and filters of [`ClubSpending`](super::ClubSpending)
/// but is mounted as its own view with its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoneyInMoneyOut;

impl ListView for MoneyInMoneyOut {
    type Column = ClubSpendingColumn;
    type Filter = ClubSpendingFilter;
    type Row = ClubSpendingRow;

    const TITLE: &'static str = "Money In, Money Out";
    const OPERATION: &'static str = "topSpendingQuery";
    const ROOT_FIELD: &'static str = "spendingByClub";
    const ORDERING_TYPE: &'static str = "_SpendingOrdering";
    const SELECTION: &'static str =
        "moneySpent country club clubImage countryImage moneyReceived profit";
    const IDENTITY_FIELD: &'static str = "club";

    fn default_sort() -> Self::Column {
        ClubSpendingColumn::MoneySpent
    }
}
