//! Club spending: money spent and received per club.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::list::FilterBinding;
use crate::list::FilterField;
use crate::list::ListView;
use crate::list::SortColumn;
use crate::model::ImageUrl;
use crate::model::Money;

/// Name used in validation errors of the spending views.
const SPENDING: &str = "club spending";

/// The club spending table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClubSpending;

/// Sortable columns of the spending views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClubSpendingColumn {
    MoneySpent,
    MoneyReceived,
    Profit,
}

impl SortColumn for ClubSpendingColumn {
    fn field(self) -> &'static str {
        match self {
            ClubSpendingColumn::MoneySpent => "moneySpent",
            ClubSpendingColumn::MoneyReceived => "moneyReceived",
            ClubSpendingColumn::Profit => "profit",
        }
    }
}

impl FromStr for ClubSpendingColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moneySpent" => Ok(ClubSpendingColumn::MoneySpent),
            "moneyReceived" => Ok(ClubSpendingColumn::MoneyReceived),
            "profit" => Ok(ClubSpendingColumn::Profit),
            other => Err(ValidationError::unknown_column(SPENDING, other)),
        }
    }
}

/// Filters of the spending views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClubSpendingFilter {
    /// Substring of the club's country.
    Country,
}

impl FilterField for ClubSpendingFilter {
    const ALL: &'static [Self] = &[ClubSpendingFilter::Country];

    fn name(self) -> &'static str {
        match self {
            ClubSpendingFilter::Country => "country",
        }
    }

    fn binding(self) -> FilterBinding {
        match self {
            ClubSpendingFilter::Country => FilterBinding::Argument("countrySubstring"),
        }
    }
}

impl FromStr for ClubSpendingFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(ClubSpendingFilter::Country),
            other => Err(ValidationError::unknown_filter(SPENDING, other)),
        }
    }
}

/// One club's spending totals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSpendingRow {
    pub club: String,
    pub country: String,
    pub club_image: Option<ImageUrl>,
    pub country_image: Option<ImageUrl>,
    pub money_spent: Money,
    pub money_received: Money,
    pub profit: Money,
}

impl ListView for ClubSpending {
    type Column = ClubSpendingColumn;
    type Filter = ClubSpendingFilter;
    type Row = ClubSpendingRow;

    const TITLE: &'static str = "Club Spending";
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row() {
        let row: ClubSpendingRow = serde_json::from_str(
            r#"{
                "moneySpent": 150000000,
                "country": "England",
                "club": "Chelsea FC",
                "clubImage": "https://img.example/tiny/631.png",
                "countryImage": null,
                "moneyReceived": 90000000,
                "profit": -60000000
            }"#,
        )
        .expect("valid row");

        assert_eq!(row.club, "Chelsea FC");
        assert_eq!(row.money_spent, Money::from_int(150_000_000));
        assert_eq!(row.profit.format_gbp(), "-£60,000,000");
        assert!(row.country_image.is_none());
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for column in [
            ClubSpendingColumn::MoneySpent,
            ClubSpendingColumn::MoneyReceived,
            ClubSpendingColumn::Profit,
        ] {
            assert_eq!(column.field().parse::<ClubSpendingColumn>(), Ok(column));
        }
        for filter in ClubSpendingFilter::ALL {
            assert_eq!(filter.name().parse::<ClubSpendingFilter>(), Ok(*filter));
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert_eq!(
            "club".parse::<ClubSpendingColumn>(),
            Err(ValidationError::unknown_column("club spending", "club"))
        );
        assert!("countryFilter".parse::<ClubSpendingFilter>().is_err());
    }
}
