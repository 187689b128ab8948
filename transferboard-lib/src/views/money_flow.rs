//! Money flow: transfer fees between countries.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::list::FilterBinding;
use crate::list::FilterField;
use crate::list::ListView;
use crate::list::SortColumn;
use crate::model::ImageUrl;
use crate::model::Money;

const MONEY_FLOW: &str = "money flow";

/// The country-to-country money flow table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoneyFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoneyFlowColumn {
    TotalFees,
}

impl SortColumn for MoneyFlowColumn {
    fn field(self) -> &'static str {
        match self {
            MoneyFlowColumn::TotalFees => "totalFees",
        }
    }
}

impl FromStr for MoneyFlowColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "totalFees" => Ok(MoneyFlowColumn::TotalFees),
            other => Err(ValidationError::unknown_column(MONEY_FLOW, other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoneyFlowFilter {
    FromCountry,
    ToCountry,
}

impl FilterField for MoneyFlowFilter {
    const ALL: &'static [Self] = &[MoneyFlowFilter::FromCountry, MoneyFlowFilter::ToCountry];

    fn name(self) -> &'static str {
        match self {
            MoneyFlowFilter::FromCountry => "fromCountry",
            MoneyFlowFilter::ToCountry => "toCountry",
        }
    }

    fn binding(self) -> FilterBinding {
        FilterBinding::Contains(self.name())
    }
}

impl FromStr for MoneyFlowFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fromCountry" => Ok(MoneyFlowFilter::FromCountry),
            "toCountry" => Ok(MoneyFlowFilter::ToCountry),
            other => Err(ValidationError::unknown_filter(MONEY_FLOW, other)),
        }
    }
}

/// Fees flowing from one country to another, with the largest single deal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyFlowRow {
    pub from_country: String,
    pub from_country_image: Option<ImageUrl>,
    pub to_country: String,
    pub to_country_image: Option<ImageUrl>,
    pub total_fees: Money,
    pub player: Option<String>,
    pub player_image: Option<ImageUrl>,
    pub fee: Option<Money>,
}

impl ListView for MoneyFlow {
    type Column = MoneyFlowColumn;
    type Filter = MoneyFlowFilter;
    type Row = MoneyFlowRow;

    const TITLE: &'static str = "Money Flow";
    const OPERATION: &'static str = "moneyFlow";
    const ROOT_FIELD: &'static str = "moneyFlow";
    const ORDERING_TYPE: &'static str = "_MoneyFlowOrdering";
    const FILTER_TYPE: Option<&'static str> = Some("_MoneyFlowFilter");
    const SELECTION: &'static str =
        "fromCountry fromCountryImage toCountry toCountryImage totalFees player playerImage fee";
    const IDENTITY_FIELD: &'static str = "fromCountry";

    fn default_sort() -> Self::Column {
        MoneyFlowColumn::TotalFees
    }
}
