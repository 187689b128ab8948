//! Top transfers: individual transfers by fee.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::list::FilterBinding;
use crate::list::FilterField;
use crate::list::ListView;
use crate::list::SortColumn;
use crate::model::ImageUrl;
use crate::model::Money;

const TOP_TRANSFERS: &str = "top transfers";

/// The top transfers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopTransfers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TopTransfersColumn {
    Value,
}

impl SortColumn for TopTransfersColumn {
    fn field(self) -> &'static str {
        match self {
            TopTransfersColumn::Value => "value",
        }
    }
}

impl FromStr for TopTransfersColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(TopTransfersColumn::Value),
            other => Err(ValidationError::unknown_column(TOP_TRANSFERS, other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TopTransfersFilter {
    /// Substring of the selling club's name.
    FromClub,
    /// Substring of the buying club's name.
    ToClub,
}

impl FilterField for TopTransfersFilter {
    const ALL: &'static [Self] = &[TopTransfersFilter::FromClub, TopTransfersFilter::ToClub];

    fn name(self) -> &'static str {
        match self {
            TopTransfersFilter::FromClub => "fromClub",
            TopTransfersFilter::ToClub => "toClub",
        }
    }

    fn binding(self) -> FilterBinding {
        match self {
            TopTransfersFilter::FromClub => FilterBinding::Contains("from_club.name"),
            TopTransfersFilter::ToClub => FilterBinding::Contains("to_club.name"),
        }
    }
}

impl FromStr for TopTransfersFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fromClub" => Ok(TopTransfersFilter::FromClub),
            "toClub" => Ok(TopTransfersFilter::ToClub),
            other => Err(ValidationError::unknown_filter(TOP_TRANSFERS, other)),
        }
    }
}

/// A named party of a transfer (player or club).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Party {
    pub name: String,
    pub image: Option<ImageUrl>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransferDate {
    pub formatted: String,
}

/// One transfer.
///
/// The service returns related nodes as lists; the first entry is the one
/// displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransferRow {
    pub id: String,
    pub value: Money,
    pub date: Option<TransferDate>,
    #[serde(default)]
    pub of_player: Vec<Party>,
    #[serde(default)]
    pub from_club: Vec<Party>,
    #[serde(default)]
    pub to_club: Vec<Party>,
}

impl TransferRow {
    pub fn player(&self) -> Option<&Party> {
        self.of_player.first()
    }

    pub fn seller(&self) -> Option<&Party> {
        self.from_club.first()
    }

    pub fn buyer(&self) -> Option<&Party> {
        self.to_club.first()
    }

    /// Returns the service-formatted transfer date.
    pub fn formatted_date(&self) -> Option<&str> {
        self.date.as_ref().map(|d| d.formatted.as_str())
    }
}

impl ListView for TopTransfers {
    type Column = TopTransfersColumn;
    type Filter = TopTransfersFilter;
    type Row = TransferRow;

    const TITLE: &'static str = "Top Transfers";
    const OPERATION: &'static str = "topTransfers";
    const ROOT_FIELD: &'static str = "Transfer";
    const ORDERING_TYPE: &'static str = "_TransferOrdering";
    const FILTER_TYPE: Option<&'static str> = Some("_TransferFilter");
    const SELECTION: &'static str =
        "date { formatted } value id of_player { name image } from_club { name image } to_club { name image }";
    const IDENTITY_FIELD: &'static str = "id";
    const PAGE_SIZES: &'static [usize] = &[5, 10, 25];

    fn default_sort() -> Self::Column {
        TopTransfersColumn::Value
    }
}
