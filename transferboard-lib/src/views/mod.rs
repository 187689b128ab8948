//! The dashboard's list views.

mod club_spending;
mod money_flow;
mod money_in_money_out;
mod top_transfers;

pub use club_spending::*;
pub use money_flow::*;
pub use money_in_money_out::*;
pub use top_transfers::*;
