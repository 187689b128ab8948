//! Plain-text rendering of a view's page.

use transferboard_lib::list::ListQueryState;
use transferboard_lib::list::ListView;
use transferboard_lib::list::SortColumn;
use transferboard_lib::list::ViewData;
use transferboard_lib::list::page_count;
use transferboard_lib::list::pagination_label;
use transferboard_lib::views::ClubSpendingRow;
use transferboard_lib::views::MoneyFlowRow;
use transferboard_lib::views::Party;
use transferboard_lib::views::TransferRow;

/// A row that can be printed as table cells.
pub trait Render {
    fn header() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Render for ClubSpendingRow {
    fn header() -> &'static [&'static str] {
        &["Club", "Country", "Spent", "Received", "Profit"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            self.country.clone(),
            self.money_spent.format_gbp(),
            self.money_received.format_gbp(),
            self.profit.format_gbp(),
        ]
    }
}

impl Render for MoneyFlowRow {
    fn header() -> &'static [&'static str] {
        &["From", "To", "Total fees", "Top player", "Fee"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.from_country.clone(),
            self.to_country.clone(),
            self.total_fees.format_gbp(),
            self.player.clone().unwrap_or_default(),
            self.fee.map(|fee| fee.format_gbp()).unwrap_or_default(),
        ]
    }
}

impl Render for TransferRow {
    fn header() -> &'static [&'static str] {
        &["Date", "Player", "From", "To", "Fee"]
    }

    fn cells(&self) -> Vec<String> {
        let name = |party: Option<&Party>| party.map(|p| p.name.clone()).unwrap_or_default();
        vec![
            self.formatted_date().unwrap_or_default().to_string(),
            name(self.player()),
            name(self.seller()),
            name(self.buyer()),
            self.value.format_gbp(),
        ]
    }
}

/// Renders the title, table and pagination footer of a view.
pub fn render_page<V>(state: &ListQueryState<V>, data: &ViewData<V::Row>) -> String
where
    V: ListView,
    V::Row: Render,
{
    let rows: Vec<Vec<String>> = data.rows().iter().map(Render::cells).collect();
    let header = V::Row::header();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!(
        "{} (sorted by {} {})\n",
        V::TITLE,
        state.sort_column().field(),
        state.sort_direction().as_str()
    );
    out.push_str(&line(header.iter().map(|h| h.to_string()), &widths));

    if rows.is_empty() {
        out.push_str("No results\n");
    }
    for row in rows {
        out.push_str(&line(row.into_iter(), &widths));
    }

    out.push_str(&format!(
        "{}  (page {} of {})\n",
        pagination_label(state.page(), state.page_size(), data.total_count()),
        state.page().saturating_add(1),
        page_count(data.total_count(), state.page_size()).max(1)
    ));
    out
}

fn line(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}
