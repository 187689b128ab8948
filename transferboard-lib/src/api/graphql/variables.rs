//! Query variables.
//!
//! This is the only place a sort column and direction are fused into the
//! service's `<field>_<direction>` ordering token.

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::api::query::Filter;
use crate::api::query::OrderBy;
use crate::list::CountRequest;
use crate::list::FilterBinding;
use crate::list::FilterField;
use crate::list::FilterSet;
use crate::list::ListView;
use crate::list::PageRequest;
use crate::list::SortColumn;

/// Returns the ordering enumeration value for `order`, e.g. `moneySpent_desc`.
pub fn ordering_token<C: SortColumn>(order: OrderBy<C>) -> String {
    format!("{}_{}", order.column().field(), order.direction().as_str())
}

/// Collects the predicate-bound filters of a set into one [`Filter`].
///
/// Returns `None` when no predicate restricts the query. Argument-bound
/// filters are not part of the filter input.
pub fn filter_input<F: FilterField>(filters: &FilterSet<F>) -> Option<Filter> {
    let predicates: Vec<Filter> = filters
        .iter()
        .filter_map(|(filter, value)| match filter.binding() {
            FilterBinding::Contains(path) => Some(Filter::contains(path, value)),
            FilterBinding::Argument(_) => None,
        })
        .collect();

    if predicates.is_empty() {
        None
    } else {
        Some(Filter::and(predicates))
    }
}

/// Encodes a [`Filter`] as a GraphQL filter input object.
///
/// `Contains("from_club.name", "Chel")` becomes
/// `{"from_club": {"name_contains": "Chel"}}` and `And` becomes `{"AND": [..]}`.
pub fn filter_json(filter: &Filter) -> Value {
    match filter {
        Filter::Contains(path, value) => {
            let mut segments = path.rsplit('.');
            let field = segments.next().unwrap_or(path.as_str());
            let leaf = object(format!("{field}_contains"), Value::String(value.clone()));
            segments.fold(leaf, |inner, parent| object(parent.to_string(), inner))
        }
        Filter::And(filters) => {
            json!({ "AND": filters.iter().map(filter_json).collect::<Vec<_>>() })
        }
    }
}

fn object(key: String, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key, value);
    Value::Object(map)
}

/// Variables of a page query: ordering, window and filters.
pub fn page_variables<V: ListView>(request: &PageRequest<V>) -> Value {
    let mut variables = base_variables::<V>(request.order(), request.filters());
    variables.insert("first".to_string(), json!(request.limit()));
    variables.insert("offset".to_string(), json!(request.offset()));
    Value::Object(variables)
}

/// Variables of a count query: ordering and filters, no window.
pub fn count_variables<V: ListView>(request: &CountRequest<V>) -> Value {
    Value::Object(base_variables::<V>(request.order(), request.filters()))
}

fn base_variables<V: ListView>(
    order: OrderBy<V::Column>,
    filters: &FilterSet<V::Filter>,
) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("orderBy".to_string(), json!([ordering_token(order)]));

    if let Some(filter) = filter_input(filters) {
        variables.insert("filter".to_string(), filter_json(&filter));
    }

    // Argument filters are always sent; the empty substring is unrestricted.
    for filter in <V::Filter as FilterField>::ALL {
        if let FilterBinding::Argument(_) = filter.binding() {
            let value = filters.get(*filter).unwrap_or_default();
            variables.insert(filter.name().to_string(), json!(value));
        }
    }

    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListQueryState;
    use crate::list::build_requests;
    use crate::views::ClubSpending;
    use crate::views::ClubSpendingColumn;
    use crate::views::ClubSpendingFilter;
    use crate::views::MoneyFlow;
    use crate::views::MoneyFlowFilter;
    use crate::views::TopTransfers;
    use crate::views::TopTransfersFilter;

    #[test]
    fn test_default_club_spending_page() {
        let state = ListQueryState::<ClubSpending>::new();
        let requests = build_requests(&state);

        assert_eq!(
            page_variables(&requests.page),
            json!({
                "orderBy": ["moneySpent_desc"],
                "first": 10,
                "offset": 0,
                "country": "",
            })
        );
    }

    #[test]
    fn test_sort_toggle_changes_token() {
        let state = ListQueryState::<ClubSpending>::new().set_sort(ClubSpendingColumn::MoneySpent);
        let requests = build_requests(&state);

        assert_eq!(ordering_token(requests.page.order()), "moneySpent_asc");
        assert_eq!(page_variables(&requests.page)["offset"], json!(0));
    }

    #[test]
    fn test_argument_filter_value_is_passed_through() {
        let state = ListQueryState::<ClubSpending>::new()
            .set_filter(ClubSpendingFilter::Country, "Eng")
            .set_page(2)
            .set_page_size(25)
            .expect("allowed size");
        let requests = build_requests(&state);

        let page = page_variables(&requests.page);
        assert_eq!(page["country"], json!("Eng"));
        assert_eq!(page["offset"], json!(50));
        assert_eq!(page["first"], json!(25));
        assert!(page.get("filter").is_none());

        let count = count_variables(&requests.count);
        assert_eq!(count, json!({ "orderBy": ["moneySpent_desc"], "country": "Eng" }));
    }

    #[test]
    fn test_predicates_combine_under_and() {
        let state = ListQueryState::<MoneyFlow>::new()
            .set_filter(MoneyFlowFilter::FromCountry, "Spa")
            .set_filter(MoneyFlowFilter::ToCountry, "Eng");
        let requests = build_requests(&state);

        assert_eq!(
            count_variables(&requests.count),
            json!({
                "orderBy": ["totalFees_desc"],
                "filter": { "AND": [
                    { "fromCountry_contains": "Spa" },
                    { "toCountry_contains": "Eng" },
                ]},
            })
        );
    }

    #[test]
    fn test_nested_path_becomes_nested_object() {
        let state = ListQueryState::<TopTransfers>::new()
            .set_filter(TopTransfersFilter::ToClub, "Chelsea");
        let requests = build_requests(&state);

        assert_eq!(
            page_variables(&requests.page)["filter"],
            json!({ "AND": [{ "to_club": { "name_contains": "Chelsea" } }] })
        );
    }

    #[test]
    fn test_empty_predicates_omit_filter() {
        let state = ListQueryState::<TopTransfers>::new()
            .set_filter(TopTransfersFilter::FromClub, "");
        let requests = build_requests(&state);

        assert!(filter_input(requests.page.filters()).is_none());
        assert!(page_variables(&requests.page).get("filter").is_none());
    }

    #[test]
    fn test_filter_json_deep_path() {
        let filter = Filter::contains("a.b.c", "x");
        assert_eq!(filter_json(&filter), json!({ "a": { "b": { "c_contains": "x" } } }));
    }
}
