//! Query documents rendered from a view's static description.

use crate::list::FilterBinding;
use crate::list::FilterField;
use crate::list::ListView;

/// Renders the document fetching one page of a view's rows.
///
/// ```
/// use transferboard_lib::api::graphql::page_document;
/// use transferboard_lib::views::MoneyFlow;
///
/// let doc = page_document::<MoneyFlow>();
/// assert!(doc.starts_with("query moneyFlow($orderBy: [_MoneyFlowOrdering], $first: Int, $offset: Int, $filter: _MoneyFlowFilter)"));
/// ```
pub fn page_document<V: ListView>() -> String {
    render::<V>(true, V::SELECTION)
}

/// Renders the document whose result length is the view's total count.
///
/// Same arguments as the page document minus `first`/`offset`, selecting only
/// the identity field.
pub fn count_document<V: ListView>() -> String {
    render::<V>(false, V::IDENTITY_FIELD)
}

fn render<V: ListView>(paged: bool, selection: &str) -> String {
    let mut declarations = vec![format!("$orderBy: [{}]", V::ORDERING_TYPE)];
    let mut arguments = vec!["orderBy: $orderBy".to_string()];

    if paged {
        declarations.push("$first: Int".to_string());
        declarations.push("$offset: Int".to_string());
        arguments.push("first: $first".to_string());
        arguments.push("offset: $offset".to_string());
    }

    if let Some(filter_type) = V::FILTER_TYPE {
        declarations.push(format!("$filter: {filter_type}"));
        arguments.push("filter: $filter".to_string());
    }

    for filter in <V::Filter as FilterField>::ALL {
        if let FilterBinding::Argument(argument) = filter.binding() {
            declarations.push(format!("${}: String", filter.name()));
            arguments.push(format!("{argument}: ${}", filter.name()));
        }
    }

    format!(
        "query {}({}) {{\n  {}({}) {{\n    {}\n  }}\n}}\n",
        V::OPERATION,
        declarations.join(", "),
        V::ROOT_FIELD,
        arguments.join(", "),
        selection,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ClubSpending;
    use crate::views::TopTransfers;

    #[test]
    fn test_page_document_with_argument_filter() {
        let doc = page_document::<ClubSpending>();
        assert_eq!(
            doc,
            "query topSpendingQuery($orderBy: [_SpendingOrdering], $first: Int, $offset: Int, $country: String) {\n  \
             spendingByClub(orderBy: $orderBy, first: $first, offset: $offset, countrySubstring: $country) {\n    \
             moneySpent country club clubImage countryImage moneyReceived profit\n  }\n}\n"
        );
    }

    #[test]
    fn test_count_document_selects_identity_only() {
        let doc = count_document::<ClubSpending>();
        assert!(doc.contains("spendingByClub(orderBy: $orderBy, countrySubstring: $country)"));
        assert!(doc.contains("{\n    club\n  }"));
        assert!(!doc.contains("$first"));
        assert!(!doc.contains("$offset"));
    }

    #[test]
    fn test_predicate_views_declare_filter_input() {
        let doc = count_document::<TopTransfers>();
        assert!(
            doc.starts_with("query topTransfers($orderBy: [_TransferOrdering], $filter: _TransferFilter)")
        );
        assert!(doc.contains("Transfer(orderBy: $orderBy, filter: $filter)"));
        assert!(doc.contains("{\n    id\n  }"));
    }
}
