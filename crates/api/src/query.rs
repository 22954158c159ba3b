//! Query parameter types for API handlers.

use folio_core::catalog::{CatalogFilters, CatalogQuery};
use folio_core::ordering::SortMode;
use serde::{Deserialize, Deserializer};

/// Query parameters of `GET /works/catalog`
/// (`?category=&technology=&sort=&page=`).
///
/// Empty values mean "no filter" or "default", matching the "All" entries
/// of the catalog dropdowns. `page` never fails: anything unparsable is
/// treated as absent and the value is clamped later.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub technology: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sort")]
    pub sort: Option<SortMode>,
    #[serde(default, deserialize_with = "deserialize_page")]
    pub page: Option<i64>,
}

impl CatalogParams {
    /// Build the core query, using `page_size` from server configuration.
    pub fn into_query(self, page_size: usize) -> CatalogQuery {
        let page = self
            .page
            .map(|p| usize::try_from(p.max(1)).unwrap_or(usize::MAX))
            .unwrap_or(1);

        CatalogQuery {
            filters: CatalogFilters {
                category: self.category.filter(|c| !c.is_empty()),
                technology: self.technology.filter(|t| !t.is_empty()),
            },
            sort: self.sort.unwrap_or_default(),
            page,
            page_size,
        }
    }
}

/// Empty `sort` means the default order; unknown non-empty values are rejected.
fn deserialize_sort<'de, D>(deserializer: D) -> Result<Option<SortMode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<SortMode>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Lenient page number: empty or non-numeric values count as absent.
fn deserialize_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|r| r.trim().parse::<i64>().ok()))
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn try_parse(query: &str) -> Option<CatalogParams> {
        let uri: Uri = format!("/api/v1/works/catalog?{query}").parse().unwrap();
        Query::<CatalogParams>::try_from_uri(&uri).ok().map(|q| q.0)
    }

    fn parse(query: &str) -> CatalogParams {
        try_parse(query).unwrap()
    }

    #[test]
    fn empty_params_mean_defaults() {
        let query = CatalogParams::default().into_query(3);
        assert_eq!(query, CatalogQuery::default());
    }

    #[test]
    fn empty_strings_are_no_filter() {
        let params = CatalogParams {
            category: Some(String::new()),
            technology: Some("java".into()),
            sort: Some(SortMode::Title),
            page: Some(2),
        };
        let query = params.into_query(5);
        assert_eq!(query.filters.category, None);
        assert_eq!(query.filters.technology.as_deref(), Some("java"));
        assert_eq!(query.sort, SortMode::Title);
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 5);
    }

    #[test]
    fn pages_below_one_become_one() {
        assert_eq!(parse("page=-1").into_query(3).page, 1);
        assert_eq!(parse("page=0").into_query(3).page, 1);
        assert_eq!(parse("page=7").into_query(3).page, 7);
    }

    #[test]
    fn unparsable_page_is_absent() {
        assert_eq!(parse("page=").page, None);
        assert_eq!(parse("page=two").page, None);
        assert_eq!(parse("page=two").into_query(3).page, 1);
    }

    #[test]
    fn empty_sort_is_default() {
        assert_eq!(parse("sort=").sort, None);
        assert_eq!(parse("sort=").into_query(3).sort, SortMode::Priority);
        assert_eq!(parse("sort=year").sort, Some(SortMode::Year));
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!(try_parse("sort=random").is_none());
    }
}
