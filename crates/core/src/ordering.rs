//! Sort orders for the work catalog.
//!
//! All comparators are total so they can be fed to the stable
//! `slice::sort_by`; ties keep insertion order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::work::WorkRecord;

/// Catalog sort mode selected by the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Manual priority first, then most recent year.
    #[default]
    Priority,
    /// Most recent year first.
    Year,
    /// Title, ascending, case-sensitive.
    Title,
}

impl SortMode {
    pub fn comparator(self) -> fn(&WorkRecord, &WorkRecord) -> Ordering {
        match self {
            SortMode::Priority => compare_by_priority,
            SortMode::Year => compare_by_year_desc,
            SortMode::Title => compare_by_title,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Priority => "priority",
            SortMode::Year => "year",
            SortMode::Title => "title",
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(SortMode::Priority),
            "year" => Ok(SortMode::Year),
            "title" => Ok(SortMode::Title),
            other => Err(format!(
                "Unknown sort mode '{other}'. Must be one of: priority, year, title"
            )),
        }
    }
}

/// Ascending numeric priority; works without a usable priority rank after
/// all prioritised ones. Equal priorities (including "none") fall back to
/// [`compare_by_year_desc`].
pub fn compare_by_priority(a: &WorkRecord, b: &WorkRecord) -> Ordering {
    match (a.priority_rank(), b.priority_rank()) {
        (Some(pa), Some(pb)) if pa != pb => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => compare_by_year_desc(a, b),
    }
}

/// Descending numeric year. Works whose year is missing or not a number
/// rank after every numeric year and tie among themselves.
pub fn compare_by_year_desc(a: &WorkRecord, b: &WorkRecord) -> Ordering {
    match (a.year_value(), b.year_value()) {
        (Some(ya), Some(yb)) => yb.total_cmp(&ya),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare_by_title(a: &WorkRecord, b: &WorkRecord) -> Ordering {
    a.title.cmp(&b.title)
}
