use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CatalogError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Direction applied to the name / title column of list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CatalogError::InvalidArgument(format!(
                "unknown sort order '{s}'"
            ))),
        }
    }
}

/// Filter + ordering shared by `find_all` and `paginate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Case-insensitive substring match; blank means no filtering.
    pub filter: Option<String>,
    pub order: SortOrder,
}

impl ListFilter {
    pub fn new(filter: Option<String>, order: SortOrder) -> Self {
        Self { filter, order }
    }

    /// `ILIKE` pattern for the filter, or `None` when nothing to match.
    pub fn like_pattern(&self) -> Option<String> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| format!("%{}%", escape_like(value)))
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub list: ListFilter,
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            list: ListFilter::default(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(list: ListFilter, page: u32, per_page: u32) -> Self {
        Self {
            list,
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }
}

/// One page of results plus the numbers needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub first_page: u32,
    pub last_page: u32,
    /// 1-based position of the first item on this page, 0 when empty.
    pub from: u64,
    /// 1-based position of the last item on this page, 0 when empty.
    pub to: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        let per_page = request.per_page.max(1);
        let current_page = request.page.max(1);
        let last_page = total.div_ceil(u64::from(per_page)).max(1) as u32;

        let (from, to) = if items.is_empty() {
            (0, 0)
        } else {
            let from = u64::from(current_page - 1) * u64::from(per_page) + 1;
            (from, from + items.len() as u64 - 1)
        };

        Self {
            items,
            total,
            current_page,
            per_page,
            first_page: 1,
            last_page,
            from,
            to,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            first_page: self.first_page,
            last_page: self.last_page,
            from: self.from,
            to: self.to,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}
