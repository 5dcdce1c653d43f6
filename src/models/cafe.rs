use crate::catalog::CafeCatalog;
use crate::error::QueryError;

/// Raw `/cafe` query string parameters.
#[derive(Debug, Default)]
pub struct CafeParams {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeParams {
    /// Collects decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut params.city,
                "count" => &mut params.count,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// A validated lookup: the city is known and the count is a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: String,
    pub count: Option<usize>,
    pub search: Option<String>,
}

impl CafeQuery {
    /// Keeps cafes whose lowercased name contains the lowercased search term,
    /// then takes at most `count` of them. Catalog order is preserved.
    pub fn apply(&self, cafes: Vec<String>) -> Vec<String> {
        let needle = self.search.as_deref().map(lowercase);
        let limit = self.count.unwrap_or(usize::MAX);

        cafes
            .into_iter()
            .filter(|cafe| match &needle {
                Some(needle) => lowercase(cafe).contains(needle.as_str()),
                None => true,
            })
            .take(limit)
            .collect()
    }
}

/// Per-character lowercase, so a final `Σ` maps to `σ` like any other.
fn lowercase(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Blank values count as missing, the way `?count=` reads in a browser form.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_count(count: Option<String>) -> Result<Option<usize>, QueryError> {
    non_empty(count)
        .map(|count| count.parse::<usize>().map_err(|_| QueryError::InvalidCount))
        .transpose()
}

/// Validates `params` against `catalog` and returns the matching cafe names.
/// The city is checked before the count.
pub fn find_cafes(
    catalog: &dyn CafeCatalog,
    params: CafeParams,
) -> Result<Vec<String>, QueryError> {
    let city = non_empty(params.city).ok_or(QueryError::InvalidCity)?;
    let cafes = catalog.cafes(&city).ok_or(QueryError::InvalidCity)?;

    let query = CafeQuery {
        city,
        count: parse_count(params.count)?,
        search: non_empty(params.search),
    };

    Ok(query.apply(cafes))
}
