/// PostgREST query builder
///
/// Mirrors the subset of the Supabase query API the viewer needs:
/// column projection with inner joins, `ilike`, `eq`, `in`, row ranges and
/// single-row fetches. A `Query` is pure data; `Client` turns it into an
/// HTTP request via `to_params()` and `is_single()`.

/// A PostgREST table query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    range: Option<(usize, usize)>,
    single: bool,
}

impl Query {
    /// Start a query against `table` selecting all columns
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            range: None,
            single: false,
        }
    }

    /// Column/relationship projection, e.g. `id, full_name, team_id!inner(name)`
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self
    }

    /// Case-insensitive pattern match, `%` is the wildcard
    pub fn ilike(mut self, column: &str, pattern: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.{}", pattern)));
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Set-membership filter
    ///
    /// Callers must not pass an empty set: PostgREST rejects `in.()` with an
    /// ambiguous error, so empty sets are resolved before a query is built.
    pub fn in_<S: AsRef<str>>(mut self, column: &str, values: &[S]) -> Self {
        let list = values
            .iter()
            .map(|v| quote_list_value(v.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        self.filters
            .push((column.to_string(), format!("in.({})", list)));
        self
    }

    /// Zero-indexed, inclusive row window
    pub fn range(mut self, from: usize, to: usize) -> Self {
        self.range = Some((from, to.max(from)));
        self
    }

    /// Expect exactly one row
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn row_range(&self) -> Option<(usize, usize)> {
        self.range
    }

    /// Query-string parameters in the order PostgREST expects them
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 3);
        params.push(("select".to_string(), self.select.clone()));
        params.extend(self.filters.iter().cloned());
        if let Some((from, to)) = self.range {
            params.push(("offset".to_string(), from.to_string()));
            params.push(("limit".to_string(), (to - from + 1).to_string()));
        }
        params
    }
}

/// Escape LIKE metacharacters so user text never acts as a multi-character wildcard
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '%' | '_' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            // PostgREST rewrites `*` to `%` before Postgres sees it, so a
            // literal star can only be matched as one arbitrary character
            '*' => escaped.push('_'),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build a `%text%` substring pattern from raw user input
pub fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

/// Values containing PostgREST list delimiters must be double-quoted
fn quote_list_value(value: &str) -> String {
    if value.contains([',', '(', ')', '"', ' ']) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
