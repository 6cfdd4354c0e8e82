// Client-side search + pagination used by the sales and users tables.
// The whole collection is fetched once; everything here is array math.

/// Search term + 1-based page over a filtered collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Case-insensitive substring match across the given fields
    pub fn matches(&self, fields: &[&str]) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// 0 when nothing matched; never divides by zero
    pub fn total_pages(&self, filtered_len: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        filtered_len.div_ceil(self.page_size)
    }

    /// Keep the page index inside the filtered result. A shrinking
    /// filter would otherwise leave the view stranded past the end.
    pub fn clamp_page(&mut self, filtered_len: usize) {
        let total = self.total_pages(filtered_len);
        self.page = self.page.min(total.max(1)).max(1);
    }

    /// Rows of the current page
    pub fn slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(filtered.len());
        &filtered[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, filtered_len: usize) -> bool {
        self.page < self.total_pages(filtered_len)
    }

    /// "1 - 10 OF 12" footer label; "0 OF 0" when nothing matched
    pub fn range_label(&self, filtered_len: usize) -> String {
        if filtered_len == 0 {
            return "0 OF 0".to_string();
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(filtered_len);
        format!("{} - {} OF {}", start, end, filtered_len)
    }
}

/// Filter a collection through the query, returning references in the
/// original order. `fields` extracts the searchable columns of a row.
pub fn filter<'a, T, F>(items: &'a [T], query: &TableQuery, fields: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<String>,
{
    items
        .iter()
        .filter(|item| {
            let values = fields(item);
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            query.matches(&refs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("customer-{:02}", i)).collect()
    }

    #[test]
    fn pages_walk_a_filtered_list() {
        // 25 records, 12 matching, page size 10: page 1 is rows 1-10,
        // page 2 is rows 11-12 with NEXT disabled.
        let records = rows(25);
        let mut query = TableQuery::new(10);
        query.search = "customer-0".to_string(); // matches 01..09
        let matched = filter(&records, &query, |r| vec![r.clone()]);
        assert_eq!(matched.len(), 9);

        query.search = "1".to_string(); // 01, 10..19, 21 -> 12 rows
        let matched = filter(&records, &query, |r| vec![r.clone()]);
        assert_eq!(matched.len(), 12);

        query.clamp_page(matched.len());
        assert_eq!(query.total_pages(matched.len()), 2);
        assert_eq!(query.slice(&matched).len(), 10);
        assert_eq!(query.range_label(matched.len()), "1 - 10 OF 12");
        assert!(!query.has_prev());
        assert!(query.has_next(matched.len()));

        query.page = 2;
        query.clamp_page(matched.len());
        let page2 = query.slice(&matched);
        assert_eq!(page2.len(), 2);
        assert_eq!(query.range_label(matched.len()), "11 - 12 OF 12");
        assert!(query.has_prev());
        assert!(!query.has_next(matched.len()));
    }

    #[test]
    fn zero_matches_is_an_empty_first_page() {
        let records = rows(25);
        let mut query = TableQuery::new(10);
        query.page = 3;
        query.search = "zebra".to_string();
        let matched = filter(&records, &query, |r| vec![r.clone()]);
        assert!(matched.is_empty());
        assert_eq!(query.total_pages(0), 0);
        query.clamp_page(0);
        assert_eq!(query.page, 1);
        assert!(query.slice(&matched).is_empty());
        assert_eq!(query.range_label(0), "0 OF 0");
        assert!(!query.has_next(0));
        assert!(!query.has_prev());
    }

    #[test]
    fn a_shrinking_filter_pulls_the_page_back() {
        let records = rows(40);
        let mut query = TableQuery::new(10);
        query.page = 4;
        query.clamp_page(records.len());
        assert_eq!(query.page, 4);

        // narrow to 13 matches (01, 10..19, 21, 31): page 4 no longer exists
        query.search = "1".to_string();
        let matched = filter(&records, &query, |r| vec![r.clone()]);
        assert_eq!(matched.len(), 13);
        query.clamp_page(matched.len());
        assert_eq!(query.page, 2);
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let mut query = TableQuery::new(10);
        query.search = "LAG".to_string();
        assert!(query.matches(&["Blue Bar", "lagos", "Ada"]));
        assert!(!query.matches(&["Blue Bar", "Abuja", "Ada"]));
        query.search.clear();
        assert!(query.matches(&[]));
    }
}
