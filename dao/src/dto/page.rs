use std::num::IntErrorKind;

pub struct Page<T> {
    items: Vec<T>,
    number: usize,
    total_items: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    pub fn items(&self) -> &Vec<T> {
        &self.items
    }

    pub fn number(&self) -> &usize {
        &self.number
    }

    pub fn total_items(&self) -> &usize {
        &self.total_items
    }

    pub fn total_pages(&self) -> &usize {
        &self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Slices one page out of an ordered collection.
///
/// A missing or non-numeric `requested_page` resolves to page 1, and an
/// out-of-range number clamps to the nearest existing page instead of
/// failing. An empty collection yields page 1 of 0 total pages. The page
/// size must be positive; it is validated once at startup.
pub fn paginate<T>(items: Vec<T>, requested_page: &Option<String>, page_size: &usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(*page_size);

    let requested = requested_page.as_deref().map_or(1, |page| {
        match page.trim().parse::<i64>() {
            Ok(number) => number,
            // A numeric request too large for i64 is still past the last page.
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                _ => 1,
            },
        }
    });
    let number = usize::try_from(requested.clamp(1, total_pages.max(1) as i64)).unwrap_or(1);

    let items = items
        .into_iter()
        .skip((number - 1) * *page_size)
        .take(*page_size)
        .collect();

    Page {
        items,
        number,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_items_split_into_ten_and_three() {
        let first = paginate((0..13).collect(), &None, &10);
        assert_eq!(first.items().len(), 10);
        assert_eq!(*first.number(), 1);
        assert_eq!(*first.total_items(), 13);
        assert_eq!(*first.total_pages(), 2);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let second = paginate((0..13).collect(), &Some("2".to_owned()), &10);
        assert_eq!(second.items(), &(10..13).collect::<Vec<_>>());
        assert_eq!(*second.number(), 2);
        assert!(!second.has_next());
        assert!(second.has_previous());
    }

    #[test]
    fn concatenated_pages_reproduce_the_input() {
        let items = (0..23).collect::<Vec<_>>();
        let total_pages = *paginate(items.clone(), &None, &5).total_pages();
        assert_eq!(total_pages, 5);

        let mut collected = Vec::new();
        for number in 1..=total_pages {
            let page = paginate(items.clone(), &Some(number.to_string()), &5);
            if number < total_pages {
                assert_eq!(page.items().len(), 5);
            } else {
                assert_eq!(page.items().len(), 3);
            }
            collected.extend_from_slice(page.items());
        }
        assert_eq!(collected, items);
    }

    #[test]
    fn exact_multiple_fills_the_last_page() {
        let page = paginate((0..20).collect(), &Some("4".to_owned()), &5);
        assert_eq!(page.items().len(), 5);
        assert_eq!(*page.total_pages(), 4);
        assert!(!page.has_next());
    }

    #[test]
    fn single_partial_page() {
        let page = paginate(vec![7], &None, &10);
        assert_eq!(page.items(), &vec![7]);
        assert_eq!(*page.total_pages(), 1);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn empty_input_yields_page_one_of_zero() {
        let page = paginate(Vec::<i32>::new(), &None, &10);
        assert!(page.items().is_empty());
        assert_eq!(*page.number(), 1);
        assert_eq!(*page.total_items(), 0);
        assert_eq!(*page.total_pages(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());

        let far = paginate(Vec::<i32>::new(), &Some("7".to_owned()), &10);
        assert!(far.items().is_empty());
        assert_eq!(*far.number(), 1);
    }

    #[test]
    fn missing_and_non_numeric_requests_default_to_page_one() {
        let items = (0..13).collect::<Vec<_>>();
        let first = paginate(items.clone(), &None, &10);

        for raw in ["abc", "1.5", "", "two"] {
            let page = paginate(items.clone(), &Some(raw.to_owned()), &10);
            assert_eq!(page.items(), first.items(), "requested page {raw:?}");
            assert_eq!(*page.number(), 1);
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let page = paginate((0..13).collect(), &Some(" 2 ".to_owned()), &10);
        assert_eq!(*page.number(), 2);
        assert_eq!(page.items().len(), 3);
    }

    #[test]
    fn out_of_range_requests_clamp_to_the_nearest_page() {
        let items = (0..13).collect::<Vec<_>>();

        let beyond = paginate(items.clone(), &Some("99".to_owned()), &10);
        assert_eq!(*beyond.number(), 2);
        assert_eq!(beyond.items().len(), 3);

        let huge = paginate(items.clone(), &Some("9".repeat(30)), &10);
        assert_eq!(*huge.number(), 2);

        for raw in ["0", "-3"] {
            let page = paginate(items.clone(), &Some(raw.to_owned()), &10);
            assert_eq!(*page.number(), 1, "requested page {raw:?}");
            assert_eq!(page.items().len(), 10);
        }
    }
}
