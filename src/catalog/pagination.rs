/// One page of a larger sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paged<T> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Slices `items` into page `requested` (1-based).
///
/// Out-of-range requests clamp to `[1, total_pages]`. An empty sequence
/// yields page 1 of 0 with no items.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], requested: usize, per_page: usize) -> Paged<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let current_page = requested.min(total_pages).max(1);

    let start = ((current_page - 1) * per_page).min(total_items);
    let end = (start + per_page).min(total_items);

    Paged {
        items: items[start..end].to_vec(),
        current_page,
        total_pages,
        total_items,
    }
}
