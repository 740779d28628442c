//! Halting behaviour of the page walker over arbitrary page layouts.

use std::cell::Cell;
use proptest::prelude::*;
use codeharvest::helpers::pagination::{collect_pages, Page};

fn walk(page_sizes: &[usize], max_items: usize) -> (Vec<usize>, u32) {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let requests = Cell::new(0u32);

    let items = runtime.block_on(collect_pages(max_items, |page| {
        requests.set(requests.get() + 1);
        let index = page as usize - 1;
        let start: usize = page_sizes.iter().take(index).sum();
        let size = page_sizes.get(index).copied().unwrap_or(0);
        let has_more = index + 1 < page_sizes.len();
        async move { Ok(Page::new((start..start + size).collect(), has_more)) }
    }));

    (items, requests.get())
}

proptest! {
    #[test]
    fn never_exceeds_max_and_keeps_order(sizes in prop::collection::vec(1usize..20, 0..8), max in 0usize..120) {
        let (items, _) = walk(&sizes, max);
        let total: usize = sizes.iter().sum();

        prop_assert_eq!(items.len(), max.min(total));
        prop_assert!(items.iter().enumerate().all(|(i, v)| i == *v));
    }

    #[test]
    fn requests_stop_at_first_sufficient_or_last_page(sizes in prop::collection::vec(1usize..20, 1..8), max in 1usize..120) {
        let (_, requests) = walk(&sizes, max);

        let mut running = 0;
        let mut expected = sizes.len();
        for (i, size) in sizes.iter().enumerate() {
            running += size;
            if running >= max {
                expected = i + 1;
                break;
            }
        }

        prop_assert_eq!(requests as usize, expected);
    }
}
