use std::future::Future;
use crate::errors::HarvestResult;

/// One page of a paginated listing.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }
}

/// Walks pages 1, 2, ... until `max_items` are held, the source reports no
/// further pages, or a page comes back empty. A failed page ends the walk and
/// keeps what was already accumulated.
pub async fn collect_pages<T, F, Fut>(max_items: usize, mut fetch_page: F) -> Vec<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = HarvestResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    while items.len() < max_items {
        match fetch_page(page).await {
            Ok(fetched) => {
                if fetched.items.is_empty() {
                    break;
                }
                items.extend(fetched.items);
                if !fetched.has_more {
                    break;
                }
                page += 1;
            }
            Err(e) => {
                log::warn!("⚠️ Stopping pagination at page {}: {}", page, e);
                break;
            }
        }
    }

    items.truncate(max_items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::errors::HarvestError;

    fn pages_of(sizes: &[usize], last_has_more: bool) -> Vec<Page<usize>> {
        let mut next = 0;
        sizes
            .iter()
            .enumerate()
            .map(|(i, size)| {
                let items = (next..next + size).collect();
                next += size;
                Page::new(items, i + 1 < sizes.len() || last_has_more)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_stops_when_source_has_no_more_pages() {
        let pages = RefCell::new(pages_of(&[3, 3, 2], false).into_iter());
        let requested = RefCell::new(Vec::new());

        let items = collect_pages(100, |page| {
            requested.borrow_mut().push(page);
            let next = pages.borrow_mut().next();
            async move { Ok(next.unwrap_or_else(|| Page::new(vec![], false))) }
        })
        .await;

        assert_eq!(items, (0..8).collect::<Vec<_>>());
        assert_eq!(*requested.borrow(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stops_at_max_and_truncates() {
        let pages = RefCell::new(pages_of(&[4, 4, 4, 4], true).into_iter());
        let requested = RefCell::new(0);

        let items = collect_pages(6, |_| {
            *requested.borrow_mut() += 1;
            let next = pages.borrow_mut().next();
            async move { Ok(next.unwrap_or_else(|| Page::new(vec![], false))) }
        })
        .await;

        assert_eq!(items.len(), 6);
        assert_eq!(*requested.borrow(), 2);
    }

    #[tokio::test]
    async fn test_empty_page_ends_walk_even_if_more_reported() {
        let items: Vec<u8> = collect_pages(10, |_| async { Ok(Page::new(vec![], true)) }).await;

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_keeps_earlier_items() {
        let items = collect_pages(10, |page| async move {
            if page == 1 {
                Ok(Page::new(vec![1, 2], true))
            } else {
                Err(HarvestError::network_error("page", None, Some(500), "server error"))
            }
        })
        .await;

        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_zero_max_makes_no_requests() {
        let calls = RefCell::new(0);
        let items: Vec<u8> = collect_pages(0, |_| {
            *calls.borrow_mut() += 1;
            async { Ok(Page::new(vec![1], true)) }
        })
        .await;

        assert!(items.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }
}
