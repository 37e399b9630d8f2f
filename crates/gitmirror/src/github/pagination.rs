//! Paginated API fetching.
//!
//! A page source is any async function of `(page, per_page)`; the fetcher
//! walks it from page 1 until exhaustion and returns the concatenated
//! items in upstream order.

use std::future::Future;

use super::error::GitHubError;

/// Default page size for list endpoints.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Sanity cap on the number of full pages fetched from one endpoint.
///
/// A well-formed upstream terminates with a short page; one that never
/// does is a protocol violation and is surfaced as an error rather than
/// looping forever or silently truncating.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Fetch every page of a paginated endpoint.
///
/// Starts at page 1 and accumulates items in order. A page with zero
/// items, or with fewer than `per_page` items, is the last page; its
/// items are included. Fetching more than `max_pages` full pages fails
/// with [`GitHubError::PageLimitExceeded`].
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_page: F,
    per_page: u32,
    max_pages: u32,
) -> Result<Vec<T>, GitHubError>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, GitHubError>>,
{
    let mut all_items = Vec::new();
    let mut page = 1u32;

    loop {
        let items = fetch_page(page, per_page).await?;
        let count = items.len();
        all_items.extend(items);

        // Zero items or a short page signals the last page.
        if count == 0 || (count as u32) < per_page {
            break;
        }

        if page >= max_pages {
            return Err(GitHubError::PageLimitExceeded { limit: max_pages });
        }
        page += 1;
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[tokio::test]
    async fn stops_after_short_page_with_all_items() {
        let calls = AtomicU32::new(0);

        let items = fetch_all_pages(
            |page, per_page| {
                let calls = &calls;
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let count = match page {
                        1 | 2 => per_page,
                        3 => 37,
                        _ => panic!("fetched past the final page"),
                    };
                    Ok((0..count).map(|i| (page, i)).collect::<Vec<_>>())
                }
            },
            100,
            DEFAULT_MAX_PAGES,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 237);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn empty_first_page_yields_empty_after_one_call() {
        let calls = AtomicU32::new(0);

        let items: Vec<u32> = fetch_all_pages(
            |_page, _per_page| {
                let calls = &calls;
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Vec::new())
                }
            },
            100,
            DEFAULT_MAX_PAGES,
        )
        .await
        .unwrap();

        assert!(items.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn preserves_upstream_ordering() {
        let items = fetch_all_pages(
            |page, per_page| async move {
                let count = if page < 3 { per_page } else { 1 };
                let start = (page - 1) * per_page;
                Ok((start..start + count).collect::<Vec<_>>())
            },
            5,
            DEFAULT_MAX_PAGES,
        )
        .await
        .unwrap();

        assert_eq!(items, (0..11).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn exactly_full_final_page_triggers_one_extra_call() {
        // A full page cannot be distinguished from a continuation; the
        // fetcher must confirm exhaustion with one further (empty) page.
        let calls = AtomicU32::new(0);

        let items = fetch_all_pages(
            |page, per_page| {
                let calls = &calls;
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if page == 1 {
                        Ok(vec![0u32; per_page as usize])
                    } else {
                        Ok(Vec::new())
                    }
                }
            },
            100,
            DEFAULT_MAX_PAGES,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 100);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn errors_propagate_immediately() {
        let err = fetch_all_pages(
            |page, _per_page| async move {
                if page == 1 {
                    Err(GitHubError::AuthRequired)
                } else {
                    Ok(vec![1u32])
                }
            },
            100,
            DEFAULT_MAX_PAGES,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, GitHubError::AuthRequired));
    }

    #[tokio::test]
    async fn runaway_upstream_hits_the_page_cap() {
        let err = fetch_all_pages(
            |_page, per_page| async move { Ok(vec![0u8; per_page as usize]) },
            100,
            5,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, GitHubError::PageLimitExceeded { limit: 5 }));
    }
}
