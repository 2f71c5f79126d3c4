//! Cursor pagination draining
//!
//! The tables service returns listings one page at a time together with an
//! opaque continuation token. [`collect_all_pages`] keeps calling the same
//! listing with the last token until the service reports no further page.

use std::future::Future;

use tracing::debug;

use crate::domain::RemoteResult;
use crate::ports::Page;

/// Drains a paginated listing into one vector
///
/// `fetch` is called with `None` first, then with each continuation token the
/// service hands back. Iteration stops when the token is absent or empty; the
/// number of pages is not bounded here.
///
/// Items are returned in exactly the order the pages delivered them.
///
/// # Errors
///
/// The first failing call aborts the whole drain. Items from earlier pages
/// are discarded, never returned partially.
pub async fn collect_all_pages<T, F, Fut>(operation: &str, mut fetch: F) -> RemoteResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = RemoteResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut token: Option<String> = None;
    let mut page_count: u32 = 0;

    loop {
        let page = fetch(token.take()).await?;
        page_count += 1;

        let has_more = page.has_more();
        items.extend(page.items);

        debug!(
            operation,
            page = page_count,
            total = items.len(),
            has_more,
            "Received listing page"
        );

        if !has_more {
            break;
        }
        token = page.continuation_token;
    }

    Ok(items)
}
