//! Incremental location paging.

use rickdex_types::{CharacterRepository, Cursor, Location, NetworkError};

/// Accumulates location pages from the repository one cursor hop at a time.
///
/// Mirrors a lazily loaded list: call [`LocationPager::load_more`] as the
/// user scrolls, read the accumulated [`LocationPager::items`]. A failed
/// load leaves the cursor untouched so the same page can simply be
/// requested again.
#[derive(Debug, Default)]
pub struct LocationPager {
    items: Vec<Location>,
    cursor: Option<Cursor>,
    started: bool,
}

impl LocationPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// All locations fetched so far, in API order.
    pub fn items(&self) -> &[Location] {
        &self.items
    }

    /// True once the repository has reported no further pages.
    pub fn exhausted(&self) -> bool {
        self.started && self.cursor.is_none()
    }

    /// Fetch the next page and append it. A no-op once exhausted.
    pub async fn load_more<R>(&mut self, repo: &R) -> Result<&[Location], NetworkError>
    where
        R: CharacterRepository + ?Sized,
    {
        if self.exhausted() {
            return Ok(&self.items);
        }

        let page = repo.fetch_locations_page(self.cursor.clone()).await?;

        self.started = true;
        self.cursor = page.next;
        self.items.extend(page.items);

        tracing::debug!(
            "Location pager now holds {} entries (exhausted: {})",
            self.items.len(),
            self.exhausted()
        );

        Ok(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rickdex_types::{Character, Page};
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Serves two pages of locations; can be switched into a failing mode.
    struct PagedRepo {
        failing: AtomicBool,
    }

    impl PagedRepo {
        fn new() -> Self {
            Self { failing: AtomicBool::new(false) }
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn location(id: &str, name: &str) -> Location {
            Location { id: id.to_string(), name: name.to_string(), residents: Vec::new() }
        }
    }

    #[async_trait]
    impl CharacterRepository for PagedRepo {
        async fn fetch_all(&self) -> Result<Vec<Character>, NetworkError> {
            unimplemented!("not used by the pager")
        }

        async fn fetch_locations_page(
            &self,
            cursor: Option<Cursor>,
        ) -> Result<Page<Location>, NetworkError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(NetworkError::Timeout);
            }

            match cursor.as_ref().map(Cursor::as_str) {
                None => Ok(Page {
                    items: vec![
                        Self::location("1", "Earth (C-137)"),
                        Self::location("2", "Abadango"),
                    ],
                    next: Some(Cursor::new("page-2")),
                }),
                Some("page-2") => Ok(Page {
                    items: vec![Self::location("3", "Citadel of Ricks")],
                    next: None,
                }),
                Some(other) => panic!("unexpected cursor: {other}"),
            }
        }

        async fn fetch_by_ids(&self, _ids: &[String]) -> Result<Vec<Character>, NetworkError> {
            unimplemented!("not used by the pager")
        }
    }

    #[tokio::test]
    async fn accumulates_pages_in_order() {
        let repo = PagedRepo::new();
        let mut pager = LocationPager::new();

        let items = pager.load_more(&repo).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(!pager.exhausted());

        let items = pager.load_more(&repo).await.unwrap();
        let names: Vec<&str> = items.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Earth (C-137)", "Abadango", "Citadel of Ricks"]);
        assert!(pager.exhausted());
    }

    #[tokio::test]
    async fn load_more_after_exhaustion_is_a_no_op() {
        let repo = PagedRepo::new();
        let mut pager = LocationPager::new();

        pager.load_more(&repo).await.unwrap();
        pager.load_more(&repo).await.unwrap();
        assert!(pager.exhausted());

        // Even a failing repository is never consulted once exhausted.
        repo.set_failing(true);
        let items = pager.load_more(&repo).await.unwrap();
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn failed_load_keeps_the_cursor_for_retry() {
        let repo = PagedRepo::new();
        let mut pager = LocationPager::new();

        pager.load_more(&repo).await.unwrap();

        repo.set_failing(true);
        let err = pager.load_more(&repo).await.unwrap_err();
        assert_eq!(err, NetworkError::Timeout);
        assert_eq!(pager.items().len(), 2);
        assert!(!pager.exhausted());

        // Same page again once the repository recovers.
        repo.set_failing(false);
        let items = pager.load_more(&repo).await.unwrap();
        assert_eq!(items.len(), 3);
        assert!(pager.exhausted());
    }
}
