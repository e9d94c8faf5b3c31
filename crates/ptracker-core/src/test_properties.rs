//! Property-based tests for pagination, carousel and aggregation invariants.

use proptest::prelude::*;

use crate::carousel::{next_index, prev_index, CitationCarousel};
use crate::paging::{paginate, page_buttons, PageButton, Paginator};
use crate::status::{PromiseStatus, StatusCounts};
use crate::types::{sort_promises, Promise};

// ──────────────────── strategies ────────────────────

fn arb_status() -> impl Strategy<Value = PromiseStatus> {
    (0u8..4).prop_map(|c| PromiseStatus::try_from(c).unwrap())
}

fn arb_promise() -> impl Strategy<Value = Promise> {
    (any::<u64>(), "[a-z ]{0,40}", 0u64..20, arb_status()).prop_map(
        |(id, text, citation_count, status)| Promise {
            id,
            candidate_id: 1,
            text,
            status,
            citation_count,
            action_count: 0,
            categories: Vec::new(),
        },
    )
}

// ──────────────────── properties ────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every page fits the page size and the pages concatenate back into
    /// the original list.
    #[test]
    fn paginate_pages_reconstruct_items(
        items in prop::collection::vec(any::<u16>(), 0..200),
        page_size in 1usize..25,
    ) {
        let total = paginate(&items, 1, page_size).total_pages;
        let mut rebuilt = Vec::with_capacity(items.len());
        for page in 1..=total {
            let slice = paginate(&items, page, page_size);
            prop_assert!(slice.visible.len() <= page_size);
            prop_assert_eq!(slice.total_pages, total);
            rebuilt.extend_from_slice(slice.visible);
        }
        prop_assert_eq!(rebuilt, items);
    }

    /// Any requested page yields a slice no longer than the page size.
    #[test]
    fn paginate_any_page_is_bounded(
        len in 0usize..300,
        page in 0usize..50,
        page_size in 1usize..25,
    ) {
        let items: Vec<usize> = (0..len).collect();
        prop_assert!(paginate(&items, page, page_size).visible.len() <= page_size);
    }

    /// Out-of-range jumps never move the paginator.
    #[test]
    fn paginator_go_to_stays_in_range(
        len in 0usize..200,
        jumps in prop::collection::vec(0usize..40, 0..30),
    ) {
        let mut p = Paginator::new(10);
        for page in jumps {
            let before = p.current_page();
            let moved = p.go_to(page, len);
            if !moved {
                prop_assert_eq!(p.current_page(), before);
            }
            prop_assert!(p.current_page() >= 1);
            prop_assert!(p.current_page() <= p.total_pages(len).max(1));
        }
    }

    /// Page buttons never exceed five entries and always end on the last page.
    #[test]
    fn page_buttons_shape(total in 0usize..100) {
        let buttons = page_buttons(total);
        prop_assert!(buttons.len() <= 5);
        if total > 0 {
            prop_assert_eq!(buttons.last().copied(), Some(PageButton::Page(total)));
        }
    }

    /// next after prev (and prev after next) is the identity.
    #[test]
    fn carousel_next_prev_identity(len in 1usize..100, seed in any::<usize>()) {
        let index = seed % len;
        let back = prev_index(index, len).and_then(|i| next_index(i, len));
        prop_assert_eq!(back, Some(index));
        let fwd = next_index(index, len).and_then(|i| prev_index(i, len));
        prop_assert_eq!(fwd, Some(index));
    }

    /// The carousel index stays in range under any step sequence.
    #[test]
    fn carousel_index_in_range(len in 1usize..20, steps in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut c = CitationCarousel::new();
        for forward in steps {
            if forward { c.next(len) } else { c.prev(len) }
            prop_assert!(c.index() < len);
        }
    }

    /// Aggregation partitions the list and the percentage stays in 0..=100.
    #[test]
    fn aggregate_partitions(statuses in prop::collection::vec(arb_status(), 0..100)) {
        let counts = StatusCounts::from_statuses(statuses.iter().copied());
        prop_assert_eq!(counts.total(), statuses.len());
        for status in PromiseStatus::ALL {
            let expected = statuses.iter().filter(|s| **s == status).count();
            prop_assert_eq!(counts.get(status), expected);
        }
        prop_assert!(counts.progress_percentage() <= 100);
    }

    /// Sorted output is ordered by citations desc, then text length asc.
    #[test]
    fn sort_promises_orders_rows(mut promises in prop::collection::vec(arb_promise(), 0..40)) {
        sort_promises(&mut promises);
        for pair in promises.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.citation_count >= b.citation_count);
            if a.citation_count == b.citation_count {
                prop_assert!(a.text.chars().count() <= b.text.chars().count());
            }
        }
    }
}
