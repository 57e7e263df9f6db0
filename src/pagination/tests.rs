#[cfg(test)]
mod tests {
    use crate::pagination::*;
    use crate::config::PaginationConfig;

    const E: PageItem = PageItem::Ellipsis;

    fn pages(ns: &[u32]) -> Vec<PageItem> {
        ns.iter().copied().map(PageItem::Page).collect()
    }

    #[test]
    fn window_small_totals_list_every_page() {
        assert_eq!(page_window(1, 0), Vec::<PageItem>::new());
        assert_eq!(page_window(1, 1), pages(&[1]));
        assert_eq!(page_window(3, 5), pages(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn window_known_shapes() {
        use crate::pagination::PageItem::Page as P;
        assert_eq!(page_window(1, 7), vec![P(1), P(2), P(3), P(4), P(5), E, P(7)]);
        assert_eq!(page_window(7, 7), vec![P(1), E, P(3), P(4), P(5), P(6), P(7)]);
        assert_eq!(page_window(5, 10), vec![P(1), E, P(4), P(5), P(6), E, P(10)]);
        // boundaries between the three shapes
        assert_eq!(page_window(3, 10), vec![P(1), P(2), P(3), P(4), P(5), E, P(10)]);
        assert_eq!(page_window(4, 10), vec![P(1), E, P(3), P(4), P(5), E, P(10)]);
        assert_eq!(page_window(7, 10), vec![P(1), E, P(6), P(7), P(8), E, P(10)]);
        assert_eq!(page_window(8, 10), vec![P(1), E, P(6), P(7), P(8), P(9), P(10)]);
    }

    #[test]
    fn window_properties_hold_for_small_ranges() {
        for total in 0..=12u32 {
            for current in 1..=total.max(1) {
                let window = page_window(current, total);
                let numbers: Vec<u32> = window.iter().filter_map(PageItem::page).collect();

                assert!(
                    numbers.windows(2).all(|w| w[0] < w[1]),
                    "not increasing for ({}, {}): {:?}",
                    current,
                    total,
                    window
                );
                assert!(window.len() <= WINDOW_SIZE as usize + 2);
                assert!(window.iter().filter(|i| i.is_ellipsis()).count() <= 2);
                assert!(!window.windows(2).any(|w| w[0].is_ellipsis() && w[1].is_ellipsis()));

                if total == 0 {
                    assert!(window.is_empty());
                    continue;
                }
                assert!(numbers.contains(&current), "({}, {}) hides the current page", current, total);
                assert!(numbers.iter().all(|n| (1..=total).contains(n)));

                if total > WINDOW_SIZE {
                    assert_eq!(window.first(), Some(&PageItem::Page(1)));
                    assert_eq!(window.last(), Some(&PageItem::Page(total)));
                } else {
                    assert_eq!(numbers, (1..=total).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn window_is_deterministic() {
        assert_eq!(page_window(6, 12), page_window(6, 12));
    }

    #[test]
    fn page_item_json_shape() {
        let json = serde_json::to_string(&page_window(5, 10)).unwrap();
        assert_eq!(json, r#"[1,"...",4,5,6,"...",10]"#);

        let back: Vec<PageItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page_window(5, 10));
        assert!(serde_json::from_str::<PageItem>("0").is_err());
        assert!(serde_json::from_str::<PageItem>(r#""…""#).is_err());
    }

    #[test]
    fn display_range_bounds() {
        assert_eq!(display_range(2, 10, 25), Some(DisplayRange { start_item: 11, end_item: 20 }));
        assert_eq!(display_range(3, 10, 25), Some(DisplayRange { start_item: 21, end_item: 25 }));
        assert_eq!(display_range(1, 10, 3), Some(DisplayRange { start_item: 1, end_item: 3 }));
        assert_eq!(display_range(1, 10, 0), None);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(30, 0), 0);
    }

    #[test]
    fn state_clamps_current_page() {
        let state = PaginationState::new(9, 25, 10);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.total_pages, 3);

        let empty = PaginationState::new(4, 0, 10);
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.window().is_empty());
        assert_eq!(empty.range(), None);

        let zero = PaginationState::new(0, 5, 0);
        assert_eq!(zero.current_page, 1);
        assert_eq!(zero.items_per_page, 1);
    }

    #[test]
    fn navigation_guards() {
        let first = PaginationState::new(1, 70, 10);
        assert_eq!(first.resolve(PageAction::Previous), None);
        assert_eq!(first.resolve(PageAction::Next), Some(PageChange::Page(2)));

        let last = PaginationState::new(7, 70, 10);
        assert_eq!(last.resolve(PageAction::Next), None);
        assert_eq!(last.resolve(PageAction::Previous), Some(PageChange::Page(6)));

        let empty = PaginationState::new(1, 0, 10);
        assert_eq!(empty.resolve(PageAction::Next), None);
        assert_eq!(empty.resolve(PageAction::Previous), None);

        let mid = PaginationState::new(4, 70, 10);
        assert_eq!(mid.resolve(PageAction::Select(PageItem::Ellipsis)), None);
        assert_eq!(mid.resolve(PageAction::Select(PageItem::Page(4))), None);
        assert_eq!(mid.resolve(PageAction::Select(PageItem::Page(6))), Some(PageChange::Page(6)));
        assert_eq!(mid.resolve(PageAction::Select(PageItem::Page(99))), Some(PageChange::Page(7)));
        assert_eq!(mid.resolve(PageAction::ItemsPerPage(10)), None);
        assert_eq!(mid.resolve(PageAction::ItemsPerPage(0)), None);
        assert_eq!(mid.resolve(PageAction::ItemsPerPage(25)), Some(PageChange::ItemsPerPage(25)));
    }

    #[derive(Default)]
    struct Recorder {
        pages: Vec<u32>,
        sizes: Vec<u32>,
    }

    impl PageChangeListener for Recorder {
        fn on_page_change(&mut self, page: u32) {
            self.pages.push(page);
        }

        fn on_items_per_page_change(&mut self, items_per_page: u32) {
            self.sizes.push(items_per_page);
        }
    }

    struct PageOnly(Vec<u32>);

    impl PageChangeListener for PageOnly {
        fn on_page_change(&mut self, page: u32) {
            self.0.push(page);
        }
    }

    #[test]
    fn dispatch_calls_listener_once_per_action() {
        let state = PaginationState::new(1, 70, 10);
        let mut rec = Recorder::default();

        assert!(!state.dispatch(PageAction::Previous, &mut rec));
        assert!(state.dispatch(PageAction::Next, &mut rec));
        assert!(!state.dispatch(PageAction::Select(PageItem::Ellipsis), &mut rec));
        assert!(state.dispatch(PageAction::ItemsPerPage(20), &mut rec));

        assert_eq!(rec.pages, vec![2]);
        assert_eq!(rec.sizes, vec![20]);

        // listeners without a page-size handler still see page changes
        let mut only = PageOnly(Vec::new());
        assert!(state.dispatch(PageAction::ItemsPerPage(20), &mut only));
        assert!(state.dispatch(PageAction::Select(PageItem::Page(3)), &mut only));
        assert_eq!(only.0, vec![3]);
    }

    #[test]
    fn apply_updates_state() {
        let mut state = PaginationState::new(5, 70, 10);
        state.apply(PageChange::Page(6));
        assert_eq!(state.current_page, 6);

        state.apply(PageChange::ItemsPerPage(25));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 3);

        state.apply(PageChange::Page(3));
        state.set_total_items(30);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn params_clamp_query_values() {
        let cfg = PaginationConfig { default_per_page: 20, max_per_page: 100 };
        let p = PageParams::from_query(PageQuery::default(), &cfg);
        assert_eq!(p, PageParams { page: 1, per_page: 20 });

        let p = PageParams::from_query(PageQuery { page: Some(0), per_page: Some(500) }, &cfg);
        assert_eq!(p, PageParams { page: 1, per_page: 100 });

        let p = PageParams::from_query(PageQuery { page: Some(3), per_page: Some(0) }, &cfg);
        assert_eq!(p, PageParams { page: 3, per_page: 1 });
    }

    #[test]
    fn list_response_slices_and_clamps() {
        let all: Vec<u32> = (1..=25).collect();
        let resp = ListResponse::paginate(all.clone(), PageParams { page: 2, per_page: 10 });
        assert_eq!(resp.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(resp.total, 25);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_more);
        assert_eq!(resp.range, Some(DisplayRange { start_item: 11, end_item: 20 }));

        let past_end = ListResponse::paginate(all, PageParams { page: 9, per_page: 10 });
        assert_eq!(past_end.page, 3);
        assert_eq!(past_end.items, (21..=25).collect::<Vec<_>>());
        assert!(!past_end.has_more);

        let empty = ListResponse::paginate(Vec::<u32>::new(), PageParams { page: 1, per_page: 10 });
        assert!(empty.items.is_empty());
        assert!(empty.pages.is_empty());
        assert_eq!(empty.range, None);

        let mapped = resp.map(|n| n * 2);
        assert_eq!(mapped.items.first(), Some(&22));
    }
}
