use pagelinks_core::{LinkRole, PageLinkBuilder, RequestUrl};
use proptest::prelude::*;

fn offset_of(href: &str) -> i64 {
    RequestUrl::parse(href)
        .first_param("offset")
        .map(|p| p.integer())
        .expect("link carries an offset")
}

proptest! {
    #[test]
    fn page_count_is_ceiling_division(count in 0u64..100_000, limit in 1i64..500) {
        let href = format!("/api/vms?offset=0&limit={limit}");
        let builder = PageLinkBuilder::new(&href, count, 1000).unwrap();

        let expected = (count as f64 / limit as f64).ceil() as u64;
        prop_assert_eq!(builder.page_count(), expected);
        if count == 0 {
            prop_assert_eq!(builder.page_count(), 0);
        }
    }

    #[test]
    fn link_offsets_follow_the_cursor(
        count in 0u64..10_000,
        limit in 1i64..200,
        offset in 0i64..10_000,
    ) {
        let href = format!("/api/vms?sort_by=name&offset={offset}&limit={limit}");
        let builder = PageLinkBuilder::new(&href, count, 1000).unwrap();
        let links = builder.links();
        let c = count as i64;

        prop_assert_eq!(offset_of(&links.current), offset);
        prop_assert_eq!(offset_of(&links.first), 0);
        prop_assert_eq!(offset_of(&links.last), c - c % limit);

        match links.get(LinkRole::Next) {
            Some(next) => {
                prop_assert!(offset + limit < c);
                prop_assert_eq!(offset_of(next), offset + limit);
            }
            None => prop_assert!(offset + limit >= c),
        }

        match links.get(LinkRole::Previous) {
            Some(previous) => {
                prop_assert!(offset > 0);
                if offset - limit < 0 {
                    prop_assert_eq!(previous, links.first.as_str());
                } else {
                    prop_assert_eq!(offset_of(previous), offset - limit);
                }
            }
            None => prop_assert_eq!(offset, 0),
        }

        for (_, link) in links.iter() {
            prop_assert!(link.starts_with("/api/vms?sort_by=name&offset="));
            let limit_suffix = format!("&limit={}", limit);
            prop_assert!(link.ends_with(&limit_suffix));
        }
    }

    #[test]
    fn self_link_is_idempotent(
        count in 0u64..1_000,
        limit in 1i64..50,
        offset in proptest::option::of(0i64..1_000),
    ) {
        let href = match offset {
            Some(offset) => format!("/api/vms?limit={limit}&offset={offset}"),
            None => format!("/api/vms?limit={limit}"),
        };
        let builder = PageLinkBuilder::new(&href, count, 1000).unwrap();
        let again = PageLinkBuilder::new(builder.self_href(), count, 1000).unwrap();

        prop_assert_eq!(again.self_href(), builder.self_href());
    }
}
