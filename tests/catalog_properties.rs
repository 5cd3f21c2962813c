// Exhaustive window checks over the library API, no HTTP involved.

use mock_server::{Catalog, PageRequest, SeededRandom};
use serde_json::json;
use std::sync::Arc;

const N: usize = 102;

fn catalog() -> Catalog {
    Catalog::new("http://img.test/p.jpg", Arc::new(SeededRandom::new(2024)))
}

#[test]
fn test_every_window_respects_length_and_has_more() {
    let catalog = catalog();
    for offset in 0..N {
        for limit in [0, 1, 2, 19, 20, 21, 50, 101, 102, 103, 1000] {
            let page = catalog.page(&PageRequest::new(offset, limit));
            let expected_len = limit.min(N - offset);

            assert_eq!(page.products.len(), expected_len, "{} {}", offset, limit);
            assert_eq!(page.total, N);
            assert_eq!(page.has_more, offset + expected_len < N, "{} {}", offset, limit);

            for (k, product) in page.products.iter().enumerate() {
                assert_eq!(product.name, format!("Product {}", offset + k + 1));
            }
        }
    }
}

#[test]
fn test_every_offset_past_end_is_empty() {
    let catalog = catalog();
    for offset in [N, N + 1, 500, usize::MAX / 2, usize::MAX] {
        for limit in [0, 20, usize::MAX] {
            let page = catalog.page(&PageRequest::new(offset, limit));
            assert!(page.products.is_empty());
            assert_eq!(page.total, N);
            assert!(!page.has_more);
        }
    }
}

#[test]
fn test_raw_inputs_never_fail() {
    let catalog = catalog();
    let inputs = [
        json!(null),
        json!(true),
        json!(-1),
        json!(-1.5),
        json!(0),
        json!(7),
        json!(1e18),
        json!(-1e18),
        json!(u64::MAX),
        json!(i64::MIN),
        json!("12"),
        json!(" -3 "),
        json!("4.2"),
        json!("1e2"),
        json!("twelve"),
        json!([]),
        json!({}),
    ];

    for offset in &inputs {
        for limit in &inputs {
            let request = PageRequest::from_raw(Some(offset), Some(limit));
            let page = catalog.page(&request);
            assert_eq!(page.total, N);
            let expected_len = if request.offset >= N {
                0
            } else {
                request.limit.min(N - request.offset)
            };
            assert_eq!(page.products.len(), expected_len, "{} {}", offset, limit);
            assert_eq!(page.has_more, request.offset.saturating_add(expected_len) < N);
        }
    }
}

#[test]
fn test_seeded_catalogs_reproduce() {
    let a = catalog().page(&PageRequest::new(0, 10));
    let b = catalog().page(&PageRequest::new(0, 10));
    assert_eq!(a, b);
}
