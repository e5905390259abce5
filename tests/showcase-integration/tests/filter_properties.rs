use std::collections::BTreeSet;

use estate_common::catalog::builtin_listings;
use estate_common::currency::format_inr;
use estate_common::filter::{apply_filters, FilterSpec};
use estate_common::listing::{Listing, ListingId, ListingStatus};
use proptest::prelude::*;

const FEATURES: [&str; 5] = [
    "Swimming Pool",
    "Underground Parking",
    "Retail Spaces",
    "Hot Springs",
    "Garden",
];
const LOCATION_PARTS: [&str; 6] = ["mumbai", "DELHI", "india", "pune", "nowhere", "a"];

fn arb_status() -> impl Strategy<Value = Option<ListingStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(ListingStatus::Completed)),
        Just(Some(ListingStatus::InProgress)),
        Just(Some(ListingStatus::Planned)),
        Just(Some(ListingStatus::Listed)),
    ]
}

fn arb_listings() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(
        (0..6usize, 100_000u64..2_000_000, arb_status(), prop::sample::subsequence(FEATURES.to_vec(), 0..3)),
        0..20,
    )
    .prop_map(|rows| {
        let catalog = builtin_listings();
        rows.into_iter()
            .enumerate()
            .map(|(i, (base, price, status, extra))| {
                let mut l = catalog[base].clone();
                l.id = ListingId(i as u64 + 1);
                l.price = format_inr(price);
                l.status = status;
                l.features.extend(extra.into_iter().map(str::to_string));
                l
            })
            .collect()
    })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        arb_status(),
        prop::option::of(prop::sample::select(LOCATION_PARTS.to_vec())),
        prop::option::of(100_000u64..2_000_000),
        prop::option::of(100_000u64..2_000_000),
        prop::sample::subsequence(FEATURES.to_vec(), 0..2),
    )
        .prop_map(|(status, location, min_price, max_price, features)| FilterSpec {
            status,
            location: location.map(str::to_string),
            min_price,
            max_price,
            features: features.into_iter().map(str::to_string).collect::<BTreeSet<_>>(),
            ..FilterSpec::default()
        })
}

fn is_subsequence(needle: &[Listing], haystack: &[Listing]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h.id == n.id))
}

proptest! {
    /// Property: the result is an order-preserving subsequence of the input
    #[test]
    fn prop_result_keeps_input_order(listings in arb_listings(), spec in arb_spec()) {
        let hits = apply_filters(&listings, &spec);
        prop_assert!(hits.len() <= listings.len());
        prop_assert!(is_subsequence(&hits, &listings));
    }

    /// Property: a listing is kept exactly when it satisfies the spec
    #[test]
    fn prop_partition_by_matches(listings in arb_listings(), spec in arb_spec()) {
        let hits = apply_filters(&listings, &spec);
        let kept: BTreeSet<ListingId> = hits.iter().map(|l| l.id).collect();
        for l in &listings {
            prop_assert_eq!(spec.matches(l), kept.contains(&l.id));
        }
    }

    /// Property: the empty spec returns the input unchanged
    #[test]
    fn prop_empty_spec_is_identity(listings in arb_listings()) {
        prop_assert_eq!(apply_filters(&listings, &FilterSpec::new()), listings);
    }

    /// Property: filtering twice equals filtering once
    #[test]
    fn prop_idempotent(listings in arb_listings(), spec in arb_spec()) {
        let once = apply_filters(&listings, &spec);
        prop_assert_eq!(apply_filters(&once, &spec), once);
    }

    /// Property: predicates compose with AND, so splitting a spec and
    /// filtering in two passes gives the same answer
    #[test]
    fn prop_conjunction_splits(listings in arb_listings(), spec in arb_spec()) {
        let status_only = FilterSpec { status: spec.status.clone(), ..FilterSpec::default() };
        let rest = FilterSpec { status: None, ..spec.clone() };
        let two_pass = apply_filters(&apply_filters(&listings, &status_only), &rest);
        prop_assert_eq!(two_pass, apply_filters(&listings, &spec));
    }

    /// Property: every kept listing's price lies within the bounds
    #[test]
    fn prop_prices_within_bounds(listings in arb_listings(), spec in arb_spec()) {
        for l in apply_filters(&listings, &spec) {
            let price = l.numeric_price();
            prop_assert!(spec.min_price.map_or(true, |min| price >= min));
            prop_assert!(spec.max_price.map_or(true, |max| price <= max));
        }
    }
}
