//! Property tests for store lookups over arbitrary graphs.

use std::collections::HashSet;

use ofman_quadrant::import::validate_value;
use ofman_quadrant::{Direction, GraphStore, LinkKind, RandomSampler, TraitGraph};
use proptest::prelude::*;
use serde_json::{json, Value};

/// A random document: `n` traits with ids `t0..tn`, links between ids drawn
/// from `t0..t(n+2)` so some links dangle.
fn arb_payload() -> impl Strategy<Value = Value> {
    (1usize..12).prop_flat_map(|n| {
        let traits = prop::collection::vec(
            (prop::collection::vec("[A-Za-z]{1,8}", 1..3), any::<bool>()),
            n,
        );
        let links = prop::collection::vec((0..n + 2, 0..n + 2, any::<bool>()), 0..30);
        (traits, links).prop_map(|(traits, links)| {
            let traits: Vec<Value> = traits
                .into_iter()
                .enumerate()
                .map(|(i, (labels, positive))| {
                    json!({
                        "id": format!("t{i}"),
                        "labels": labels,
                        "polarity": if positive { "positive" } else { "negative" },
                    })
                })
                .collect();
            let links: Vec<Value> = links
                .into_iter()
                .map(|(from, to, excess)| {
                    json!({
                        "from": format!("t{from}"),
                        "to": format!("t{to}"),
                        "type": if excess { "excess" } else { "balance" },
                    })
                })
                .collect();
            json!({ "traits": traits, "links": links })
        })
    })
}

fn true_neighbors(graph: &TraitGraph, id: &str, kind: LinkKind, dir: Direction) -> HashSet<String> {
    graph
        .links()
        .iter()
        .filter(|l| l.kind == kind && l.near_end(dir).as_str() == id)
        .map(|l| l.far_end(dir).to_string())
        .filter(|far| graph.contains(far))
        .collect()
}

proptest! {
    #[test]
    fn prop_round_trip_counts(payload in arb_payload()) {
        let graph = validate_value(&payload).unwrap();
        prop_assert_eq!(graph.trait_count(), payload["traits"].as_array().unwrap().len());
        prop_assert_eq!(graph.link_count(), payload["links"].as_array().unwrap().len());
    }

    #[test]
    fn prop_get_by_id_iff_present(payload in arb_payload(), pick in 0usize..15) {
        let store = GraphStore::new();
        store.load(&payload.to_string(), ofman_quadrant::Origin::Custom).unwrap();
        let id = format!("t{pick}");
        let present = payload["traits"].as_array().unwrap().iter().any(|t| t["id"] == id.as_str());
        prop_assert_eq!(store.get_by_id(&id).is_some(), present);
    }

    #[test]
    fn prop_search_is_case_insensitive(payload in arb_payload(), query in "[A-Za-z]{0,3}") {
        let graph = validate_value(&payload).unwrap();
        let lower: Vec<_> = graph.search(&query.to_lowercase(), None).iter().map(|t| t.id.clone()).collect();
        let upper: Vec<_> = graph.search(&query.to_uppercase(), None).iter().map(|t| t.id.clone()).collect();
        prop_assert_eq!(&lower, &upper);
        if query.is_empty() {
            prop_assert!(lower.is_empty());
        }
    }

    #[test]
    fn prop_linked_is_bounded_subset(
        payload in arb_payload(),
        pick in 0usize..15,
        limit in 0usize..6,
        excess in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let store = GraphStore::with_sampler(RandomSampler::seeded(seed));
        store.import(&payload.to_string()).unwrap();
        let snapshot = store.snapshot().unwrap();
        let graph = snapshot.graph();
        let kind = if excess { LinkKind::Excess } else { LinkKind::Balance };
        let id = format!("t{pick}");

        for (dir, found) in [
            (Direction::Outgoing, store.linked_from(&id, kind, limit)),
            (Direction::Incoming, store.linked_to(&id, kind, limit)),
        ] {
            let truth = true_neighbors(graph, &id, kind, dir);
            prop_assert!(found.len() <= limit);
            prop_assert_eq!(found.len(), truth.len().min(limit));
            let distinct: HashSet<_> = found.iter().map(|t| t.id.to_string()).collect();
            prop_assert_eq!(distinct.len(), found.len());
            prop_assert!(distinct.is_subset(&truth));
        }
    }
}
