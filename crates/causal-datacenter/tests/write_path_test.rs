//! Datacenter write path: counters, reads, atomicity, and observer events.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use causal_clock::VersionVector;
use causal_datacenter::{Datacenter, NoopObserver};
use rayon::prelude::*;
use test_fixtures::{load_scenarios, RecordingObserver};

fn quiet_dc(name: &str, latency_ms: u64) -> Datacenter {
    Datacenter::new(name, Duration::from_millis(latency_ms))
        .unwrap()
        .with_observer(Arc::new(NoopObserver))
}

// =============================================================================
// Golden scenarios
// =============================================================================

#[test]
fn golden_scenarios_hold() {
    for scenario in load_scenarios() {
        let dc = Datacenter::from_config(&scenario.datacenter)
            .unwrap()
            .with_observer(Arc::new(NoopObserver));

        for write in &scenario.writes {
            dc.apply_write(&write.key, &write.value).unwrap();
        }

        assert_eq!(
            dc.version_vector().unwrap(),
            scenario.expected_version,
            "scenario {}",
            scenario.name
        );
        for (key, value) in &scenario.expected_reads {
            assert_eq!(
                dc.read(key).unwrap().as_deref(),
                Some(value.as_str()),
                "scenario {} key {}",
                scenario.name,
                key
            );
        }
        for key in &scenario.absent_keys {
            assert_eq!(dc.read(key).unwrap(), None, "scenario {}", scenario.name);
        }
    }
}

#[test]
fn dc1_key20_scenario_renders_vector() {
    let dc = quiet_dc("DC1", 5);
    dc.apply_write("key20", "sadiya").unwrap();
    assert_eq!(dc.read("key20").unwrap().as_deref(), Some("sadiya"));

    let version = dc.version_vector().unwrap();
    assert_eq!(version.to_string(), "{DC1: 1}");
    assert_eq!(serde_json::to_string(&version).unwrap(), r#"{"DC1":1}"#);
    assert_eq!(dc.latency(), Duration::from_millis(5));
}

// =============================================================================
// Counter invariants
// =============================================================================

#[test]
fn n_sequential_writes_advance_own_entry_by_n() {
    let dc = quiet_dc("DC1", 5);
    let mut previous = dc.version_vector().unwrap();

    for i in 0..50u64 {
        let receipt = dc.apply_write(&format!("k{}", i % 7), "v").unwrap();
        assert_eq!(receipt.version.get("DC1"), i + 1);
        assert!(previous.happens_before(&receipt.version));
        previous = receipt.version;
    }

    let version = dc.version_vector().unwrap();
    assert_eq!(version.get("DC1"), 50);
    assert_eq!(version.replicas(), vec!["DC1"]);
    assert_eq!(dc.write_count().unwrap(), 50);
}

#[test]
fn reads_do_not_touch_the_vector() {
    let dc = quiet_dc("DC1", 5);
    dc.apply_write("k", "v").unwrap();
    let before = dc.version_vector().unwrap();
    for _ in 0..10 {
        dc.read("k").unwrap();
        dc.read("missing").unwrap();
    }
    assert_eq!(dc.version_vector().unwrap(), before);
}

#[test]
fn overwrite_returns_latest_value() {
    let dc = quiet_dc("DC1", 5);
    dc.apply_write("k", "v1").unwrap();
    dc.apply_write("k", "v2").unwrap();
    assert_eq!(dc.read("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(dc.read_versioned("k").unwrap().unwrap().version.get("DC1"), 2);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_writes_get_distinct_gap_free_counters() {
    let dc = quiet_dc("DC1", 5);
    let threads = 8u64;
    let per_thread = 200u64;

    let counters: Vec<u64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let dc = &dc;
                s.spawn(move || {
                    (0..per_thread)
                        .map(|i| {
                            dc.apply_write(&format!("t{t}-k{i}"), &format!("v{t}-{i}"))
                                .unwrap()
                                .version
                                .get("DC1")
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let total = threads * per_thread;
    let distinct: HashSet<u64> = counters.iter().copied().collect();
    assert_eq!(distinct.len() as u64, total, "duplicate counter handed out");
    assert_eq!(distinct, (1..=total).collect::<HashSet<u64>>(), "gap in counters");

    assert_eq!(dc.write_count().unwrap(), total);
    for t in 0..threads {
        for i in 0..per_thread {
            let expected = format!("v{t}-{i}");
            assert_eq!(
                dc.read(&format!("t{t}-k{i}")).unwrap().as_deref(),
                Some(expected.as_str())
            );
        }
    }
}

#[test]
fn parallel_clients_across_datacenters_stay_independent() {
    let dcs: Vec<Datacenter> = [("DC1", 5), ("DC2", 10), ("DC3", 15)]
        .into_iter()
        .map(|(name, latency)| quiet_dc(name, latency))
        .collect();

    (0..300usize).into_par_iter().for_each(|i| {
        let dc = &dcs[i % dcs.len()];
        dc.apply_write(&format!("post{i}"), &format!("data{i}")).unwrap();
    });

    for dc in &dcs {
        let version = dc.version_vector().unwrap();
        assert_eq!(version.get(dc.name()), 100);
        assert_eq!(version.len(), 1, "{} touched a foreign entry", dc.name());
    }
}

#[test]
fn snapshots_are_never_torn() {
    let dc = quiet_dc("DC1", 5);

    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                dc.apply_write(&format!("k{}", i % 20), &i.to_string()).unwrap();
            }
        });
        s.spawn(|| {
            for _ in 0..200 {
                let snapshot = dc.snapshot().unwrap();
                // Every stored version was produced by a write the vector already counts.
                for stored in snapshot.entries.values() {
                    assert!(stored.version.is_causally_before(&snapshot.version));
                }
                // The newest stored version is the vector itself, once anything is written.
                if let Some(newest) = snapshot
                    .entries
                    .values()
                    .map(|v| v.version.get("DC1"))
                    .max()
                {
                    assert_eq!(newest, snapshot.version.get("DC1"));
                }
            }
        });
    });
}

// =============================================================================
// Observer
// =============================================================================

#[test]
fn observer_sees_each_write_after_it_applies() {
    let recorder = Arc::new(RecordingObserver::new());
    let dc = Datacenter::new("DC1", Duration::from_millis(5))
        .unwrap()
        .with_observer(recorder.clone());

    dc.apply_write("a", "1").unwrap();
    dc.apply_write("b", "2").unwrap();
    dc.read("a").unwrap();
    dc.read("zzz").unwrap();
    let _ = dc.apply_write("", "rejected");

    let writes = recorder.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].key, "a");
    assert_eq!(writes[0].datacenter, "DC1");
    let expected: VersionVector = [("DC1", 2)].into_iter().collect();
    assert_eq!(writes[1].version, expected);

    assert_eq!(
        recorder.reads(),
        vec![("a".to_string(), true), ("zzz".to_string(), false)]
    );
}
