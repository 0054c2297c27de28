#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use prometheus::{Encoder, TextEncoder};

use svchealth_core::state::{ServiceState, ServiceStatus};
use svchealth_server::{HealthRegistry, Registry};

fn exposition(registry: &Registry) -> String {
    let mut buf = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn ensure_is_idempotent_and_ordered() {
    let reg = Registry::new();

    assert!(reg.ensure_service("redis", "namespace_0").unwrap());
    assert_eq!(reg.len(), 1);

    assert!(!reg.ensure_service("redis", "namespace_0").unwrap());
    assert_eq!(reg.len(), 1);

    assert!(reg.ensure_service("redis", "namespace_1").unwrap());
    assert_eq!(
        reg.snapshot(),
        vec![
            ServiceStatus::new("redis", "namespace_0", ServiceState::Undefined),
            ServiceStatus::new("redis", "namespace_1", ServiceState::Undefined),
        ]
    );
}

#[test]
fn order_survives_state_changes() {
    let reg = Registry::new();
    reg.ensure_service("db", "a").unwrap();
    reg.ensure_service("cache", "a").unwrap();
    reg.ensure_service("queue", "a").unwrap();

    reg.service_up("queue", "a");
    reg.service_down("db", "a");
    reg.ensure_service("db", "a").unwrap();

    let names: Vec<String> = reg.snapshot().into_iter().map(|s| s.name).collect();
    assert_eq!(names, ["db", "cache", "queue"]);
}

#[test]
fn up_down_transitions_update_gauges() {
    let reg = Registry::new();
    reg.ensure_service("redis", "namespace_0").unwrap();

    let text = exposition(&reg);
    assert!(text.contains("# HELP namespace_0_redis redis up status"), "{text}");
    assert!(text.contains("# TYPE namespace_0_redis gauge"), "{text}");
    assert!(text.contains("namespace_0_redis 0"), "{text}");

    reg.service_up("redis", "namespace_0");
    assert_eq!(reg.snapshot()[0].state, ServiceState::Up);
    assert!(exposition(&reg).contains("namespace_0_redis 1"));
    assert!(reg.is_healthy());

    reg.service_down("redis", "namespace_0");
    assert_eq!(reg.snapshot()[0].state, ServiceState::Down);
    assert!(exposition(&reg).contains("namespace_0_redis 0"));
    assert!(!reg.is_healthy());
}

#[test]
fn unknown_identity_is_ignored() {
    let reg = Registry::new();
    reg.ensure_service("redis", "ns").unwrap();
    let before = reg.snapshot();

    reg.service_up("x", "y");
    reg.service_down("redis", "other");
    reg.service_up("other", "ns");

    assert_eq!(reg.snapshot(), before);
    assert_eq!(reg.len(), 1);
}

#[test]
fn state_change_never_creates_records() {
    let reg = Registry::new();
    reg.service_up("redis", "ns");
    assert!(reg.is_empty());
    assert!(reg.is_healthy());
}

#[test]
fn clear_unregisters_gauges_and_allows_reregistration() {
    let reg = Registry::new();
    reg.ensure_service("redis", "ns").unwrap();
    reg.ensure_service("pg", "ns").unwrap();
    reg.service_up("redis", "ns");

    reg.clear_items();
    assert!(reg.is_empty());
    assert!(reg.snapshot().is_empty());
    assert!(!exposition(&reg).contains("ns_redis"));

    assert!(reg.ensure_service("redis", "ns").unwrap());
    assert_eq!(
        reg.snapshot(),
        vec![ServiceStatus::new("redis", "ns", ServiceState::Undefined)]
    );
    let text = exposition(&reg);
    assert!(text.contains("ns_redis 0"), "{text}");
    assert!(!text.contains("ns_pg"), "{text}");
}

#[test]
fn invalid_metric_name_is_rejected_without_record() {
    let reg = Registry::new();
    let err = reg.ensure_service("redis.cache", "ns").expect_err("dot is not a metric char");
    assert_eq!(err.code().as_str(), "METRIC");
    assert!(reg.is_empty());
}

#[test]
fn fully_qualified_collision_is_rejected() {
    let reg = Registry::new();
    reg.ensure_service("b_c", "a").unwrap();
    // Distinct identity, same exported name `a_b_c`.
    let err = reg.ensure_service("c", "a_b").expect_err("collision");
    assert_eq!(err.code().as_str(), "METRIC");
    assert_eq!(reg.len(), 1);
}

#[test]
fn empty_namespace_exports_bare_name() {
    let reg = Registry::new();
    reg.ensure_service("redis", "").unwrap();
    reg.service_up("redis", "");
    assert!(exposition(&reg).contains("\nredis 1"));
}

#[test]
fn separate_registries_do_not_collide() {
    let a = Registry::new();
    let b = Registry::new();
    a.ensure_service("redis", "ns").unwrap();
    b.ensure_service("redis", "ns").unwrap();
    a.service_up("redis", "ns");

    assert_eq!(a.snapshot()[0].state, ServiceState::Up);
    assert_eq!(b.snapshot()[0].state, ServiceState::Undefined);
}
