//! Page controller lifecycle: loads apply while mounted and are discarded
//! once the controller has been torn down.
//!
//! Run with: `cargo test --test controller_test`
use std::time::Duration;

use portfolio_site::controller::{Controller, LoadState};

#[test]
fn test_mounted_controller_starts_loading() {
    let controller = Controller::<u32>::mount();
    assert!(controller.state().is_loading());
    assert_eq!(*controller.state(), LoadState::Loading);
}

#[test]
fn test_resolve_applies_while_mounted() {
    let controller = Controller::<u32>::mount();
    let resolver = controller.resolver();

    assert!(resolver.is_current());
    assert!(resolver.resolve(7));
    assert!(!controller.state().is_loading());
    assert_eq!(controller.state().ready(), Some(&7));
}

#[test]
fn test_resolve_after_unmount_is_discarded() {
    let controller = Controller::<u32>::mount();
    let resolver = controller.resolver();
    controller.unmount();

    assert!(!resolver.is_current());
    assert!(!resolver.resolve(7));
    assert!(controller.state().is_loading());
}

#[test]
fn test_resolve_after_drop_is_discarded() {
    let resolver = {
        let controller = Controller::<String>::mount();
        controller.resolver()
    };

    assert!(!resolver.is_current());
    assert!(!resolver.resolve("late".to_string()));
}

#[test]
fn test_only_the_latest_mount_applies() {
    let controller = Controller::<u32>::mount();
    let stale = controller.resolver();
    controller.unmount();
    let fresh = controller.resolver();

    assert!(!stale.resolve(1));
    assert!(fresh.resolve(2));
    assert_eq!(controller.state().ready(), Some(&2));
}

#[test]
fn test_failed_load_leaves_no_data() {
    let controller = Controller::<u32>::mount();
    assert!(controller.resolver().fail());

    assert!(!controller.state().is_loading());
    assert_eq!(*controller.state(), LoadState::Failed);
    assert_eq!(controller.state().ready(), None);
}

#[test]
fn test_failure_after_unmount_is_discarded() {
    let controller = Controller::<u32>::mount();
    let resolver = controller.resolver();
    controller.unmount();

    assert!(!resolver.fail());
    assert!(controller.state().is_loading());
}

#[tokio::test]
async fn test_loaded_waits_for_the_result() {
    let controller = Controller::<String>::mount();
    let resolver = controller.resolver();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        resolver.resolve("done".to_string());
    });

    let state = tokio::time::timeout(Duration::from_secs(5), controller.loaded())
        .await
        .expect("load should settle");
    assert_eq!(state.ready().map(String::as_str), Some("done"));
}
