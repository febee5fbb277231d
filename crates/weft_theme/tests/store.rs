use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use weft_theme::{default_theme, midnight_theme, ThemeError, ThemeRegistry, ThemeStore};

#[test]
fn subscriber_fires_immediately_and_once_per_select() {
    let store = ThemeStore::builtin();
    let calls = Arc::new(AtomicUsize::new(0));

    let calls_in_callback = calls.clone();
    let subscription = store.subscribe(move |_| {
        calls_in_callback.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(
        calls.load(Ordering::SeqCst),
        1,
        "subscribe invokes the callback immediately"
    );

    store.select("midnight").unwrap();
    store.select("default").unwrap();
    assert_eq!(
        calls.load(Ordering::SeqCst),
        3,
        "each select invokes the callback once"
    );

    subscription.unsubscribe();
    store.select("midnight").unwrap();
    assert_eq!(
        calls.load(Ordering::SeqCst),
        3,
        "unsubscribed callbacks stay silent"
    );
}

#[test]
fn subscriber_sees_the_newly_selected_theme() {
    let store = ThemeStore::builtin();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_in_callback = seen.clone();
    let _subscription = store.subscribe(move |theme| {
        seen_in_callback.lock().unwrap().push(theme.margin.clone());
    });

    store.select("midnight").unwrap();

    let margins = seen.lock().unwrap();
    assert_eq!(margins.len(), 2);
    assert_eq!(margins[0], default_theme().margin);
    assert_eq!(margins[1], midnight_theme().margin);
}

#[test]
fn subscribers_are_notified_in_registration_order() {
    let store = ThemeStore::builtin();
    let order = Arc::new(Mutex::new(Vec::new()));

    let order_a = order.clone();
    let _first = store.subscribe(move |_| order_a.lock().unwrap().push("first"));
    let order_b = order.clone();
    let _second = store.subscribe(move |_| order_b.lock().unwrap().push("second"));

    order.lock().unwrap().clear();
    store.select("midnight").unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn select_of_unknown_theme_fails_without_switching() {
    let store = ThemeStore::builtin();
    let before = store.active();

    match store.select("does-not-exist") {
        Err(ThemeError::UnknownTheme {
            requested,
            available,
        }) => {
            assert_eq!(requested, "does-not-exist");
            assert_eq!(available, vec!["default", "midnight"]);
        }
        other => panic!("expected UnknownTheme, got {other:?}"),
    }

    assert_eq!(
        *store.active(),
        *before,
        "a failed select must not switch themes"
    );
}

#[test]
fn failed_select_does_not_notify_subscribers() {
    let store = ThemeStore::builtin();
    let calls = Arc::new(AtomicUsize::new(0));

    let calls_in_callback = calls.clone();
    let _subscription = store.subscribe(move |_| {
        calls_in_callback.fetch_add(1, Ordering::SeqCst);
    });

    let _ = store.select("does-not-exist");
    assert_eq!(calls.load(Ordering::SeqCst), 1, "only the immediate call");
}

#[test]
fn store_clones_share_one_active_cell() {
    let store = ThemeStore::builtin();
    let clone = store.clone();

    clone.select("midnight").unwrap();
    assert_eq!(store.active().margin, midnight_theme().margin);
}

#[test]
fn store_starts_on_the_first_entry_when_default_is_absent() {
    let mut registry = ThemeRegistry::new();
    registry.register("paper", midnight_theme()).unwrap();

    let store = ThemeStore::new(registry).unwrap();
    assert_eq!(store.active().margin, midnight_theme().margin);
}

#[test]
fn an_empty_registry_cannot_back_a_store() {
    assert!(matches!(
        ThemeStore::new(ThemeRegistry::new()),
        Err(ThemeError::UnknownTheme { .. })
    ));
}
