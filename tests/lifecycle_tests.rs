// Host-side tests for mount/unmount pairing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::Mount;
use std::cell::Cell;
use std::rc::Rc;

// Stands in for a listener or scroll-smoother handle.
struct Handle {
    released: Rc<Cell<usize>>,
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

#[test]
fn acquire_runs_setup_once_per_mount() {
    let acquired = Cell::new(0);
    let released = Rc::new(Cell::new(0));
    let mut mount: Mount<Handle> = Mount::new();

    for _ in 0..3 {
        let r = released.clone();
        let _ = mount.acquire(|| {
            acquired.set(acquired.get() + 1);
            Ok::<_, ()>(Handle { released: r })
        });
    }
    assert_eq!(acquired.get(), 1);
    assert!(mount.is_mounted());
    assert_eq!(released.get(), 0);
}

#[test]
fn acquire_reports_whether_it_mounted() {
    let released = Rc::new(Cell::new(0));
    let mut mount: Mount<Handle> = Mount::new();
    let r = released.clone();
    assert_eq!(mount.acquire(|| Ok::<_, ()>(Handle { released: r })), Ok(true));
    let r = released.clone();
    assert_eq!(mount.acquire(|| Ok::<_, ()>(Handle { released: r })), Ok(false));
    // the rejected second bundle was never built, so nothing was released
    assert_eq!(released.get(), 0);
}

#[test]
fn release_tears_down_and_allows_remount() {
    let released = Rc::new(Cell::new(0));
    let mut mount: Mount<Handle> = Mount::new();
    let r = released.clone();
    mount.acquire(|| Ok::<_, ()>(Handle { released: r })).unwrap();

    assert!(mount.release());
    assert_eq!(released.get(), 1);
    assert!(!mount.is_mounted());
    assert!(!mount.release());
    assert_eq!(released.get(), 1);

    let r = released.clone();
    assert_eq!(mount.acquire(|| Ok::<_, ()>(Handle { released: r })), Ok(true));
}

#[test]
fn failed_setup_releases_partial_resources() {
    let released = Rc::new(Cell::new(0));
    let mut mount: Mount<(Handle, Handle)> = Mount::new();
    let r = released.clone();
    let result: Result<bool, &str> = mount.acquire(|| {
        let first = Handle { released: r.clone() };
        let second_ok: Result<Handle, &str> = Err("missing #bg-music");
        let second = second_ok?;
        Ok((first, second))
    });
    assert_eq!(result.err(), Some("missing #bg-music"));
    assert_eq!(released.get(), 1);
    assert!(!mount.is_mounted());
}

#[test]
fn dropping_the_mount_releases() {
    let released = Rc::new(Cell::new(0));
    {
        let mut mount: Mount<Handle> = Mount::new();
        let r = released.clone();
        mount.acquire(|| Ok::<_, ()>(Handle { released: r })).unwrap();
    }
    assert_eq!(released.get(), 1);
}
