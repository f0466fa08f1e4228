//! Detached task spawning.
//!
//! DESIGN
//! ======
//! Fire-and-forget work (avatar refresh after `set_auth`) goes through
//! [`Spawner`] so the browser build can hand it to the Leptos executor while
//! tests drive it with a `futures` `LocalPool`.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

/// Runs a future to completion in the background. Its outcome is only
/// observable through its own side effects.
pub trait Spawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>);
}

impl Spawner for LocalSpawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(err) = self.spawn_local(task) {
            log::warn!("dropping detached task: {err}");
        }
    }
}

/// Spawner backed by the browser event loop.
///
/// Outside the browser (no `csr` feature) tasks are dropped unpolled.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(task);
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(task);
            log::debug!("detached task dropped outside the browser");
        }
    }
}
