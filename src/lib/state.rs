//! Seam between the async drivers in `features` and whatever holds view state.
//! Drivers only touch state through short synchronous closures, so no borrow is
//! ever held across an `.await`.

use std::cell::RefCell;

pub(crate) trait StateCell<T> {
    /// Runs `update` against the current value. Returns `None` when the owner is
    /// gone (a disposed signal), in which case the driver stops quietly.
    fn update_with<R>(&self, update: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_with<R>(&self, update: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(update(&mut self.borrow_mut()))
    }
}

#[cfg(target_arch = "wasm32")]
impl<T: Send + Sync + 'static> StateCell<T> for leptos::prelude::RwSignal<T> {
    fn update_with<R>(&self, update: impl FnOnce(&mut T) -> R) -> Option<R> {
        use leptos::prelude::Update;
        self.try_update(update)
    }
}
