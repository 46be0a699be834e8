//! Async-Bound Views
//!
//! Binds a one-shot asynchronous data producer to a view: a placeholder
//! renders synchronously until the producer resolves, then the view
//! transitions to the data (or to an error placeholder).

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::*;

use crate::api::FetchError;
use crate::components::loading::{LoadError, Loading};

/// State of one remote fetch
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    /// Producer not resolved yet
    Loading,
    /// Producer resolved successfully
    Ready(T),
    /// Producer resolved with a failure
    Failed(FetchError),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }
}

impl<T> From<Result<T, FetchError>> for Remote<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => Remote::Ready(data),
            Err(err) => Remote::Failed(err),
        }
    }
}

/// Render `Loading` until `producer` resolves, then render the result.
///
/// The producer is consumed, so it runs at most once per mounted instance.
/// If the owning view is torn down before resolution, the late result is
/// dropped without touching any signal.
pub fn future_view<T, Fut, P, R, V>(producer: P, render: R) -> impl IntoView
where
    T: Clone + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
    P: FnOnce() -> Fut + 'static,
    R: Fn(T) -> V + 'static,
    V: IntoView,
{
    let (state, set_state) = create_signal(Remote::<T>::Loading);

    // Cancellation flag: flipped when the owner is cleaned up
    let cancelled = Rc::new(Cell::new(false));
    on_cleanup({
        let cancelled = cancelled.clone();
        move || cancelled.set(true)
    });

    spawn_local(async move {
        let result = producer().await;
        if cancelled.get() {
            return;
        }
        if let Err(err) = &result {
            web_sys::console::error_1(&format!("denViews fetch failed: {}", err).into());
        }
        set_state.set(Remote::from(result));
    });

    move || match state.get() {
        Remote::Loading => view! { <Loading /> }.into_view(),
        Remote::Failed(err) => view! { <LoadError error=err /> }.into_view(),
        Remote::Ready(data) => render(data).into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_starts_loading() {
        let state = Remote::<u32>::Loading;
        assert!(state.is_loading());
    }

    #[test]
    fn test_remote_from_ok() {
        let state = Remote::from(Ok(5u32));
        assert_eq!(state, Remote::Ready(5));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_remote_from_err() {
        let state = Remote::<u32>::from(Err(FetchError::Status(404)));
        assert_eq!(state, Remote::Failed(FetchError::Status(404)));
    }
}
