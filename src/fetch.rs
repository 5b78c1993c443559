//! The fetch-and-render lifecycle shared by every section that loads remote
//! data: one request per mount, no retry, no polling.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::ContentError;

/// Lifecycle of a single remote read. `Idle` lasts only until the fetch task
/// is scheduled and renders the same as `Loading`. `Ready` and `Failed` are
/// terminal within a mount.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ContentError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn error(&self) -> Option<&ContentError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Which of the mutually exclusive panels a collection fetch shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Content,
    Empty,
    Error,
}

impl<T> FetchState<Vec<T>> {
    pub fn panel(&self) -> Panel {
        match self {
            FetchState::Idle | FetchState::Loading => Panel::Loading,
            FetchState::Ready(rows) if rows.is_empty() => Panel::Empty,
            FetchState::Ready(_) => Panel::Content,
            FetchState::Failed(_) => Panel::Error,
        }
    }
}

/// Issue exactly one fetch for the lifetime of the calling component and
/// expose its state. The result is written with `try_set`, so a response
/// landing after the owner was disposed is discarded instead of touching a
/// dead signal.
pub fn use_fetch<T>(
    fut: impl Future<Output = Result<T, ContentError>> + 'static,
) -> ReadSignal<FetchState<T>>
where
    T: Send + Sync + 'static,
{
    let (state, set_state) = signal(FetchState::Idle);
    spawn_local(async move {
        let _ = set_state.try_set(FetchState::Loading);
        let next = match fut.await {
            Ok(data) => FetchState::Ready(data),
            Err(err) => {
                log::error!("fetch failed: {err}");
                FetchState::Failed(err)
            }
        };
        if set_state.try_set(next).is_some() {
            log::debug!("fetch resolved after its view unmounted; result dropped");
        }
    });
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_outcome_maps_to_exactly_one_panel() {
        let loading: FetchState<Vec<u32>> = FetchState::Loading;
        let with_data = FetchState::Ready(vec![1u32]);
        let empty: FetchState<Vec<u32>> = FetchState::Ready(Vec::new());
        let failed: FetchState<Vec<u32>> =
            FetchState::Failed(ContentError::Backend("boom".to_string()));

        assert_eq!(loading.panel(), Panel::Loading);
        assert_eq!(with_data.panel(), Panel::Content);
        assert_eq!(empty.panel(), Panel::Empty);
        assert_eq!(failed.panel(), Panel::Error);
    }

    #[test]
    fn idle_is_indistinguishable_from_loading_when_rendered() {
        let idle: FetchState<Vec<u32>> = FetchState::Idle;
        assert!(idle.is_loading());
        assert_eq!(idle.panel(), Panel::Loading);
    }

    #[test]
    fn error_accessor_only_on_failed() {
        let failed: FetchState<()> = FetchState::Failed(ContentError::NotFound);
        assert_eq!(failed.error(), Some(&ContentError::NotFound));
        let ready = FetchState::Ready(());
        assert!(ready.error().is_none());
    }
}
