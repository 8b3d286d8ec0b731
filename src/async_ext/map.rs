use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Result;

pin_project! {
    #[project = MapStateProj]
    #[project_replace = MapStateProjReplace]
    enum MapState<Fut, F> {
        Incoming {
            #[pin]
            future: Fut,
            f: F,
        },
        Done,
    }
}

pin_project! {
    /// Future returned by [`FutureRailExt::map_async`](super::FutureRailExt::map_async).
    ///
    /// Awaits the incoming result and applies `f` to the success value. On
    /// failure the error is returned as is and `f` is dropped without being
    /// called.
    #[must_use = "futures do nothing unless polled"]
    pub struct MapAsync<Fut, F> {
        #[pin]
        state: MapState<Fut, F>,
    }
}

impl<Fut, F> MapAsync<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self { state: MapState::Incoming { future, f } }
    }
}

impl<Fut, F, T, U> Future for MapAsync<Fut, F>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(T) -> U,
{
    type Output = Result<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.project().state;

        match state.as_mut().project() {
            MapStateProj::Incoming { future, .. } => {
                let incoming = ready!(future.poll(cx));
                match state.project_replace(MapState::Done) {
                    MapStateProjReplace::Incoming { f, .. } => Poll::Ready(incoming.map(f)),
                    MapStateProjReplace::Done => {
                        unreachable!("map state changed while polling the incoming result")
                    },
                }
            },
            MapStateProj::Done => panic!("`MapAsync` polled after completion"),
        }
    }
}

impl<Fut, F, T, U> FusedFuture for MapAsync<Fut, F>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(T) -> U,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, MapState::Done)
    }
}
