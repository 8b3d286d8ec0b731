use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Result;

pin_project! {
    #[project = TapStateProj]
    #[project_replace = TapStateProjReplace]
    enum TapState<Fut, F, Act, T> {
        Incoming {
            #[pin]
            future: Fut,
            action: F,
        },
        Acting {
            #[pin]
            pending: Act,
            value: T,
        },
        Done,
    }
}

pin_project! {
    /// Future returned by [`FutureRailExt::tap_async`](super::FutureRailExt::tap_async).
    ///
    /// Holds on to the success value while the side effect runs, then yields
    /// it unchanged.
    #[must_use = "futures do nothing unless polled"]
    pub struct TapAsync<Fut, F, Act, T> {
        #[pin]
        state: TapState<Fut, F, Act, T>,
    }
}

impl<Fut, F, Act, T> TapAsync<Fut, F, Act, T> {
    #[inline]
    pub(crate) fn new(future: Fut, action: F) -> Self {
        Self { state: TapState::Incoming { future, action } }
    }
}

impl<Fut, F, Act, T> Future for TapAsync<Fut, F, Act, T>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(&T) -> Act,
    Act: Future<Output = ()>,
{
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.project().state;

        loop {
            match state.as_mut().project() {
                TapStateProj::Incoming { future, .. } => {
                    let incoming = ready!(future.poll(cx));
                    let action = match state.as_mut().project_replace(TapState::Done) {
                        TapStateProjReplace::Incoming { action, .. } => action,
                        _ => unreachable!("tap state changed while polling the incoming result"),
                    };
                    match incoming {
                        Ok(value) => {
                            let pending = action(&value);
                            state.set(TapState::Acting { pending, value });
                        },
                        Err(error) => return Poll::Ready(Err(error)),
                    }
                },
                TapStateProj::Acting { pending, .. } => {
                    ready!(pending.poll(cx));
                    return match state.as_mut().project_replace(TapState::Done) {
                        TapStateProjReplace::Acting { value, .. } => Poll::Ready(Ok(value)),
                        _ => unreachable!("tap state changed while running the action"),
                    };
                },
                TapStateProj::Done => panic!("`TapAsync` polled after completion"),
            }
        }
    }
}

impl<Fut, F, Act, T> FusedFuture for TapAsync<Fut, F, Act, T>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(&T) -> Act,
    Act: Future<Output = ()>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, TapState::Done)
    }
}
