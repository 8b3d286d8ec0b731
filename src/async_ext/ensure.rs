use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{Error, Result};

pin_project! {
    #[project = EnsureStateProj]
    #[project_replace = EnsureStateProjReplace]
    enum EnsureState<Fut, P, Check, T> {
        Incoming {
            #[pin]
            future: Fut,
            predicate: P,
            error: Error,
        },
        Checking {
            #[pin]
            check: Check,
            value: T,
            error: Error,
        },
        Done,
    }
}

pin_project! {
    /// Future returned by [`FutureRailExt::ensure_async`](super::FutureRailExt::ensure_async).
    ///
    /// An incoming failure completes immediately with its own error; the
    /// predicate is neither called nor awaited and the supplied error is
    /// discarded.
    #[must_use = "futures do nothing unless polled"]
    pub struct EnsureAsync<Fut, P, Check, T> {
        #[pin]
        state: EnsureState<Fut, P, Check, T>,
    }
}

impl<Fut, P, Check, T> EnsureAsync<Fut, P, Check, T> {
    #[inline]
    pub(crate) fn new(future: Fut, predicate: P, error: Error) -> Self {
        Self { state: EnsureState::Incoming { future, predicate, error } }
    }
}

impl<Fut, P, Check, T> Future for EnsureAsync<Fut, P, Check, T>
where
    Fut: Future<Output = Result<T>>,
    P: FnOnce(&T) -> Check,
    Check: Future<Output = bool>,
{
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.project().state;

        loop {
            match state.as_mut().project() {
                EnsureStateProj::Incoming { future, .. } => {
                    let incoming = ready!(future.poll(cx));
                    let (predicate, error) = match state.as_mut().project_replace(EnsureState::Done)
                    {
                        EnsureStateProjReplace::Incoming { predicate, error, .. } => {
                            (predicate, error)
                        },
                        _ => unreachable!("ensure state changed while polling the incoming result"),
                    };
                    match incoming {
                        Ok(value) => {
                            let check = predicate(&value);
                            state.set(EnsureState::Checking { check, value, error });
                        },
                        Err(existing) => return Poll::Ready(Err(existing)),
                    }
                },
                EnsureStateProj::Checking { check, .. } => {
                    let passed = ready!(check.poll(cx));
                    return match state.as_mut().project_replace(EnsureState::Done) {
                        EnsureStateProjReplace::Checking { value, error, .. } => {
                            Poll::Ready(if passed { Ok(value) } else { Err(error) })
                        },
                        _ => unreachable!("ensure state changed while awaiting the predicate"),
                    };
                },
                EnsureStateProj::Done => panic!("`EnsureAsync` polled after completion"),
            }
        }
    }
}

impl<Fut, P, Check, T> FusedFuture for EnsureAsync<Fut, P, Check, T>
where
    Fut: Future<Output = Result<T>>,
    P: FnOnce(&T) -> Check,
    Check: Future<Output = bool>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, EnsureState::Done)
    }
}
