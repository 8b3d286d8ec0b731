use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Result;

pin_project! {
    #[project = BindStateProj]
    #[project_replace = BindStateProjReplace]
    enum BindState<Fut, F, Next> {
        Incoming {
            #[pin]
            future: Fut,
            f: F,
        },
        Chained {
            #[pin]
            next: Next,
        },
        Done,
    }
}

pin_project! {
    /// Future returned by [`FutureRailExt::bind_async`](super::FutureRailExt::bind_async).
    ///
    /// Resolves in two stages: first the incoming result, then the future that
    /// `f` builds from its success value. The second stage is never created
    /// when the first one fails.
    #[must_use = "futures do nothing unless polled"]
    pub struct BindAsync<Fut, F, Next> {
        #[pin]
        state: BindState<Fut, F, Next>,
    }
}

impl<Fut, F, Next> BindAsync<Fut, F, Next> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self { state: BindState::Incoming { future, f } }
    }
}

impl<Fut, F, Next, T, U> Future for BindAsync<Fut, F, Next>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(T) -> Next,
    Next: Future<Output = Result<U>>,
{
    type Output = Result<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.project().state;

        loop {
            match state.as_mut().project() {
                BindStateProj::Incoming { future, .. } => {
                    let incoming = ready!(future.poll(cx));
                    let f = match state.as_mut().project_replace(BindState::Done) {
                        BindStateProjReplace::Incoming { f, .. } => f,
                        _ => unreachable!("bind state changed while polling the incoming result"),
                    };
                    match incoming {
                        Ok(value) => state.set(BindState::Chained { next: f(value) }),
                        Err(error) => return Poll::Ready(Err(error)),
                    }
                },
                BindStateProj::Chained { next } => {
                    let output = ready!(next.poll(cx));
                    state.set(BindState::Done);
                    return Poll::Ready(output);
                },
                BindStateProj::Done => panic!("`BindAsync` polled after completion"),
            }
        }
    }
}

impl<Fut, F, Next, T, U> FusedFuture for BindAsync<Fut, F, Next>
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(T) -> Next,
    Next: Future<Output = Result<U>>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, BindState::Done)
    }
}
