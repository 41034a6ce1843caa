//! State

use std::sync::Arc;

use atrium_app::{context::AppContext, throttle::ThrottleGate};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) throttle: Arc<ThrottleGate>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, throttle: ThrottleGate) -> Self {
        Self {
            app,
            throttle: Arc::new(throttle),
        }
    }

    #[must_use]
    pub(crate) fn build(app: AppContext, throttle: ThrottleGate) -> Arc<Self> {
        Arc::new(Self::new(app, throttle))
    }
}
