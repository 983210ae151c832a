use conference_view_core::{ConferenceActions, ConferenceConfig, SessionContext, SessionFlags};
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the SDK's imperative actions
///
/// Compared by identity so it can live in props and context.
#[derive(Clone)]
pub struct ActionsHandle(Rc<dyn ConferenceActions>);

impl ActionsHandle {
    pub fn new(actions: impl ConferenceActions + 'static) -> Self {
        ActionsHandle(Rc::new(actions))
    }
}

impl From<Rc<dyn ConferenceActions>> for ActionsHandle {
    fn from(actions: Rc<dyn ConferenceActions>) -> Self {
        ActionsHandle(actions)
    }
}

impl AsRef<dyn ConferenceActions> for ActionsHandle {
    fn as_ref(&self) -> &(dyn ConferenceActions + 'static) {
        self.0.as_ref()
    }
}

impl PartialEq for ActionsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// State published by [`crate::ConferenceProvider`]
#[derive(Clone, PartialEq)]
pub struct ConferenceContext {
    pub session: SessionContext,
    pub flags: SessionFlags,
    pub config: Rc<ConferenceConfig>,
    pub actions: ActionsHandle,
}

/// Hook to access the conference state
///
/// # Example
///
/// ```rust,ignore
/// use conference_view_yew::use_conference;
///
/// let conference = use_conference();
/// let role = conference.session.local_peer_role.clone();
/// ```
#[hook]
pub fn use_conference() -> ConferenceContext {
    use_context::<ConferenceContext>()
        .expect("use_conference must be used within a ConferenceProvider")
}
