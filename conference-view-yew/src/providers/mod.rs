mod conference_provider;

pub use conference_provider::{ConferenceProvider, ConferenceProviderProps};
