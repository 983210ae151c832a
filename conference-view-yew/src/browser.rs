//! Thin wrappers over the browser APIs the components read from

use conference_view_core::{FlagStore, SessionFlags};

/// `window.localStorage` as a flag source
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    /// `None` outside a browser or when storage access is denied
    pub fn open() -> Option<Self> {
        web_sys::window()?.local_storage().ok()?.map(LocalStorage)
    }
}

impl FlagStore for LocalStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }
}

/// Read the session flags once; missing storage yields all-absent flags
pub fn load_session_flags() -> SessionFlags {
    match LocalStorage::open() {
        Some(storage) => SessionFlags::read(&storage),
        None => {
            tracing::warn!("Local storage unavailable, using empty session flags");
            SessionFlags::default()
        }
    }
}

/// Current viewport width in CSS pixels
pub fn viewport_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

pub fn is_mobile(breakpoint_px: u32) -> bool {
    viewport_width().is_some_and(|w| conference_view_core::domain::is_mobile_width(w, breakpoint_px))
}
