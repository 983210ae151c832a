use crate::domain::RoleName;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a peer in the room
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    pub fn new(id: impl Into<String>) -> Self {
        PeerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A participant as published by the conferencing SDK
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Peer {
    pub id: PeerId,
    #[serde(default)]
    pub name: String,
}

impl Peer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PeerId::new(id),
            name: name.into(),
        }
    }
}

/// A media track pinned by the local user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    #[serde(default)]
    pub peer_id: Option<PeerId>,
}

impl Track {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            peer_id: None,
        }
    }
}

/// Embedded web content shared into the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmbedConfig {
    pub url: String,
}

/// PDF document shared into the room, either by URL or by uploaded file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdfConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Room template layout mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UiMode {
    Inset,
    #[default]
    Normal,
    #[serde(other)]
    Other,
}

/// Tile layout preference chosen by the user (or by headless config)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UiViewMode {
    ActiveSpeaker,
    #[default]
    Grid,
    #[serde(other)]
    Other,
}

/// Snapshot of the SDK state the main view selects on
///
/// Built fresh by the outer layer on every store update; never mutated by the
/// selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionContext {
    pub is_connected: bool,
    /// `None` while the local peer has not been assigned a role yet
    pub local_peer_role: Option<RoleName>,
    pub hls_viewer_role: Option<RoleName>,
    pub waiting_viewer_role: Option<RoleName>,
    pub embed_config: Option<EmbedConfig>,
    pub pdf_config: Option<PdfConfig>,
    pub whiteboard_owner: Option<PeerId>,
    pub ui_mode: UiMode,
    pub screen_sharing_peer: Option<Peer>,
    pub screen_sharing_audio_peer: Option<Peer>,
    pub screen_sharing_playlist_active: bool,
    pub pinned_track: Option<Track>,
    pub ui_view_mode: UiViewMode,
    pub is_headless: bool,
    pub headless_ui_mode: Option<UiViewMode>,
    pub is_audio_only: bool,
}

impl SessionContext {
    /// Connected context for a local peer holding `role`
    pub fn for_role(role: impl Into<RoleName>) -> Self {
        Self {
            is_connected: true,
            local_peer_role: Some(role.into()),
            ..Default::default()
        }
    }

    pub fn with_hls_viewer_role(mut self, role: impl Into<RoleName>) -> Self {
        self.hls_viewer_role = Some(role.into());
        self
    }

    pub fn with_waiting_viewer_role(mut self, role: impl Into<RoleName>) -> Self {
        self.waiting_viewer_role = Some(role.into());
        self
    }

    pub fn with_embed(mut self, url: impl Into<String>) -> Self {
        self.embed_config = Some(EmbedConfig { url: url.into() });
        self
    }

    pub fn with_pdf(mut self, url: impl Into<String>) -> Self {
        self.pdf_config = Some(PdfConfig {
            url: Some(url.into()),
            file_name: None,
        });
        self
    }

    pub fn with_whiteboard_owner(mut self, peer: impl Into<String>) -> Self {
        self.whiteboard_owner = Some(PeerId::new(peer));
        self
    }

    pub fn with_ui_mode(mut self, mode: UiMode) -> Self {
        self.ui_mode = mode;
        self
    }

    pub fn with_screen_share(mut self, peer: Peer) -> Self {
        self.screen_sharing_peer = Some(peer);
        self
    }

    pub fn with_screen_share_audio(mut self, peer: Peer) -> Self {
        self.screen_sharing_audio_peer = Some(peer);
        self
    }

    pub fn with_playlist_sharing(mut self) -> Self {
        self.screen_sharing_playlist_active = true;
        self
    }

    pub fn with_pinned_track(mut self, track: Track) -> Self {
        self.pinned_track = Some(track);
        self
    }

    pub fn with_ui_view_mode(mut self, mode: UiViewMode) -> Self {
        self.ui_view_mode = mode;
        self
    }

    pub fn with_headless(mut self, ui_mode: Option<UiViewMode>) -> Self {
        self.is_headless = true;
        self.headless_ui_mode = ui_mode;
        self
    }

    pub fn with_audio_only(mut self) -> Self {
        self.is_audio_only = true;
        self
    }

    /// Someone shares a screen whose video is not just the audio-only share
    pub fn has_video_screen_share(&self) -> bool {
        match &self.screen_sharing_peer {
            Some(peer) => self
                .screen_sharing_audio_peer
                .as_ref()
                .map_or(true, |audio| audio.id != peer.id),
            None => false,
        }
    }
}
