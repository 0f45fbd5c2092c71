//! Guided session player: a "now playing" pointer into the catalog plus
//! the transcript scroll position. No audio.

use crate::catalog::{GuidedSession, GuidedSessionId};
use crate::error::PlayerError;

#[derive(Debug, Default)]
pub struct GuidedPlayer {
    now_playing: Option<GuidedSessionId>,
    scroll: u16,
}

impl GuidedPlayer {
    pub fn now_playing(&self) -> Option<&'static GuidedSession> {
        self.now_playing.map(GuidedSessionId::session)
    }

    pub fn is_playing(&self) -> bool {
        self.now_playing.is_some()
    }

    /// Starts `id`, replacing whatever was playing.
    pub fn start(&mut self, id: GuidedSessionId) -> &'static GuidedSession {
        self.now_playing = Some(id);
        self.scroll = 0;
        id.session()
    }

    pub fn stop(&mut self) -> Result<&'static GuidedSession, PlayerError> {
        let id = self.now_playing.take().ok_or(PlayerError::NothingPlaying)?;
        self.scroll = 0;
        Ok(id.session())
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        if let Some(session) = self.now_playing() {
            // Two lines per paragraph leaves the last one on screen.
            let max = u16::try_from(session.transcript.len().saturating_sub(1) * 2).unwrap_or(u16::MAX);
            self.scroll = (self.scroll + 1).min(max);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
