//! Playback lifecycle as seen by the render loop.
//!
//! The loop only asks [`Playback::is_playing`]. Everything else is driven by
//! the media element: a play request, the play promise settling, and the
//! end-of-media notification.

use crate::error::{Result, VizError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    /// Play requested, waiting for the platform to confirm.
    Starting,
    Playing,
    /// The last start attempt was rejected. Only a new request leaves this.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    StartResolved,
    StartRejected,
    Ended,
}

#[derive(Clone, Debug, Default)]
pub struct Playback {
    phase: PlaybackPhase,
    last_error: Option<String>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Reason for the most recent rejected start, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns `true` when a start should be issued and `false` when one is
    /// already pending or playback is running.
    pub fn request_start(&mut self) -> bool {
        match self.phase {
            PlaybackPhase::Idle | PlaybackPhase::Failed => {
                self.phase = PlaybackPhase::Starting;
                self.last_error = None;
                log::info!("[playback] starting");
                true
            }
            PlaybackPhase::Starting | PlaybackPhase::Playing => false,
        }
    }

    pub fn start_resolved(&mut self) -> Result<()> {
        self.transition(
            PlaybackEvent::StartResolved,
            PlaybackPhase::Starting,
            PlaybackPhase::Playing,
        )?;
        log::info!("[playback] playing");
        Ok(())
    }

    pub fn start_rejected(&mut self, reason: impl Into<String>) -> Result<()> {
        self.transition(
            PlaybackEvent::StartRejected,
            PlaybackPhase::Starting,
            PlaybackPhase::Failed,
        )?;
        let reason = reason.into();
        log::error!("[playback] start failed: {}", reason);
        self.last_error = Some(reason);
        Ok(())
    }

    pub fn ended(&mut self) -> Result<()> {
        self.transition(PlaybackEvent::Ended, PlaybackPhase::Playing, PlaybackPhase::Idle)?;
        log::info!("[playback] ended");
        Ok(())
    }

    fn transition(
        &mut self,
        event: PlaybackEvent,
        from: PlaybackPhase,
        to: PlaybackPhase,
    ) -> Result<()> {
        if self.phase != from {
            return Err(VizError::InvalidTransition {
                from: self.phase,
                event,
            });
        }
        self.phase = to;
        Ok(())
    }
}
