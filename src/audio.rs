//! Audio collaborator seam
//!
//! The game core never touches an audio device; it emits [`AudioCue`]s from
//! its tick and reset paths, and the driving loop forwards them to whatever
//! [`AudioSink`] is plugged in. Playback is fire-and-forget: a sink must not
//! block and has no way to fail back into the game.

/// Named sound effects the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Played when the snake hits a wall or itself
    Crash,
    /// Played when the snake eats the apple
    Ding,
}

/// A single playback request emitted by the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Effect(SoundEffect),
    PauseMusic,
    ResumeMusic,
}

/// Playback backend the driving loop forwards cues to
pub trait AudioSink {
    /// Start the looped background track
    fn play_music(&mut self);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn play_effect(&mut self, effect: SoundEffect);

    fn handle(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Effect(effect) => self.play_effect(effect),
            AudioCue::PauseMusic => self.pause_music(),
            AudioCue::ResumeMusic => self.resume_music(),
        }
    }
}

/// Sink that discards every cue; used by the terminal build, which has no
/// audio device.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_music(&mut self) {}
    fn pause_music(&mut self) {}
    fn resume_music(&mut self) {}
    fn play_effect(&mut self, _effect: SoundEffect) {}
}
