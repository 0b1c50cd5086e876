//! Music playback
//!
//! Two looping tracks (menu and in-game). The actual output device sits
//! behind [`MusicSink`]; the terminal build uses [`LogSink`].

/// Music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Home and options screens
    Title,
    /// During a match
    Game,
}

impl Track {
    /// Asset path of the track
    pub fn path(&self) -> &'static str {
        match self {
            Track::Title => "music/title_theme.ogg",
            Track::Game => "music/game_theme.ogg",
        }
    }
}

/// Output device for music
pub trait MusicSink {
    /// Start `track`, looping until stopped. Replaces whatever was playing.
    fn play_looped(&mut self, track: Track);
    fn stop(&mut self);
    fn is_busy(&self) -> bool;
}

/// Sink with no audio device: records requests in the log
#[derive(Debug, Default)]
pub struct LogSink {
    playing: Option<Track>,
}

impl MusicSink for LogSink {
    fn play_looped(&mut self, track: Track) {
        log::info!("Music: looping {}", track.path());
        self.playing = Some(track);
    }

    fn stop(&mut self) {
        if let Some(track) = self.playing.take() {
            log::info!("Music: stopped {}", track.path());
        }
    }

    fn is_busy(&self) -> bool {
        self.playing.is_some()
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn MusicSink>,
    current: Option<Track>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogSink::default()))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn MusicSink>) -> Self {
        Self {
            sink,
            current: None,
        }
    }

    /// Loop `track` from the start
    pub fn play(&mut self, track: Track) {
        self.sink.play_looped(track);
        self.current = Some(track);
    }

    /// Start `track` unless it is already the one playing
    pub fn ensure_playing(&mut self, track: Track) {
        if self.is_playing() && self.current == Some(track) {
            return;
        }
        self.play(track);
    }

    pub fn stop(&mut self) {
        self.sink.stop();
        self.current = None;
    }

    pub fn is_playing(&self) -> bool {
        self.sink.is_busy()
    }

    /// Track last started and not stopped since
    pub fn current_track(&self) -> Option<Track> {
        if self.is_playing() { self.current } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_stop() {
        let mut audio = AudioManager::default();
        assert!(!audio.is_playing());

        audio.play(Track::Title);
        assert!(audio.is_playing());
        assert_eq!(audio.current_track(), Some(Track::Title));

        audio.stop();
        assert!(!audio.is_playing());
        assert_eq!(audio.current_track(), None);
    }

    #[test]
    fn test_ensure_playing_switches_tracks() {
        let mut audio = AudioManager::default();
        audio.ensure_playing(Track::Game);
        audio.ensure_playing(Track::Game);
        assert_eq!(audio.current_track(), Some(Track::Game));

        audio.ensure_playing(Track::Title);
        assert_eq!(audio.current_track(), Some(Track::Title));
    }
}
