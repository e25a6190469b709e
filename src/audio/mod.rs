//! Melody playback on a single-voice buzzer.
//!
//! A [`Song`] is a static list of notes. The [`Sequencer`] walks it in an
//! endless loop and hands out one [`Step`] at a time; whatever drives the
//! buzzer (see [`ToneOutput`]) just plays the step and waits its duration.

#[cfg(feature = "embedded")]
pub mod buzzer;
pub mod songs;

use crate::error::{Error, Result};

/// Note pitches (Hz). 0 is silence.
pub mod pitch {
    pub const SILENCE: u32 = 0;
    pub const GS3: u32 = 208;
    pub const B3: u32 = 247;
    pub const CS4: u32 = 277;
    pub const DS4: u32 = 311;
    pub const E4: u32 = 330;
    pub const FS4: u32 = 370;
}

/// One note of a melody.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub freq_hz: u32,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }

    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(pitch::SILENCE, duration_ms)
    }

    pub const fn is_rest(&self) -> bool {
        self.freq_hz == pitch::SILENCE
    }
}

/// A named, compiled-in melody.
#[derive(Debug)]
pub struct Song {
    pub name: &'static str,
    pub notes: &'static [Note],
}

impl Song {
    /// Length of one pass through the melody (ms).
    pub fn loop_duration_ms(&self) -> u32 {
        self.notes.iter().map(|n| n.duration_ms).sum()
    }
}

/// What the buzzer should do next, and for how long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Tone { freq_hz: u32, ms: u32 },
    Rest { ms: u32 },
}

impl Step {
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Step::Tone { ms, .. } | Step::Rest { ms } => ms,
        }
    }
}

/// Endless cursor over a song.
#[derive(Debug)]
pub struct Sequencer {
    song: &'static Song,
    index: usize,
}

impl Sequencer {
    /// Load `song` for playback. A song without notes is rejected.
    pub fn new(song: &'static Song) -> Result<Self> {
        if song.notes.is_empty() {
            return Err(Error::EmptySong);
        }
        Ok(Self { song, index: 0 })
    }

    pub fn song(&self) -> &'static Song {
        self.song
    }

    /// Index of the note [`next_step`](Self::next_step) will return.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Rewind to the first note.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// The current note as a step; wraps after the last note.
    pub fn next_step(&mut self) -> Step {
        let note = self.song.notes[self.index];
        self.index = (self.index + 1) % self.song.notes.len();
        if note.is_rest() {
            Step::Rest {
                ms: note.duration_ms,
            }
        } else {
            Step::Tone {
                freq_hz: note.freq_hz,
                ms: note.duration_ms,
            }
        }
    }
}

/// Anything that can sound a square-wave tone.
pub trait ToneOutput {
    /// Start sounding `freq_hz`, replacing any current tone.
    fn tone(&mut self, freq_hz: u32) -> Result<()>;

    /// Stop sounding.
    fn silence(&mut self);

    /// Apply one sequencer step.
    fn apply(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Tone { freq_hz, .. } => self.tone(freq_hz),
            Step::Rest { .. } => {
                self.silence();
                Ok(())
            }
        }
    }
}
