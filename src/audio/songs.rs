//! Compiled-in melodies.

use super::pitch::{B3, CS4, DS4, E4, FS4, GS3};
use super::{Note, Song};

/// Tempo unit for [`ALLEY_CAT`] (ms).
const BEAT_MS: u32 = 100;

const fn n(freq_hz: u32, beats: u32) -> Note {
    Note::new(freq_hz, beats * BEAT_MS)
}

const fn r(beats: u32) -> Note {
    Note::rest(beats * BEAT_MS)
}

/// "Alley Cat" jazz riff played under the boot sequence and menu.
#[rustfmt::skip]
pub static ALLEY_CAT: Song = Song {
    name: "Alley Cat",
    notes: &[
        n(GS3, 1), r(1), n(B3, 1), r(1), n(CS4, 1), r(1),
        n(FS4, 2), n(FS4, 1), n(E4, 1), r(2),
        n(GS3, 1), r(1), n(DS4, 2), n(DS4, 1), n(CS4, 1), r(2),
        n(GS3, 1), r(1), n(B3, 1), r(1), n(B3, 1), n(CS4, 1), r(2),
        n(GS3, 1), r(1), n(DS4, 1), n(E4, 1), n(DS4, 1), n(B3, 1), n(CS4, 1),
        n(GS3, 1), n(B3, 1), n(CS4, 1),
        n(FS4, 2), n(FS4, 1), n(E4, 1), r(2),
        n(GS3, 1), r(1), n(DS4, 2), n(DS4, 1), n(CS4, 1), r(2),
        n(GS3, 1), n(GS3, 1), n(GS3, 1),
    ],
};
