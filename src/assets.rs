//! Compiled-in artwork.
//!
//! Raw MONO_HLSB dumps under `assets/`. Sizes are checked at compile time
//! by [`Bitmap::new`].

use crate::gfx::Bitmap;

/// Icon drawn on the selected menu row.
pub const CPU_ICON: Bitmap<'static> = Bitmap::new(include_bytes!("../assets/cpu_icon.raw"), 16, 16);

/// Full-screen boot logo.
pub const LOGO_CYPHER: Bitmap<'static> =
    Bitmap::new(include_bytes!("../assets/logo_cypher.raw"), 128, 64);

/// Left wordmark of the fly-in.
pub const LOGO_NOMAD: Bitmap<'static> = Bitmap::new(include_bytes!("../assets/logo_nomad.raw"), 46, 13);

/// Right wordmark of the fly-in.
pub const LOGO_PROTOCOL: Bitmap<'static> =
    Bitmap::new(include_bytes!("../assets/logo_protocol.raw"), 61, 13);

/// Walk cycle, one full-screen frame each.
pub const WALK_ANIMATION: &[Bitmap<'static>] = &[
    Bitmap::new(include_bytes!("../assets/walk_0.raw"), 128, 64),
    Bitmap::new(include_bytes!("../assets/walk_1.raw"), 128, 64),
    Bitmap::new(include_bytes!("../assets/walk_2.raw"), 128, 64),
    Bitmap::new(include_bytes!("../assets/walk_3.raw"), 128, 64),
];
