//! Compile-time cube geometry.
//!
//! The packed types are generic over layer count and words per layer. This
//! module names the sizes of the reference build (an 8x8x8 cube driven by a
//! chain of twelve 16-channel chips) and the per-chip packing constants the
//! rest of the crate derives from.

use crate::correction::DotCorrection;
use crate::frame::FrameBuffer;
use crate::scheduler::LayerScheduler;

/// Edge length of the reference cube, which is also its layer count.
pub const CUBE_SIZE: usize = 8;

/// Driver chips in the reference chain.
pub const NUM_CHIPS: usize = 12;

/// Driver outputs per chip.
pub const CHANNELS_PER_CHIP: usize = 16;

/// Packed 32-bit grayscale words per chip (16 channels at 12 bits).
pub const GS_WORDS_PER_CHIP: usize = 6;

/// Packed dot-correction bytes per chip (16 channels at 6 bits).
pub const DC_BYTES_PER_CHIP: usize = 12;

/// Grayscale words in one layer of the reference chain.
pub const LAYER_WORDS: usize = NUM_CHIPS * GS_WORDS_PER_CHIP;

/// Largest 12-bit grayscale intensity.
pub const MAX_INTENSITY: u16 = 4095;

/// Largest 6-bit dot-correction value.
pub const MAX_CORRECTION: u8 = 63;

/// Frame buffer sized for the reference build.
pub type CubeFrame = FrameBuffer<CUBE_SIZE, LAYER_WORDS>;

/// Scheduler sized for the reference build.
pub type CubeScheduler<'a, P> = LayerScheduler<'a, P, CUBE_SIZE, LAYER_WORDS>;

/// Dot-correction table sized for the reference chain.
pub type CubeCorrection = DotCorrection<{ NUM_CHIPS * DC_BYTES_PER_CHIP }>;
