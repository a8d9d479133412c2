#![no_std]

pub mod color;
pub mod correction;
pub mod draw;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod mailbox;
pub mod scheduler;

pub use correction::DotCorrection;
pub use frame::{FrameBuffer, LayerOutOfRange};
pub use geometry::{
    CHANNELS_PER_CHIP, CUBE_SIZE, CubeCorrection, CubeFrame, CubeScheduler, DC_BYTES_PER_CHIP,
    GS_WORDS_PER_CHIP, LAYER_WORDS, MAX_CORRECTION, MAX_INTENSITY, NUM_CHIPS,
};
pub use layout::ChannelLayout;
pub use scheduler::{
    Edge, EdgeMailbox, EdgePoster, EdgeReceiver, LayerScheduler, UpdateBusy, UpdatePhase,
};

pub use color::{GsRgb, SPECTRUM_COLORS, SpectrumCycler};
pub use mailbox::{Mailbox, PostError};
pub use smart_leds::RGB8;

/// Abstract cube hardware trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait CubePort {
    /// Shift one layer's packed grayscale words out to the driver chain.
    fn shift_grayscale(&mut self, words: &[u32]);

    /// Shift a packed dot-correction table out to the driver chain with
    /// the correction-mode pin held high.
    ///
    /// Ports on hardware without the correction-mode pin wired can leave
    /// this as a no-op.
    fn shift_correction(&mut self, _bytes: &[u8]) {}

    /// True while a previously issued shift is still draining.
    ///
    /// Synchronous ports that shift inline never report busy.
    fn shift_busy(&self) -> bool {
        false
    }

    /// Start reporting blank edges to the interrupt subsystem.
    fn listen_blank_edges(&mut self);

    /// Stop reporting blank edges.
    fn ignore_blank_edges(&mut self);

    /// Arm the hardware latch pulse for the next safe window.
    fn schedule_latch_pulse(&mut self);

    /// Disarm the hardware latch pulse.
    fn park_latch_pulse(&mut self);

    /// Drive one layer's transistor switch on or off.
    fn set_layer_active(&mut self, layer: usize, active: bool);
}
