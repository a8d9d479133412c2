//! Layer-multiplexed update scheduling.
//!
//! One cube layer is lit at a time. Each update shifts one layer's packed
//! words into the driver chain and then hands off to the latch handshake:
//! the chips may only latch new data during a blanking interval, so the
//! scheduler never pulses the latch line itself. It asks the port to watch
//! for the next blank edge, arms the hardware pulse when that edge arrives,
//! and treats the update as finished only when the pulse's own edge comes
//! back. Both edges reach the scheduler as [`Edge`] events posted by the
//! platform's interrupt handlers into a single-slot mailbox.
//!
//! Layer advancement rides on latch completion: the previously lit layer is
//! switched off before the freshly latched one is switched on, so no two
//! layers are ever driven at once and a half-shifted frame is never visible.
//!
//! The port borrows the packed words only for the duration of the shift
//! call; a port that transmits asynchronously copies them out and reports
//! busy until its buffer drains. Drawing on the frame while a latch is
//! pending is therefore safe, it just lands in the next update.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::CubePort;
use crate::correction::DotCorrection;
use crate::frame::FrameBuffer;
use crate::mailbox::{Mailbox, Poster, Receiver};

/// Hardware edge events posted by the platform's interrupt handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// A blanking interval began.
    Blank,
    /// The latch pulse fired.
    Latch,
}

/// Mailbox carrying edge events from interrupt handlers to the scheduler.
///
/// Single-slot: the handshake's edges strictly alternate, so an undrained
/// second event means the scheduler is not being polled.
pub type EdgeMailbox = Mailbox<Edge, 1>;

/// Posting handle for the platform's blank and latch interrupt handlers.
pub type EdgePoster<'a> = Poster<'a, Edge, 1>;

/// Draining handle consumed by [`LayerScheduler`].
pub type EdgeReceiver<'a> = Receiver<'a, Edge, 1>;

/// Error returned when an update is requested while one is in flight.
///
/// Overlapping updates are rejected, never queued; retry after the latch
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateBusy;

/// Progress of the in-flight update through the latch handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    /// No transfer in flight, safe to start one.
    Idle,
    /// Data issued to the port, drain and latch request outstanding.
    ShiftingOut,
    /// Latch requested, waiting for the hardware safe window.
    AwaitingLatch,
}

/// Drives one layer of the cube at a time through a [`CubePort`].
///
/// Owns the frame buffer, the multiplex cursor and the handshake state.
/// Updates shift the current layer's words out and request a latch; the
/// cursor advances when the latch-edge event confirms the data landed.
///
/// # Usage
///
/// ```ignore
/// static EDGES: EdgeMailbox = EdgeMailbox::new();
///
/// // Interrupt handlers post through copyable handles:
/// //   blank ISR:  let _ = EDGES.poster().post(Edge::Blank);
/// //   latch ISR:  let _ = EDGES.poster().post(Edge::Latch);
///
/// let frame = CubeFrame::new(ChannelLayout::RgbStriped);
/// let mut cube = CubeScheduler::new(port, frame, EDGES.receiver());
/// cube.begin(0);
/// // platform starts the grayscale clock here
///
/// loop {
///     draw::fill_spectrum(cube.frame_mut(), wheel.advance(8));
///     while cube.update().is_err() {
///         cube.poll();
///     }
/// }
/// ```
pub struct LayerScheduler<'a, P: CubePort, const LAYERS: usize, const LAYER_WORDS: usize> {
    // External dependencies
    port: P,
    edges: EdgeReceiver<'a>,

    // Frame data and handshake state
    frame: FrameBuffer<LAYERS, LAYER_WORDS>,
    phase: UpdatePhase,
    pulse_armed: bool,
    latching_correction: bool,
    current_layer: usize,
    on_update_finished: Option<fn()>,
}

impl<'a, P: CubePort, const LAYERS: usize, const LAYER_WORDS: usize>
    LayerScheduler<'a, P, LAYERS, LAYER_WORDS>
{
    /// Create a scheduler driving `port` from `frame`.
    ///
    /// `edges` is the draining end of the mailbox the platform's blank and
    /// latch interrupt handlers post into.
    pub fn new(port: P, frame: FrameBuffer<LAYERS, LAYER_WORDS>, edges: EdgeReceiver<'a>) -> Self {
        Self {
            port,
            edges,
            frame,
            phase: UpdatePhase::Idle,
            pulse_armed: false,
            latching_correction: false,
            current_layer: 0,
            on_update_finished: None,
        }
    }

    /// Bring the chain up with a uniform intensity.
    ///
    /// Fills the frame, runs the first update and pumps events until its
    /// latch completes, so the chain holds known data before the platform
    /// starts the grayscale clock. On return the first layer is lit and the
    /// cursor points at the second.
    pub fn begin(&mut self, initial: u16) {
        self.frame.set_all(initial);
        let _ = self.update();
        self.wait_latch();
    }

    /// Frame data access.
    pub fn frame(&self) -> &FrameBuffer<LAYERS, LAYER_WORDS> {
        &self.frame
    }

    /// Mutable frame data access.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer<LAYERS, LAYER_WORDS> {
        &mut self.frame
    }

    /// Hardware port access.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable hardware port access.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Layer whose data the next update will shift out.
    pub fn current_layer(&self) -> usize {
        self.current_layer
    }

    /// Layer after the current one, wrapping at the top of the cube.
    pub fn next_layer(&self) -> usize {
        (self.current_layer + 1) % LAYERS
    }

    /// Progress of the in-flight update, if any.
    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }

    /// True while an update has not finished latching.
    pub fn update_in_progress(&self) -> bool {
        self.phase != UpdatePhase::Idle
    }

    /// True while a requested latch has not completed.
    pub fn latch_pending(&self) -> bool {
        self.phase == UpdatePhase::AwaitingLatch
    }

    /// Install (or clear) the hook invoked after every completed latch.
    pub fn set_on_update_finished(&mut self, hook: Option<fn()>) {
        self.on_update_finished = hook;
    }

    /// Shift the current layer out and request its latch.
    ///
    /// Combines [`start_update`](Self::start_update) and
    /// [`finish_update`](Self::finish_update): issues the words, spins until
    /// the port's transmit buffer drains, then requests the latch. Fails
    /// without touching the port while a previous update is in flight.
    pub fn update(&mut self) -> Result<(), UpdateBusy> {
        self.start_update()?;
        self.finish_update();
        Ok(())
    }

    /// Issue the current layer's words without waiting for the drain.
    ///
    /// The caller may do unrelated work before
    /// [`finish_update`](Self::finish_update) requests the latch.
    pub fn start_update(&mut self) -> Result<(), UpdateBusy> {
        self.poll();
        if self.phase != UpdatePhase::Idle {
            return Err(UpdateBusy);
        }
        self.port
            .shift_grayscale(self.frame.layer_words(self.current_layer));
        self.phase = UpdatePhase::ShiftingOut;
        Ok(())
    }

    /// Wait for issued words to drain, then request the latch.
    ///
    /// No effect unless a [`start_update`](Self::start_update) is
    /// outstanding.
    pub fn finish_update(&mut self) {
        if self.phase != UpdatePhase::ShiftingOut {
            return;
        }
        while self.port.shift_busy() {}
        self.request_latch(false);
    }

    /// Shift a dot-correction table into the chain.
    ///
    /// Runs the same latch handshake as a grayscale update, but the layer
    /// cursor stays put. The port implementation holds the correction-mode
    /// pin high around the byte shift.
    pub fn update_correction<const BYTES: usize>(
        &mut self,
        correction: &DotCorrection<BYTES>,
    ) -> Result<(), UpdateBusy> {
        self.poll();
        if self.phase != UpdatePhase::Idle {
            return Err(UpdateBusy);
        }
        self.port.shift_correction(correction.bytes());
        while self.port.shift_busy() {}
        self.request_latch(true);
        Ok(())
    }

    /// Consume any edge events the interrupt handlers have posted.
    ///
    /// Call this from the main loop whenever updates are not being issued;
    /// the update entry points poll on their own.
    pub fn poll(&mut self) {
        while let Some(edge) = self.edges.take() {
            self.consume(edge);
        }
    }

    fn request_latch(&mut self, correction: bool) {
        self.phase = UpdatePhase::AwaitingLatch;
        self.pulse_armed = false;
        self.latching_correction = correction;
        self.port.listen_blank_edges();
    }

    fn consume(&mut self, edge: Edge) {
        match edge {
            Edge::Blank => {
                if self.phase != UpdatePhase::AwaitingLatch || self.pulse_armed {
                    #[cfg(feature = "esp32-log")]
                    println!("[LayerScheduler.consume] stray blank edge in {:?}", self.phase);
                    return;
                }
                self.port.ignore_blank_edges();
                self.port.schedule_latch_pulse();
                self.pulse_armed = true;
            }
            Edge::Latch => {
                if self.phase != UpdatePhase::AwaitingLatch || !self.pulse_armed {
                    #[cfg(feature = "esp32-log")]
                    println!("[LayerScheduler.consume] stray latch edge in {:?}", self.phase);
                    return;
                }
                self.port.park_latch_pulse();
                self.phase = UpdatePhase::Idle;
                self.pulse_armed = false;
                if self.latching_correction {
                    self.latching_correction = false;
                } else {
                    self.step_layer();
                }
                if let Some(hook) = self.on_update_finished {
                    hook();
                }
            }
        }
    }

    // Break-before-make: the previously lit layer goes dark, any in-flight
    // latch settles, then the freshly latched layer is switched on.
    fn step_layer(&mut self) {
        let previous = (self.current_layer + LAYERS - 1) % LAYERS;
        self.port.set_layer_active(previous, false);
        self.wait_latch();
        self.port.set_layer_active(self.current_layer, true);
        self.current_layer = self.next_layer();
    }

    // Bounded by one blanking period; the latch interrupt ends the spin.
    fn wait_latch(&mut self) {
        while self.phase == UpdatePhase::AwaitingLatch {
            self.poll();
        }
    }
}
