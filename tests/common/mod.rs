#![allow(dead_code)]

use std::cell::Cell;

use voxcube::CubePort;
use voxcube::scheduler::{Edge, EdgePoster, LayerScheduler};

/// One recorded call against the simulated port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortOp {
    ShiftWords(Vec<u32>),
    ShiftBytes(Vec<u8>),
    ListenBlank,
    IgnoreBlank,
    ArmPulse,
    ParkPulse,
    Layer(usize, bool),
}

/// Simulated cube hardware recording every port call in order.
///
/// `with_drain` makes each shift report busy for a fixed number of probes,
/// imitating a transmit buffer that takes time to empty.
pub struct SimPort {
    pub ops: Vec<PortOp>,
    drain_after: u32,
    drain_left: Cell<u32>,
}

impl SimPort {
    pub fn new() -> Self {
        Self::with_drain(0)
    }

    pub fn with_drain(probes: u32) -> Self {
        Self {
            ops: Vec::new(),
            drain_after: probes,
            drain_left: Cell::new(0),
        }
    }

    pub fn pending_drain(&self) -> u32 {
        self.drain_left.get()
    }

    pub fn shifted_words(&self) -> Vec<Vec<u32>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PortOp::ShiftWords(words) => Some(words.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn shifted_bytes(&self) -> Vec<Vec<u8>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PortOp::ShiftBytes(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn layer_switches(&self) -> Vec<(usize, bool)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PortOp::Layer(layer, active) => Some((*layer, *active)),
                _ => None,
            })
            .collect()
    }
}

impl Default for SimPort {
    fn default() -> Self {
        Self::new()
    }
}

impl CubePort for SimPort {
    fn shift_grayscale(&mut self, words: &[u32]) {
        self.ops.push(PortOp::ShiftWords(words.to_vec()));
        self.drain_left.set(self.drain_after);
    }

    fn shift_correction(&mut self, bytes: &[u8]) {
        self.ops.push(PortOp::ShiftBytes(bytes.to_vec()));
        self.drain_left.set(self.drain_after);
    }

    fn shift_busy(&self) -> bool {
        let left = self.drain_left.get();
        if left == 0 {
            return false;
        }
        self.drain_left.set(left - 1);
        true
    }

    fn listen_blank_edges(&mut self) {
        self.ops.push(PortOp::ListenBlank);
    }

    fn ignore_blank_edges(&mut self) {
        self.ops.push(PortOp::IgnoreBlank);
    }

    fn schedule_latch_pulse(&mut self) {
        self.ops.push(PortOp::ArmPulse);
    }

    fn park_latch_pulse(&mut self) {
        self.ops.push(PortOp::ParkPulse);
    }

    fn set_layer_active(&mut self, layer: usize, active: bool) {
        self.ops.push(PortOp::Layer(layer, active));
    }
}

/// Feed the scheduler the blank edge and then the latch edge, polling in
/// between so the single-slot mailbox never overflows.
pub fn complete_latch<P, const LAYERS: usize, const LAYER_WORDS: usize>(
    cube: &mut LayerScheduler<'_, P, LAYERS, LAYER_WORDS>,
    poster: EdgePoster<'_>,
) where
    P: CubePort,
{
    poster.post(Edge::Blank).unwrap();
    cube.poll();
    poster.post(Edge::Latch).unwrap();
    cube.poll();
}

/// Pack per-channel 12-bit values the way the chain expects them on the
/// wire, bit by bit: last channel first, most significant bit first.
pub fn pack_reference_words(values: &[u16]) -> Vec<u32> {
    let mut bits = Vec::with_capacity(values.len() * 12);
    for &value in values.iter().rev() {
        for bit in (0..12).rev() {
            bits.push((value >> bit) & 1 == 1);
        }
    }
    let mut words = vec![0u32; bits.len().div_ceil(32)];
    for (index, set) in bits.iter().enumerate() {
        if *set {
            words[index / 32] |= 1 << (31 - index % 32);
        }
    }
    words
}

/// Pack per-channel 6-bit correction values bit by bit: last channel first,
/// most significant bit first.
pub fn pack_reference_correction(values: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(values.len() * 6);
    for &value in values.iter().rev() {
        for bit in (0..6).rev() {
            bits.push((value >> bit) & 1 == 1);
        }
    }
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (index, set) in bits.iter().enumerate() {
        if *set {
            bytes[index / 8] |= 1 << (7 - index % 8);
        }
    }
    bytes
}
