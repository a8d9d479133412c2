//! Dot-correction packing.
//!
//! The driver chips trim per-output current with a 6-bit correction value
//! programmed through the same serial chain in a separate register mode.
//! Values pack most significant bit first, last channel first, four fields
//! per three bytes; the middle two fields straddle a byte boundary.

use crate::geometry::MAX_CORRECTION;

/// Packed per-channel correction values for a driver chain.
///
/// `BYTES` is 12 per chip (16 channels at 6 bits). A fresh table holds full
/// current everywhere, the chips' power-on expectation.
pub struct DotCorrection<const BYTES: usize> {
    data: [u8; BYTES],
}

impl<const BYTES: usize> DotCorrection<BYTES> {
    /// Correction channels in the chain.
    pub const CHANNELS: usize = BYTES / 12 * 16;

    /// Create a table with every channel at full current.
    pub const fn new() -> Self {
        Self { data: [0xFF; BYTES] }
    }

    /// Store one channel's 6-bit correction value.
    ///
    /// Out-of-range channel or value leaves the table untouched.
    pub fn set(&mut self, channel: usize, value: u8) {
        if channel >= Self::CHANNELS || value > MAX_CORRECTION {
            return;
        }
        let reverse = Self::CHANNELS - 1 - channel;
        let byte = reverse * 3 / 4;
        match reverse % 4 {
            0 => self.data[byte] = (self.data[byte] & 0x03) | (value << 2),
            1 => {
                self.data[byte] = (self.data[byte] & 0xFC) | (value >> 4);
                self.data[byte + 1] = (self.data[byte + 1] & 0x0F) | (value << 4);
            }
            2 => {
                self.data[byte] = (self.data[byte] & 0xF0) | (value >> 2);
                self.data[byte + 1] = (self.data[byte + 1] & 0x3F) | (value << 6);
            }
            _ => self.data[byte] = (self.data[byte] & 0xC0) | value,
        }
    }

    /// Read one channel's correction value; out-of-range channels read as 0.
    pub fn get(&self, channel: usize) -> u8 {
        if channel >= Self::CHANNELS {
            return 0;
        }
        let reverse = Self::CHANNELS - 1 - channel;
        let byte = reverse * 3 / 4;
        match reverse % 4 {
            0 => self.data[byte] >> 2,
            1 => ((self.data[byte] & 0x03) << 4) | (self.data[byte + 1] >> 4),
            2 => ((self.data[byte] & 0x0F) << 2) | (self.data[byte + 1] >> 6),
            _ => self.data[byte] & 0x3F,
        }
    }

    /// Set every channel to one correction value.
    pub fn set_all(&mut self, value: u8) {
        if value > MAX_CORRECTION {
            return;
        }
        // Four equal 6-bit fields repeat every three bytes.
        let pattern = [
            (value << 2) | (value >> 4),
            (value << 4) | (value >> 2),
            (value << 6) | value,
        ];
        for (index, byte) in self.data.iter_mut().enumerate() {
            *byte = pattern[index % 3];
        }
    }

    /// Borrow the packed bytes in wire order.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<const BYTES: usize> Default for DotCorrection<BYTES> {
    fn default() -> Self {
        Self::new()
    }
}
