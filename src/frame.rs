//! Packed grayscale frame storage.
//!
//! One layer's intensities live in `LAYER_WORDS` 32-bit words holding the
//! exact image the driver chain expects on the wire: 12 bits per output,
//! most significant bit first, last channel first. The chips shift data
//! through, so the value clocked out first travels to the far end of the
//! chain; storing channels in reverse index order lets an update stream
//! words straight from the buffer.
//!
//! Eight consecutive reverse-indexed channels (`a` through `h`) occupy three
//! words:
//!
//! ```text
//! word 0: |aaaa aaaa aaaa|bbbb bbbb bbbb|cccc cccc
//! word 1: cccc|dddd dddd dddd|eeee eeee eeee|ffff
//! word 2: ffff ffff|gggg gggg gggg|hhhh hhhh hhhh|
//! ```
//!
//! `c` and `f` straddle a word boundary, which is why reads and writes
//! switch on the channel's position within its group of eight. RGB triplets
//! are 36 bits wide, so eight of them span nine words and every triplet
//! straddles exactly one boundary; the triplet writer has its own
//! eight-case switch over the same stream.

use crate::color::{GsRgb, SPECTRUM_COLORS, spectrum_rgb};
use crate::geometry::MAX_INTENSITY;
use crate::layout::ChannelLayout;

/// Error returned when addressing a layer outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerOutOfRange(pub usize);

/// Bit-packed intensity storage for every (channel, layer) pair.
///
/// `LAYERS` is the cube's layer count and `LAYER_WORDS` the packed words per
/// layer, 6 per driver chip. Out-of-range writes leave the buffer untouched
/// and out-of-range reads return 0; the update path never sees a torn or
/// partially written field.
pub struct FrameBuffer<const LAYERS: usize, const LAYER_WORDS: usize> {
    layout: ChannelLayout,
    words: [[u32; LAYER_WORDS]; LAYERS],
}

impl<const LAYERS: usize, const LAYER_WORDS: usize> FrameBuffer<LAYERS, LAYER_WORDS> {
    /// Driver outputs per layer (16 per chip, 6 words per chip).
    pub const CHANNELS: usize = LAYER_WORDS / 3 * 8;

    /// Create a zeroed buffer using the given channel layout.
    pub const fn new(layout: ChannelLayout) -> Self {
        Self {
            layout,
            words: [[0; LAYER_WORDS]; LAYERS],
        }
    }

    /// Active channel addressing strategy.
    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Layers in the cube.
    pub const fn layers(&self) -> usize {
        LAYERS
    }

    /// Driver outputs per layer.
    pub const fn channels(&self) -> usize {
        Self::CHANNELS
    }

    /// Visual channels per layer; 0 under the mono layout.
    pub const fn rgb_channels(&self) -> usize {
        if self.layout.is_rgb() {
            Self::CHANNELS / 3
        } else {
            0
        }
    }

    /// Store a 12-bit intensity for one driver output on one layer.
    ///
    /// Out-of-range channel, layer or value leaves the buffer untouched.
    pub fn set(&mut self, channel: usize, layer: usize, value: u16) {
        if layer >= LAYERS || channel >= Self::CHANNELS || value > MAX_INTENSITY {
            return;
        }
        write_field(&mut self.words[layer], Self::CHANNELS - 1 - channel, value);
    }

    /// Read one driver output's intensity; out-of-range inputs read as 0.
    pub fn get(&self, channel: usize, layer: usize) -> u16 {
        if layer >= LAYERS || channel >= Self::CHANNELS {
            return 0;
        }
        read_field(&self.words[layer], Self::CHANNELS - 1 - channel)
    }

    /// Store all three components of one visual channel.
    ///
    /// Under the sequential layout the 36-bit triplet is composed in a
    /// single pass over the two words it spans, bit-identical to three
    /// separate [`set`](Self::set) calls on the sub-channels. The striped
    /// layout addresses three different chips, so it decomposes into three
    /// single writes. Any out-of-range argument, or a mono layout, makes the
    /// whole call a no-op; the one-pass path never writes partially.
    pub fn set_rgb(&mut self, channel: usize, layer: usize, color: GsRgb) {
        if layer >= LAYERS
            || channel >= self.rgb_channels()
            || color.r > MAX_INTENSITY
            || color.g > MAX_INTENSITY
            || color.b > MAX_INTENSITY
        {
            return;
        }
        let layout = self.layout;
        match layout {
            ChannelLayout::Mono => {}
            ChannelLayout::RgbSequential => {
                let reverse = self.rgb_channels() - 1 - channel;
                write_triplet(&mut self.words[layer], reverse, color);
            }
            ChannelLayout::RgbStriped => {
                self.set(layout.red_channel(channel), layer, color.r);
                self.set(layout.green_channel(channel), layer, color.g);
                self.set(layout.blue_channel(channel), layer, color.b);
            }
        }
    }

    /// Red component of one visual channel.
    pub fn get_red(&self, channel: usize, layer: usize) -> u16 {
        if channel >= self.rgb_channels() {
            return 0;
        }
        self.get(self.layout.red_channel(channel), layer)
    }

    /// Green component of one visual channel.
    pub fn get_green(&self, channel: usize, layer: usize) -> u16 {
        if channel >= self.rgb_channels() {
            return 0;
        }
        self.get(self.layout.green_channel(channel), layer)
    }

    /// Blue component of one visual channel.
    pub fn get_blue(&self, channel: usize, layer: usize) -> u16 {
        if channel >= self.rgb_channels() {
            return 0;
        }
        self.get(self.layout.blue_channel(channel), layer)
    }

    /// All three components of one visual channel.
    pub fn get_rgb(&self, channel: usize, layer: usize) -> GsRgb {
        GsRgb::new(
            self.get_red(channel, layer),
            self.get_green(channel, layer),
            self.get_blue(channel, layer),
        )
    }

    /// Store a spectrum wheel position as one visual channel's color.
    ///
    /// Position 0 switches the voxel off; positions past the wheel are
    /// ignored.
    pub fn set_spectrum(&mut self, channel: usize, layer: usize, spectrum: u16) {
        if spectrum >= SPECTRUM_COLORS {
            return;
        }
        self.set_rgb(channel, layer, spectrum_rgb(spectrum));
    }

    /// Set every driver output on every layer to one intensity.
    pub fn set_all(&mut self, value: u16) {
        if value > MAX_INTENSITY {
            return;
        }
        let value = u32::from(value);
        // With all channels equal the packed image repeats every three
        // words, one group of eight fields per 96 bits.
        let pattern = [
            (value << 20) | (value << 8) | (value >> 4),
            (value << 28) | (value << 16) | (value << 4) | (value >> 8),
            (value << 24) | (value << 12) | value,
        ];
        for layer in &mut self.words {
            for (index, word) in layer.iter_mut().enumerate() {
                *word = pattern[index % 3];
            }
        }
    }

    /// Set every visual channel on every layer to one color.
    pub fn set_all_rgb(&mut self, color: GsRgb) {
        for layer in 0..LAYERS {
            self.set_all_rgb_on_layer(layer, color);
        }
    }

    /// Set every visual channel of one layer to one color.
    pub fn set_all_rgb_on_layer(&mut self, layer: usize, color: GsRgb) {
        for channel in 0..self.rgb_channels() {
            self.set_rgb(channel, layer, color);
        }
    }

    /// Zero the whole buffer.
    pub fn clear_all(&mut self) {
        self.words = [[0; LAYER_WORDS]; LAYERS];
    }

    /// Zero one layer's words.
    pub fn clear_layer(&mut self, layer: usize) -> Result<(), LayerOutOfRange> {
        if layer >= LAYERS {
            return Err(LayerOutOfRange(layer));
        }
        self.words[layer] = [0; LAYER_WORDS];
        Ok(())
    }

    /// Borrow one layer's packed words in wire order.
    ///
    /// Out-of-range layers read as an empty slice.
    pub fn layer_words(&self, layer: usize) -> &[u32] {
        if layer >= LAYERS {
            return &[];
        }
        &self.words[layer]
    }
}

fn write_field(words: &mut [u32], reverse_index: usize, value: u16) {
    let value = u32::from(value);
    let word = reverse_index * 3 / 8;
    match reverse_index % 8 {
        0 => words[word] = (words[word] & 0x000F_FFFF) | (value << 20),
        1 => words[word] = (words[word] & 0xFFF0_00FF) | (value << 8),
        2 => {
            words[word] = (words[word] & 0xFFFF_FF00) | (value >> 4);
            words[word + 1] = (words[word + 1] & 0x0FFF_FFFF) | (value << 28);
        }
        3 => words[word] = (words[word] & 0xF000_FFFF) | (value << 16),
        4 => words[word] = (words[word] & 0xFFFF_000F) | (value << 4),
        5 => {
            words[word] = (words[word] & 0xFFFF_FFF0) | (value >> 8);
            words[word + 1] = (words[word + 1] & 0x00FF_FFFF) | (value << 24);
        }
        6 => words[word] = (words[word] & 0xFF00_0FFF) | (value << 12),
        _ => words[word] = (words[word] & 0xFFFF_F000) | value,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn read_field(words: &[u32], reverse_index: usize) -> u16 {
    let word = reverse_index * 3 / 8;
    let value = match reverse_index % 8 {
        0 => words[word] >> 20,
        1 => (words[word] >> 8) & 0x0FFF,
        2 => ((words[word] & 0xFF) << 4) | (words[word + 1] >> 28),
        3 => (words[word] >> 16) & 0x0FFF,
        4 => (words[word] >> 4) & 0x0FFF,
        5 => ((words[word] & 0x0F) << 8) | (words[word + 1] >> 24),
        6 => (words[word] >> 12) & 0x0FFF,
        _ => words[word] & 0x0FFF,
    };
    value as u16
}

#[allow(clippy::cast_possible_truncation)]
fn write_triplet(words: &mut [u32], reverse_triplet: usize, color: GsRgb) {
    // Red leads on the wire, so the triplet packs as [red, green, blue]
    // from the most significant end of its 36-bit span.
    let packed = (u64::from(color.r) << 24) | (u64::from(color.g) << 12) | u64::from(color.b);
    let tail = packed as u32;
    let word = reverse_triplet * 9 / 8;
    match reverse_triplet % 8 {
        0 => {
            words[word] = (packed >> 4) as u32;
            words[word + 1] = (words[word + 1] & 0x0FFF_FFFF) | (tail << 28);
        }
        1 => {
            words[word] = (words[word] & 0xF000_0000) | (packed >> 8) as u32;
            words[word + 1] = (words[word + 1] & 0x00FF_FFFF) | (tail << 24);
        }
        2 => {
            words[word] = (words[word] & 0xFF00_0000) | (packed >> 12) as u32;
            words[word + 1] = (words[word + 1] & 0x000F_FFFF) | (tail << 20);
        }
        3 => {
            words[word] = (words[word] & 0xFFF0_0000) | (packed >> 16) as u32;
            words[word + 1] = (words[word + 1] & 0x0000_FFFF) | (tail << 16);
        }
        4 => {
            words[word] = (words[word] & 0xFFFF_0000) | (packed >> 20) as u32;
            words[word + 1] = (words[word + 1] & 0x0000_0FFF) | (tail << 12);
        }
        5 => {
            words[word] = (words[word] & 0xFFFF_F000) | (packed >> 24) as u32;
            words[word + 1] = (words[word + 1] & 0x0000_00FF) | (tail << 8);
        }
        6 => {
            words[word] = (words[word] & 0xFFFF_FF00) | (packed >> 28) as u32;
            words[word + 1] = (words[word + 1] & 0x0000_000F) | (tail << 4);
        }
        _ => {
            words[word] = (words[word] & 0xFFFF_FFF0) | (packed >> 32) as u32;
            words[word + 1] = tail;
        }
    }
}
