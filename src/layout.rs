//! Channel addressing strategies.
//!
//! An RGB cube wires each visual channel to three driver outputs, and two
//! wiring conventions are in use: boards that route a voxel's three anodes to
//! adjacent outputs of one chip, and boards that dedicate whole chips to a
//! single color plane. The strategy is picked when the frame buffer is
//! constructed; all RGB accessors route through it.

/// Sub-channel addressing strategy of a driver chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// One driver output per voxel, no color components.
    Mono,
    /// The components of visual channel `c` sit on adjacent outputs:
    /// blue at `3c`, green at `3c + 1`, red at `3c + 2`.
    RgbSequential,
    /// Chips come in groups of three, one color plane per chip: red at
    /// `(c / 16) * 48 + c % 16`, green 16 outputs later, blue 32 later.
    RgbStriped,
}

impl ChannelLayout {
    /// True when the layout addresses three components per visual channel.
    pub const fn is_rgb(self) -> bool {
        !matches!(self, Self::Mono)
    }

    /// Driver output carrying the red component of visual channel `channel`.
    pub const fn red_channel(self, channel: usize) -> usize {
        match self {
            Self::Mono => channel,
            Self::RgbSequential => channel * 3 + 2,
            Self::RgbStriped => striped_base(channel),
        }
    }

    /// Driver output carrying the green component of visual channel `channel`.
    pub const fn green_channel(self, channel: usize) -> usize {
        match self {
            Self::Mono => channel,
            Self::RgbSequential => channel * 3 + 1,
            Self::RgbStriped => striped_base(channel) + 16,
        }
    }

    /// Driver output carrying the blue component of visual channel `channel`.
    pub const fn blue_channel(self, channel: usize) -> usize {
        match self {
            Self::Mono => channel,
            Self::RgbSequential => channel * 3,
            Self::RgbStriped => striped_base(channel) + 32,
        }
    }
}

/// Red-plane output of visual channel `channel` under striped wiring.
const fn striped_base(channel: usize) -> usize {
    (channel / 16) * 48 + channel % 16
}
