use std::fmt;

/// One measurement field of a [`SensorRecord`](super::SensorRecord), in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    AccelX,
    AccelY,
    AccelZ,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in the order they appear on the wire.
    pub const ALL: [Channel; 6] = [
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
    ];

    /// Position of the field inside a record (0..6).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Channel::AccelX => 0,
            Channel::AccelY => 1,
            Channel::AccelZ => 2,
            Channel::Red => 3,
            Channel::Green => 4,
            Channel::Blue => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Channel::AccelX => "acceleration_x",
            Channel::AccelY => "acceleration_y",
            Channel::AccelZ => "acceleration_z",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
