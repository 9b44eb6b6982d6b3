use super::channel::Channel;

/// One reading: three acceleration axes and three color intensities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorRecord {
    pub accel_x: f32,
    pub accel_y: f32,
    pub accel_z: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl SensorRecord {
    #[must_use]
    pub const fn new(accel_x: f32, accel_y: f32, accel_z: f32, red: f32, green: f32, blue: f32) -> Self {
        Self {
            accel_x,
            accel_y,
            accel_z,
            red,
            green,
            blue,
        }
    }

    /// Builds a record from values in wire order.
    #[must_use]
    pub const fn from_array(v: [f32; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }

    /// Values in wire order.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 6] {
        [
            self.accel_x,
            self.accel_y,
            self.accel_z,
            self.red,
            self.green,
            self.blue,
        ]
    }

    #[must_use]
    pub const fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::AccelX => self.accel_x,
            Channel::AccelY => self.accel_y,
            Channel::AccelZ => self.accel_z,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}
