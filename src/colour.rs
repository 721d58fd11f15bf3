/// A DeviceGray colour; 0.0 is black and 1.0 is white
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour(pub f32);

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour(0.0);
    /// Near-black used for badge text
    pub const INK: Colour = Colour(0.1);
}
