bitflags::bitflags! {
    /// How a shape should be placed inside a larger area.
    ///
    /// A horizontal and a vertical flag may be combined. If neither of the
    /// horizontal (or vertical) flags is set, the shape is centred along that
    /// axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Justification: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const HORIZONTALLY_CENTRED = 1 << 2;
        const TOP = 1 << 3;
        const BOTTOM = 1 << 4;
        const VERTICALLY_CENTRED = 1 << 5;

        const CENTRED = Self::HORIZONTALLY_CENTRED.bits() | Self::VERTICALLY_CENTRED.bits();
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Default for Justification {
    fn default() -> Self {
        Self::CENTRED
    }
}

impl Justification {
    /// Returns the x coordinate at which the centre of an item `item_width`
    /// wide should be placed in the span `x..x + width`.
    pub fn centre_x(&self, x: f32, width: f32, item_width: f32) -> f32 {
        if self.contains(Self::LEFT) {
            x + item_width * 0.5
        } else if self.contains(Self::RIGHT) {
            x + width - item_width * 0.5
        } else {
            x + width * 0.5
        }
    }

    /// Returns the y coordinate at which the centre of an item `item_height`
    /// high should be placed in the span `y..y + height`.
    pub fn centre_y(&self, y: f32, height: f32, item_height: f32) -> f32 {
        if self.contains(Self::TOP) {
            y + item_height * 0.5
        } else if self.contains(Self::BOTTOM) {
            y + height - item_height * 0.5
        } else {
            y + height * 0.5
        }
    }
}
