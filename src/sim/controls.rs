use bitflags::bitflags;

bitflags! {
    /// Movement keys held during one frame.
    ///
    /// The window layer sets bits, [`crate::sim::apply`] consumes them.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Controls: u8 {
        const FORWARD      = 0b0000_0001;
        const BACK         = 0b0000_0010;
        const STRAFE_LEFT  = 0b0000_0100;
        const STRAFE_RIGHT = 0b0000_1000;
        const TURN_LEFT    = 0b0001_0000;
        const TURN_RIGHT   = 0b0010_0000;
        // Use the run speed instead of the walk speed.
        const RUN          = 0b0100_0000;
    }
}

impl Controls {
    /// `(forward, side, turn)` in -1..=1; opposite keys cancel.
    pub fn axes(self) -> (f32, f32, f32) {
        let axis = |pos: Controls, neg: Controls| {
            self.contains(pos) as i8 as f32 - self.contains(neg) as i8 as f32
        };
        (
            axis(Controls::FORWARD, Controls::BACK),
            axis(Controls::STRAFE_RIGHT, Controls::STRAFE_LEFT),
            axis(Controls::TURN_LEFT, Controls::TURN_RIGHT),
        )
    }
}
