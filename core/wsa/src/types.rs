/// A parsed WSA container, rebased and range-checked but not yet animated.
#[derive(Debug, Clone)]
pub struct WsaContainer {
    pub num_frames: u16,
    pub width: u16,
    pub height: u16,
    pub delta_size: u16,
    pub flags: u16,
    /// `num_frames + 2` entries, rebased against the frame-data origin.
    /// Entry 0 is always 0 (no standalone predecessor frame).
    pub offsets: Vec<u32>,
    pub frame_data: Vec<u8>,
    /// Whether `frame_data` begins with a standalone Format4-packed frame
    /// that seeds the accumulator (as opposed to every frame being a delta).
    pub has_initial_frame: bool,
}

impl WsaContainer {
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
