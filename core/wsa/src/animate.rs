use crate::types::WsaContainer;
use delta::Merge;

/// Runs the accumulator loop over a parsed container and returns one
/// pixel-buffer snapshot per frame index, `0..num_frames`.
///
/// Each snapshot is independent of the others (a full copy of the
/// accumulator at that point), matching the "re-decoding twice is
/// byte-identical" property: the function takes no mutable state from the
/// caller and always starts from a zeroed accumulator.
pub fn decode_frames(wsa: &WsaContainer) -> Vec<Vec<u8>> {
    let frame_len = wsa.frame_len();
    let mut frame = vec![0u8; frame_len];
    let mut frames = Vec::with_capacity(wsa.num_frames as usize);

    let start_index = if wsa.has_initial_frame {
        let delta_buf = fmt4::decode(&wsa.frame_data, wsa.delta_size as usize);
        delta::apply(&mut frame, &delta_buf, Merge::Xor);
        frames.push(frame.clone());
        1
    } else {
        0
    };

    for i in start_index..wsa.num_frames as usize {
        let off = *wsa.offsets.get(i).unwrap_or(&0);
        if off != 0 {
            let src = &wsa.frame_data[off as usize..];
            let delta_buf = fmt4::decode(src, wsa.delta_size as usize);
            delta::apply(&mut frame, &delta_buf, Merge::Xor);
        }
        frames.push(frame.clone());
    }

    frames
}
