use wsa::{decode_frames, parse};

/// Exercises the full `parse` -> `decode_frames` pipeline across three
/// frames: a standalone initial frame, a delta-coded frame, and a frame
/// that reuses the prior one unchanged (`offsets[i] == 0`).
#[test]
fn three_frame_animation_with_a_reused_frame() {
    let mut data = Vec::new();
    data.extend_from_slice(&3u16.to_le_bytes()); // num_frames
    data.extend_from_slice(&2u16.to_le_bytes()); // width
    data.extend_from_slice(&2u16.to_le_bytes()); // height
    data.extend_from_slice(&4u16.to_le_bytes()); // delta_size
    data.extend_from_slice(&28u32.to_le_bytes()); // frame_data_offs
    data.extend_from_slice(&44u32.to_le_bytes()); // raw offset 0 -> rebased 16
    data.extend_from_slice(&0u32.to_le_bytes()); // raw offset 1 -> rebased 0
    data.extend_from_slice(&0u32.to_le_bytes()); // raw offset 2, unused
    data.extend_from_slice(&0u32.to_le_bytes()); // raw offset 3, unused
    assert_eq!(data.len(), 28);

    // Frame-data byte 0: Format4 literal run decoding to the Delta-codec
    // fill command `[00 04 11 80]` (fill all 4 bytes with 0x11) — the
    // standalone initial frame.
    data.extend_from_slice(&[0x84, 0x00, 0x04, 0x11, 0x80]);
    data.extend_from_slice(&[0u8; 11]); // padding up to relative offset 16
    // Frame-data byte 16: same shape, fills with 0x0F (XORed in).
    data.extend_from_slice(&[0x84, 0x00, 0x04, 0x0F, 0x80]);
    assert_eq!(data.len(), 49);

    let wsa = parse(&data).unwrap();
    assert!(wsa.has_initial_frame);
    assert_eq!(wsa.offsets, vec![0, 16, 0, 0, 0]);

    let frames = decode_frames(&wsa);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0], vec![0x11, 0x11, 0x11, 0x11]);
    assert_eq!(frames[1], vec![0x1E, 0x1E, 0x1E, 0x1E]);
    // Frame 2's offset rebases to 0, so it reuses frame 1 unchanged.
    assert_eq!(frames[2], frames[1]);
}

#[test]
fn redecoding_the_same_container_is_byte_identical() {
    let mut data = Vec::new();
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&[0x84, 0x00, 0x04, 0x07, 0x80]);

    let wsa = parse(&data).unwrap();
    let first = decode_frames(&wsa);
    let second = decode_frames(&wsa);
    assert_eq!(first, second);
    assert_eq!(first, vec![vec![0x07, 0x07, 0x07, 0x07]]);
}

/// Review regression: when `frame_data_offs` is still 0 after the bonus
/// second read, `try_parse` must reject the layout instead of zeroing
/// every offset in the table.
#[test]
fn zero_frame_data_offset_after_bonus_read_is_unparseable() {
    let mut data = Vec::new();
    data.extend_from_slice(&1u16.to_le_bytes()); // num_frames
    data.extend_from_slice(&2u16.to_le_bytes()); // width
    data.extend_from_slice(&2u16.to_le_bytes()); // height
    data.extend_from_slice(&4u16.to_le_bytes()); // delta_size
    data.extend_from_slice(&0u32.to_le_bytes()); // frame_data_offs == 0
    data.extend_from_slice(&0u32.to_le_bytes()); // bonus read, also 0

    assert!(wsa::try_parse(&data, false).is_none());
    assert!(matches!(parse(&data), Err(wsa::WsaError::Unparseable)));
}
