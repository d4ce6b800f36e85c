use crate::error::{Result, WsaError};
use crate::types::WsaContainer;
use byteorder::{ByteOrder, LE};

/// Parses a WSA with an explicit guess at whether the header carries a
/// flags word. Returns `None` (not an error) when the guess produces an
/// inconsistent layout, so the caller can retry with the other guess.
pub fn try_parse(data: &[u8], use_flags: bool) -> Option<WsaContainer> {
    if data.len() < 14 {
        return None;
    }
    let mut pos = 0usize;
    let num_frames = LE::read_u16(&data[pos..]);
    pos += 2;
    let width = LE::read_u16(&data[pos..]);
    pos += 2;
    let height = LE::read_u16(&data[pos..]);
    pos += 2;
    let delta_size = LE::read_u16(&data[pos..]);
    pos += 2;

    let flags = if use_flags {
        if pos + 2 > data.len() {
            return None;
        }
        let f = LE::read_u16(&data[pos..]);
        pos += 2;
        f
    } else {
        0
    };

    if pos + 4 > data.len() {
        return None;
    }
    let mut frame_data_offs = LE::read_u32(&data[pos..]);
    pos += 4;

    let has_initial_frame = frame_data_offs != 0;
    if !has_initial_frame {
        if pos + 4 > data.len() {
            return None;
        }
        frame_data_offs = LE::read_u32(&data[pos..]);
        pos += 4;
    }

    // A real frame-data origin is never 0 (it always sits past the header
    // and offset table); treat this as an unparseable layout rather than
    // fall into a guard that would zero every rebased offset.
    if frame_data_offs == 0 {
        return None;
    }

    let table_len = num_frames as usize + 1;
    let mut raw_offsets = Vec::with_capacity(table_len);
    for _ in 0..table_len {
        if pos + 4 > data.len() {
            return None;
        }
        raw_offsets.push(LE::read_u32(&data[pos..]));
        pos += 4;
    }

    let mut offsets = Vec::with_capacity(table_len + 1);
    offsets.push(0);
    for off in raw_offsets {
        offsets.push(if off != 0 { off - frame_data_offs } else { 0 });
    }

    if flags & 1 != 0 {
        pos += 0x300;
    }

    if pos > data.len() {
        return None;
    }

    let frame_data = &data[pos..];
    for &off in &offsets {
        if off != 0 && off as usize > frame_data.len() {
            return None;
        }
    }

    Some(WsaContainer {
        num_frames,
        width,
        height,
        delta_size,
        flags,
        offsets,
        frame_data: frame_data.to_vec(),
        has_initial_frame,
    })
}

/// Tries parsing without a flags word first, then with one, as required by
/// the "two header shapes exist in the wild" ambiguity.
pub fn parse(data: &[u8]) -> Result<WsaContainer> {
    if let Some(c) = try_parse(data, false) {
        return Ok(c);
    }
    if let Some(c) = try_parse(data, true) {
        return Ok(c);
    }
    if data.len() < 14 {
        return Err(WsaError::HeaderTooSmall(data.len()));
    }
    Err(WsaError::Unparseable)
}
