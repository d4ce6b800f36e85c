use crate::error::{Result, SceneMetaError};
use crate::types::{Anim, SceneMeta, SpriteDef};
use byteorder::{ByteOrder, LE};

const OP_BODY_START: u16 = 0xFF81;
const OP_BODY_UNK: u16 = 0xFF82;
const OP_BODY_END: u16 = 0xFF83;
const OP_SPRITE_DEFS: u16 = 0xFF84;
const OP_SPRITE_DEFS_END: u16 = 0xFF85;
const OP_ANIM_START: u16 = 0xFF86;
const OP_ANIM_END: u16 = 0xFF87;

fn r16(data: &[u8], pos: usize) -> u16 {
    data.get(pos..pos + 2)
        .map(|b| LE::read_u16(b))
        .unwrap_or(0)
}

fn r8(data: &[u8], pos: usize) -> u8 {
    data.get(pos).copied().unwrap_or(0)
}

/// Parses a scene `.DAT`: the fixed draw-layer table plus the variable
/// sprite-definition and animation body that begins at `0x6B`.
pub fn parse(data: &[u8], scene_name: &str) -> Result<SceneMeta> {
    if data.len() < 0x15 {
        return Err(SceneMetaError::TooSmall {
            needed: 0x15,
            got: data.len(),
        });
    }
    let draw_layer_table = data[0x0D..0x15].to_vec();
    let (sprite_defs, anims) = parse_body(data);
    Ok(SceneMeta {
        format: "kyra-scene-meta",
        scene: scene_name.to_uppercase(),
        draw_layer_table,
        sprite_defs,
        anims,
    })
}

fn parse_body(data: &[u8]) -> (Vec<SpriteDef>, Vec<Anim>) {
    if data.len() <= 0x6D {
        return (Vec::new(), Vec::new());
    }

    let mut pos = 0x6B;
    let length = r16(data, pos) as usize;
    pos += 2;
    let end = (pos + length).min(data.len());

    let mut sprite_defs = Vec::new();
    let mut anims = Vec::new();

    while pos + 2 <= end {
        let code = r16(data, pos);
        if code == OP_BODY_END {
            pos += 2;
            break;
        }
        if code == OP_BODY_START || code == OP_BODY_UNK {
            pos += 2;
            continue;
        }
        if code == OP_SPRITE_DEFS {
            pos += 2;
            while pos + 2 <= end {
                let sprite_num = r16(data, pos);
                if sprite_num == OP_SPRITE_DEFS_END {
                    pos += 2;
                    break;
                }
                if pos + 10 > end {
                    break;
                }
                sprite_defs.push(SpriteDef {
                    id: sprite_num,
                    x: r16(data, pos + 2) * 8,
                    y: r16(data, pos + 4),
                    w: r16(data, pos + 6) * 8,
                    h: r16(data, pos + 8),
                });
                pos += 10;
            }
            continue;
        }
        if code == OP_ANIM_START {
            let (anim, new_pos) = parse_anim_block(data, pos, end);
            anims.push(anim);
            pos = new_pos;
            continue;
        }
        pos += 2;
    }

    (sprite_defs, anims)
}

/// Mirrors the layout `Sprites::setupSceneAnims` walks: several 16-bit
/// fields padded to 4-byte slots, two single bytes read from the first
/// byte of their own slot, then a variable-length opcode script.
fn parse_anim_block(data: &[u8], start: usize, end: usize) -> (Anim, usize) {
    let mut p = start + 4;

    let disable = r16(data, p);
    p += 4;
    let unk2 = r16(data, p);
    p += 4;
    let draw_y = r16(data, p);
    p += 4;
    p += 4; // sceneUnk2, unused
    let default_x = r16(data, p);
    p += 4;
    let default_y = r16(data, p);
    p += 4;
    let width = r8(data, p - 4);
    p += 4;
    let height = r8(data, p - 4);
    p += 4;
    let sprite = r16(data, p);
    p += 4;
    let flip_x = r16(data, p);
    p += 4;
    let width2 = r8(data, p - 4);
    p += 4;
    let height2 = r8(data, p - 4);
    p += 4;
    let unk1 = r16(data, p);
    p += 4;
    let play = r16(data, p);
    p += 2;

    let mut script = Vec::new();
    while p + 2 <= end {
        let v = r16(data, p);
        script.push(v);
        p += 2;
        if v == OP_ANIM_END {
            break;
        }
    }

    let anim = Anim {
        disable: disable != 0,
        unk2,
        draw_y,
        default_x,
        default_y,
        width,
        height,
        sprite,
        flip_x: flip_x != 0,
        width2,
        height2,
        unk1: unk1 != 0,
        play: play != 0,
        script,
    };
    (anim, p)
}
