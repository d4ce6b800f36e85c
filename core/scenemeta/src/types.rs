use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SpriteDef {
    pub id: u16,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct Anim {
    pub disable: bool,
    pub unk2: u16,
    #[serde(rename = "drawY")]
    pub draw_y: u16,
    #[serde(rename = "defaultX")]
    pub default_x: u16,
    #[serde(rename = "defaultY")]
    pub default_y: u16,
    pub width: u8,
    pub height: u8,
    pub sprite: u16,
    #[serde(rename = "flipX")]
    pub flip_x: bool,
    pub width2: u8,
    pub height2: u8,
    pub unk1: bool,
    pub play: bool,
    pub script: Vec<u16>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneMeta {
    pub format: &'static str,
    pub scene: String,
    #[serde(rename = "drawLayerTable")]
    pub draw_layer_table: Vec<u8>,
    #[serde(rename = "spriteDefs")]
    pub sprite_defs: Vec<SpriteDef>,
    pub anims: Vec<Anim>,
}
