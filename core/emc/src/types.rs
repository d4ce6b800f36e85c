use serde::Serialize;

/// Decoded `ORDR`/`DATA` chunks: function entry points and the code array,
/// both as big-endian u16 words.
#[derive(Debug, Clone)]
pub struct Program {
    pub ordr: Vec<u16>,
    pub data: Vec<u16>,
}

/// Sentinel `ordr` entry meaning "function absent".
pub const ORDR_ABSENT: u16 = 0xFFFF;

#[derive(Debug, Clone, Serialize)]
pub struct SceneAnimShape {
    pub func: usize,
    pub shape: i32,
    pub x: i32,
    pub y: i32,
    pub flags: i32,
    pub page: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneShape {
    pub func: usize,
    pub shape: i32,
    pub x: i32,
    pub y: i32,
    pub flags: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemShape {
    pub func: usize,
    pub item: i32,
    pub x: i32,
    pub y: i32,
    pub flags: i32,
    #[serde(rename = "onlyHidPage")]
    pub only_hid_page: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DropItem {
    pub func: usize,
    pub item: i32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroundItem {
    pub func: usize,
    pub item: i32,
    pub x: i32,
    pub y: i32,
}

/// Everything the static trace collects across every function in a
/// program, keyed by syscall kind.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraceResult {
    #[serde(rename = "sceneShapes")]
    pub scene_shapes: Vec<SceneShape>,
    #[serde(rename = "sceneAnimShapes")]
    pub scene_anim_shapes: Vec<SceneAnimShape>,
    #[serde(rename = "itemShapes")]
    pub item_shapes: Vec<ItemShape>,
    #[serde(rename = "dropItems")]
    pub drop_items: Vec<DropItem>,
    #[serde(rename = "groundItems")]
    pub ground_items: Vec<GroundItem>,
}
