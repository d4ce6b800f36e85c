use crate::types::{
    DropItem, GroundItem, ItemShape, Program, SceneAnimShape, SceneShape, TraceResult,
    ORDR_ABSENT,
};
use crate::vm::Vm;

pub const SYS_SCENE_ANIM_SHAPE: u8 = 0x03;
pub const SYS_SCENE_SHAPE: u8 = 0x0D;
pub const SYS_ITEM_SHAPE: u8 = 0x62;
pub const SYS_DROP_ITEM: u8 = 0x0C;
pub const SYS_GROUND_ITEM: u8 = 0x7C;

pub const DEFAULT_STEP_LIMIT: usize = 20_000;

/// Runs every exported function (`ordr[fn] != 0xFFFF`) through a fresh
/// [`Vm`] and collects the syscall arguments each one produces. A
/// function that panics the real engine instead just stops contributing
/// records: anomalies are scoped to the function that caused them.
pub fn trace(program: &Program, step_limit: usize) -> TraceResult {
    let mut result = TraceResult::default();

    for (fn_index, &start) in program.ordr.iter().enumerate() {
        if start == ORDR_ABSENT {
            continue;
        }
        let mut vm = Vm::new(&program.data);
        vm.run(start as usize, step_limit, |vm, id| match id {
            SYS_SCENE_ANIM_SHAPE => result.scene_anim_shapes.push(SceneAnimShape {
                func: fn_index,
                shape: vm.stack_pos(0),
                x: vm.stack_pos(1),
                y: vm.stack_pos(2),
                flags: vm.stack_pos(3),
                page: vm.stack_pos(4),
            }),
            SYS_SCENE_SHAPE => result.scene_shapes.push(SceneShape {
                func: fn_index,
                shape: vm.stack_pos(0),
                x: vm.stack_pos(1),
                y: vm.stack_pos(2),
                flags: vm.stack_pos(3),
            }),
            SYS_ITEM_SHAPE => result.item_shapes.push(ItemShape {
                func: fn_index,
                item: vm.stack_pos(0),
                x: vm.stack_pos(1),
                y: vm.stack_pos(2),
                flags: vm.stack_pos(3),
                only_hid_page: vm.stack_pos(4),
            }),
            SYS_DROP_ITEM => result.drop_items.push(DropItem {
                func: fn_index,
                item: vm.stack_pos(0),
                x: vm.stack_pos(1),
                y: vm.stack_pos(2),
            }),
            SYS_GROUND_ITEM => result.ground_items.push(GroundItem {
                func: fn_index,
                item: vm.stack_pos(0),
                x: vm.stack_pos(1),
                y: vm.stack_pos(2),
            }),
            _ => {}
        });
    }

    result
}
