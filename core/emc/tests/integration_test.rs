use emc::{load_program, trace, DEFAULT_STEP_LIMIT};

fn word(opcode: u8, param: u8) -> u16 {
    0x4000 | ((opcode as u16) << 8) | param as u16
}

fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = tag.to_vec();
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(data);
    if data.len() % 2 != 0 {
        out.push(0);
    }
    out
}

fn emc2_file(ordr_words: &[u16], data_words: &[u16]) -> Vec<u8> {
    let ordr_bytes: Vec<u8> = ordr_words.iter().flat_map(|w| w.to_be_bytes()).collect();
    let data_bytes: Vec<u8> = data_words.iter().flat_map(|w| w.to_be_bytes()).collect();

    let mut body = Vec::new();
    body.extend_from_slice(b"EMC2");
    body.extend_from_slice(&chunk(b"ORDR", &ordr_bytes));
    body.extend_from_slice(&chunk(b"DATA", &data_bytes));

    let mut form = Vec::new();
    form.extend_from_slice(b"FORM");
    form.extend_from_slice(&(body.len() as u32).to_be_bytes());
    form.extend_from_slice(&body);
    form
}

/// Exercises `load_program` -> `trace` end to end across two functions
/// producing two different syscall kinds, verifying both the IFF/ORDR/DATA
/// plumbing and the stack argument order the trace driver reads.
#[test]
fn traces_scene_shape_and_item_shape_across_two_functions() {
    // Function 0: sceneShape(shape=42, x=10, y=20, flags=9), then an
    // invalid opcode (19) as an explicit halt so execution doesn't fall
    // through into function 1's code.
    // Push order is reversed relative to the captured fields, since
    // `stackPos(0)` reads the most recently pushed value.
    let fn0 = [
        word(3, 9),    // flags
        word(3, 20),   // y
        word(3, 10),   // x
        word(3, 42),   // shape
        word(14, 0x0D), // sysCall sceneShape
        word(19, 0),   // halt (no opcode 19)
    ];
    // Function 1: itemShape(item=99, x=15, y=30, flags=7, onlyHidPage=1).
    let fn1 = [
        word(3, 1),    // onlyHidPage
        word(3, 7),    // flags
        word(3, 30),   // y
        word(3, 15),   // x
        word(3, 99),   // item
        word(14, 0x62), // sysCall itemShape
        word(19, 0),   // halt
    ];

    let mut data_words = Vec::new();
    data_words.extend_from_slice(&fn0);
    let fn1_start = data_words.len() as u16;
    data_words.extend_from_slice(&fn1);

    let ordr = [0u16, fn1_start];
    let file = emc2_file(&ordr, &data_words);

    let program = load_program(&file).unwrap();
    let result = trace(&program, DEFAULT_STEP_LIMIT);

    assert_eq!(result.scene_shapes.len(), 1);
    let scene = &result.scene_shapes[0];
    assert_eq!(scene.func, 0);
    assert_eq!((scene.shape, scene.x, scene.y, scene.flags), (42, 10, 20, 9));

    assert_eq!(result.item_shapes.len(), 1);
    let item = &result.item_shapes[0];
    assert_eq!(item.func, 1);
    assert_eq!(
        (item.item, item.x, item.y, item.flags, item.only_hid_page),
        (99, 15, 30, 7, 1)
    );

    assert!(result.scene_anim_shapes.is_empty());
    assert!(result.drop_items.is_empty());
    assert!(result.ground_items.is_empty());
}

#[test]
fn wrong_form_type_is_rejected() {
    let mut body = Vec::new();
    body.extend_from_slice(b"FORM");
    body.extend_from_slice(&0u32.to_be_bytes());
    let mut form = Vec::new();
    form.extend_from_slice(b"FORM");
    form.extend_from_slice(&(body.len() as u32).to_be_bytes());
    form.extend_from_slice(&body);

    let err = load_program(&form).unwrap_err();
    assert!(matches!(err, emc::EmcError::NotEmc2Form(_)));
}
