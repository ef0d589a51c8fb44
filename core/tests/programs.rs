use emu8_core::{Chip8, Chip8Error, STEPS_PER_TIMER_TICK};

fn boot(rom: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_seed(8);
    chip8.reset();
    chip8.load(rom).unwrap();
    chip8
}

fn steps(chip8: &mut Chip8, count: usize) {
    for _ in 0..count {
        chip8.step().unwrap();
    }
}

#[test]
fn test_clear_and_load_registers() {
    let mut chip8 = boot(&[0x00, 0xE0, 0x60, 0x05, 0x61, 0x0A, 0x71, 0x01]);
    steps(&mut chip8, 4);
    assert!(chip8.screen().iter().all(|pixel| !pixel));
    assert_eq!(chip8.state().v[0x0], 5);
    assert_eq!(chip8.state().v[0x1], 11);
}

#[test]
fn test_call_then_return() {
    // 0x200: call 0x206
    // 0x202: v0 = 1
    // 0x204: jump 0x204
    // 0x206: v1 = 2
    // 0x208: return
    let mut chip8 = boot(&[
        0x22, 0x06, 0x60, 0x01, 0x12, 0x04, 0x61, 0x02, 0x00, 0xEE,
    ]);
    steps(&mut chip8, 1);
    assert_eq!(chip8.state().pc, 0x206);
    assert_eq!(chip8.state().sp, 1);
    steps(&mut chip8, 2);
    assert_eq!(chip8.state().pc, 0x202);
    assert_eq!(chip8.state().sp, 0);
    steps(&mut chip8, 1);
    assert_eq!(chip8.state().v[..2], [1, 2]);
}

#[test]
fn test_runaway_recursion_overflows_the_stack() {
    // 0x200: call 0x200
    let mut chip8 = boot(&[0x22, 0x00]);
    steps(&mut chip8, 16);
    let err = chip8.step().unwrap_err();
    assert!(matches!(err, Chip8Error::StackOverflow { depth: 16, .. }));
    assert_eq!(chip8.state().sp, 16);
}

#[test]
fn test_drawing_twice_erases() {
    // i = glyph for v0 (0); draw 5 rows at (v0, v0) twice
    let mut chip8 = boot(&[0xF0, 0x29, 0xD0, 0x05, 0xD0, 0x05]);
    steps(&mut chip8, 2);
    let drawn = chip8.screen();
    assert_eq!(drawn.iter().filter(|&&pixel| pixel).count(), 14);
    assert_eq!(chip8.state().v[0xF], 0);

    steps(&mut chip8, 1);
    assert!(chip8.screen().iter().all(|pixel| !pixel));
    assert_eq!(chip8.state().v[0xF], 1);
}

#[test]
fn test_screen_is_row_major() {
    // v0 = 3, v1 = 2; i = 0x20A; draw 1 row; 0x208 jump 0x208; 0x20A sprite 0x80
    let mut chip8 = boot(&[
        0x60, 0x03, 0x61, 0x02, 0xA2, 0x0A, 0xD0, 0x11, 0x12, 0x08, 0x80,
    ]);
    steps(&mut chip8, 4);
    let screen = chip8.screen();
    let lit: Vec<usize> = (0..screen.len()).filter(|&i| screen[i]).collect();
    assert_eq!(lit, vec![3 + 64 * 2]);
}

#[test]
fn test_wait_for_key() {
    // 0x200: v3 = key; 0x202: v4 = 1
    let mut chip8 = boot(&[0xF3, 0x0A, 0x64, 0x01]);
    for _ in 0..5 {
        chip8.step().unwrap();
        assert_eq!(chip8.state().pc, 0x200);
        chip8.tick_timers(|| {});
    }

    chip8.keypress(5, true).unwrap();
    steps(&mut chip8, 1);
    assert_eq!(chip8.state().v[0x3], 5);
    assert_eq!(chip8.state().pc, 0x202);
    steps(&mut chip8, 1);
    assert_eq!(chip8.state().pc, 0x204);
}

#[test]
fn test_skip_on_key() {
    // v0 = 7; skip if key v0 pressed; v1 = 1; v2 = 2
    let mut chip8 = boot(&[0x60, 0x07, 0xE0, 0x9E, 0x61, 0x01, 0x62, 0x02]);
    chip8.keypress(7, true).unwrap();
    steps(&mut chip8, 3);
    assert_eq!(chip8.state().v[0x1], 0);
    assert_eq!(chip8.state().v[0x2], 2);
}

#[test]
fn test_sound_timer_beeps_once() {
    // v0 = 3; sound = v0; delay = v0
    let mut chip8 = boot(&[0x60, 0x03, 0xF0, 0x18, 0xF0, 0x15]);
    steps(&mut chip8, 3);

    let mut beeps = 0;
    for _ in 0..3 {
        chip8.tick_timers(|| beeps += 1);
    }
    assert_eq!(beeps, 1);
    assert_eq!(chip8.state().timers.sound, 0);

    chip8.tick_timers(|| beeps += 1);
    assert_eq!(beeps, 1);
    assert_eq!(chip8.state().timers.delay, 0);
}

#[test]
fn test_delay_timer_countdown_loop() {
    // 0x200: v0 = 2; delay = v0
    // 0x204: v1 = delay; skip if v1 == 0; jump 0x204
    // 0x20A: jump 0x20A
    let mut chip8 = boot(&[
        0x60, 0x02, 0xF0, 0x15, 0xF1, 0x07, 0x31, 0x00, 0x12, 0x04, 0x12, 0x0A,
    ]);
    for _ in 0..3 {
        for _ in 0..STEPS_PER_TIMER_TICK {
            chip8.step().unwrap();
        }
        chip8.tick_timers(|| {});
    }
    assert_eq!(chip8.state().pc, 0x20A);
}

#[test]
fn test_bcd_round_trip_through_registers() {
    // v5 = 254; i = 0x300; bcd v5; v0..v2 = mem[i..]
    let mut chip8 = boot(&[0x65, 0xFE, 0xA3, 0x00, 0xF5, 0x33, 0xF2, 0x65]);
    steps(&mut chip8, 4);
    assert_eq!(chip8.state().v[..3], [2, 5, 4]);
    assert_eq!(chip8.state().i, 0x303);
}

#[test]
fn test_unimplemented_opcode_halts() {
    let mut chip8 = boot(&[0x60, 0x01, 0xF0, 0xFF]);
    steps(&mut chip8, 1);
    match chip8.step().unwrap_err() {
        Chip8Error::UnimplementedOpcode { opcode, nibbles } => {
            assert_eq!(opcode, 0xF0FF);
            assert_eq!(nibbles, (0xF, 0x0, 0xF, 0xF));
        }
        other => panic!("unexpected error {}", other),
    }
    assert_eq!(chip8.state().pc, 0x202);
}

#[test]
fn test_jump_off_the_end_of_memory() {
    // v0 = 0xFF; jump to v0 + 0xFFF
    let mut chip8 = boot(&[0x60, 0xFF, 0xBF, 0xFF]);
    steps(&mut chip8, 2);
    assert_eq!(chip8.state().pc, 0x10FE);
    assert!(matches!(
        chip8.step(),
        Err(Chip8Error::OutOfBounds { address: 0x10FE })
    ));
}
