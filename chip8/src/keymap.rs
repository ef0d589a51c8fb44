/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: char) -> Option<u8> {
    match key.to_ascii_uppercase() {
        'X' => Some(0x0),
        '1' => Some(0x1),
        '2' => Some(0x2),
        '3' => Some(0x3),
        'Q' => Some(0x4),
        'W' => Some(0x5),
        'E' => Some(0x6),
        'A' => Some(0x7),
        'S' => Some(0x8),
        'D' => Some(0x9),
        'Z' => Some(0xA),
        'C' => Some(0xB),
        '4' => Some(0xC),
        'R' => Some(0xD),
        'F' => Some(0xE),
        'V' => Some(0xF),
        _ => None,
    }
}

/// Maps every character of `keys` through `keymap`, failing on the first unmapped one
pub fn parse_keys(keys: &str) -> Result<Vec<u8>, char> {
    keys.chars()
        .map(|key| keymap(key).ok_or(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_the_keypad() {
        let mut seen: Vec<u8> = "1234qwerasdfzxcv".chars().filter_map(keymap).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0x0..=0xF).collect::<Vec<u8>>());
    }

    #[test]
    fn test_keymap_ignores_case() {
        assert_eq!(keymap('w'), Some(0x5));
        assert_eq!(keymap('W'), Some(0x5));
    }

    #[test]
    fn test_parse_keys_rejects_unmapped() {
        assert_eq!(parse_keys("w4"), Ok(vec![0x5, 0xC]));
        assert_eq!(parse_keys("wp"), Err('p'));
    }
}
