// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emoji catalog and detection.

/// Glyphs the profiler counts, in reporting order.
pub const EMOJI_CATALOG: &[&str] = &[
    "😀", "😁", "😂", "🤣", "😃", "😄", "😅", "😆", "😉", "😊", "😋", "😎", "😍", "😘", "🥰",
    "😗", "😙", "😚", "🙂", "🤗", "🤔", "🤨", "😐", "😑", "😶", "🙄", "😏", "😣", "😥", "😮",
    "🤐", "😯", "😪", "😫", "😴", "😌", "😛", "😜", "😝", "🤤", "😒", "😓", "😔", "😕", "🙃",
    "🤑", "😲", "☹️", "🙁", "😖", "😞", "😟", "😤", "😢", "😭", "😦", "😧", "😨", "😩", "🤯",
    "😬", "😰", "😱", "🥵", "🥶", "😳", "🤪", "😵", "😡", "😠", "🤬", "👍", "👎", "❤️", "🙌",
];

/// Position of a glyph in [`EMOJI_CATALOG`].
pub fn catalog_rank(emoji: &str) -> Option<usize> {
    EMOJI_CATALOG.iter().position(|e| *e == emoji)
}

/// True when `text` holds any pictographic scalar: anything outside the
/// basic multilingual plane, or the U+2600..U+27FF and U+2B50..U+2BFF
/// symbol blocks.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        let cp = u32::from(c);
        cp > 0xFFFF || (0x2600..=0x27FF).contains(&cp) || (0x2B50..=0x2BFF).contains(&cp)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_supplementary_and_symbol_blocks() {
        assert!(contains_emoji("lol 😂"));
        assert!(contains_emoji("love ❤"));
        assert!(contains_emoji("star ⭐"));
        assert!(contains_emoji("🫶"));
    }

    #[test]
    fn plain_text_has_no_emoji() {
        assert!(!contains_emoji(""));
        assert!(!contains_emoji("Achhha, ok!!"));
        assert!(!contains_emoji("naïve café"));
    }

    #[test]
    fn catalog_rank_follows_listing() {
        assert_eq!(catalog_rank("😀"), Some(0));
        assert_eq!(catalog_rank("😂"), Some(2));
        assert_eq!(catalog_rank("🐧"), None);
    }
}
