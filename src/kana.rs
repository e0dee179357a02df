//! Kana categories: the fixed, ordered character lists and the anchor
//! markers bounding each category's table in the target source file.

use crate::codegen::AnchorRegion;

/// Gojūon-ordered hiragana. Order is significant: output tables preserve it.
pub const HIRAGANA: &[char] = &[
    'あ', 'い', 'う', 'え', 'お', //
    'か', 'き', 'く', 'け', 'こ', //
    'さ', 'し', 'す', 'せ', 'そ', //
    'た', 'ち', 'つ', 'て', 'と', //
    'な', 'に', 'ぬ', 'ね', 'の', //
    'は', 'ひ', 'ふ', 'へ', 'ほ', //
    'ま', 'み', 'む', 'め', 'も', //
    'や', 'ゆ', 'よ', //
    'ら', 'り', 'る', 'れ', 'ろ', //
    'わ', 'を', 'ん',
];

/// Gojūon-ordered katakana.
pub const KATAKANA: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', //
    'カ', 'キ', 'ク', 'ケ', 'コ', //
    'サ', 'シ', 'ス', 'セ', 'ソ', //
    'タ', 'チ', 'ツ', 'テ', 'ト', //
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', //
    'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', //
    'マ', 'ミ', 'ム', 'メ', 'モ', //
    'ヤ', 'ユ', 'ヨ', //
    'ラ', 'リ', 'ル', 'レ', 'ロ', //
    'ワ', 'ヲ', 'ン',
];

/// End-of-table sentinel in the target file. Both table functions carry
/// it right before their `_ =>` arm; non-greedy matching from each
/// category's start marker keeps the two regions disjoint.
const END_SENTINEL: &str = "        // Default: boxed fallback for unknown characters";

/// A disjoint, ordered set of characters sharing one table in the
/// target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hiragana,
    Katakana,
}

/// Categories in output order.
pub const ALL_CATEGORIES: &[Category] = &[Category::Hiragana, Category::Katakana];

impl Category {
    /// Lowercase identifier, used for file names.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Hiragana => "hiragana",
            Category::Katakana => "katakana",
        }
    }

    /// Human-readable name for the progress transcript.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Hiragana => "Hiragana",
            Category::Katakana => "Katakana",
        }
    }

    /// The ordered character list for this category.
    pub fn characters(&self) -> &'static [char] {
        match self {
            Category::Hiragana => HIRAGANA,
            Category::Katakana => KATAKANA,
        }
    }

    /// File name of the intermediate table artifact.
    pub fn artifact_file(&self) -> &'static str {
        match self {
            Category::Hiragana => "hiragana_ascii_art.txt",
            Category::Katakana => "katakana_ascii_art.txt",
        }
    }

    /// The anchor markers bounding this category's table in the target
    /// source file: the table function's opening through the fallback
    /// sentinel.
    pub fn anchor(&self) -> AnchorRegion {
        let start = match self {
            Category::Hiragana => {
                "fn hiragana_art(character: &str) -> Vec<String> {\n    match character {"
            }
            Category::Katakana => {
                "fn katakana_art(character: &str) -> Vec<String> {\n    match character {"
            }
        };
        AnchorRegion::new(self.name(), start, END_SENTINEL)
    }
}
