//! The canonical registry: 64 entries in registry order, exactly as authored.
//!
//! Names are display names and repeat (e.g. two `Qian`, two `Kun`). Several line
//! patterns also repeat; relationship lookups resolve those to the first entry.

use hexagram_types::Line::{self, Yang, Yin};

use crate::entry::RegistryEntry;

/// Number of entries in the canonical registry.
pub const CANONICAL_LEN: usize = 64;

/// `(id, name, lines)` in registry order. Line 1 (upper trigram, first line) first.
pub static CANONICAL: [(u32, &str, [Line; 6]); CANONICAL_LEN] = [
    (1, "Qian", [Yang, Yang, Yang, Yang, Yang, Yang]),
    (2, "Kun", [Yin, Yin, Yin, Yin, Yin, Yin]),
    (3, "Zhun", [Yang, Yin, Yin, Yang, Yin, Yin]),
    (4, "Meng", [Yin, Yang, Yin, Yin, Yin, Yang]),
    (5, "Xu", [Yang, Yang, Yang, Yin, Yang, Yin]),
    (6, "Song", [Yin, Yang, Yin, Yang, Yang, Yang]),
    (7, "Shi", [Yin, Yang, Yin, Yin, Yin, Yin]),
    (8, "Bi", [Yin, Yin, Yin, Yin, Yang, Yin]),
    (9, "Xiao Chu", [Yang, Yang, Yang, Yang, Yin, Yang]),
    (10, "Lu", [Yang, Yin, Yang, Yin, Yin, Yang]),
    (11, "Tai", [Yang, Yang, Yang, Yin, Yin, Yin]),
    (12, "Pi", [Yin, Yin, Yin, Yang, Yang, Yang]),
    (13, "Tong Ren", [Yang, Yang, Yang, Yin, Yang, Yang]),
    (14, "Da You", [Yang, Yang, Yang, Yang, Yin, Yang]),
    (15, "Qian", [Yin, Yin, Yin, Yang, Yin, Yin]),
    (16, "Yu", [Yin, Yang, Yang, Yang, Yin, Yin]),
    (17, "Sui", [Yang, Yang, Yin, Yang, Yin, Yang]),
    (18, "Gu", [Yin, Yang, Yang, Yin, Yang, Yin]),
    (19, "Lin", [Yin, Yin, Yin, Yang, Yang, Yin]),
    (20, "Guan", [Yang, Yang, Yang, Yin, Yin, Yin]),
    (21, "Shi He", [Yang, Yin, Yang, Yang, Yang, Yin]),
    (22, "Bi", [Yin, Yang, Yang, Yang, Yang, Yin]),
    (23, "Bo", [Yin, Yin, Yin, Yin, Yang, Yang]),
    (24, "Fu", [Yang, Yang, Yin, Yin, Yin, Yin]),
    (25, "Wu Wang", [Yang, Yang, Yang, Yin, Yang, Yin]),
    (26, "Da Zhu", [Yang, Yang, Yang, Yang, Yin, Yin]),
    (27, "Yi", [Yang, Yin, Yin, Yin, Yang, Yin]),
    (28, "Da Guo", [Yin, Yang, Yang, Yang, Yin, Yang]),
    (29, "Kan", [Yin, Yang, Yin, Yin, Yang, Yin]),
    (30, "Li", [Yang, Yin, Yang, Yang, Yin, Yang]),
    (31, "Xian", [Yin, Yin, Yin, Yang, Yang, Yin]),
    (32, "Heng", [Yang, Yang, Yang, Yin, Yin, Yang]),
    (33, "Dun", [Yang, Yin, Yin, Yin, Yin, Yin]),
    (34, "Da Zhuang", [Yang, Yang, Yang, Yang, Yang, Yin]),
    (35, "Jin", [Yin, Yin, Yang, Yang, Yang, Yin]),
    (36, "Ming Yi", [Yang, Yang, Yin, Yin, Yang, Yin]),
    (37, "Jia Ren", [Yang, Yin, Yang, Yang, Yang, Yang]),
    (38, "Kui", [Yang, Yang, Yang, Yin, Yin, Yin]),
    (39, "Jian", [Yin, Yin, Yang, Yang, Yin, Yin]),
    (40, "Jie", [Yang, Yang, Yin, Yin, Yang, Yang]),
    (41, "Sun", [Yin, Yang, Yin, Yin, Yang, Yang]),
    (42, "Yi", [Yang, Yin, Yang, Yang, Yang, Yin]),
    (43, "Guai", [Yang, Yang, Yang, Yang, Yang, Yin]),
    (44, "Gou", [Yang, Yang, Yang, Yang, Yang, Yin]),
    (45, "Cui", [Yin, Yin, Yin, Yin, Yin, Yang]),
    (46, "Sheng", [Yang, Yang, Yang, Yang, Yang, Yin]),
    (47, "Kun", [Yin, Yin, Yang, Yang, Yin, Yin]),
    (48, "Jing", [Yin, Yang, Yang, Yang, Yang, Yin]),
    (49, "Ge", [Yang, Yang, Yang, Yang, Yang, Yin]),
    (50, "Ding", [Yang, Yin, Yin, Yang, Yin, Yang]),
    (51, "Zhen", [Yang, Yang, Yin, Yin, Yang, Yang]),
    (52, "Gen", [Yin, Yin, Yang, Yang, Yang, Yang]),
    (53, "Jian", [Yin, Yin, Yin, Yang, Yang, Yin]),
    (54, "Gui Mei", [Yang, Yang, Yin, Yin, Yin, Yin]),
    (55, "Feng", [Yang, Yin, Yang, Yang, Yang, Yang]),
    (56, "Lu", [Yin, Yang, Yang, Yang, Yang, Yang]),
    (57, "Xun", [Yang, Yin, Yin, Yang, Yang, Yang]),
    (58, "Dui", [Yin, Yang, Yang, Yang, Yin, Yin]),
    (59, "Huan", [Yang, Yin, Yang, Yin, Yin, Yang]),
    (60, "Jie", [Yang, Yang, Yang, Yang, Yin, Yin]),
    (61, "Zhong Fu", [Yang, Yin, Yang, Yang, Yin, Yang]),
    (62, "Xiao Guo", [Yang, Yin, Yin, Yin, Yang, Yang]),
    (63, "Ji Ji", [Yang, Yin, Yang, Yin, Yang, Yang]),
    (64, "Wei Ji", [Yang, Yang, Yang, Yin, Yang, Yang]),
];

/// The canonical registry as owned entries with empty auxiliary data.
pub fn canonical() -> Vec<RegistryEntry> {
    CANONICAL
        .iter()
        .map(|(id, name, lines)| RegistryEntry::new(*id, *name, lines.to_vec()))
        .collect()
}
