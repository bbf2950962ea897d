//! Animation timing and decorative backdrop geometry.
//!
//! Every value here is a pure function of an index so that two renders of the
//! page are frame-for-frame identical. The UI turns these into CSS keyframe
//! animations; none of them feed back into application state.

use crate::types::IconTag;

/// Delay between consecutive link cards entering, in seconds.
pub const STAGGER_STEP_SECS: f32 = 0.08;

/// Duration of one card's enter animation, in seconds.
pub const CARD_ENTER_SECS: f32 = 0.5;

/// Enter delay for the card at `index`. Strictly increasing in `index`.
pub fn stagger_delay(index: usize) -> f32 {
    index as f32 * STAGGER_STEP_SECS
}

/// Two-stop gradient palette for a backdrop node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePalette {
    TealBlue,
    PurplePink,
}

impl NodePalette {
    pub fn class(&self) -> &'static str {
        match self {
            NodePalette::TealBlue => "node-teal",
            NodePalette::PurplePink => "node-purple",
        }
    }
}

/// A drifting circle in the backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingNode {
    pub size_px: u32,
    pub left_pct: u32,
    pub top_pct: u32,
    pub period_secs: u32,
    pub palette: NodePalette,
}

pub const FLOATING_NODE_COUNT: usize = 6;

pub fn floating_nodes() -> Vec<FloatingNode> {
    (0..FLOATING_NODE_COUNT as u32)
        .map(|i| FloatingNode {
            size_px: 20 + i * 5,
            left_pct: 10 + i * 15,
            top_pct: 15 + i * 12,
            period_secs: 10 + i * 2,
            palette: if i % 2 == 0 {
                NodePalette::TealBlue
            } else {
                NodePalette::PurplePink
            },
        })
        .collect()
}

/// A pulsing hairline connecting nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionLine {
    pub width_px: u32,
    /// Width at the peak of the pulse.
    pub peak_width_px: u32,
    pub rotate_deg: u32,
    pub left_pct: u32,
    pub top_pct: u32,
    pub period_secs: u32,
}

pub const CONNECTION_LINE_COUNT: usize = 8;

pub fn connection_lines() -> Vec<ConnectionLine> {
    (0..CONNECTION_LINE_COUNT as u32)
        .map(|i| ConnectionLine {
            width_px: 100 + i * 50,
            peak_width_px: 150 + i * 50,
            rotate_deg: 45 * i,
            left_pct: 10 + i * 10,
            top_pct: 20 + i * 8,
            period_secs: 8 + i,
        })
        .collect()
}

/// A slowly bobbing glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingGlyph {
    pub icon: IconTag,
    pub size_px: u32,
    pub left_pct: u32,
    pub top_pct: u32,
    pub period_secs: u32,
}

pub const FLOATING_GLYPH_COUNT: usize = 5;

pub fn floating_glyphs() -> Vec<FloatingGlyph> {
    (0..FLOATING_GLYPH_COUNT as u32)
        .map(|i| FloatingGlyph {
            icon: match i % 3 {
                0 => IconTag::Code,
                1 => IconTag::Hash,
                _ => IconTag::Database,
            },
            size_px: 24 + i * 4,
            left_pct: 15 + i * 20,
            top_pct: 10 + i * 15,
            period_secs: 10 + i * 2,
        })
        .collect()
}

/// Peak drift distance of the floating nodes, in px.
pub const NODE_DRIFT_PX: i32 = 20;

/// Keyframe name for a square drift of `px`; negative distances run the path
/// in the opposite direction.
pub fn drift_animation_name(px: i32) -> String {
    if px < 0 {
        format!("drift-{}-reverse", px.unsigned_abs())
    } else {
        format!("drift-{}", px)
    }
}

/// A large blurred color field.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub class: &'static str,
    /// Peak drift distance in px. Negative drifts left/down first.
    pub drift_px: i32,
    pub period_secs: u32,
}

impl Orb {
    pub fn animation_name(&self) -> String {
        drift_animation_name(self.drift_px)
    }
}

pub fn orbs() -> [Orb; 2] {
    [
        Orb {
            class: "orb orb-purple",
            drift_px: 30,
            period_secs: 25,
        },
        Orb {
            class: "orb orb-blue",
            drift_px: -40,
            period_secs: 30,
        },
    ]
}

/// Decorative shell transcript in the lower third of the backdrop.
pub const TERMINAL_LINES: &[(&str, bool)] = &[
    ("$ cd /home/user", false),
    ("$ ls -la", false),
    ("total 32", false),
    ("drwxr-xr-x 5 user user 4096 Mar 21 14:30 .", false),
    ("drwxr-xr-x 22 user user 4096 Mar 21 14:15 ..", false),
    ("-rw-r--r-- 1 user user 220 Mar 21 13:45 .bash_logout", false),
    ("-rw-r--r-- 1 user user 3771 Mar 21 13:45 .bashrc", false),
    ("drwxr-xr-x 3 user user 4096 Mar 21 14:00 .config", false),
    ("-rw-r--r-- 1 user user 807 Mar 21 13:45 .profile", false),
    ("$ node app.js", false),
    ("Server running on port 3000", true),
    ("Connected to blockchain network", true),
];

/// Decorative hashes in the top-right corner of the backdrop.
pub const HASH_LINES: &[&str] = &[
    "0x7f9e8d7c6b5a4321",
    "0x1a2b3c4d5e6f7890",
    "0xabcdef0123456789",
    "0x9876543210fedcba",
];
