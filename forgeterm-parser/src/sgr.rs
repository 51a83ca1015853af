//! SGR (Select Graphic Rendition) code application.
//!
//! Codes outside the supported set are ignored without touching state,
//! so hostile or garbage sequences can never corrupt the parser.

use forgeterm_core::{AnsiColor, Style, StyleFlags};

/// Apply one SGR parameter to the style state
pub(crate) fn apply(style: &mut Style, code: u16) {
    match code {
        0 => style.reset(),
        1 => style.flags.insert(StyleFlags::BOLD),
        2 => style.flags.insert(StyleFlags::DIM),
        3 => style.flags.insert(StyleFlags::ITALIC),
        4 => style.flags.insert(StyleFlags::UNDERLINE),
        7 => style.flags.insert(StyleFlags::INVERSE),
        8 => style.flags.insert(StyleFlags::HIDDEN),
        // Normal intensity clears both weight attributes
        22 => {
            style.flags.remove(StyleFlags::BOLD);
            style.flags.remove(StyleFlags::DIM);
        }
        23 => style.flags.remove(StyleFlags::ITALIC),
        24 => style.flags.remove(StyleFlags::UNDERLINE),
        27 => style.flags.remove(StyleFlags::INVERSE),
        28 => style.flags.remove(StyleFlags::HIDDEN),
        30..=37 => style.fg = AnsiColor::from_sgr_normal((code - 30) as u8),
        39 => style.fg = None,
        40..=47 => style.bg = AnsiColor::from_sgr_normal((code - 40) as u8),
        49 => style.bg = None,
        90..=97 => style.fg = AnsiColor::from_sgr_bright((code - 90) as u8),
        100..=107 => style.bg = AnsiColor::from_sgr_bright((code - 100) as u8),
        other => log::trace!("ignoring unsupported SGR code {}", other),
    }
}
