//! Fixed process-wide stylesheet for select widgets.
//!
//! The first mounted select installs the stylesheet; every later mount gets
//! the same shared instance. Installation is keyed by [`STYLE_ID`] and
//! happens exactly once per process, however many selects come and go.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::types::{Color, Style};

/// Identifier of the installed stylesheet block.
pub const STYLE_ID: &str = "seldom-select";

/// Named styles for every visual part of a select. State styles (selected,
/// disabled, highlight) are merged over `option` independently, so an option
/// can carry any combination of them at once.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub select: Style,
    pub control: Style,
    pub menu: Style,
    pub option: Style,
    pub selected: Style,
    pub highlight: Style,
    pub disabled: Style,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            select: Style::new(),
            control: Style::new()
                .background(Color::rgb(0xff, 0xff, 0xff))
                .foreground(Color::rgb(0x22, 0x22, 0x22)),
            menu: Style::new()
                .background(Color::rgb(0xff, 0xff, 0xff))
                .foreground(Color::rgb(0x22, 0x22, 0x22)),
            option: Style::new(),
            selected: Style::new().background(Color::rgb(0xf0, 0xf0, 0xf0)),
            highlight: Style::new().background(Color::rgb(0xe6, 0xf7, 0xff)),
            disabled: Style::new().dim(),
        }
    }
}

static STYLES: OnceLock<Stylesheet> = OnceLock::new();
static INSTALLS: AtomicUsize = AtomicUsize::new(0);

/// Install the stylesheet if this is the first mount, then return it.
/// Idempotent: repeated calls return the same instance.
pub fn ensure_styles() -> &'static Stylesheet {
    STYLES.get_or_init(|| {
        INSTALLS.fetch_add(1, Ordering::SeqCst);
        log::debug!("[styles] installing stylesheet {STYLE_ID}");
        Stylesheet::default()
    })
}

/// How many times the stylesheet has been installed. Stays at 1 no matter
/// how many selects mount.
pub fn install_count() -> usize {
    INSTALLS.load(Ordering::SeqCst)
}
