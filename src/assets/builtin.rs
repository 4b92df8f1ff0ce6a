//! Assets shipped with the target engine, used as fallbacks for unset references.

pub const INTERNAL_ROOT: &str = "db://internal/";

pub const DEFAULT_SPRITE_URL: &str = "db://internal/image/default_sprite.png/default_sprite";
pub const DEFAULT_SPLASH_SPRITE_URL: &str =
    "db://internal/image/default_sprite_splash.png/default_sprite_splash";
pub const DEFAULT_PARTICLE_URL: &str = "db://internal/particle/atom.plist";
pub const DEFAULT_BTN_NORMAL_URL: &str =
    "db://internal/image/default_btn_normal.png/default_btn_normal";
pub const DEFAULT_BTN_PRESSED_URL: &str =
    "db://internal/image/default_btn_pressed.png/default_btn_pressed";
pub const DEFAULT_BTN_DISABLED_URL: &str =
    "db://internal/image/default_btn_disabled.png/default_btn_disabled";
pub const DEFAULT_PROGRESSBAR_URL: &str =
    "db://internal/image/default_progressbar.png/default_progressbar";
pub const DEFAULT_VSCROLLBAR_URL: &str =
    "db://internal/image/default_scrollbar_vertical.png/default_scrollbar_vertical";
pub const DEFAULT_HSCROLLBAR_URL: &str =
    "db://internal/image/default_scrollbar.png/default_scrollbar";
pub const DEFAULT_PANEL_URL: &str = "db://internal/image/default_panel.png/default_panel";

/// Every built-in URL a conversion may fall back to.
pub const ALL: &[&str] = &[
    DEFAULT_SPRITE_URL,
    DEFAULT_SPLASH_SPRITE_URL,
    DEFAULT_PARTICLE_URL,
    DEFAULT_BTN_NORMAL_URL,
    DEFAULT_BTN_PRESSED_URL,
    DEFAULT_BTN_DISABLED_URL,
    DEFAULT_PROGRESSBAR_URL,
    DEFAULT_VSCROLLBAR_URL,
    DEFAULT_HSCROLLBAR_URL,
    DEFAULT_PANEL_URL,
];

pub fn is_internal(url: &str) -> bool {
    url.starts_with(INTERNAL_ROOT)
}
