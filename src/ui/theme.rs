use crossterm::style::Color;
use once_cell::sync::OnceCell;

#[derive(Copy, Clone, Debug)]
pub enum ThemeKind {
    Light,
    Dark,
}

pub struct Theme {
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub detail: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            success: Color::DarkGreen,
            warning: Color::DarkYellow,
            error: Color::DarkRed,
            detail: Color::DarkMagenta,
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            detail: Color::Magenta,
        }
    }
}

impl From<ThemeKind> for Theme {
    fn from(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }
}

static THEME: OnceCell<Theme> = OnceCell::new();

pub fn configure_theme(kind: ThemeKind) {
    let _ = THEME.set(Theme::from(kind));
}

pub fn get_theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}

pub fn detect_theme_kind_from_env() -> ThemeKind {
    // COLORFGBG looks like "15;0" (fg;background); dark backgrounds sit in
    // the 0-7 range.
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg_str) = val.split(';').next_back() {
            if let Ok(bg) = bg_str.parse::<u8>() {
                if bg >= 8 {
                    return ThemeKind::Light;
                }
                return ThemeKind::Dark;
            }
        }
    }

    ThemeKind::Dark
}
