pub mod colors;
pub mod system;

use std::fmt;

use thiserror::Error;

use colors::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// Every visual role the landing stylesheet references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Surface,
    Text,
    Border,
    Selection,
    NavSurface,
    NavIcon,
    NavIconHover,
    Accent,
    OnAccent,
    AccentHover,
    AccentShadow,
    AccentText,
    BadgeSurface,
    BadgeBorder,
    HeadlineFrom,
    HeadlineVia,
    Muted,
    SecondaryText,
    SecondaryHover,
    CardSurface,
    CardBorder,
    CardBorderHover,
    IconTile,
    IconTileShadow,
    BulletText,
    Success,
    FooterSurface,
    FooterText,
    TerminalSurface,
    TerminalBorder,
    TerminalText,
    TerminalComment,
    TerminalCommand,
    TerminalOutput,
    TerminalLink,
    GlowFrom,
    GlowTo,
}

impl Role {
    pub const COUNT: usize = 37;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Surface,
        Role::Text,
        Role::Border,
        Role::Selection,
        Role::NavSurface,
        Role::NavIcon,
        Role::NavIconHover,
        Role::Accent,
        Role::OnAccent,
        Role::AccentHover,
        Role::AccentShadow,
        Role::AccentText,
        Role::BadgeSurface,
        Role::BadgeBorder,
        Role::HeadlineFrom,
        Role::HeadlineVia,
        Role::Muted,
        Role::SecondaryText,
        Role::SecondaryHover,
        Role::CardSurface,
        Role::CardBorder,
        Role::CardBorderHover,
        Role::IconTile,
        Role::IconTileShadow,
        Role::BulletText,
        Role::Success,
        Role::FooterSurface,
        Role::FooterText,
        Role::TerminalSurface,
        Role::TerminalBorder,
        Role::TerminalText,
        Role::TerminalComment,
        Role::TerminalCommand,
        Role::TerminalOutput,
        Role::TerminalLink,
        Role::GlowFrom,
        Role::GlowTo,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// CSS custom property carrying this role's color.
    pub fn var_name(self) -> &'static str {
        match self {
            Role::Surface => "--surface",
            Role::Text => "--text",
            Role::Border => "--border",
            Role::Selection => "--selection",
            Role::NavSurface => "--nav-surface",
            Role::NavIcon => "--nav-icon",
            Role::NavIconHover => "--nav-icon-hover",
            Role::Accent => "--accent",
            Role::OnAccent => "--on-accent",
            Role::AccentHover => "--accent-hover",
            Role::AccentShadow => "--accent-shadow",
            Role::AccentText => "--accent-text",
            Role::BadgeSurface => "--badge-surface",
            Role::BadgeBorder => "--badge-border",
            Role::HeadlineFrom => "--headline-from",
            Role::HeadlineVia => "--headline-via",
            Role::Muted => "--muted",
            Role::SecondaryText => "--secondary-text",
            Role::SecondaryHover => "--secondary-hover",
            Role::CardSurface => "--card-surface",
            Role::CardBorder => "--card-border",
            Role::CardBorderHover => "--card-border-hover",
            Role::IconTile => "--icon-tile",
            Role::IconTileShadow => "--icon-tile-shadow",
            Role::BulletText => "--bullet-text",
            Role::Success => "--success",
            Role::FooterSurface => "--footer-surface",
            Role::FooterText => "--footer-text",
            Role::TerminalSurface => "--terminal-surface",
            Role::TerminalBorder => "--terminal-border",
            Role::TerminalText => "--terminal-text",
            Role::TerminalComment => "--terminal-comment",
            Role::TerminalCommand => "--terminal-command",
            Role::TerminalOutput => "--terminal-output",
            Role::TerminalLink => "--terminal-link",
            Role::GlowFrom => "--glow-from",
            Role::GlowTo => "--glow-to",
        }
    }
}

/// One row of the theme table: the light and dark value of a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub role: Role,
    pub light: Color,
    pub dark: Color,
}

const fn swatch(role: Role, light: Color, dark: Color) -> Swatch {
    Swatch { role, light, dark }
}

pub const SWATCHES: &[Swatch] = &[
    swatch(Role::Surface, WHITE, BLACK),
    swatch(Role::Text, SLATE_900, SLATE_50),
    swatch(Role::Border, SLATE_200, SLATE_800),
    swatch(Role::Selection, BLUE_500_30, BLUE_500_30),
    swatch(Role::NavSurface, WHITE_80, BLACK_80),
    swatch(Role::NavIcon, SLATE_500, SLATE_400),
    swatch(Role::NavIconHover, SLATE_900, SLATE_50),
    swatch(Role::Accent, BLUE_600, BLUE_600),
    swatch(Role::OnAccent, WHITE, WHITE),
    swatch(Role::AccentHover, BLUE_500, BLUE_500),
    swatch(Role::AccentShadow, BLUE_500_25, BLUE_500_25),
    swatch(Role::AccentText, BLUE_600, BLUE_400),
    swatch(Role::BadgeSurface, BLUE_100, BLUE_900_30),
    swatch(Role::BadgeBorder, BLUE_200, BLUE_800),
    swatch(Role::HeadlineFrom, SLATE_900, WHITE),
    swatch(Role::HeadlineVia, BLUE_800, BLUE_200),
    swatch(Role::Muted, SLATE_600, SLATE_400),
    swatch(Role::SecondaryText, SLATE_900, SLATE_200),
    swatch(Role::SecondaryHover, SLATE_50, SLATE_900),
    swatch(Role::CardSurface, SLATE_50, SLATE_900_50),
    swatch(Role::CardBorder, SLATE_100, SLATE_800),
    swatch(Role::CardBorderHover, BLUE_500_50, BLUE_500_50),
    swatch(Role::IconTile, WHITE, SLATE_800),
    swatch(Role::IconTileShadow, BLACK_5, BLACK_5),
    swatch(Role::BulletText, SLATE_700, SLATE_300),
    swatch(Role::Success, GREEN_500, GREEN_500),
    swatch(Role::FooterSurface, SLATE_50, BLACK),
    swatch(Role::FooterText, SLATE_500, SLATE_400),
    swatch(Role::TerminalSurface, SLATE_900, SLATE_900),
    swatch(Role::TerminalBorder, SLATE_800, SLATE_800),
    swatch(Role::TerminalText, WHITE, WHITE),
    swatch(Role::TerminalComment, SLATE_400, SLATE_400),
    swatch(Role::TerminalCommand, PURPLE_400, PURPLE_400),
    swatch(Role::TerminalOutput, GREEN_400, GREEN_400),
    swatch(Role::TerminalLink, BLUE_400, BLUE_400),
    swatch(Role::GlowFrom, BLUE_500, BLUE_500),
    swatch(Role::GlowTo, PURPLE_500, PURPLE_500),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("no light/dark colors defined for role {0:?}")]
    MissingRole(Role),
    #[error("role {0:?} is defined more than once")]
    DuplicateRole(Role),
}

/// Resolved colors for one theme mode, indexed by role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSet {
    mode: ThemeMode,
    colors: [Color; Role::COUNT],
}

impl TokenSet {
    pub fn get(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// Inline `style` value declaring every role as a CSS custom property.
    pub fn css_vars(&self) -> String {
        let mut css = String::new();
        for role in Role::ALL {
            css.push_str(role.var_name());
            css.push_str(": ");
            css.push_str(self.get(role).css);
            css.push_str("; ");
        }
        css.push_str(match self.mode {
            ThemeMode::Light => "color-scheme: light;",
            ThemeMode::Dark => "color-scheme: dark;",
        });
        css
    }
}

/// Validated theme table. Building one proves every role has a light and a
/// dark color, after which lookups cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    light: TokenSet,
    dark: TokenSet,
}

impl Palette {
    pub fn standard() -> Result<Self, ThemeError> {
        Self::from_swatches(SWATCHES)
    }

    pub fn from_swatches(swatches: &[Swatch]) -> Result<Self, ThemeError> {
        let mut rows: [Option<Swatch>; Role::COUNT] = [None; Role::COUNT];
        for swatch in swatches {
            let slot = &mut rows[swatch.role.index()];
            if slot.is_some() {
                return Err(ThemeError::DuplicateRole(swatch.role));
            }
            *slot = Some(*swatch);
        }

        let mut light = [BLACK; Role::COUNT];
        let mut dark = [BLACK; Role::COUNT];
        for role in Role::ALL {
            let row = rows[role.index()].ok_or(ThemeError::MissingRole(role))?;
            light[role.index()] = row.light;
            dark[role.index()] = row.dark;
        }

        Ok(Self {
            light: TokenSet { mode: ThemeMode::Light, colors: light },
            dark: TokenSet { mode: ThemeMode::Dark, colors: dark },
        })
    }

    pub fn resolve(&self, mode: ThemeMode) -> &TokenSet {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
