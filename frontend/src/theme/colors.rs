/// A named color value. `name` follows the palette naming used in the
/// design files (`slate-900`, `blue-900/30`), `css` is what ends up in the
/// stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub css: &'static str,
}

impl Color {
    const fn new(name: &'static str, css: &'static str) -> Self {
        Self { name, css }
    }

    /// Whether an opaque `#rrggbb` color reads as light (relative luminance
    /// above one half). Translucent colors are never considered light.
    pub fn is_light(&self) -> bool {
        let hex = match self.css.strip_prefix('#') {
            Some(hex) if hex.len() == 6 => hex,
            _ => return false,
        };
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| f32::from(v) / 255.0)
                .unwrap_or(0.0)
        };
        let luminance = 0.2126 * channel(0) + 0.7152 * channel(2) + 0.0722 * channel(4);
        luminance > 0.5
    }
}

pub const WHITE: Color = Color::new("white", "#ffffff");
pub const WHITE_80: Color = Color::new("white/80", "rgba(255, 255, 255, 0.8)");
pub const BLACK: Color = Color::new("black", "#000000");
pub const BLACK_5: Color = Color::new("black/5", "rgba(0, 0, 0, 0.05)");
pub const BLACK_80: Color = Color::new("black/80", "rgba(0, 0, 0, 0.8)");

pub const SLATE_50: Color = Color::new("slate-50", "#f8fafc");
pub const SLATE_100: Color = Color::new("slate-100", "#f1f5f9");
pub const SLATE_200: Color = Color::new("slate-200", "#e2e8f0");
pub const SLATE_300: Color = Color::new("slate-300", "#cbd5e1");
pub const SLATE_400: Color = Color::new("slate-400", "#94a3b8");
pub const SLATE_500: Color = Color::new("slate-500", "#64748b");
pub const SLATE_600: Color = Color::new("slate-600", "#475569");
pub const SLATE_700: Color = Color::new("slate-700", "#334155");
pub const SLATE_800: Color = Color::new("slate-800", "#1e293b");
pub const SLATE_900: Color = Color::new("slate-900", "#0f172a");
pub const SLATE_900_50: Color = Color::new("slate-900/50", "rgba(15, 23, 42, 0.5)");

pub const BLUE_100: Color = Color::new("blue-100", "#dbeafe");
pub const BLUE_200: Color = Color::new("blue-200", "#bfdbfe");
pub const BLUE_400: Color = Color::new("blue-400", "#60a5fa");
pub const BLUE_500: Color = Color::new("blue-500", "#3b82f6");
pub const BLUE_500_25: Color = Color::new("blue-500/25", "rgba(59, 130, 246, 0.25)");
pub const BLUE_500_30: Color = Color::new("blue-500/30", "rgba(59, 130, 246, 0.3)");
pub const BLUE_500_50: Color = Color::new("blue-500/50", "rgba(59, 130, 246, 0.5)");
pub const BLUE_600: Color = Color::new("blue-600", "#2563eb");
pub const BLUE_800: Color = Color::new("blue-800", "#1e40af");
pub const BLUE_900_30: Color = Color::new("blue-900/30", "rgba(30, 58, 138, 0.3)");

pub const GREEN_400: Color = Color::new("green-400", "#4ade80");
pub const GREEN_500: Color = Color::new("green-500", "#22c55e");

pub const PURPLE_400: Color = Color::new("purple-400", "#c084fc");
pub const PURPLE_500: Color = Color::new("purple-500", "#a855f7");
