use chrono::{Datelike, NaiveDate};

use crate::content::{
    self, BulletItem, ContentItem, FooterLink, NavLink, SnippetLine, BENEFITS, DEPLOY_SNIPPET,
    FEATURES, FOOTER_LINKS, NAV_LINKS,
};
use crate::reveal::AnimationGroup;
use crate::theme::{Palette, ThemeMode, TokenSet};

/// The hero's children, revealed one after another on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroBlock {
    Badge,
    Headline,
    Lede,
    Actions,
}

/// Everything the landing view needs, already resolved for one theme and
/// one date.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub tokens: TokenSet,
    pub brand: &'static str,
    pub nav_links: &'static [NavLink],
    pub hero: AnimationGroup<HeroBlock>,
    pub features: AnimationGroup<ContentItem>,
    pub benefits_heading: &'static str,
    pub benefits: &'static [BulletItem],
    pub snippet: &'static [SnippetLine],
    pub copyright: String,
    pub footer_links: &'static [FooterLink],
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, content::COPYRIGHT_HOLDER)
}

pub fn assemble(palette: &Palette, mode: ThemeMode, today: NaiveDate) -> Page {
    Page {
        tokens: palette.resolve(mode).clone(),
        brand: content::BRAND,
        nav_links: &NAV_LINKS,
        hero: AnimationGroup::on_mount([
            HeroBlock::Badge,
            HeroBlock::Headline,
            HeroBlock::Lede,
            HeroBlock::Actions,
        ]),
        features: AnimationGroup::on_viewport_entry(FEATURES),
        benefits_heading: content::BENEFITS_HEADING,
        benefits: &BENEFITS,
        snippet: &DEPLOY_SNIPPET,
        copyright: copyright_line(today.year()),
        footer_links: &FOOTER_LINKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Trigger;
    use crate::theme::colors::{BLACK, WHITE};
    use crate::theme::Role;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn copyright_uses_render_year() {
        let palette = Palette::standard().unwrap();
        let page = assemble(&palette, ThemeMode::Light, date(2025, 1, 1));
        assert_eq!(page.copyright, "© 2025 My App. All rights reserved.");

        let page = assemble(&palette, ThemeMode::Light, date(2024, 12, 31));
        assert!(page.copyright.starts_with("© 2024 "));
    }

    #[test]
    fn root_colors_follow_theme() {
        let palette = Palette::standard().unwrap();
        let today = date(2025, 6, 1);

        let dark = assemble(&palette, ThemeMode::Dark, today);
        assert_eq!(dark.tokens.get(Role::Surface), BLACK);
        assert!(dark.tokens.get(Role::Text).is_light());

        let light = assemble(&palette, ThemeMode::Light, today);
        assert_eq!(light.tokens.get(Role::Surface), WHITE);
        assert!(!light.tokens.get(Role::Text).is_light());
    }

    #[test]
    fn feature_grid_is_fixed() {
        let palette = Palette::standard().unwrap();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let page = assemble(&palette, mode, date(2025, 6, 1));
            let titles: Vec<&str> = page.features.items.iter().map(|f| f.title).collect();
            assert_eq!(titles, ["Instant Deploy", "Type Safe", "Lightning Fast"]);
            assert_eq!(page.features.trigger, Trigger::OnViewportEntry);
        }
    }

    #[test]
    fn hero_reveals_on_mount_in_reading_order() {
        let palette = Palette::standard().unwrap();
        let page = assemble(&palette, ThemeMode::Dark, date(2025, 6, 1));
        assert_eq!(page.hero.trigger, Trigger::OnMount);
        assert_eq!(page.hero.items.first(), Some(&HeroBlock::Badge));
        assert_eq!(page.hero.items.last(), Some(&HeroBlock::Actions));
        assert_eq!(page.hero.delay_for(3), 300);
    }

    #[test]
    fn static_links_are_untouched() {
        let palette = Palette::standard().unwrap();
        let page = assemble(&palette, ThemeMode::Light, date(2025, 6, 1));
        let external: Vec<&str> = page.nav_links.iter().map(|l| l.href).collect();
        assert_eq!(external, ["https://github.com", "https://twitter.com"]);
        let footer: Vec<&str> = page.footer_links.iter().map(|l| l.label).collect();
        assert_eq!(footer, ["Privacy", "Terms", "Contact"]);
    }
}
