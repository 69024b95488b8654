//! Static copy for the landing page. Nothing here is computed.

use crate::components::icon::IconRef;

pub const BRAND: &str = "NextStart";
pub const COPYRIGHT_HOLDER: &str = "My App";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub icon: IconRef,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletItem {
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub icon: IconRef,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        icon: IconRef::Github,
        label: "GitHub",
        href: "https://github.com",
    },
    NavLink {
        icon: IconRef::Twitter,
        label: "Twitter",
        href: "https://twitter.com",
    },
];

pub const HERO_BADGE: &str = "Ready for OpenNext";
pub const HERO_HEADLINE: [&str; 2] = ["Deploy faster,", "scale better."];
pub const HERO_LEDE: &str = "A premium boilerplate designed for the modern web. Built with Next.js 15, Tailwind CSS v4, and optimized for instant deployments.";
pub const PRIMARY_ACTION: &str = "Get Started";
pub const SECONDARY_ACTION: &str = "View Documentation";

pub const FEATURES: [ContentItem; 3] = [
    ContentItem {
        icon: IconRef::Rocket,
        title: "Instant Deploy",
        description: "Optimized configurations for OpenNext and Cloudflare Pages mean zero-config deployments.",
    },
    ContentItem {
        icon: IconRef::Code2,
        title: "Type Safe",
        description: "Built with TypeScript from the ground up. Catch errors early and code with confidence.",
    },
    ContentItem {
        icon: IconRef::Zap,
        title: "Lightning Fast",
        description: "Powered by the latest Next.js features including Server Components and Streaming.",
    },
];

pub const BENEFITS_HEADING: &str = "Why developers choose us?";

pub const BENEFITS: [BulletItem; 4] = [
    BulletItem { label: "Zero configuration required" },
    BulletItem { label: "Edge-ready by default" },
    BulletItem { label: "Best-in-class performance" },
    BulletItem { label: "Beautiful default components" },
];

/// One line of the decorative deploy transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnippetLine {
    Comment(&'static str),
    Command { program: &'static str, args: &'static str },
    Output(&'static str),
    Link(&'static str),
}

pub const DEPLOY_SNIPPET: [SnippetLine; 5] = [
    SnippetLine::Comment("// Deploy in seconds"),
    SnippetLine::Command { program: "npx", args: "open-next deploy" },
    SnippetLine::Output("➜  Deploying to Edge..."),
    SnippetLine::Output("➜  Build Complete (890ms)"),
    SnippetLine::Link("➜  https://my-app.pages.dev"),
];

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Privacy", href: "#" },
    FooterLink { label: "Terms", href: "#" },
    FooterLink { label: "Contact", href: "#" },
];
