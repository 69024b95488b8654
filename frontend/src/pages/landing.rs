use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::icon::{Icon, IconRef};
use crate::components::reveal::RevealItem;
use crate::content::{self, ContentItem, SnippetLine};
use crate::page::{assemble, HeroBlock};
use crate::theme::{Palette, ThemeMode};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub palette: Rc<Palette>,
    pub mode: ThemeMode,
    pub today: NaiveDate,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let page = assemble(&props.palette, props.mode, props.today);
    let hero_trigger = page.hero.trigger;
    let feature_trigger = page.features.trigger;

    html! {
        <div class="landing" style={page.tokens.css_vars()}>
            <nav class="top-nav">
                <div class="container top-nav__inner">
                    <div class="brand">
                        <div class="brand__logo">
                            <Icon icon={IconRef::Zap} filled={true} />
                        </div>
                        <span>{page.brand}</span>
                    </div>
                    <div class="top-nav__links">
                        { for page.nav_links.iter().map(|link| html! {
                            <a
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={link.label}
                                class="top-nav__link"
                            >
                                <Icon icon={link.icon} />
                            </a>
                        }) }
                    </div>
                </div>
            </nav>

            <main class="main">
                <div class="container">
                    <div class="hero">
                        { for page.hero.iter().map(|(i, delay, block)| html! {
                            <RevealItem key={i} trigger={hero_trigger} delay_ms={delay} class={hero_class(*block)}>
                                { hero_block(*block) }
                            </RevealItem>
                        }) }
                    </div>

                    <div class="features">
                        { for page.features.iter().map(|(_, delay, feature)| html! {
                            <RevealItem key={feature.title} trigger={feature_trigger} delay_ms={delay} class={classes!("feature-card")}>
                                { feature_card(feature) }
                            </RevealItem>
                        }) }
                    </div>

                    <section class="benefits">
                        <div class="benefits__grid">
                            <div>
                                <h2>{page.benefits_heading}</h2>
                                <div class="benefits__list">
                                    { for page.benefits.iter().map(|item| html! {
                                        <div class="benefits__item">
                                            <Icon icon={IconRef::CheckCircle} class={classes!("benefits__check")} />
                                            <span>{item.label}</span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                            <div class="terminal">
                                <div class="terminal__glow"></div>
                                <div class="terminal__panel">
                                    { for page.snippet.iter().map(snippet_line) }
                                </div>
                            </div>
                        </div>
                    </section>
                </div>
            </main>

            <footer class="footer">
                <div class="container footer__inner">
                    <p class="footer__copyright">{page.copyright.clone()}</p>
                    <div class="footer__links">
                        { for page.footer_links.iter().map(|link| html! {
                            <a href={link.href}>{link.label}</a>
                        }) }
                    </div>
                </div>
            </footer>

            <style>{STYLESHEET}</style>
        </div>
    }
}

fn hero_class(block: HeroBlock) -> Classes {
    match block {
        HeroBlock::Badge => classes!("hero__badge-row"),
        HeroBlock::Headline | HeroBlock::Lede => Classes::new(),
        HeroBlock::Actions => classes!("hero__actions"),
    }
}

fn hero_block(block: HeroBlock) -> Html {
    match block {
        HeroBlock::Badge => html! {
            <span class="hero__badge">{content::HERO_BADGE}</span>
        },
        HeroBlock::Headline => html! {
            <h1 class="hero__headline">
                {content::HERO_HEADLINE[0]}
                <br />
                {content::HERO_HEADLINE[1]}
            </h1>
        },
        HeroBlock::Lede => html! {
            <p class="hero__lede">{content::HERO_LEDE}</p>
        },
        HeroBlock::Actions => html! {
            <>
                <a href="#" class="button button--primary">
                    {content::PRIMARY_ACTION}
                    <Icon icon={IconRef::ArrowRight} size={18} />
                </a>
                <a href="#" class="button button--secondary">
                    {content::SECONDARY_ACTION}
                </a>
            </>
        },
    }
}

fn feature_card(feature: &ContentItem) -> Html {
    html! {
        <>
            <div class="feature-card__icon">
                <Icon icon={feature.icon} size={24} />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </>
    }
}

fn snippet_line(line: &SnippetLine) -> Html {
    match *line {
        SnippetLine::Comment(text) => html! { <div class="terminal__comment">{text}</div> },
        SnippetLine::Command { program, args } => html! {
            <div class="terminal__command">
                <span class="terminal__program">{program}</span>
                <span>{args}</span>
            </div>
        },
        SnippetLine::Output(text) => html! { <div class="terminal__output">{text}</div> },
        SnippetLine::Link(text) => html! { <div class="terminal__link">{text}</div> },
    }
}

const STYLESHEET: &str = r#"
.landing {
    min-height: 100vh;
    background: var(--surface);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.landing ::selection {
    background: var(--selection);
}

.landing a {
    text-decoration: none;
    color: inherit;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    border-bottom: 1px solid var(--border);
    background: var(--nav-surface);
    backdrop-filter: blur(12px);
}

.top-nav__inner {
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 700;
    font-size: 1.25rem;
    letter-spacing: -0.025em;
}

.brand__logo {
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    background: var(--accent);
    color: var(--on-accent);
    display: flex;
    align-items: center;
    justify-content: center;
}

.top-nav__links {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.landing .top-nav__link {
    color: var(--nav-icon);
    transition: color 0.2s ease;
}

.landing .top-nav__link:hover {
    color: var(--nav-icon-hover);
}

.main {
    padding: 8rem 0 4rem;
}

.hero {
    text-align: center;
    max-width: 56rem;
    margin: 0 auto 6rem;
}

.hero__badge-row {
    display: flex;
    justify-content: center;
    margin-bottom: 1.5rem;
}

.hero__badge {
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: var(--badge-surface);
    color: var(--accent-text);
    border: 1px solid var(--badge-border);
    font-size: 0.875rem;
    font-weight: 500;
}

.hero__headline {
    font-size: 3rem;
    line-height: 1.1;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin: 0 0 2rem;
    padding-bottom: 0.5rem;
    background: linear-gradient(to right, var(--headline-from), var(--headline-via), var(--headline-from));
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}

.hero__lede {
    font-size: 1.25rem;
    line-height: 1.625;
    color: var(--muted);
    max-width: 42rem;
    margin: 0 auto 2.5rem;
}

.hero__actions {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    justify-content: center;
    align-items: center;
}

.button {
    height: 3rem;
    padding: 0 2rem;
    border-radius: 9999px;
    font-weight: 500;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    transition: all 0.2s ease;
}

.landing .button--primary {
    background: var(--accent);
    color: var(--on-accent);
}

.landing .button--primary:hover {
    background: var(--accent-hover);
    box-shadow: 0 10px 15px -3px var(--accent-shadow);
}

.button--primary svg {
    transition: transform 0.2s ease;
}

.button--primary:hover svg {
    transform: translateX(0.25rem);
}

.landing .button--secondary {
    border: 1px solid var(--border);
    color: var(--secondary-text);
}

.landing .button--secondary:hover {
    background: var(--secondary-hover);
}

.features {
    display: grid;
    gap: 2rem;
    margin-bottom: 8rem;
}

.feature-card {
    padding: 2rem;
    border-radius: 1rem;
    background: var(--card-surface);
    border: 1px solid var(--card-border);
}

.feature-card:hover {
    border-color: var(--card-border-hover);
}

.feature-card__icon {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    background: var(--icon-tile);
    color: var(--accent-text);
    box-shadow: 0 1px 2px var(--icon-tile-shadow);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    transition: transform 0.3s ease;
}

.feature-card:hover .feature-card__icon {
    transform: scale(1.1);
}

.feature-card h3 {
    font-size: 1.25rem;
    font-weight: 700;
    margin: 0 0 0.75rem;
}

.feature-card p {
    color: var(--muted);
    line-height: 1.625;
    margin: 0;
}

.benefits {
    border-top: 1px solid var(--border);
    padding: 6rem 0;
}

.benefits__grid {
    display: grid;
    gap: 3rem;
    align-items: center;
}

.benefits h2 {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 1.5rem;
}

.benefits__list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.benefits__item {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: var(--bullet-text);
    font-weight: 500;
}

.benefits__check {
    color: var(--success);
    flex-shrink: 0;
}

.terminal {
    position: relative;
}

.terminal__glow {
    position: absolute;
    inset: -1rem;
    background: linear-gradient(to right, var(--glow-from), var(--glow-to));
    border-radius: 1rem;
    opacity: 0.2;
    filter: blur(40px);
}

.terminal__panel {
    position: relative;
    padding: 2rem;
    border-radius: 1rem;
    background: var(--terminal-surface);
    border: 1px solid var(--terminal-border);
    color: var(--terminal-text);
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.875rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.terminal__comment { color: var(--terminal-comment); }
.terminal__command { display: flex; gap: 0.5rem; }
.terminal__program { color: var(--terminal-command); }
.terminal__output { color: var(--terminal-output); }
.terminal__link { color: var(--terminal-link); }

.terminal__command + .terminal__output {
    padding-top: 0.5rem;
}

.footer {
    border-top: 1px solid var(--border);
    padding: 3rem 0;
    background: var(--footer-surface);
}

.footer__inner {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
}

.footer__copyright {
    color: var(--footer-text);
    font-size: 0.875rem;
    margin: 0;
}

.footer__links {
    display: flex;
    gap: 1.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--muted);
}

.landing .footer__links a {
    transition: color 0.2s ease;
}

.landing .footer__links a:hover {
    color: var(--accent-text);
}

@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
    .hero__headline { font-size: 4.5rem; }
    .hero__actions { flex-direction: row; }
}

@media (min-width: 768px) {
    .features { grid-template-columns: repeat(3, 1fr); }
    .benefits__grid { grid-template-columns: repeat(2, 1fr); }
    .footer__inner { flex-direction: row; }
}

@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Role;

    fn referenced_vars(css: &str) -> Vec<&str> {
        css.match_indices("var(")
            .map(|(at, _)| {
                let rest = &css[at + "var(".len()..];
                let end = rest.find(')').unwrap_or(rest.len());
                rest[..end].trim()
            })
            .collect()
    }

    #[test]
    fn stylesheet_only_uses_defined_roles() {
        let undefined: Vec<&str> = referenced_vars(STYLESHEET)
            .into_iter()
            .filter(|name| !Role::ALL.iter().any(|role| role.var_name() == *name))
            .collect();
        assert!(undefined.is_empty(), "stylesheet references undefined roles: {undefined:?}");
    }

    #[test]
    fn every_role_is_styled() {
        let used = referenced_vars(STYLESHEET);
        for role in Role::ALL {
            assert!(used.contains(&role.var_name()), "{role:?} is never referenced");
        }
    }

    #[test]
    fn colors_come_from_the_palette() {
        assert!(!STYLESHEET.contains('#'), "literal hex color in stylesheet");
        assert!(!STYLESHEET.contains("rgb"), "literal rgb color in stylesheet");
    }

    #[test]
    fn misspelled_variable_is_caught() {
        let vars = referenced_vars(".x { background: var(--icon-tlie); color: var( --text ); }");
        assert_eq!(vars, ["--icon-tlie", "--text"]);
        assert!(!Role::ALL.iter().any(|role| role.var_name() == vars[0]));
    }
}
