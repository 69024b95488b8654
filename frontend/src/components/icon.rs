use yew::prelude::*;

/// Inline SVG icons (24x24 stroke outlines).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconRef {
    ArrowRight,
    CheckCircle,
    Code2,
    Github,
    Rocket,
    Twitter,
    Zap,
}

impl IconRef {
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconRef::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconRef::CheckCircle => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "m9 12 2 2 4-4",
            ],
            IconRef::Code2 => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            IconRef::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            IconRef::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            IconRef::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconRef::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: IconRef,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub filled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let fill = if props.filled { "currentColor" } else { "none" };

    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
