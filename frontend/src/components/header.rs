use yew::prelude::*;

use crate::config;
use crate::content::HEADER_LINKS;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let toggle = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    // Shows the palette you would switch to.
    let toggle_icon = if props.theme.is_dark() { "fa-solid fa-sun" } else { "fa-solid fa-moon" };

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <a href="#top" class="brand">
                    <img src={config::LOGO_PATH} alt="Blackout Garage Logo" class="brand-logo" />
                    <div class="brand-text">
                        <p class="brand-name">{"BLACKOUT GARAGE"}</p>
                        <p class="brand-tagline">{config::TAGLINE}</p>
                    </div>
                </a>
                <nav class="site-nav">
                    { for HEADER_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link">{link.label}</a>
                    }) }
                </nav>
                <div class="header-actions">
                    <a href="#contact" class="quote-button">{"Get a Quote"}</a>
                    <button class="theme-toggle" onclick={toggle} aria-label="Toggle theme">
                        <i class={toggle_icon}></i>
                    </button>
                </div>
            </div>
        </header>
    }
}
