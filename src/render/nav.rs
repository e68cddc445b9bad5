//! Sticky navigation bar rendered from [`NavController`] state.
//!
//! Every item carries `data-section` (read by the runtime) and an
//! `href="#id"` deep link, so the bar still works without script.

use super::{
    icons::{Icon, write_icon},
    writer::{HtmlWriter, element, text_element},
};
use crate::interact::{MenuGlyph, NavController, NavItem, Section};
use anyhow::Result;

pub const NAV_ID: &str = "site-nav";
pub const MOBILE_MENU_ID: &str = "mobile-menu";

pub fn render_nav(writer: &mut HtmlWriter, nav: &NavController, brand: &str) -> Result<()> {
    let class = if nav.scrolled() { "nav nav-scrolled" } else { "nav" };

    element(writer, "nav", &[("id", NAV_ID), ("class", class)], |w| {
        element(w, "div", &[("class", "container nav-bar")], |w| {
            let home = nav.order().first().copied().unwrap_or(Section::About);
            text_element(
                w,
                "button",
                &[("type", "button"), ("class", "brand"), ("data-section", home.id())],
                brand,
            )?;

            element(w, "div", &[("class", "nav-links")], |w| {
                nav.items().try_for_each(|item| nav_link(w, item, "nav-link"))
            })?;

            menu_toggle(w, nav)
        })?;

        let mut attrs = vec![("id", MOBILE_MENU_ID), ("class", "nav-mobile")];
        if !nav.mobile_menu_open() {
            attrs.push(("hidden", ""));
        }
        element(w, "div", &attrs, |w| {
            nav.items().try_for_each(|item| nav_link(w, item, "nav-link-mobile"))
        })
    })
}

fn nav_link(writer: &mut HtmlWriter, item: NavItem, base_class: &str) -> Result<()> {
    let id = item.section.id();
    let href = format!("#{id}");
    let class = if item.active {
        format!("{base_class} active")
    } else {
        base_class.to_string()
    };

    let mut attrs = vec![("class", class.as_str()), ("href", href.as_str()), ("data-section", id)];
    if item.active {
        attrs.push(("aria-current", "location"));
    }
    text_element(writer, "a", &attrs, item.section.label())
}

/// Both glyphs are rendered; the one not matching the menu state is hidden.
fn menu_toggle(writer: &mut HtmlWriter, nav: &NavController) -> Result<()> {
    let expanded = if nav.mobile_menu_open() { "true" } else { "false" };
    let current = nav.menu_glyph();

    element(
        writer,
        "button",
        &[
            ("type", "button"),
            ("class", "nav-toggle"),
            ("aria-controls", MOBILE_MENU_ID),
            ("aria-expanded", expanded),
        ],
        |w| {
            text_element(w, "span", &[("class", "sr-only")], "Open main menu")?;
            glyph_slot(w, MenuGlyph::Hamburger, current)?;
            glyph_slot(w, MenuGlyph::Close, current)
        },
    )
}

fn glyph_slot(writer: &mut HtmlWriter, glyph: MenuGlyph, current: MenuGlyph) -> Result<()> {
    let (name, icon) = match glyph {
        MenuGlyph::Hamburger => ("menu", Icon::Menu),
        MenuGlyph::Close => ("close", Icon::Close),
    };
    let mut attrs = vec![("class", "glyph"), ("data-glyph", name)];
    if glyph != current {
        attrs.push(("hidden", ""));
    }
    element(writer, "span", &attrs, |w| write_icon(w, icon, "icon"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        interact::testing::FakeViewport,
        render::testing::{inner_texts, render_with},
    };

    fn render(nav: &NavController) -> String {
        render_with(|w| render_nav(w, nav, "ML"))
    }

    #[test]
    fn test_all_items_in_order() {
        let html = render(&NavController::new());
        let labels = inner_texts(&html, r#"data-section=""#, r#"""#);

        // brand, then desktop list, then mobile list
        let expected: Vec<_> = std::iter::once("about")
            .chain(Section::ALL.iter().map(|s| s.id()))
            .chain(Section::ALL.iter().map(|s| s.id()))
            .collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_deep_links() {
        let html = render(&NavController::new());
        for section in Section::ALL {
            assert!(html.contains(&format!(r##"href="#{}""##, section.id())));
        }
    }

    #[test]
    fn test_initial_state_markup() {
        let html = render(&NavController::new());

        assert!(html.contains(r#"<nav id="site-nav" class="nav">"#));
        assert!(html.contains(r##"class="nav-link active" href="#about""##));
        assert_eq!(html.matches(r#"aria-current="location""#).count(), 2);
        assert!(html.contains(r#"id="mobile-menu" class="nav-mobile" hidden"#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"<span class="sr-only">Open main menu</span>"#));
        assert!(html.contains(r#"data-glyph="close" hidden"#));
        assert!(!html.contains(r#"data-glyph="menu" hidden"#));
    }

    #[test]
    fn test_brand() {
        let html = render(&NavController::new());
        assert!(html.contains(r#"class="brand" data-section="about">ML</button>"#));
    }

    #[test]
    fn test_reflects_controller_state() {
        let mut nav = NavController::new();
        let mut viewport = FakeViewport::new(800.0);
        viewport.place("projects", 100.0);
        viewport.scroll_y = 900.0;
        nav.on_scroll(&viewport);
        nav.toggle_mobile_menu();

        let html = render(&nav);

        assert!(html.contains(r#"class="nav nav-scrolled""#));
        assert!(html.contains(r##"class="nav-link active" href="#projects""##));
        assert!(!html.contains(r##"class="nav-link active" href="#about""##));
        assert!(!html.contains(r#"class="nav-mobile" hidden"#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"data-glyph="menu" hidden"#));
    }
}
