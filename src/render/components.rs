//! Display components: one record in, one block of markup out.
//!
//! Every field of the record is rendered. Lists keep their input order and
//! an empty achievement list renders an empty `<ul>`.

use super::{
    icons::{Icon, write_icon},
    writer::{HtmlWriter, blank_element, element, text_element, write_text},
};
use crate::content::{Award, Experience, Project};
use anyhow::Result;

/// Outbound links open a new browsing context without a back-reference.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

pub fn skill_badge(writer: &mut HtmlWriter, label: &str) -> Result<()> {
    text_element(writer, "span", &[("class", "badge")], label)
}

/// A wrapping row of badges.
pub fn badge_list(writer: &mut HtmlWriter, labels: &[String]) -> Result<()> {
    element(writer, "div", &[("class", "badges")], |w| {
        labels.iter().try_for_each(|label| skill_badge(w, label))
    })
}

pub fn experience_card(writer: &mut HtmlWriter, experience: &Experience) -> Result<()> {
    element(writer, "article", &[("class", "card")], |w| {
        element(w, "div", &[("class", "card-header")], |w| {
            element(w, "div", &[], |w| {
                text_element(w, "h3", &[("class", "card-title")], &experience.title)?;
                text_element(w, "p", &[("class", "card-subtitle")], &experience.company)
            })?;
            text_element(w, "span", &[("class", "card-meta")], &experience.period)
        })?;
        achievement_list(w, &experience.achievements)
    })
}

pub fn project_card(writer: &mut HtmlWriter, project: &Project) -> Result<()> {
    element(writer, "article", &[("class", "card card-lift")], |w| {
        element(w, "div", &[("class", "card-header")], |w| {
            element(w, "div", &[("class", "card-body")], |w| {
                text_element(w, "h3", &[("class", "card-title")], &project.title)?;
                text_element(w, "p", &[("class", "card-tech")], &project.technologies)?;
                text_element(w, "p", &[("class", "card-text")], &project.description)
            })?;
            external_link(w, &project.link)
        })?;
        achievement_list(w, &project.achievements)
    })
}

pub fn award_card(writer: &mut HtmlWriter, award: &Award) -> Result<()> {
    element(writer, "article", &[("class", "card award")], |w| {
        text_element(w, "h3", &[("class", "card-title")], &award.title)?;
        text_element(w, "p", &[("class", "card-subtitle")], &award.subtitle)
    })
}

fn achievement_list(writer: &mut HtmlWriter, achievements: &[String]) -> Result<()> {
    element(writer, "ul", &[("class", "achievements")], |w| {
        achievements.iter().try_for_each(|item| {
            element(w, "li", &[], |w| {
                blank_element(w, "span", &[("class", "dot"), ("aria-hidden", "true")])?;
                text_element(w, "span", &[], item)
            })
        })
    })
}

fn external_link(writer: &mut HtmlWriter, href: &str) -> Result<()> {
    element(
        writer,
        "a",
        &[
            ("class", "project-link"),
            ("href", href),
            ("target", "_blank"),
            ("rel", EXTERNAL_REL),
        ],
        |w| {
            element(w, "span", &[], |w| write_text(w, "View Project"))?;
            write_icon(w, Icon::External, "icon-sm")
        },
    )
}
