//! Page sections, one function per [`Section`] anchor.

use super::{
    components::{EXTERNAL_REL, award_card, badge_list, experience_card, project_card},
    icons::{Icon, write_icon},
    writer::{HtmlWriter, element, text_element, write_text},
};
use crate::{
    content::{Personal, Resume},
    interact::Section,
};
use anyhow::Result;

/// Render the section for `section` from `resume`.
pub fn render_section(writer: &mut HtmlWriter, section: Section, resume: &Resume) -> Result<()> {
    match section {
        Section::About => about(writer, &resume.personal),
        Section::Education => education(writer, resume),
        Section::Skills => skills(writer, resume),
        Section::Experience => experience(writer, resume),
        Section::Projects => projects(writer, resume),
        Section::Awards => awards(writer, resume),
        Section::Contact => contact(writer, &resume.personal),
    }
}

/// `<section id=.. class=..><div class=inner>...</div></section>`
fn section_shell<F>(writer: &mut HtmlWriter, section: Section, class: &str, inner: F) -> Result<()>
where
    F: FnOnce(&mut HtmlWriter) -> Result<()>,
{
    element(writer, "section", &[("id", section.id()), ("class", class)], |w| {
        element(w, "div", &[("class", "narrow")], inner)
    })
}

/// Anchor whose click copies `email` instead of opening a mail client.
/// Without the runtime it is a plain `mailto:` link.
pub fn email_link<F>(writer: &mut HtmlWriter, email: &str, class: &str, inner: F) -> Result<()>
where
    F: FnOnce(&mut HtmlWriter) -> Result<()>,
{
    let href = format!("mailto:{email}");
    element(
        writer,
        "a",
        &[("class", class), ("href", href.as_str()), ("data-copy-email", email)],
        inner,
    )
}

fn external_anchor<F>(writer: &mut HtmlWriter, href: &str, class: &str, inner: F) -> Result<()>
where
    F: FnOnce(&mut HtmlWriter) -> Result<()>,
{
    element(
        writer,
        "a",
        &[("class", class), ("href", href), ("target", "_blank"), ("rel", EXTERNAL_REL)],
        inner,
    )
}

fn about(writer: &mut HtmlWriter, personal: &Personal) -> Result<()> {
    section_shell(writer, Section::About, "hero", |w| {
        element(w, "h1", &[], |w| {
            write_text(w, "Hi, I'm ")?;
            text_element(w, "span", &[], &personal.name)
        })?;
        text_element(w, "p", &[("class", "tagline")], &personal.tagline)?;
        text_element(w, "p", &[("class", "bio")], &personal.bio)?;

        element(w, "div", &[("class", "actions")], |w| {
            email_link(w, &personal.email, "button button-primary", |w| {
                write_text(w, "Get In Touch")
            })?;
            external_anchor(w, &personal.linkedin, "button button-outline", |w| {
                write_text(w, "View LinkedIn")
            })
        })?;

        element(w, "div", &[("class", "socials")], |w| {
            email_link(w, &personal.email, "social", |w| {
                text_element(w, "span", &[("class", "sr-only")], "Email")?;
                write_icon(w, Icon::Email, "icon")
            })?;
            personal.profile_links().into_iter().try_for_each(|(kind, href)| {
                external_anchor(w, href, "social", |w| {
                    text_element(w, "span", &[("class", "sr-only")], kind.label())?;
                    write_icon(w, Icon::from(kind), "icon")
                })
            })
        })
    })
}

fn education(writer: &mut HtmlWriter, resume: &Resume) -> Result<()> {
    let edu = &resume.education;
    section_shell(writer, Section::Education, "alt", |w| {
        text_element(w, "h2", &[], Section::Education.label())?;
        element(w, "div", &[("class", "panel")], |w| {
            element(w, "div", &[("class", "card-header")], |w| {
                element(w, "div", &[], |w| {
                    text_element(w, "h3", &[("class", "card-title")], &edu.institution)?;
                    text_element(w, "p", &[("class", "card-subtitle")], &edu.degree)?;
                    text_element(w, "p", &[("class", "card-meta")], &format!("GPA: {}", edu.gpa))
                })?;
                element(w, "div", &[("class", "right")], |w| {
                    text_element(w, "p", &[("class", "card-meta")], &edu.location)?;
                    text_element(w, "p", &[("class", "card-meta")], &edu.graduation)
                })
            })?;
            element(w, "div", &[("class", "coursework")], |w| {
                text_element(w, "h4", &[], "Relevant Coursework:")?;
                badge_list(w, &edu.coursework)
            })
        })
    })
}

fn skills(writer: &mut HtmlWriter, resume: &Resume) -> Result<()> {
    section_shell(writer, Section::Skills, "", |w| {
        text_element(w, "h2", &[], "Technical Skills")?;
        element(w, "div", &[("class", "grid")], |w| {
            for (title, labels) in [
                ("Languages", &resume.skills.languages),
                ("Technologies", &resume.skills.technologies),
            ] {
                element(w, "div", &[], |w| {
                    text_element(w, "h3", &[("class", "group-title")], title)?;
                    badge_list(w, labels)
                })?;
            }
            Ok(())
        })
    })
}

fn experience(writer: &mut HtmlWriter, resume: &Resume) -> Result<()> {
    section_shell(writer, Section::Experience, "alt", |w| {
        text_element(w, "h2", &[], Section::Experience.label())?;
        element(w, "div", &[("class", "stack")], |w| {
            resume.experiences.iter().try_for_each(|item| experience_card(w, item))
        })
    })
}

fn projects(writer: &mut HtmlWriter, resume: &Resume) -> Result<()> {
    section_shell(writer, Section::Projects, "", |w| {
        text_element(w, "h2", &[], Section::Projects.label())?;
        element(w, "div", &[("class", "grid")], |w| {
            resume.projects.iter().try_for_each(|item| project_card(w, item))
        })
    })
}

fn awards(writer: &mut HtmlWriter, resume: &Resume) -> Result<()> {
    section_shell(writer, Section::Awards, "alt", |w| {
        text_element(w, "h2", &[], Section::Awards.label())?;
        element(w, "div", &[("class", "grid")], |w| {
            resume.awards.iter().try_for_each(|item| award_card(w, item))
        })
    })
}

fn contact(writer: &mut HtmlWriter, personal: &Personal) -> Result<()> {
    section_shell(writer, Section::Contact, "contact", |w| {
        text_element(w, "h2", &[], "Let's Connect")?;
        text_element(w, "p", &[("class", "contact-note")], &personal.contact_note)?;

        element(w, "div", &[("class", "actions")], |w| {
            email_link(w, &personal.email, "button button-primary", |w| {
                write_icon(w, Icon::Email, "icon-sm")?;
                write_text(w, "Email Me")
            })?;
            external_anchor(w, &personal.linkedin, "button button-outline", |w| {
                write_icon(w, Icon::LinkedIn, "icon-sm")?;
                write_text(w, "LinkedIn")
            })
        })?;

        element(w, "div", &[("class", "contact-grid")], |w| {
            for (title, value) in [
                ("Email", &personal.email),
                ("Phone", &personal.phone),
                ("Location", &personal.location),
            ] {
                element(w, "div", &[], |w| {
                    text_element(w, "h3", &[], title)?;
                    text_element(w, "p", &[], value)
                })?;
            }
            Ok(())
        })
    })
}
