//! Inline SVG icons (24x24 viewBox).

use super::writer::{HtmlWriter, element, void_element};
use crate::content::ProfileKind;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Email,
    LinkedIn,
    GitHub,
    Website,
    Menu,
    Close,
    External,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Self::Email => {
                "M12 12.713l-11.985-9.713h23.97l-11.985 9.713zm0 2.574l-12-9.725v15.438h24v-15.438l-12 9.725z"
            }
            Self::LinkedIn => {
                "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z"
            }
            Self::GitHub => {
                "M12 1C5.923 1 1 5.923 1 12c0 4.867 3.149 8.979 7.521 10.436.55.096.756-.233.756-.522 0-.262-.013-1.128-.013-2.049-2.764.509-3.479-.674-3.699-1.292-.124-.317-.66-1.293-1.127-1.554-.385-.207-.936-.715-.014-.729.866-.014 1.485.797 1.691 1.128.99 1.663 2.571 1.196 3.204.907.096-.715.385-1.196.701-1.471-2.448-.275-5.005-1.224-5.005-5.432 0-1.196.426-2.186 1.128-2.956-.111-.275-.496-1.402.11-2.915 0 0 .921-.288 3.024 1.128a10.193 10.193 0 0 1 2.75-.371c.936 0 1.871.123 2.75.371 2.104-1.43 3.025-1.128 3.025-1.128.605 1.513.221 2.64.111 2.915.701.77 1.127 1.747 1.127 2.956 0 4.222-2.571 5.157-5.019 5.432.399.344.743 1.004.743 2.035 0 1.471-.014 2.654-.014 3.025 0 .289.206.632.756.522C19.851 20.979 23 16.854 23 12c0-6.077-4.922-11-11-11Z"
            }
            Self::Website => {
                "M12 21a9 9 0 100-18 9 9 0 000 18zM3.6 9h16.8M3.6 15h16.8M12 3a15 15 0 010 18M12 3a15 15 0 000 18"
            }
            Self::Menu => "M4 6h16M4 12h16M4 18h16",
            Self::Close => "M6 18L18 6M6 6l12 12",
            Self::External => {
                "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"
            }
        }
    }

    /// Brand marks are filled shapes, the rest are outlines.
    const fn filled(self) -> bool {
        matches!(self, Self::Email | Self::LinkedIn | Self::GitHub)
    }
}

impl From<ProfileKind> for Icon {
    fn from(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::LinkedIn => Self::LinkedIn,
            ProfileKind::GitHub => Self::GitHub,
            ProfileKind::Website => Self::Website,
        }
    }
}

/// Write `<svg>` for `icon`. Icons are decorative; the surrounding control
/// carries the accessible label.
pub fn write_icon(writer: &mut HtmlWriter, icon: Icon, class: &str) -> Result<()> {
    let mut attrs = vec![
        ("class", class),
        ("viewBox", "0 0 24 24"),
        ("aria-hidden", "true"),
    ];
    if icon.filled() {
        attrs.push(("fill", "currentColor"));
    } else {
        attrs.push(("fill", "none"));
        attrs.push(("stroke", "currentColor"));
    }

    element(writer, "svg", &attrs, |w| {
        if icon.filled() {
            void_element(w, "path", &[("d", icon.path())])
        } else {
            void_element(
                w,
                "path",
                &[
                    ("stroke-linecap", "round"),
                    ("stroke-linejoin", "round"),
                    ("stroke-width", "2"),
                    ("d", icon.path()),
                ],
            )
        }
    })
}
