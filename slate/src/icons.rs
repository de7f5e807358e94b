//! Icons used by the button stories.
//!
//! Icons are opaque child content to the button: decorative `<svg>`
//! elements hidden from the accessibility tree.

use htmldom::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Settings,
    Download,
    Trash2,
    Mail,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Download => "download",
            Self::Trash2 => "trash-2",
            Self::Mail => "mail",
        }
    }

    pub fn element(self) -> Element {
        let svg = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", "24")
            .attr("height", "24")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("aria-hidden", "true")
            .class("lucide")
            .class(&format!("lucide-{}", self.name()));
        svg.children(self.shapes())
    }

    fn shapes(self) -> Vec<Element> {
        match self {
            Self::Settings => vec![
                path(
                    "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08\
                     a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51\
                     a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08\
                     a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18\
                     a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39\
                     a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09\
                     a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25\
                     a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                ),
                Element::new("circle")
                    .attr("cx", "12")
                    .attr("cy", "12")
                    .attr("r", "3"),
            ],
            Self::Download => vec![
                path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Element::new("polyline").attr("points", "7 10 12 15 17 10"),
                line(12, 15, 12, 3),
            ],
            Self::Trash2 => vec![
                path("M3 6h18"),
                path("M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"),
                path("M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"),
                line(10, 11, 10, 17),
                line(14, 11, 14, 17),
            ],
            Self::Mail => vec![
                Element::new("rect")
                    .attr("width", "20")
                    .attr("height", "16")
                    .attr("x", "2")
                    .attr("y", "4")
                    .attr("rx", "2"),
                path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
        }
    }
}

fn path(d: &str) -> Element {
    Element::new("path").attr("d", d)
}

fn line(x1: u8, y1: u8, x2: u8, y2: u8) -> Element {
    Element::new("line")
        .attr("x1", x1.to_string())
        .attr("y1", y1.to_string())
        .attr("x2", x2.to_string())
        .attr("y2", y2.to_string())
}
