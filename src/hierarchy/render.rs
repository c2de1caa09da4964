//! Text rendering of the hierarchy view with tree guides.
//!
//! Only rows whose ancestors are all expanded are drawn, like the on-screen
//! view.

use super::store::{HierarchyStore, RowId};

/// Guide character set for [`HierarchyStore::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guides {
    /// `|`, `+--`, `` `-- ``.
    #[default]
    Ascii,
    /// Box-drawing characters.
    Unicode,
}

impl Guides {
    /// Ancestor level that has more siblings below.
    pub const fn vertical(&self) -> &'static str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode => "\u{2502}   ",
        }
    }

    /// Row that has more siblings below.
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode => "\u{251C}\u{2500}\u{2500} ",
        }
    }

    /// Last row among its siblings.
    pub const fn last(&self) -> &'static str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    pub const fn space(&self) -> &'static str {
        "    "
    }
}

impl HierarchyStore {
    /// Render the visible rows, one per line.
    pub fn render(&self, guides: Guides) -> String {
        let mut out = String::new();
        let mut is_last = Vec::new();
        for &row in self.top_level() {
            self.render_row(row, guides, &mut is_last, &mut out);
        }
        out
    }

    fn render_row(&self, id: RowId, guides: Guides, is_last: &mut Vec<bool>, out: &mut String) {
        let Some(row) = self.get(id) else {
            return;
        };

        let depth = is_last.len();
        for (d, &last) in is_last.iter().enumerate() {
            let guide = match (d + 1 == depth, last) {
                (true, true) => guides.last(),
                (true, false) => guides.branch(),
                (false, true) => guides.space(),
                (false, false) => guides.vertical(),
            };
            out.push_str(guide);
        }
        out.push_str(&row.label);
        out.push('\n');

        if !row.expanded {
            return;
        }
        let kids = self.children(id);
        for (i, &child) in kids.iter().enumerate() {
            is_last.push(i + 1 == kids.len());
            self.render_row(child, guides, is_last, out);
            is_last.pop();
        }
    }
}
