//! Diagnostic dump of the Arbre.

use std::fmt::Write as _;

use super::tree::Arbre;

impl Arbre {
    /// Render the attached tree, one node per line, two spaces per depth
    /// level: `name [tag]`, with a trailing ` +` on containers.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for id in self.iter_pre_order() {
            let Some(node) = self.get(id) else {
                continue;
            };
            let _ = writeln!(
                out,
                "{:indent$}{} [{}]{}",
                "",
                node.name,
                node.widget_type(),
                if node.is_container { " +" } else { "" },
                indent = self.depth(id) * 2,
            );
        }
        out
    }

    /// Print [`dump`](Self::dump) to stdout.
    pub fn print_tree(&self) {
        print!("{}", self.dump());
    }
}
