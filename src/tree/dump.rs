// src/tree/dump.rs

//! Human-readable tree rendering. Diagnostic only; not part of the format.

use super::CodeTree;
use std::fmt;

/// Display adapter that renders a tree one node per line, indented by depth.
///
/// ```text
/// + L
/// 	| EOF
/// + R
/// 	| 0x61 (a)
/// ```
pub struct TreeDump<'a>(pub &'a CodeTree);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("\t")?;
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &CodeTree, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match node {
        CodeTree::Leaf(value) => {
            write!(f, "| 0x{:02X}", value)?;
            if value.is_ascii_graphic() || *value == b' ' {
                write!(f, " ({})", *value as char)?;
            }
            writeln!(f)
        }
        CodeTree::EndMarker => writeln!(f, "| EOF"),
        CodeTree::Internal(left, right) => {
            writeln!(f, "+ L")?;
            write_node(f, left, depth + 1)?;
            indent(f, depth)?;
            writeln!(f, "+ R")?;
            write_node(f, right, depth + 1)
        }
    }
}

/// Renders `tree` as indented text.
pub fn dump_tree(tree: &CodeTree) -> String {
    TreeDump(tree).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_end_marker() {
        assert_eq!(dump_tree(&CodeTree::EndMarker), "| EOF\n");
    }

    #[test]
    fn test_nested_layout() {
        let tree = CodeTree::internal(
            CodeTree::EndMarker,
            CodeTree::internal(CodeTree::Leaf(b'a'), CodeTree::Leaf(0x07)),
        );
        let expected = "+ L\n\
                        \t| EOF\n\
                        + R\n\
                        \t+ L\n\
                        \t\t| 0x61 (a)\n\
                        \t+ R\n\
                        \t\t| 0x07\n";
        assert_eq!(dump_tree(&tree), expected);
    }

    #[test]
    fn test_space_is_printable() {
        assert_eq!(dump_tree(&CodeTree::Leaf(b' ')), "| 0x20 ( )\n");
    }
}
