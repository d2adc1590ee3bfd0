use crate::{
    tree::{Node, Tree},
    vfs::VirtualFS,
};
use colored::Colorize;
use std::{collections::BTreeMap, fmt::Write, path::Path};

/// Represents a node in the tree (either file or directory).
#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
    is_file: bool,
}

/// Build the directory tree from the resolved plan. Missing parents are created on the way down.
fn build_tree(tree: &Tree) -> TreeNode {
    let mut root = TreeNode::default();

    for (path, node) in tree {
        let mut current = &mut root;

        for component in path.components() {
            let name = component.as_os_str().to_string_lossy().to_string();
            current = current.children.entry(name).or_default();
        }

        current.is_file = matches!(node, Node::File(_));
    }

    root
}

fn write_tree(out: &mut String, name: &str, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let name = if node.is_file {
        name.green()
    } else {
        name.blue()
    };
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector.yellow(), name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, (child_name, child)) in node.children.iter().enumerate() {
        write_tree(out, child_name, child, &child_prefix, i == len - 1);
    }
}

/// Renders the planned tree under `destination` as an ASCII tree, children sorted by name.
pub fn render_tree(vfs: &VirtualFS, destination: &Path) -> String {
    let root = build_tree(&vfs.resolve());

    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut out = String::new();
    write_tree(&mut out, &root_name, &root, "", true);

    out
}

/// Prints what a run would create, without touching the filesystem.
pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    print!("{}", render_tree(vfs, destination));

    let replaced = if destination.exists() {
        format!("{} would be replaced", destination.display())
    } else {
        format!("{} would be created", destination.display())
    };

    println!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        format!("dry run, nothing written: {}", replaced).bright_green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_entries_with_synthesised_parents() {
        colored::control::set_override(false);

        let mut vfs = VirtualFS::new();
        vfs.push_file("README.md", "x\n".to_string());
        vfs.push_file("a/b/x.yaml", "y\n".to_string());
        vfs.push_directory("c");

        let rendered = render_tree(&vfs, Path::new("some/out"));

        assert_eq!(
            rendered,
            [
                "└── out",
                "    ├── README.md",
                "    ├── a",
                "    │   └── b",
                "    │       └── x.yaml",
                "    └── c",
                "",
            ]
            .join("\n")
        );
    }
}
