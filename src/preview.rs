use crate::vfs::VirtualFS;
use colored::Colorize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<usize>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Arena of tree nodes; index 0 is the destination directory.
fn build_tree(vfs: &VirtualFS, destination: &Path) -> Vec<TreeNode> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut nodes = vec![TreeNode::new(root_name, false)];

    // relative path -> arena index
    let mut lookup: HashMap<PathBuf, usize> = HashMap::new();
    lookup.insert(PathBuf::new(), 0);

    for entry in &vfs.entries {
        let parent = entry
            .destination
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let Some(&parent_index) = lookup.get(&parent) else {
            log::debug!(
                "parent: {}, not found for path: {}",
                parent.display(),
                entry.destination.display()
            );
            continue;
        };

        let child_name = entry
            .destination
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_default();

        let index = nodes.len();
        nodes.push(TreeNode::new(child_name, entry.is_file()));
        nodes[parent_index].children.push(index);

        lookup.insert(entry.destination.clone(), index);
    }

    nodes
}

fn render_node(nodes: &[TreeNode], index: usize, prefix: &str, is_last: bool, out: &mut String) {
    let node = &nodes[index];

    let connector = if is_last { "└── " } else { "├── " };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    out.push_str(&format!("{}{}{}\n", prefix.yellow(), connector.yellow(), name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        render_node(nodes, *child, &child_prefix, i == len - 1, out);
    }
}

/// Renders `vfs` as an ASCII tree rooted at `destination`.
pub fn render_tree(vfs: &VirtualFS, destination: &Path) -> String {
    let nodes = build_tree(vfs, destination);

    let mut out = String::new();
    render_node(&nodes, 0, "", true, &mut out);

    out
}

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

    println!(
        "\n{} {}",
        "└─".bold().bright_blue(),
        "Nothing was written".bright_green()
    );
}
