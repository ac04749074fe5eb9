//! Directory tree construction from detected file paths.
//!
//! The tree is rebuilt from scratch whenever the file list changes. Files and
//! directories keep the order in which they first appear in the path list.

use serde::Serialize;

/// A file entry inside a directory node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLeaf {
    /// Last path segment
    pub name: String,
    /// Original path string, also the selection key
    pub path: String,
}

/// A directory (or the root) of the file tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileTreeNode {
    /// Directory name (empty for the root)
    pub name: String,
    /// Files directly inside this directory
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileLeaf>,
    /// Child directories, in first-appearance order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dirs: Vec<FileTreeNode>,
}

impl FileTreeNode {
    /// Create an empty directory node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// True when the node holds no files and no directories
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Direct child directory by name
    pub fn dir(&self, name: &str) -> Option<&FileTreeNode> {
        self.dirs.iter().find(|d| d.name == name)
    }

    fn dir_entry(&mut self, name: &str) -> &mut FileTreeNode {
        match self.dirs.iter().position(|d| d.name == name) {
            Some(idx) => &mut self.dirs[idx],
            None => {
                self.dirs.push(FileTreeNode::new(name));
                let last = self.dirs.len() - 1;
                &mut self.dirs[last]
            }
        }
    }

    /// Descendant directory addressed by a `/` or `\` separated path.
    ///
    /// An empty path addresses this node.
    pub fn find_dir(&self, path: &str) -> Option<&FileTreeNode> {
        split_segments(path).try_fold(self, |node, segment| node.dir(segment))
    }

    /// Every file path under this node, depth-first, files before subdirectories
    pub fn all_files(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files(&self, out: &mut Vec<String>) {
        out.extend(self.files.iter().map(|f| f.path.clone()));
        for dir in &self.dirs {
            dir.collect_files(out);
        }
    }

    /// Number of files in this subtree
    pub fn file_count(&self) -> usize {
        self.files.len() + self.dirs.iter().map(|d| d.file_count()).sum::<usize>()
    }
}

/// Build the directory tree for a list of file paths.
///
/// Every segment but the last becomes a directory node; the last becomes a
/// file leaf carrying the original path.
pub fn build_tree(paths: &[String]) -> FileTreeNode {
    let mut root = FileTreeNode::new("");

    for path in paths {
        let segments: Vec<&str> = split_segments(path).collect();
        let Some((name, dirs)) = segments.split_last() else {
            // Nothing but separators; keep the file reachable at the root
            root.files.push(FileLeaf {
                name: path.clone(),
                path: path.clone(),
            });
            continue;
        };

        let mut node = &mut root;
        for dir in dirs {
            node = node.dir_entry(dir);
        }
        node.files.push(FileLeaf {
            name: (*name).to_string(),
            path: path.clone(),
        });
    }

    root
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty())
}
