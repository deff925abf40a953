// Composite demo: files and folders rendered uniformly as one tree.

use std::fmt;

/// A leaf file or a folder of further nodes; both render through the same
/// recursive walk.
pub enum Node {
    File(String),
    Folder { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File(name.into())
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder {
            name: name.into(),
            children,
        }
    }

    fn render(&self, indent: &str, out: &mut String) {
        match self {
            Node::File(name) => {
                out.push_str(&format!("{indent} -File: {name}\n"));
            }
            Node::Folder { name, children } => {
                out.push_str(&format!("{indent} +Folder: {name}\n"));
                let deeper = format!("{indent}  ");
                for child in children {
                    child.render(&deeper, out);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(" ", &mut out);
        write!(f, "{out}")
    }
}

fn main() {
    let root = Node::folder(
        "root",
        vec![
            Node::folder(
                "Folder 1",
                vec![Node::file("file1.txt"), Node::file("file2.txt")],
            ),
            Node::folder(
                "Folder 2",
                vec![
                    Node::file("file3.txt"),
                    Node::folder("Folder 3", vec![Node::file("file4.txt")]),
                    Node::folder("Folder 5", vec![]),
                ],
            ),
        ],
    );

    print!("{root}");
}
