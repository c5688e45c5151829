//! 内置示例工作区：文件树与默认内容

use super::file_tree::{FileNode, FileTree, FileTreeError, NodeId};
use rustc_hash::FxHashMap;

pub fn sample_nodes() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "1",
            "src",
            vec![
                FileNode::file("2", "main.js", "js"),
                FileNode::file("3", "App.tsx", "tsx"),
                FileNode::file("4", "styles.css", "css"),
                FileNode::folder(
                    "5",
                    "components",
                    vec![
                        FileNode::file("6", "Header.tsx", "tsx"),
                        FileNode::file("7", "Footer.tsx", "tsx"),
                    ],
                ),
            ],
        ),
        FileNode::folder(
            "8",
            "public",
            vec![
                FileNode::file("9", "index.html", "html"),
                FileNode::file("10", "manifest.json", "json"),
            ],
        ),
        FileNode::file("11", "package.json", "json"),
        FileNode::file("12", "README.md", "md"),
    ]
}

pub fn sample_tree() -> Result<FileTree, FileTreeError> {
    FileTree::new(sample_nodes())
}

pub fn sample_contents() -> FxHashMap<NodeId, String> {
    let entries: [(&str, &str); 9] = [
        (
            "2",
            "// main.js\nconst app = document.getElementById(\"app\");\n\nfunction init() {\n  console.log(\"App initialized\");\n}\n\ninit();",
        ),
        (
            "3",
            "// App.tsx\nimport React from \"react\";\n\nfunction App() {\n  return (\n    <div className=\"app\">\n      <h1>Hello World</h1>\n    </div>\n  );\n}\n\nexport default App;",
        ),
        (
            "4",
            "/* styles.css */\nbody {\n  margin: 0;\n  padding: 0;\n  font-family: sans-serif;\n}\n\n.app {\n  max-width: 1200px;\n  margin: 0 auto;\n  padding: 20px;\n}",
        ),
        (
            "6",
            "// Header.tsx\nexport default function Header() {\n  return <header>Header Component</header>;\n}",
        ),
        (
            "7",
            "// Footer.tsx\nexport default function Footer() {\n  return <footer>Footer Component</footer>;\n}",
        ),
        (
            "9",
            "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n  <meta charset=\"UTF-8\">\n  <title>My App</title>\n</head>\n<body>\n  <div id=\"app\"></div>\n</body>\n</html>",
        ),
        (
            "10",
            "{\n  \"name\": \"my-app\",\n  \"version\": \"1.0.0\",\n  \"main\": \"index.js\"\n}",
        ),
        (
            "11",
            "{\n  \"name\": \"my-project\",\n  \"version\": \"1.0.0\",\n  \"dependencies\": {}\n}",
        ),
        (
            "12",
            "# README\n\nThis is my project documentation.\n\n## Getting Started\n\nRun `npm install` to get started.",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, content)| (NodeId::new(id), content.to_string()))
        .collect()
}
