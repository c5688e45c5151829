use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
    Css,
    Html,
    Json,
    Markdown,
}

impl LanguageId {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            "css" => Some(Self::Css),
            "html" | "htm" => Some(Self::Html),
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Jsx => "javascriptreact",
            Self::Tsx => "typescriptreact",
            Self::Css => "css",
            Self::Html => "html",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

/// Badge shown next to the file name, e.g. `TSX`.
pub fn extension_badge(extension: &str) -> String {
    extension.to_uppercase()
}

/// Syntax highlighting hook. Returns the code unchanged.
pub fn highlight<'a>(code: &'a str, _extension: &str) -> Cow<'a, str> {
    Cow::Borrowed(code)
}
