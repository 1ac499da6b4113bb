//! Source-language detection for syntax highlighting

/// Fallback id for anything unrecognized
pub const PLAIN_TEXT: &str = "plaintext";

/// Language id for a file extension alone, case-insensitive.
pub fn language_for_extension(extension: Option<&str>) -> &'static str {
    let ext = match extension {
        Some(ext) => ext.to_lowercase(),
        None => return PLAIN_TEXT,
    };
    match ext.as_str() {
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "typescript",
        "html" | "htm" | "vue" => "html",
        "css" => "css",
        "scss" | "sass" => "scss",
        "less" => "less",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" | "ini" | "conf" | "cfg" | "properties" | "env" => "ini",
        "java" => "java",
        "py" => "python",
        "rb" => "ruby",
        "php" => "php",
        "go" => "go",
        "rs" => "rust",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "cs" => "csharp",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "sh" | "bash" | "zsh" => "shell",
        "ps1" => "powershell",
        "bat" | "cmd" => "bat",
        "sql" => "sql",
        "md" | "markdown" => "markdown",
        "tex" => "latex",
        "dockerfile" => "dockerfile",
        "graphql" | "gql" => "graphql",
        "r" => "r",
        "lua" => "lua",
        "perl" | "pl" => "perl",
        _ => PLAIN_TEXT,
    }
}

/// Language id for a full filename.
///
/// Conventional names without a useful extension are special-cased
/// before the extension lookup; everything else resolves through the
/// trailing extension. Total: unresolvable input maps to
/// [`PLAIN_TEXT`], never an error.
pub fn language_id(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    match lower.as_str() {
        "dockerfile" => return "dockerfile",
        "makefile" => return "makefile",
        ".gitignore" | ".dockerignore" => return "ini",
        _ => {}
    }
    if lower == ".env" || lower.starts_with(".env.") {
        return "ini";
    }
    match lower.rsplit_once('.') {
        Some((_, ext)) => language_for_extension(Some(ext)),
        None => PLAIN_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(language_id("Main.PY"), language_id("main.py"));
        assert_eq!(language_id("Main.PY"), "python");
    }

    #[test]
    fn test_no_extension_is_plain_text() {
        assert_eq!(language_id("README"), PLAIN_TEXT);
        assert_eq!(language_id("LICENSE"), PLAIN_TEXT);
    }

    #[test]
    fn test_conventional_filenames() {
        assert_eq!(language_id("Dockerfile"), "dockerfile");
        assert_eq!(language_id("DOCKERFILE"), "dockerfile");
        assert_eq!(language_id("Makefile"), "makefile");
        assert_eq!(language_id(".gitignore"), "ini");
        assert_eq!(language_id(".dockerignore"), "ini");
    }

    #[test]
    fn test_env_files_and_their_variants() {
        assert_eq!(language_id(".env"), "ini");
        assert_eq!(language_id(".env.local"), "ini");
        assert_eq!(language_id(".env.production"), "ini");
    }

    #[test]
    fn test_multi_dot_names_use_trailing_extension() {
        assert_eq!(language_id("component.test.ts"), "typescript");
        assert_eq!(language_id("archive.tar.gz"), PLAIN_TEXT);
    }

    #[test]
    fn test_extension_alone() {
        assert_eq!(language_for_extension(Some("rs")), "rust");
        assert_eq!(language_for_extension(Some("toml")), "ini");
        assert_eq!(language_for_extension(None), PLAIN_TEXT);
        assert_eq!(language_for_extension(Some("bin")), PLAIN_TEXT);
    }
}
