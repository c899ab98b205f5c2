//! Programming language detection from file extensions

use crate::types::Language;
use std::path::Path;

/// Detect programming language from file extension
///
/// Matching is exact and case-sensitive: `py` is Python, `PY` is unsupported.
pub fn detect_language(extension: &str) -> Option<Language> {
    let lang = match extension {
        "py" => Language::Python,
        "js" => Language::JavaScript,
        "ts" => Language::TypeScript,
        "jsx" => Language::Jsx,
        "tsx" => Language::Tsx,
        _ => return None,
    };

    Some(lang)
}

/// Detect the language of a file from the last extension of its name
pub fn language_for_path(path: &Path) -> Option<Language> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language_python() {
        assert_eq!(detect_language("py"), Some(Language::Python));
    }

    #[test]
    fn test_detect_language_script_family() {
        assert_eq!(detect_language("js"), Some(Language::JavaScript));
        assert_eq!(detect_language("ts"), Some(Language::TypeScript));
        assert_eq!(detect_language("jsx"), Some(Language::Jsx));
        assert_eq!(detect_language("tsx"), Some(Language::Tsx));
    }

    #[test]
    fn test_detect_language_case_sensitive() {
        assert_eq!(detect_language("PY"), None);
        assert_eq!(detect_language("Js"), None);
        assert_eq!(detect_language("TSX"), None);
    }

    #[test]
    fn test_detect_language_unknown() {
        assert_eq!(detect_language("rs"), None);
        assert_eq!(detect_language("mjs"), None);
        assert_eq!(detect_language("pyc"), None);
        assert_eq!(detect_language(""), None);
    }

    #[test]
    fn test_language_for_path() {
        assert_eq!(
            language_for_path(Path::new("src/app/main.py")),
            Some(Language::Python)
        );
        assert_eq!(
            language_for_path(Path::new("types/index.d.ts")),
            Some(Language::TypeScript)
        );
        assert_eq!(language_for_path(Path::new("Makefile")), None);
        assert_eq!(language_for_path(Path::new(".py")), None);
        assert_eq!(language_for_path(Path::new("notes.py.txt")), None);
    }
}
