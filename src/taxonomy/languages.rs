use std::collections::HashMap;
use std::sync::OnceLock;

/// Color used for languages missing from the table and for folded buckets.
pub const FALLBACK_COLOR: &str = "#6b7280";

fn color_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            ("JavaScript", "#f7df1e"),
            ("TypeScript", "#3178c6"),
            ("Python", "#3776ab"),
            ("Java", "#007396"),
            ("Go", "#00add8"),
            ("Rust", "#dea584"),
            ("Ruby", "#cc342d"),
            ("PHP", "#777bb4"),
            ("C++", "#f34b7d"),
            ("C", "#555555"),
            ("C#", "#239120"),
            ("Swift", "#ffac45"),
            ("Kotlin", "#7f52ff"),
            ("Dart", "#00b4ab"),
            ("HTML", "#e34c26"),
            ("CSS", "#563d7c"),
            ("Shell", "#89e051"),
            ("Vue", "#4fc08d"),
            ("Dockerfile", "#2496ed"),
            ("Jupyter Notebook", "#da5007"),
        ]
        .into_iter()
        .collect()
    })
}

/// Display color for a language name.
pub fn language_color(name: &str) -> &'static str {
    color_table().get(name).copied().unwrap_or(FALLBACK_COLOR)
}
