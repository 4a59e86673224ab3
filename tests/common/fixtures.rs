//! Reusable input documents.

/// Two entries; `A` is redefined by the second one.
pub const TWO_ENTRY_RESEARCH: &str = r#"[
  {"published_in": [{"name": "A", "id": 1}]},
  {"connected_to": [{"name": "A", "id": 2}, {"name": "B", "id": 3}]}
]"#;

/// One entry with neither reference field.
pub const EMPTY_ENTRY_RESEARCH: &str = "[{}]";

/// A reference with a name and no id in the second entry.
pub const MISSING_ID_RESEARCH: &str = r#"[
  {"published_in": [{"name": "A", "id": 1}]},
  {"connected_to": [{"name": "B"}]}
]"#;

/// Realistic entries with mixed id types and noise.
pub const MIXED_RESEARCH: &str = r#"[
  {
    "title": "Graph rewriting at scale",
    "published_in": [
      {"name": "arXiv", "id": "arxiv"},
      {"name": "ACM DL", "id": 1001}
    ],
    "connected_to": [
      {"name": "Zenodo", "id": {"doi": "10.5281/zenodo.1"}},
      {"title": "no name here", "id": 5}
    ]
  },
  "stray string entry",
  {"published_in": "not a list"},
  {
    "published_in": [{"name": "arXiv", "id": "arxiv-v2"}],
    "connected_to": [{"name": "OSF", "id": null}]
  }
]"#;
