use super::diagnostic::Diagnostic;
use super::range::TextRange;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const QUICKFIX_KIND: &str = "quickfix";

/// Everything `resolve` needs to redo the work of a proposal.
///
/// Produced by `propose` and consumed only by `resolve`; the client stores it
/// verbatim between the two calls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveData {
    pub uri: String,
    pub participant: String,
    pub codes: Vec<String>,
    pub range: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_key: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ResolveData {
    pub fn new(uri: impl Into<String>, participant: impl Into<String>, range: TextRange) -> Self {
        Self {
            uri: uri.into(),
            participant: participant.into(),
            codes: Vec::new(),
            range,
            binding_key: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.codes.push(code.into());
        self
    }

    pub fn with_binding_key(mut self, key: Option<String>) -> Self {
        self.binding_key = key;
        self
    }

    pub fn with_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.extra
            .insert(key.to_string(), serde_json::Value::String(value.into()));
        self
    }

    pub fn with_strings<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values
            .into_iter()
            .map(|v| serde_json::Value::String(v.into()))
            .collect();
        self.extra
            .insert(key.to_string(), serde_json::Value::Array(list));
        self
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }

    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.extra.get(key) {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Pre-resolve representation of a code action. Carries no edit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct CodeActionStub {
    pub title: String,
    pub kind: String,
    pub diagnostics: Vec<Diagnostic>,
    pub data: ResolveData,
}

impl CodeActionStub {
    pub fn quickfix(title: impl Into<String>, diagnostic: &Diagnostic, data: ResolveData) -> Self {
        Self {
            title: title.into(),
            kind: QUICKFIX_KIND.to_string(),
            diagnostics: vec![diagnostic.clone()],
            data,
        }
    }

    pub fn participant(&self) -> &str {
        &self.data.participant
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    pub fn insert(offset: usize, new_text: impl Into<String>) -> Self {
        Self::replace(TextRange::empty(offset), new_text)
    }

    pub fn delete(range: TextRange) -> Self {
        Self::replace(range, String::new())
    }
}

/// Per-file ordered, non-overlapping edits produced by `resolve`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
pub struct ResolvedEdit {
    pub changes: BTreeMap<String, Vec<TextEdit>>,
}

impl ResolvedEdit {
    pub fn single(uri: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        let mut changes = BTreeMap::new();
        changes.insert(uri.into(), edits);
        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.values().all(|edits| edits.is_empty())
    }

    pub fn edits_for(&self, uri: &str) -> &[TextEdit] {
        self.changes.get(uri).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Applies edits to `text`. Edits must not overlap; order does not matter.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.range.start, e.range.end));
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in sorted {
        out.push_str(&text[cursor..edit.range.start]);
        out.push_str(&edit.new_text);
        cursor = edit.range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_data_survives_json() {
        let data = ResolveData::new("file:///A.java", "jakarta.remove", TextRange::new(3, 9))
            .with_code("RemoveInjectOrFinal")
            .with_binding_key(Some("com.A.field".to_string()))
            .with_strings("annotations", ["jakarta.inject.Inject"]);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["bindingKey"], "com.A.field");
        let back: ResolveData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
        assert_eq!(back.strings("annotations"), vec!["jakarta.inject.Inject"]);
    }

    #[test]
    fn apply_edits_in_any_order() {
        let text = "private void run()";
        let edits = vec![
            TextEdit::replace(TextRange::new(13, 16), "go"),
            TextEdit::replace(TextRange::new(0, 7), "public"),
        ];
        assert_eq!(apply_edits(text, &edits), "public void go()");
    }
}
