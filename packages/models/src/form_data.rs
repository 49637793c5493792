use crate::file::File;
use serde::Serialize;

/// A single form value: either text or an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    File(File),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text.as_str()),
            FormValue::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            FormValue::File(file) => Some(file),
            FormValue::Text(_) => None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FormValue::File(_))
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        FormValue::Text(text.to_string())
    }
}

impl From<String> for FormValue {
    fn from(text: String) -> Self {
        FormValue::Text(text)
    }
}

impl From<File> for FormValue {
    fn from(file: File) -> Self {
        FormValue::File(file)
    }
}

impl From<&FormValue> for FormValue {
    fn from(value: &FormValue) -> Self {
        value.clone()
    }
}

/// Ordered multipart form entries, as received.
///
/// Keys may repeat and entries keep their arrival order. Nothing here is
/// validated; see `services::parse` for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<FormValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Every value sent under `key`, in order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FormValue> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, value)| value)
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FormValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (key, value) in iter {
            form.append(key, value);
        }
        form
    }
}

impl IntoIterator for FormData {
    type Item = (String, FormValue);
    type IntoIter = std::vec::IntoIter<(String, FormValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = (&'a str, &'a FormValue);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, FormValue)>,
        fn(&'a (String, FormValue)) -> (&'a str, &'a FormValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn split(entry: &(String, FormValue)) -> (&str, &FormValue) {
            (entry.0.as_str(), &entry.1)
        }
        self.entries.iter().map(split as fn(&'a (String, FormValue)) -> (&'a str, &'a FormValue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut form = FormData::new();
        form.append("a", "1");
        form.append("b", "2");
        form.append("a", "3");

        let keys: Vec<&str> = form.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "a"]);

        let values: Vec<Option<&str>> = form.get_all("a").map(FormValue::as_text).collect();
        assert_eq!(values, vec![Some("1"), Some("3")]);
    }

    #[test]
    fn test_borrowed_and_owned_iteration_agree() {
        let form: FormData = [("name", "alice"), ("age", "20")].into_iter().collect();

        let borrowed: Vec<(String, FormValue)> = (&form)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let owned: Vec<(String, FormValue)> = form.into_iter().collect();

        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_value_narrowing() {
        let text = FormValue::from("alice");
        assert_eq!(text.as_text(), Some("alice"));
        assert!(text.as_file().is_none());
        assert!(!text.is_file());

        let file = File::new("a.txt", Some(mime::TEXT_PLAIN), "hi".as_bytes().to_vec());
        let file = FormValue::from(file);
        assert!(file.is_file());
        assert!(file.as_text().is_none());
        assert_eq!(file.as_file().map(File::size), Some(2));
    }

    #[test]
    fn test_value_serialization() {
        let text = serde_json::to_value(FormValue::from("alice")).unwrap();
        assert_eq!(text, serde_json::json!("alice"));

        let file = FormValue::from(File::new("a.txt", Some(mime::TEXT_PLAIN), b"hi".to_vec()));
        let json = serde_json::to_value(file).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["type"], "text/plain");
    }
}
