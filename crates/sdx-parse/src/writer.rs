//! Serializes records back into source form.

use sdx_model::{Record, SearchData};

/// Binding the documentation generator assigns.
pub const DEFAULT_BINDING: &str = "pages";

/// Options for [`write_source`].
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Binding the array is assigned to.
    pub binding: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            binding: DEFAULT_BINDING.to_string(),
        }
    }
}

/// Writes records in the generator's layout.
///
/// One compact object per line, separated by `,\n`, wrapped in
/// `{binding} = [` and `];`, with no trailing newline.
pub fn write_source(data: &SearchData, options: &WriteOptions) -> String {
    let body = data
        .iter()
        .map(record_json)
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{} = [{body}];", options.binding)
}

/// Writes records as a bare JSON array.
pub fn write_json(data: &SearchData, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    result.expect("records are plain strings and always serialize")
}

/// Serializes one record compactly.
fn record_json(record: &Record) -> String {
    serde_json::to_string(record).expect("records are plain strings and always serialize")
}

#[cfg(test)]
mod tests {
    use sdx_model::Kind;

    use super::*;
    use crate::parse_records;

    fn sample() -> SearchData {
        SearchData::new(vec![
            Record::page("index.html", "Welcome"),
            Record::new("_empty_/values$.html", "x", "val x: Dollars", "<empty>/values$", Kind::Val),
        ])
    }

    #[test]
    fn writes_generator_layout() {
        let out = write_source(&sample(), &WriteOptions::default());
        assert_eq!(
            out,
            concat!(
                r#"pages = [{"l":"index.html","n":"Welcome","t":"Welcome","d":"","k":"static"},"#,
                "\n",
                r#"{"l":"_empty_/values$.html","n":"x","t":"val x: Dollars","d":"<empty>/values$","k":"val"}];"#
            )
        );
    }

    #[test]
    fn writes_empty_array() {
        let options = WriteOptions {
            binding: "window.pages".into(),
        };
        assert_eq!(write_source(&SearchData::default(), &options), "window.pages = [];");
    }

    #[test]
    fn escapes_quotes_in_titles() {
        let data = SearchData::new(vec![Record::page("q.html", "say \"hi\"")]);
        let out = write_source(&data, &WriteOptions::default());
        assert!(out.contains(r#""n":"say \"hi\"""#));
        assert_eq!(parse_records(&out).unwrap(), data);
    }

    #[test]
    fn json_output_reparses() {
        let data = sample();
        let compact = write_json(&data, false);
        assert!(compact.starts_with("[{\"l\""));
        let pretty = write_json(&data, true);
        assert!(pretty.contains("\n  {"));
        assert_eq!(parse_records(&pretty).unwrap(), data);
    }
}
