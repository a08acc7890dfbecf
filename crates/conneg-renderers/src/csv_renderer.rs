use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::Value;

use crate::renderer::{RenderError, RenderResult, Renderer};

/// CSV renderer for `application/csv` responses.
///
/// An array of objects becomes a header row (keys of the first object) plus
/// one row per object; a single object becomes key/value rows; an array of
/// arrays is written as-is.
#[derive(Debug, Clone)]
pub struct CSVRenderer {
	/// Field delimiter.
	pub delimiter: u8,
}

impl Default for CSVRenderer {
	fn default() -> Self {
		Self { delimiter: b',' }
	}
}

impl CSVRenderer {
	/// Creates a comma-delimited CSV renderer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the field delimiter.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_renderers::CSVRenderer;
	///
	/// let renderer = CSVRenderer::new().delimiter(b';');
	/// assert_eq!(renderer.delimiter, b';');
	/// ```
	pub fn delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}
}

impl Negotiable for CSVRenderer {
	fn media_type(&self) -> MediaType {
		MediaType::new("application", "csv")
	}
}

#[async_trait]
impl Renderer for CSVRenderer {
	fn charset(&self) -> Option<&str> {
		Some("utf-8")
	}

	fn format(&self) -> Option<&str> {
		Some("csv")
	}

	async fn render(&self, data: &Value, _media_type: &MediaType) -> RenderResult<Bytes> {
		let mut writer = csv::WriterBuilder::new()
			.delimiter(self.delimiter)
			.from_writer(Vec::new());

		match data {
			Value::Object(object) => {
				for (key, value) in object {
					write_row(&mut writer, &[Value::String(key.clone()), value.clone()])?;
				}
			}
			Value::Array(rows) => {
				if let Some(Value::Object(first)) = rows.first() {
					let headers: Vec<String> = first.keys().cloned().collect();
					writer
						.write_record(&headers)
						.map_err(|e| RenderError::Csv(e.to_string()))?;
					for row in rows {
						let Value::Object(object) = row else {
							return Err(RenderError::UnsupportedData(
								"mixed row shapes in CSV data".to_string(),
							));
						};
						let cells: Vec<Value> = headers
							.iter()
							.map(|key| object.get(key).cloned().unwrap_or(Value::Null))
							.collect();
						write_row(&mut writer, &cells)?;
					}
				} else {
					for row in rows {
						match row {
							Value::Array(cells) => write_row(&mut writer, cells)?,
							other => write_row(&mut writer, std::slice::from_ref(other))?,
						}
					}
				}
			}
			other => {
				return Err(RenderError::UnsupportedData(format!(
					"cannot render {} as CSV",
					kind(other)
				)));
			}
		}

		let bytes = writer
			.into_inner()
			.map_err(|e| RenderError::Csv(e.to_string()))?;
		Ok(Bytes::from(bytes))
	}
}

fn write_row(writer: &mut csv::Writer<Vec<u8>>, cells: &[Value]) -> RenderResult<()> {
	let record: Vec<String> = cells.iter().map(cell_text).collect();
	writer
		.write_record(&record)
		.map_err(|e| RenderError::Csv(e.to_string()))
}

fn cell_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
