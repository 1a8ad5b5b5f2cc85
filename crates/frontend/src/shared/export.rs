/// CSV export: content building plus browser download.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const SEPARATOR: &str = ";";

/// Rows that can be written to a CSV file.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV document: UTF-8 BOM, header line, one line per record.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    // BOM so spreadsheet apps pick UTF-8
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(SEPARATOR));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(SEPARATOR));
        csv_content.push('\n');
    }

    csv_content
}

/// Writes `data` to a CSV file and starts the browser download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        label: &'static str,
        amount: u32,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Label", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.label.to_string(), self.amount.to_string()]
        }
    }

    #[test]
    fn test_build_csv_header_and_rows() {
        let rows = [
            Line { label: "Rooms", amount: 12000 },
            Line { label: "Restaurant", amount: 4500 },
        ];
        let csv = build_csv(&rows);
        assert_eq!(csv, "\u{FEFF}Label;Amount\nRooms;12000\nRestaurant;4500\n");
    }

    #[test]
    fn test_cells_with_separator_or_quotes_are_quoted() {
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("19,500 HTG"), "19,500 HTG");
    }

    #[test]
    fn test_empty_data_has_header_only() {
        let rows: [Line; 0] = [];
        assert_eq!(build_csv(&rows), "\u{FEFF}Label;Amount\n");
    }
}
