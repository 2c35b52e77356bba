use strum::{Display, EnumString};

use crate::{AggregatedLine, CartStore, ShoppingError, aggregate};

pub const EXPORT_MEDIA_TYPE: &str = "text/csv";
pub const EXPORT_FILENAME: &str = "shopping.csv";

const TITLE_ROW: [&str; 5] = [" ", " ", "СПИСОК ПРОДУКТОВ для ", "выбранных ", "рецептов:"];
const SEPARATOR_ROW: [&str; 5] = ["-", "-", "-", "-", "-"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RowTerminator {
    #[default]
    Newline,
    Crlf,
    Semicolon,
}

impl RowTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowTerminator::Newline => "\n",
            RowTerminator::Crlf => "\r\n",
            RowTerminator::Semicolon => ";",
        }
    }
}

/// Delimited text layout of the shopping list export.
///
/// Every field is wrapped in double quotes, numbers included, with embedded
/// quotes doubled. The field delimiter must not be `"`, `\r` or `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormat {
    pub field_delimiter: char,
    pub row_terminator: RowTerminator,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self {
            field_delimiter: ',',
            row_terminator: RowTerminator::Newline,
        }
    }
}

impl ExportFormat {
    pub fn render(&self, lines: &[AggregatedLine]) -> String {
        let mut out = String::new();
        self.write_row(&mut out, &TITLE_ROW);
        self.write_row(&mut out, &SEPARATOR_ROW);

        for line in lines {
            let ordinal = line.ordinal.to_string();
            let product = format!("{}: ", line.name);
            let amount = line.amount.to_string();
            self.write_row(&mut out, &[&ordinal, ". ", &product, &amount, &line.unit]);
        }

        out
    }

    fn write_row(&self, out: &mut String, fields: &[&str]) {
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                out.push(self.field_delimiter);
            }

            out.push('"');
            for c in field.chars() {
                if c == '"' {
                    out.push('"');
                }
                out.push(c);
            }
            out.push('"');
        }

        out.push_str(self.row_terminator.as_str());
    }
}

/// Rendered shopping list ready to be served as a file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListExport {
    pub content: String,
    pub media_type: &'static str,
    pub filename: &'static str,
}

impl ShoppingListExport {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Builds the shopping list of `user_id` from the recipes in their cart.
///
/// Reads the store once and renders nothing if that read fails.
pub async fn export_shopping_list<S: CartStore + ?Sized>(
    store: &S,
    user_id: &str,
    format: &ExportFormat,
) -> Result<ShoppingListExport, ShoppingError> {
    let lines = store
        .list_cart_ingredient_lines(user_id)
        .await
        .map_err(ShoppingError::Retrieval)?;

    let line_count = lines.len();
    let aggregated = aggregate(lines);

    tracing::debug!(
        user_id,
        lines = line_count,
        items = aggregated.len(),
        "shopping list aggregated"
    );

    Ok(ShoppingListExport {
        content: format.render(&aggregated),
        media_type: EXPORT_MEDIA_TYPE,
        filename: EXPORT_FILENAME,
    })
}
