//! PDF Rendering Collaborator
//!
//! Renders the list into a downloadable document: the title as a heading,
//! then one numbered row per item with the amount in a second column.
//! A4 portrait, built-in Helvetica; layout stays deliberately plain.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{GroceryError, GroceryResult};
use crate::item::GroceryItem;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const AMOUNT_COLUMN_MM: f32 = 150.0;
const LINE_HEIGHT_MM: f32 = 9.0;

/// File name derived from the list title.
pub fn pdf_file_name(title: &str) -> String {
    format!("{title}-list.pdf")
}

/// Render `title` and the ordered `items` into PDF bytes.
///
/// Rows keep the collection's order and paginate when a page fills up.
pub fn render_list_pdf(title: &str, items: &[GroceryItem]) -> GroceryResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "list",
    );
    let heading_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y: f32 = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text(title, 18.0, Mm(MARGIN_MM.into()), Mm(y.into()), &heading_font);
    y -= 2.0 * LINE_HEIGHT_MM;

    for (index, item) in items.iter().enumerate() {
        if y < MARGIN_MM {
            let (page, page_layer) = doc.add_page(
                Mm(PAGE_WIDTH_MM.into()),
                Mm(PAGE_HEIGHT_MM.into()),
                "list",
            );
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        let row = format!("{}. {}", index + 1, item.name);
        let amount = format!("{} {}", item.quantity_label(), item.unit);
        layer.use_text(row, 12.0, Mm(MARGIN_MM.into()), Mm(y.into()), &body_font);
        layer.use_text(amount, 12.0, Mm(AMOUNT_COLUMN_MM.into()), Mm(y.into()), &body_font);
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes().map_err(pdf_err)
}

fn pdf_err(err: impl std::fmt::Display) -> GroceryError {
    GroceryError::pdf(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;

    fn items(names: &[&str]) -> Vec<GroceryItem> {
        names
            .iter()
            .map(|name| {
                GroceryItem::new(NewItem {
                    name: name.to_string(),
                    quantity: 2.0,
                    unit: "kg".to_string(),
                })
            })
            .collect()
    }

    #[test]
    fn test_file_name_pattern() {
        assert_eq!(pdf_file_name("Weekly Run"), "Weekly Run-list.pdf");
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let bytes = render_list_pdf("Weekly Run", &items(&["Apples", "Milk"])).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_list_still_renders() {
        let bytes = render_list_pdf("Empty", &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_list_paginates() {
        let names: Vec<String> = (0..120).map(|n| format!("Item {n}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let bytes = render_list_pdf("Long", &items(&refs)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
