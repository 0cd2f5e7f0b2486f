//! Parsed table cells, as produced by the document parser.

/// An anchor inside a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellLink {
    pub text: String,
    pub href: Option<String>,
}

/// The first image inside a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellImage {
    pub src: Option<String>,
    pub title: Option<String>,
}

/// One `<td>` worth of labeled values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    /// Trimmed text content of the whole cell.
    pub text: String,
    /// Anchors in document order.
    pub links: Vec<CellLink>,
    pub image: Option<CellImage>,
}

impl TableCell {
    /// A cell holding only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    #[must_use]
    pub fn first_link(&self) -> Option<&CellLink> {
        self.links.first()
    }

    #[must_use]
    pub fn last_link(&self) -> Option<&CellLink> {
        self.links.last()
    }
}

/// One `<tr>` worth of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Text the row renders in bold, if any.
    pub emphasized: Option<String>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            emphasized: None,
        }
    }

    /// Trimmed text of the cell at `index`, or `""` when the row is shorter.
    #[must_use]
    pub fn cell_text(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |c| c.text.trim())
    }

    /// The row label: text of the first cell.
    #[must_use]
    pub fn label(&self) -> &str {
        self.cell_text(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_is_empty_past_the_end() {
        let row = TableRow::new(vec![
            TableCell::text(" Team Ratings (H/A) "),
            TableCell::text("1.2"),
        ]);
        assert_eq!(row.label(), "Team Ratings (H/A)");
        assert_eq!(row.cell_text(1), "1.2");
        assert_eq!(row.cell_text(5), "");
    }

    #[test]
    fn blank_cells() {
        assert!(TableCell::text("  ").is_blank());
        assert!(!TableCell::text("x").is_blank());
    }
}
