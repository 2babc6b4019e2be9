use super::*;
use scraper::{ElementRef, Html};

/// Positions of the record fields in a result row. The explorer's table
/// carries icon/link cells at 2 and 4 which are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub kind: usize,
    pub name: usize,
    pub value: usize,
    pub block: usize,
    pub expires: usize,
}

pub const COLUMNS: Columns = Columns {
    kind: 0,
    name: 1,
    value: 3,
    block: 5,
    expires: 6,
};

impl Columns {
    /// Minimum number of cells a row needs before any field is read.
    pub fn width(&self) -> usize {
        [self.kind, self.name, self.value, self.block, self.expires]
            .into_iter()
            .max()
            .map_or(0, |last| last + 1)
    }

    fn record(&self, row: usize, mut cells: Vec<String>) -> Result<NvsRecord> {
        if cells.len() < self.width() {
            return Err(ParseError::RowTooShort {
                row,
                cells: cells.len(),
                expected: self.width(),
            }
            .into());
        }
        let mut take = |i: usize| std::mem::take(&mut cells[i]);
        Ok(NvsRecord {
            kind: take(self.kind),
            name: take(self.name),
            value: take(self.value),
            block: take(self.block),
            expires: take(self.expires),
        })
    }
}

/// Pull the NVS records out of an explorer result page.
///
/// Looks for the `<table>` whose id is `table_id` and turns every body row
/// into a record, in document order. A table without rows gives an empty
/// list; a missing table or a row with too few cells is an error and no
/// partial result is returned.
pub fn extract(html: &str, table_id: &str) -> Result<Vec<NvsRecord>> {
    let document = Html::parse_document(html);
    let table = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table" && el.value().id() == Some(table_id))
        .ok_or_else(|| ParseError::TableNotFound {
            table_id: table_id.to_string(),
        })?;

    let mut records = Vec::new();
    for (row, tr) in child_elements(table, "tbody")
        .flat_map(|tbody| child_elements(tbody, "tr"))
        .enumerate()
    {
        let cells = child_elements(tr, "td")
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect::<Vec<String>>();
        records.push(COLUMNS.record(row, cells)?);
    }
    tracing::debug!("extracted {} records from table {}", records.len(), table_id);
    Ok(records)
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}
