use super::{row_headers, ScorePadRow};

/// Placeholder for cells without a value, e.g. the running total before the
/// first end.
const EMPTY_CELL: &str = "-";

/// A column of a rendered score pad.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScorePadColumn {
    /// End number or total label, see [`row_headers`].
    Header,
    Arrows,
    Hits,
    Score,
    Golds,
    RunningTotal,
}

impl ScorePadColumn {
    /// Column order of a paper score sheet.
    pub const DEFAULT_ORDER: [Self; 6] = [
        Self::Header,
        Self::Arrows,
        Self::Hits,
        Self::Score,
        Self::Golds,
        Self::RunningTotal,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Header => "End",
            Self::Arrows => "Arrows",
            Self::Hits => "H",
            Self::Score => "S",
            Self::Golds => "G",
            Self::RunningTotal => "R/T",
        }
    }

    /// `running_total` is the running total of the last end up to and
    /// including `row`.
    fn cell(self, row: &ScorePadRow, header: &str, running_total: Option<u32>) -> String {
        let totals = row.totals();

        match self {
            Self::Header => header.to_owned(),
            Self::Arrows => row.arrows_text(),
            Self::Hits => totals.hits.to_string(),
            Self::Score => totals.score.to_string(),
            Self::Golds => totals.golds.to_string(),
            Self::RunningTotal => {
                running_total.map_or_else(|| EMPTY_CELL.to_owned(), |total| total.to_string())
            }
        }
    }
}

/// Render the cells of all rows that should be emitted.
///
/// Total rows show the running total of the last end before them.
fn render_cells(
    rows: &[ScorePadRow],
    columns: &[ScorePadColumn],
    include_distance_rows: bool,
) -> Vec<Vec<String>> {
    let mut running_total = None;

    rows.iter()
        .zip(row_headers(rows))
        .filter_map(|(row, header)| {
            running_total = row.running_total().or(running_total);

            if !include_distance_rows && row.is_distance_row() {
                return None;
            }

            let cells = columns
                .iter()
                .map(|column| column.cell(row, &header, running_total))
                .collect();

            Some(cells)
        })
        .collect()
}

/// Render the rows as fixed-width plain text.
///
/// Returns the header line and the body. Every column is as wide as its
/// widest cell of the emitted rows or its label, whichever is wider, and
/// cells are padded on the right. If `include_distance_rows` is `false`,
/// distance and surplus totals are left out; the grand total always remains.
pub fn to_plain_text(
    rows: &[ScorePadRow],
    columns: &[ScorePadColumn],
    include_distance_rows: bool,
) -> (String, String) {
    let cells = render_cells(rows, columns, include_distance_rows);

    let widths: Vec<_> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .fold(column.label().chars().count(), usize::max)
        })
        .collect();

    let header = padded_line(columns.iter().map(|column| column.label()), &widths);

    let body = cells
        .iter()
        .map(|row| padded_line(row.iter().map(String::as_str), &widths))
        .collect::<Vec<_>>()
        .join("\n");

    (header, body)
}

/// Render the rows as comma separated values, starting with a header line.
///
/// If `include_distance_rows` is `false`, distance and surplus totals are
/// left out; the grand total always remains.
pub fn to_csv(
    rows: &[ScorePadRow],
    columns: &[ScorePadColumn],
    include_distance_rows: bool,
) -> String {
    let header = columns
        .iter()
        .map(|column| column.label())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];

    lines.extend(
        render_cells(rows, columns, include_distance_rows)
            .into_iter()
            .map(|row| row.join(",")),
    );

    lines.join("\n")
}

fn padded_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();

    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push(' ');
        }

        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(width.saturating_sub(cell.chars().count())));
    }

    line
}
