use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::Summary;

impl<T, M> Summary<T, M>
where
    T: Display,
    M: Display,
{
    /// Renders the summary as a two-column table.
    pub fn display(&self) -> String {
        let rows = [
            ("Count", self.count.to_string()),
            ("Sum", self.sum.to_string()),
            ("Mean", self.mean.to_string()),
            ("Variance", format!("{:.4}", self.variance)),
            ("Max", self.max.to_string()),
        ];

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
            ]);

        for (metric, value) in rows {
            table.add_row(vec![
                Cell::new(metric).set_alignment(CellAlignment::Left),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }

        table.to_string()
    }
}

impl<T, M> Display for Summary<T, M>
where
    T: Display,
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
