//! Rendering of the topic table.

use std::fmt;

use qz_client::{Topic, TopicId};

/// Column headings, in display order
pub const COLUMNS: [&str; 4] = ["Code", "Name", "Description", "Actions"];

/// Placeholder shown while a reload is outstanding
pub const LOADING_TEXT: &str = "Loading topics...";

/// What a row reports upward when one of its buttons is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(Topic),
    Delete(TopicId),
}

/// One table row, borrowing the listed topic
#[derive(Debug, Clone, Copy)]
pub struct TopicRow<'a> {
    topic: &'a Topic,
}

impl<'a> TopicRow<'a> {
    pub const fn id(&self) -> TopicId {
        self.topic.id
    }

    pub fn code(&self) -> &'a str {
        &self.topic.code
    }

    pub fn name(&self) -> &'a str {
        &self.topic.name
    }

    pub fn description(&self) -> &'a str {
        &self.topic.description
    }

    pub fn edit(&self) -> RowAction {
        RowAction::Edit(self.topic.clone())
    }

    pub const fn delete(&self) -> RowAction {
        RowAction::Delete(self.topic.id)
    }
}

#[derive(Debug, Clone)]
pub enum ListView<'a> {
    Loading,
    Rows(Vec<TopicRow<'a>>),
}

impl<'a> ListView<'a> {
    pub fn rows(&self) -> &[TopicRow<'a>] {
        match self {
            Self::Loading => &[],
            Self::Rows(rows) => rows,
        }
    }
}

/// One row per topic, in collection order
pub fn render(topics: &[Topic], loading: bool) -> ListView<'_> {
    if loading {
        return ListView::Loading;
    }
    ListView::Rows(topics.iter().map(|topic| TopicRow { topic }).collect())
}

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = match self {
            Self::Loading => return writeln!(f, "{LOADING_TEXT}"),
            Self::Rows(rows) => rows,
        };

        let id_width = rows
            .iter()
            .map(|r| r.id().to_string().len())
            .max()
            .unwrap_or(0)
            .max(2);
        let code_width = column_width(COLUMNS[0], rows.iter().map(|r| r.code()));
        let name_width = column_width(COLUMNS[1], rows.iter().map(|r| r.name()));

        writeln!(
            f,
            "{:<id_width$}  {:<code_width$}  {:<name_width$}  {}",
            "#", COLUMNS[0], COLUMNS[1], COLUMNS[2]
        )?;
        for row in rows {
            writeln!(
                f,
                "{:<id_width$}  {:<code_width$}  {:<name_width$}  {}",
                row.id(),
                row.code(),
                row.name(),
                row.description()
            )?;
        }
        Ok(())
    }
}

fn column_width<'a>(heading: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(heading.len()))
        .max()
        .unwrap_or(0)
}
