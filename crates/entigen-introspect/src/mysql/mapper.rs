use entigen_core::Column;

use super::queries::RawColumn;

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<Column> {
    raw.into_iter().map(map_column).collect()
}

fn map_column(raw: RawColumn) -> Column {
    let is_autoincrement = raw
        .extra
        .as_deref()
        .is_some_and(|extra| extra.to_ascii_lowercase().contains("auto_increment"));

    Column {
        ordinal_position: i32::try_from(raw.ordinal_position).unwrap_or(i32::MAX),
        name: raw.name,
        data_type: raw.column_type,
        length: raw
            .character_max_length
            .and_then(|length| u32::try_from(length).ok()),
        is_nullable: raw.is_nullable != 0,
        is_autoincrement,
        // MySQL reports missing comments as an empty string.
        comment: raw.comment.filter(|comment| !comment.is_empty()),
    }
}
