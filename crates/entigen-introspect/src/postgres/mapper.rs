use entigen_core::Column;

use super::queries::RawColumn;

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<Column> {
    raw.into_iter().map(map_column).collect()
}

fn map_column(raw: RawColumn) -> Column {
    let is_autoincrement = raw.is_identity || is_sequence_default(raw.column_default.as_deref());
    Column {
        ordinal_position: raw.ordinal_position,
        name: raw.name,
        data_type: raw.data_type,
        length: raw
            .character_max_length
            .and_then(|length| u32::try_from(length).ok()),
        is_nullable: raw.is_nullable,
        is_autoincrement,
        comment: raw.comment,
    }
}

/// `serial` columns show up as a `nextval('..._seq'::regclass)` default.
fn is_sequence_default(default: Option<&str>) -> bool {
    default.is_some_and(|expr| expr.trim_start().starts_with("nextval("))
}
