//! CSV output, one row per analysed input.

use crate::Analysis;

const COLUMNS: [&str; 14] = [
    "input",
    "address",
    "prefix",
    "mask",
    "network",
    "broadcast",
    "first_host",
    "last_host",
    "total_addresses",
    "usable_hosts",
    "class",
    "private",
    "loopback",
    "error",
];

/// Quote a field. No padding around it: excel does not like spaces after
/// the comma, and embedded `"` must be doubled.
fn quote<T: ToString>(value: T) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\"\""))
}

/// Column header line.
pub fn csv_header() -> String {
    COLUMNS.iter().map(quote).collect::<Vec<String>>().join(",")
}

/// One CSV row. Failed inputs leave the report columns empty and fill `error`.
pub fn csv_row(analysis: &Analysis) -> String {
    let input = quote(analysis.input.trim());
    let fields = match &analysis.result {
        Ok(r) => vec![
            input,
            quote(r.address),
            quote(r.prefix),
            quote(r.mask),
            quote(r.network),
            quote(r.broadcast),
            quote(r.first_host),
            quote(r.last_host),
            quote(r.total_addresses),
            quote(r.usable_hosts),
            quote(r.class),
            quote(r.is_private),
            quote(r.is_loopback),
            quote(""),
        ],
        Err(e) => {
            let mut fields = vec![input];
            fields.extend(std::iter::repeat(quote("")).take(COLUMNS.len() - 2));
            fields.push(quote(e));
            fields
        }
    };
    fields.join(",")
}
