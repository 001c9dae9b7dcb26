// Field splitting shared by the mapping loader and the edge translator.

pub fn split_fields(line: &str, delim: char) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut fields: Vec<String> = line.split(delim).map(trim_field).collect();
    // a trailing delimiter does not open a new field
    if line.ends_with(delim) {
        fields.pop();
    }
    fields
}

fn trim_field(field: &str) -> String {
    field
        .trim_matches(|c: char| c.is_whitespace() || c == '"')
        .to_string()
}
