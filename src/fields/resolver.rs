use serde_json::{Map, Value};

const PATH_SEPARATOR: char = '.';

/// First candidate key present in `record` wins, even when it holds `null`,
/// falling back to the canonical name. Dotted keys walk nested objects.
pub fn resolve<'a>(field: &str, aliases: &[String], record: &'a Map<String, Value>) -> Option<&'a Value> {
    resolve_alias(aliases, record).or_else(|| record.get(field))
}

/// Tries the field's own candidate keys inside an object value.
pub fn unwrap_nested<'a>(aliases: &[String], value: Option<&'a Value>) -> Option<&'a Value> {
    match value {
        Some(Value::Object(inner)) => resolve_alias(aliases, inner).or(value),
        _ => value
    }
}

fn resolve_alias<'a>(aliases: &[String], record: &'a Map<String, Value>) -> Option<&'a Value> {
    aliases.iter().find_map(|alias| lookup(alias, record))
}

fn lookup<'a>(path: &str, record: &'a Map<String, Value>) -> Option<&'a Value> {
    match path.split_once(PATH_SEPARATOR) {
        Some((head, rest)) => lookup(rest, record.get(head)?.as_object()?),
        None => record.get(path)
    }
}
