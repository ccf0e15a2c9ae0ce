use std::collections::HashMap;

/// Flat key/value view of an `appmanifest_<id>.acf` file.
///
/// Nesting is ignored: every line holding at least two quoted strings
/// contributes one entry, and a key seen again later overwrites the earlier
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValues {
    entries: HashMap<String, String>,
}

impl KeyValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Parses manifest text line by line. Lines without two quoted tokens are
/// skipped, so this never fails.
pub fn parse_key_values(text: &str) -> KeyValues {
    let mut entries = HashMap::new();

    for line in text.lines() {
        if !line.contains('"') {
            continue;
        }
        let parts: Vec<&str> = line.trim().split('"').collect();
        if parts.len() >= 4 {
            entries.insert(parts[1].to_string(), parts[3].to_string());
        }
    }

    KeyValues { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_values_reads_quoted_pairs() {
        let text = r#"
"AppState"
{
	"appid"		"220"
	"name"		"Half-Life 2"
	"UpdateResult"		"0"
	"SizeOnDisk"		"0"
}
"#;
        let kv = parse_key_values(text);

        assert_eq!(kv.get("appid"), Some("220"));
        assert_eq!(kv.get("name"), Some("Half-Life 2"));
        assert_eq!(kv.get("UpdateResult"), Some("0"));
        assert_eq!(kv.get("SizeOnDisk"), Some("0"));
        assert_eq!(kv.get("AppState"), None);
    }

    #[test]
    fn test_parse_key_values_last_write_wins() {
        let text = "\"SizeOnDisk\" \"0\"\n\"SizeOnDisk\" \"123456\"\n";
        let kv = parse_key_values(text);

        assert_eq!(kv.get("SizeOnDisk"), Some("123456"));
    }

    #[test]
    fn test_parse_key_values_skips_malformed_lines() {
        let text = "\"UpdateResult\"\n\"broken \"value\n{\n}\n\"SizeOnDisk\" \"0\" trailing\nno quotes here\n";
        let kv = parse_key_values(text);

        assert_eq!(kv.get("UpdateResult"), None);
        assert_eq!(kv.get("broken "), None);
        assert_eq!(kv.get("SizeOnDisk"), Some("0"));
    }

    #[test]
    fn test_parse_key_values_empty_input() {
        assert_eq!(parse_key_values(""), KeyValues::default());
    }
}
