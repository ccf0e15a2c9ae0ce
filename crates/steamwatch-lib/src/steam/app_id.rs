use std::cmp::Ordering;
use std::fmt;

/// Steam application id, as used in `appmanifest_<id>.acf` and
/// `steamapps/downloading/<id>`.
///
/// The directory name is kept verbatim, leading zeros included, so the
/// manifest looked up is always the one named after that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: u32) -> Self {
        Self(id.to_string())
    }

    /// Accepts only non-empty, all-digit directory names.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric_key(&self) -> (usize, &str) {
        let digits = self.0.trim_start_matches('0');
        (digits.len(), digits)
    }
}

impl Ord for AppId {
    /// Numeric order, with the literal name breaking ties between ids that
    /// differ only in leading zeros.
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_key()
            .cmp(&other.numeric_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for AppId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_name() {
        assert_eq!(AppId::from_dir_name("220"), Some(AppId::new(220)));
        assert_eq!(AppId::from_dir_name(""), None);
        assert_eq!(AppId::from_dir_name("temp"), None);
        assert_eq!(AppId::from_dir_name("220a"), None);
        assert_eq!(AppId::from_dir_name("-220"), None);
    }

    #[test]
    fn test_from_dir_name_keeps_literal_name() {
        let padded = AppId::from_dir_name("0220").unwrap();
        assert_eq!(padded.as_str(), "0220");
        assert_ne!(padded, AppId::new(220));

        let huge = AppId::from_dir_name("99999999999999").unwrap();
        assert_eq!(huge.to_string(), "99999999999999");
    }

    #[test]
    fn test_numeric_ordering() {
        let mut ids: Vec<AppId> = ["730", "0220", "99999999999999", "70", "220"]
            .into_iter()
            .filter_map(AppId::from_dir_name)
            .collect();
        ids.sort();

        let names: Vec<&str> = ids.iter().map(AppId::as_str).collect();
        assert_eq!(names, vec!["70", "0220", "220", "730", "99999999999999"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(AppId::new(730).to_string(), "730");
    }
}
