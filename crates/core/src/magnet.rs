//! Magnet link construction.

use crate::release::NormalizedRecord;

/// The minimal (hash, name) pair a magnet link is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub hash: String,
    pub display_name: String,
}

impl LinkDescriptor {
    pub fn new(hash: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            display_name: display_name.into(),
        }
    }

    pub fn to_link(&self) -> String {
        build_link(&self.hash, &self.display_name)
    }
}

impl From<&NormalizedRecord> for LinkDescriptor {
    fn from(record: &NormalizedRecord) -> Self {
        Self::new(record.info_hash.clone(), record.title.clone())
    }
}

/// Build `magnet:?xt=urn:btih:<hash>&dn=<name>`.
///
/// Spaces in the name become `+`. Other reserved characters are passed
/// through unencoded.
pub fn build_link(hash: &str, name: &str) -> String {
    format!("magnet:?xt=urn:btih:{}&dn={}", hash, name.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_link() {
        assert_eq!(
            build_link("ABC123", "Film One"),
            "magnet:?xt=urn:btih:ABC123&dn=Film+One"
        );
    }

    #[test]
    fn test_build_link_replaces_every_space() {
        assert_eq!(
            build_link("h", "A  B C"),
            "magnet:?xt=urn:btih:h&dn=A++B+C"
        );
    }

    #[test]
    fn test_build_link_leaves_reserved_characters() {
        assert_eq!(
            build_link("h", "Tom & Jerry?"),
            "magnet:?xt=urn:btih:h&dn=Tom+&+Jerry?"
        );
    }

    #[test]
    fn test_descriptor_from_record() {
        let record = NormalizedRecord {
            id: 1,
            info_hash: "deadbeef".to_string(),
            title: "Some.Film.2019".to_string(),
            category: "movies".to_string(),
            size_gib: 1.0,
        };

        let descriptor = LinkDescriptor::from(&record);
        assert_eq!(descriptor.hash, "deadbeef");
        assert_eq!(
            descriptor.to_link(),
            "magnet:?xt=urn:btih:deadbeef&dn=Some.Film.2019"
        );
    }
}
