//! Table links: the URL a table's QR code points at, carrying `?table=N`.

use shared::domain::TableId;
use url::Url;

const TABLE_PARAM: &str = "table";

/// Returns the raw `table` query parameter if the link carries one.
///
/// Presence is all that is checked here; an empty value is returned as-is and
/// rejected later when the session starts.
pub fn table_from_url(link: &str) -> Result<Option<String>, url::ParseError> {
    let url = Url::parse(link)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == TABLE_PARAM)
        .map(|(_, value)| value.into_owned()))
}

pub fn table_link(base_url: &str, table: &TableId) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.set_path("/");
    url.query_pairs_mut()
        .clear()
        .append_pair(TABLE_PARAM, table.as_str());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_table_parameter() {
        assert_eq!(
            table_from_url("http://localhost:8000/?table=7").expect("url"),
            Some("7".to_string())
        );
        assert_eq!(
            table_from_url("http://localhost:8000/?lang=en&table=patio%203").expect("url"),
            Some("patio 3".to_string())
        );
        assert_eq!(table_from_url("http://localhost:8000/").expect("url"), None);
    }

    #[test]
    fn builds_link_that_round_trips() {
        let link = table_link("http://192.168.1.20:8000/menu", &TableId::from("12")).expect("url");
        assert_eq!(link.as_str(), "http://192.168.1.20:8000/?table=12");
        assert_eq!(
            table_from_url(link.as_str()).expect("url"),
            Some("12".to_string())
        );
    }

    #[test]
    fn rejects_malformed_links() {
        assert!(table_from_url("not a url").is_err());
    }
}
