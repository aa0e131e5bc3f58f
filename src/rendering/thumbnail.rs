use base64::Engine;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Embed raw PNG bytes as a data URL for the save request's thumbnail
pub fn to_data_url(png: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + encoded.len());
    url.push_str(PNG_DATA_URL_PREFIX);
    url.push_str(&encoded);
    url
}
