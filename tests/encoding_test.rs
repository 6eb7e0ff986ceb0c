use page_digest::extract_article_text_bytes;

fn article_bytes(charset: Option<&str>, body: &[u8]) -> Vec<u8> {
    let mut html = Vec::new();
    html.extend_from_slice(b"<html><head>");
    if let Some(charset) = charset {
        html.extend_from_slice(format!("<meta charset=\"{charset}\">").as_bytes());
    }
    html.extend_from_slice(b"</head><body><article><p>");
    html.extend_from_slice(body);
    html.extend_from_slice(b" ");
    html.extend_from_slice("Filler text to pass the article threshold. ".repeat(5).as_bytes());
    html.extend_from_slice(b"</p></article></body></html>");
    html
}

/// UTF-8 content is handled correctly
#[test]
fn utf8_content_handled_correctly() {
    let html = article_bytes(Some("utf-8"), "Special characters: é, ñ, ü, 中文".as_bytes());
    let text = extract_article_text_bytes(&html);

    assert!(text.starts_with("Special characters: é, ñ, ü, 中文"));
}

/// ISO-8859-1 encoding is converted to UTF-8
#[test]
fn iso88591_converted_to_utf8() {
    let html = article_bytes(Some("ISO-8859-1"), b"Caf\xE9 espa\xF1ol M\xFCnchen");
    let text = extract_article_text_bytes(&html);

    assert!(text.starts_with("Café español München"));
}

/// Windows-1252 declared through http-equiv is detected and converted
#[test]
fn windows1252_http_equiv_detected_and_converted() {
    let mut html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>".to_vec();
    html.extend_from_slice(b"<body><article><p>\x93Smart quotes\x94 and an en\x96dash. ");
    html.extend_from_slice("More words to pass the threshold. ".repeat(6).as_bytes());
    html.extend_from_slice(b"</p></article></body></html>");

    let text = extract_article_text_bytes(&html);

    assert!(text.starts_with("\u{201C}Smart quotes\u{201D} and an en\u{2013}dash."));
}

/// UTF-8 is assumed when no charset declaration
#[test]
fn utf8_assumed_when_no_charset() {
    let html = article_bytes(None, "No charset, but naïve café".as_bytes());
    let text = extract_article_text_bytes(&html);

    assert!(text.starts_with("No charset, but naïve café"));
}

/// Invalid bytes are replaced rather than aborting extraction
#[test]
fn invalid_encoding_handled_gracefully() {
    let html = article_bytes(None, b"Valid text \xFF\xFE\xFD more valid text");
    let text = extract_article_text_bytes(&html);

    assert!(text.starts_with("Valid text"));
    assert!(text.contains("more valid text"));
    assert!(text.contains('\u{FFFD}'));
}
