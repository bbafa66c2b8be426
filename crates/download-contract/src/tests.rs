use crate::{
    is_valid_tiktok_url, looks_like_tiktok_url, mock_download_result, AcceptedDownload,
    DownloadFormat, DownloadRequest, DownloadResult, ParseFormatError, RawDownloadRequest,
    ValidationError,
};

fn raw(url: Option<&str>, format: Option<&str>) -> RawDownloadRequest {
    RawDownloadRequest {
        url: url.map(Into::into),
        format: format.map(Into::into),
    }
}

#[test]
fn test_loose_check_only_looks_for_domain() {
    assert!(looks_like_tiktok_url("https://www.tiktok.com/@user/video/123"));
    assert!(looks_like_tiktok_url("not even a url tiktok.com"));
    assert!(!looks_like_tiktok_url(""));
    assert!(!looks_like_tiktok_url("https://youtube.com/watch?v=1"));
    assert!(!looks_like_tiktok_url("https://www.TikTok.com/@user"));
}

#[test]
fn test_strict_pattern() {
    let accepted = [
        "https://www.tiktok.com/@user/video/123",
        "http://tiktok.com/",
        "https://vm.tiktok.com/ZMabc/",
        "https://vt.tiktok.com/ZSabc/",
        "HTTPS://WWW.TIKTOK.COM/@user",
    ];
    let rejected = [
        "https://youtube.com/x",
        "https://m.tiktok.com/@user",
        "https://www.tiktok.com",
        "ftp://www.tiktok.com/",
        "see https://www.tiktok.com/@user",
        "https://tiktok.com.evil.net/",
    ];

    for url in accepted {
        assert!(is_valid_tiktok_url(url), "expected {} to be accepted", url);
    }
    for url in rejected {
        assert!(!is_valid_tiktok_url(url), "expected {} to be rejected", url);
    }
}

#[test]
fn test_missing_or_empty_url_is_required() {
    assert_eq!(
        Err(ValidationError::UrlRequired),
        raw(None, Some("mp4")).validate()
    );
    assert_eq!(
        Err(ValidationError::UrlRequired),
        raw(Some(""), Some("mp4")).validate()
    );
}

#[test]
fn test_url_checked_before_format() {
    assert_eq!(
        Err(ValidationError::UrlRequired),
        raw(None, Some("avi")).validate()
    );
    assert_eq!(
        Err(ValidationError::InvalidTikTokUrl),
        raw(Some("https://youtube.com/x"), Some("avi")).validate()
    );
}

#[test]
fn test_format_is_passed_through() {
    let request = raw(Some("https://www.tiktok.com/@user/video/123"), Some("avi"))
        .validate()
        .expect("Expected request to be valid");

    assert_eq!(
        AcceptedDownload {
            url: "https://www.tiktok.com/@user/video/123".into(),
            format: "avi".into(),
        },
        request
    );
    assert_eq!(
        "https://example.com/video.avi",
        request.mock_result().download_url
    );
}

#[test]
fn test_format_defaults_to_mp4() {
    let request = raw(Some("https://vm.tiktok.com/abc/"), None)
        .validate()
        .expect("Expected request to be valid");

    assert_eq!("mp4", request.format);
}

#[test]
fn test_format_parsing() {
    assert_eq!(Ok(DownloadFormat::Mp3), "mp3".parse());
    assert_eq!(Ok(DownloadFormat::Mp4), "MP4".parse());
    assert_eq!(
        Err(ParseFormatError("wav".into())),
        "wav".parse::<DownloadFormat>()
    );
}

#[test]
fn test_mock_result_interpolates_format() {
    let request = DownloadRequest {
        url: "https://www.tiktok.com/@user/video/123".into(),
        format: DownloadFormat::Mp3,
    };

    assert_eq!(
        DownloadResult {
            url: "https://www.tiktok.com/@user/video/123".into(),
            title: "Sample TikTok Video".into(),
            author: "@example".into(),
            download_url: "https://example.com/video.mp3".into(),
        },
        mock_download_result(&request)
    );
}

#[test]
fn test_wire_shapes() {
    let result = mock_download_result(&DownloadRequest {
        url: "https://www.tiktok.com/@user/video/123".into(),
        format: DownloadFormat::Mp4,
    });
    let json = serde_json::to_value(&result).expect("Expected result to serialize");

    assert_eq!(json["downloadUrl"], "https://example.com/video.mp4");
    assert!(json.get("download_url").is_none());

    let request: DownloadRequest =
        serde_json::from_str(r#"{"url":"https://www.tiktok.com/@a/video/1","format":"mp3"}"#)
            .expect("Expected request to deserialize");
    assert_eq!(DownloadFormat::Mp3, request.format);
}
