//! Encoding and decoding of individual records, checked against the exact JSON text.

use std::fmt::Debug;

use xcodereleases::{
    Architecture, Checksum, Checksums, Compiler, CompilerName, DecodeError, Link, LinkKind, Platform,
    Record, ReleaseDate, ReleaseKind, ReleaseKindName, Sdk, Version, VersionRange, Xcode,
    decode_str, decode_value, encode_string, encode_value,
};


/// Decode the given text and check that it encodes back to the exact same text.
fn check_text<T: Record + Debug + PartialEq>(text: &str) -> T {
    let value = decode_str::<T>(text).unwrap();
    assert_eq!(encode_string(&value), text);
    value
}

/// Encode the given value and check that it decodes back to an equal value.
fn check_value<T: Record + Debug + PartialEq>(value: &T) {
    let text = encode_string(value);
    assert_eq!(&decode_str::<T>(&text).unwrap(), value, "{text}");
    assert_eq!(&decode_value::<T>(&encode_value(value)).unwrap(), value);
}

fn type_mismatch<T: Record + Debug>(text: &str) -> (String, String) {
    match decode_str::<T>(text) {
        Err(DecodeError::TypeMismatch { path, expected }) => (path, expected),
        res => panic!("expected type mismatch for {text}, got {res:?}"),
    }
}

fn missing_field<T: Record + Debug>(text: &str) -> String {
    match decode_str::<T>(text) {
        Err(DecodeError::MissingField { path }) => path,
        res => panic!("expected missing field for {text}, got {res:?}"),
    }
}

#[test]
fn tags() {

    assert_eq!(check_text::<Platform>(r#""iOS""#), Platform::IOS);
    assert_eq!(check_text::<Architecture>(r#""arm64""#), Architecture::ARM64);

    let platform = check_text::<Platform>(r#""xrOS""#);
    assert!(!platform.is_known());
    assert_eq!(platform.as_str(), "xrOS");

    let kind = check_text::<ReleaseKindName>(r#""preview""#);
    assert!(kind.is_unknown());
    assert!(kind.is_prerelease());

    // Values are never normalized.
    assert_ne!(check_text::<Platform>(r#""IOS""#), Platform::IOS);
    assert_eq!(check_text::<Platform>(r#""""#).as_str(), "");

    assert_eq!(type_mismatch::<Platform>("3"), (".".to_string(), "a string (Platform)".to_string()));
    assert_eq!(type_mismatch::<CompilerName>("null").0, ".");

}

#[test]
fn version() {

    check_text::<Version>(r#"{"number":"15.4","build":"15F31d"}"#);
    check_text::<Version>(r#"{"number":"15.4"}"#);
    check_text::<Version>(r#"{"build":"15F31d"}"#);

    // Not validated on decode.
    let empty = check_text::<Version>(r#"{}"#);
    assert_eq!(empty.number(), None);
    assert_eq!(empty.build(), None);

    assert_eq!(decode_str::<Version>(r#"{"number":null,"build":"1A2"}"#).unwrap(), Version::from_build("1A2"));
    assert_eq!(type_mismatch::<Version>(r#"{"number":15.4}"#), ("number".to_string(), "a string".to_string()));

}

#[test]
fn version_range() {

    check_text::<VersionRange>(r#"{"minimum":{"number":"14.5"}}"#);
    check_text::<VersionRange>(r#"{"minimum":{"number":"10.15.4"},"maximum":{"number":"11.0"}}"#);
    check_value(&VersionRange::new(Version::new("12.0", "16A5171c"), Some(Version::from_build("16A5288q"))));

    assert_eq!(missing_field::<VersionRange>(r#"{"maximum":{"number":"11.0"}}"#), "minimum");
    assert_eq!(type_mismatch::<VersionRange>(r#"{"minimum":{"number":"14.5"},"maximum":"15"}"#).0, "maximum");

}

#[test]
fn release_date() {

    // No calendar validation.
    let date = check_text::<ReleaseDate>(r#"{"year":2024,"month":2,"day":30}"#);
    assert_eq!(date, ReleaseDate::new(2024, 2, 30));
    assert_eq!(date.to_naive_date(), None);

    assert_eq!(missing_field::<ReleaseDate>(r#"{"year":2024,"month":2}"#), "day");
    assert_eq!(type_mismatch::<ReleaseDate>(r#"{"year":"2024","month":2,"day":1}"#).0, "year");
    assert_eq!(type_mismatch::<ReleaseDate>(r#"{"year":2024,"month":-2,"day":1}"#).0, "month");
    assert_eq!(type_mismatch::<ReleaseDate>(r#"{"year":2024,"month":2,"day":1.5}"#).0, "day");

}

#[test]
fn release_kind() {

    assert_eq!(check_text::<ReleaseKind>(r#"{"name":"release"}"#), ReleaseKind::RELEASE);
    assert_eq!(check_text::<ReleaseKind>(r#"{"name":"beta","number":3}"#), ReleaseKind::beta(3));
    assert_eq!(check_text::<ReleaseKind>(r#"{"name":"gmSeed","number":1}"#), ReleaseKind::gm_seed(1));

    check_value(&ReleaseKind::GM);
    check_value(&ReleaseKind::release_candidate(2));
    check_value(&ReleaseKind::developer_preview(1));

    let unknown = check_text::<ReleaseKind>(r#"{"name":"preview","number":2}"#);
    assert!(unknown.is_unknown());

    assert_eq!(missing_field::<ReleaseKind>(r#"{"number":2}"#), "name");

}

#[test]
fn toolchain() {

    check_text::<Compiler>(r#"{"name":"swift","version":{"number":"5.10","build":"5.10.0.13"}}"#);
    check_value(&Compiler::clang(Version::from_build("1500.3.9.4")));
    check_value(&Compiler::llvm_gcc(Version::from_number("4.2")));

    let sdk = check_text::<Sdk>(r#"{"platform":"iOS","version":{"number":"17.5"},"deploymentRange":{"minimum":{"number":"12.0"},"maximum":{"number":"17.5"}}}"#);
    assert_eq!(sdk.platform, Platform::IOS);
    assert!(sdk.deployment_range.is_some());

    check_text::<Sdk>(r#"{"platform":"macOS","version":{"number":"14.5","build":"23F73"}}"#);
    check_value(&Sdk::visionos(Version::from_number("1.2"))
        .with_deployment_range(VersionRange::from_minimum(Version::from_number("1.0"))));

    assert_eq!(missing_field::<Compiler>(r#"{"name":"swift"}"#), "version");
    assert_eq!(missing_field::<Sdk>(r#"{"platform":"iOS","version":{"number":"17.5"},"deploymentRange":{}}"#), "deploymentRange.minimum");

}

#[test]
fn checksums() {

    let checksums = check_text::<Checksums>(r#"{"sha1":"abc123"}"#);
    assert_eq!(checksums.len(), 1);
    assert_eq!(checksums.get(&Checksum::SHA1).map(String::as_str), Some("abc123"));

    // Unknown algorithms are kept and encoded in key order.
    let checksums = decode_str::<Checksums>(r#"{"sha256":"def","sha1":"abc"}"#).unwrap();
    assert_eq!(encode_string(&checksums), r#"{"sha1":"abc","sha256":"def"}"#);

    // Last value wins for duplicate keys.
    let checksums = decode_str::<Checksums>(r#"{"sha1":"abc","sha1":"def"}"#).unwrap();
    assert_eq!(encode_string(&checksums), r#"{"sha1":"def"}"#);

    assert_eq!(type_mismatch::<Checksums>(r#"{"sha1":1}"#).0, "sha1");

}

#[test]
fn link_kind() {

    assert_eq!(encode_string(&LinkKind::simulator_runtime(Platform::IOS)), r#"{"name":"Simulator Runtime","platform":"iOS"}"#);
    assert_eq!(encode_string(&LinkKind::XCODE), r#"{"name":"Xcode"}"#);
    assert_eq!(encode_string(&LinkKind::RELEASE_NOTES), r#"{"name":"Release Notes"}"#);

    check_value(&LinkKind::simulator_runtime(Platform::WATCHOS));

    // The platform is kept whatever the name.
    let kind = check_text::<LinkKind>(r#"{"name":"Xcode","platform":"macOS"}"#);
    assert_eq!(kind.simulator_runtime_platform, Some(Platform::MACOS));

}

#[test]
fn link() {

    let link = Link::new("https://download.developer.apple.com/Xcode_15.4.xip", LinkKind::XCODE);
    assert_eq!(encode_string(&link), r#"{"url":"https://download.developer.apple.com/Xcode_15.4.xip","kind":{"name":"Xcode"}}"#);
    check_value(&link);

    let link = link.with_size(3_195_148_212).with_checksum(Checksum::SHA1, "abc123");
    assert_eq!(encode_string(&link), r#"{"url":"https://download.developer.apple.com/Xcode_15.4.xip","sizeInBytes":3195148212,"checksums":{"sha1":"abc123"},"kind":{"name":"Xcode"}}"#);
    check_value(&link);

    // Removed schema revision field, ignored.
    let link = decode_str::<Link>(r#"{"url":"https://example.com","architectures":["arm64"],"kind":{"name":"Xcode"}}"#).unwrap();
    assert_eq!(link, Link::new("https://example.com", LinkKind::XCODE));

    assert_eq!(missing_field::<Link>(r#"{"url":"https://example.com"}"#), "kind");
    assert_eq!(missing_field::<Link>(r#"{"url":"https://example.com","kind":{}}"#), "kind.name");
    assert_eq!(type_mismatch::<Link>(r#"{"url":"https://example.com","sizeInBytes":-1,"kind":{"name":"Xcode"}}"#).0, "sizeInBytes");
    assert_eq!(type_mismatch::<Link>(r#"{"url":"https://example.com","checksums":[],"kind":{"name":"Xcode"}}"#).0, "checksums");
    assert_eq!(type_mismatch::<Link>(r#"["https://example.com"]"#), (".".to_string(), "struct Link".to_string()));

}

fn xcode() -> Xcode {
    Xcode::new(
        "Xcode",
        Version::new("15.4", "15F31d"),
        ReleaseKind::RELEASE,
        ReleaseDate::new(2024, 5, 13),
        VersionRange::from_minimum(Version::from_number("14.0")),
    )
}

#[test]
fn xcode_minimal() {

    let xcode = xcode();
    let text = encode_string(&xcode);
    assert_eq!(text, concat!(
        r#"{"name":"Xcode","version":{"number":"15.4","build":"15F31d"},"releaseKind":{"name":"release"},"#,
        r#""releaseDate":{"year":2024,"month":5,"day":13},"supportedOSRange":{"minimum":{"number":"14.0"}}}"#,
    ));
    assert!(!text.contains("null"));
    assert!(!text.contains("isCurrent"));

    check_value(&xcode);

}

#[test]
fn xcode_full() {

    let mut xcode = xcode();
    xcode.sdks = Some(vec![Sdk::macos(Version::new("14.5", "23F73")), Sdk::ios(Version::from_number("17.5"))]);
    xcode.compilers = Some(vec![Compiler::swift(Version::new("5.10", "5.10.0.13"))]);
    xcode.links = Some(vec![
        Link::new("https://example.com/Xcode_15.4.xip", LinkKind::XCODE).with_size(3_195_148_212),
        Link::new("https://example.com/iOS_17.5.dmg", LinkKind::simulator_runtime(Platform::IOS)),
    ]);
    xcode.is_current = true;

    let text = encode_string(&xcode);
    assert!(text.ends_with(r#","isCurrent":true}"#), "{text}");
    check_value(&xcode);

    // Empty lists are present, not absent.
    xcode.sdks = Some(Vec::new());
    assert!(encode_string(&xcode).contains(r#""sdks":[]"#));
    check_value(&xcode);

}

#[test]
fn xcode_is_current() {

    let base = encode_value(&xcode());

    let mut value = base.clone();
    assert_eq!(decode_value::<Xcode>(&value).unwrap().is_current, false);

    value["isCurrent"] = serde_json::Value::Bool(false);
    let decoded = decode_value::<Xcode>(&value).unwrap();
    assert_eq!(decoded.is_current, false);
    assert_eq!(encode_value(&decoded), base);

    value["isCurrent"] = serde_json::Value::Bool(true);
    assert_eq!(decode_value::<Xcode>(&value).unwrap().is_current, true);

    value["isCurrent"] = serde_json::Value::from("yes");
    assert!(matches!(decode_value::<Xcode>(&value), Err(DecodeError::TypeMismatch { ref path, .. }) if path == "isCurrent"));

}

#[test]
fn xcode_errors() {

    let mut value = encode_value(&xcode());
    value["links"] = serde_json::json!([
        {"url": "https://example.com/notes", "kind": {"name": "Release Notes"}},
        {"url": "https://example.com/Xcode.xip", "kind": {"platform": "iOS"}},
    ]);

    let err = decode_value::<Xcode>(&value).unwrap_err();
    assert_eq!(err.path(), Some("links[1].kind.name"));
    assert!(matches!(err, DecodeError::MissingField { .. }));
    assert_eq!(err.index(), None);

    value["links"][1]["kind"]["name"] = serde_json::Value::from(3);
    let err = decode_value::<Xcode>(&value).unwrap_err();
    assert_eq!(err.path(), Some("links[1].kind.name"));
    assert!(matches!(err, DecodeError::TypeMismatch { ref expected, .. } if expected == "a string (LinkKindName)"));

    value["links"] = serde_json::Value::from("none");
    let err = decode_value::<Xcode>(&value).unwrap_err();
    assert_eq!(err.path(), Some("links"));

    let mut value = encode_value(&xcode());
    value.as_object_mut().unwrap().remove("supportedOSRange");
    assert_eq!(decode_value::<Xcode>(&value).unwrap_err().path(), Some("supportedOSRange"));

}

#[test]
fn malformed() {

    for text in ["", "{", r#"{"url":}"#, "[1, 2"] {
        match decode_str::<Link>(text) {
            Err(DecodeError::MalformedDocument { source: Some(_), .. }) => {}
            res => panic!("expected malformed document for {text:?}, got {res:?}"),
        }
    }

    assert!(matches!(xcodereleases::decode::<Version>(b"\xff\xfe"), Err(DecodeError::MalformedDocument { .. })));

}

#[test]
fn null_optional_fields() {
    let kind = decode_str::<ReleaseKind>(r#"{"name":"release","number":null}"#).unwrap();
    assert_eq!(kind, ReleaseKind::RELEASE);
    // Required fields can't be null.
    assert_eq!(type_mismatch::<ReleaseKind>(r#"{"name":null}"#).0, "name");
}
