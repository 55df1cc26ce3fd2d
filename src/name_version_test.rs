//! NameVersionParser のユニットテスト

use super::*;

#[test]
fn extracts_name_and_version() {
    let result = NameVersionParser::default().parse("name-version.ext", "");
    assert_eq!(result.name, "name");
    assert_eq!(result.version, "version");
}

#[test]
fn extracts_name_if_no_version() {
    let result = NameVersionParser::default().parse("name.ext", "1.1");
    assert_eq!(result.name, "name");
    assert_eq!(result.version, "1.1");
}

#[test]
fn falls_back_to_default_version() {
    // 名前部分が一致しない
    let result = NameVersionParser::default().parse("no match.ext", "1.1");
    assert_eq!(result.name, "no match.ext");
    assert_eq!(result.version, "1.1");
}

#[test]
fn multi_dot_filename_falls_back() {
    let result = NameVersionParser::default().parse("app-1.2.3.ear", "1.0");
    assert_eq!(
        result,
        NameAndVersion {
            name: "app-1.2.3.ear".to_string(),
            version: "1.0".to_string(),
        }
    );
}

#[test]
fn default_pattern_requires_full_match() {
    // 前後に余計な文字があれば一致しない
    let parser = NameVersionParser::default();
    assert_eq!(parser.parse("_name.ext", "d").name, "_name.ext");
    assert_eq!(parser.parse("name.ext ", "d").name, "name.ext ");
}

#[test]
fn requires_one_matching_group() {
    let err = NameVersionParser::new(".+").unwrap_err();
    assert!(matches!(err, SfiError::NoCapturingGroup(ref p) if p == ".+"));
    assert!(err.is_configuration_error());
}

#[test]
fn non_capturing_group_does_not_count() {
    let err = NameVersionParser::new("(?:abc)").unwrap_err();
    assert!(matches!(err, SfiError::NoCapturingGroup(_)));
}

#[test]
fn rejects_invalid_regex() {
    let err = NameVersionParser::new("(unclosed").unwrap_err();
    assert!(matches!(err, SfiError::InvalidNameVersionPattern { .. }));
}

#[test]
fn uses_provided_name_version_regex() {
    // <word> <word>
    let result = NameVersionParser::new(r"(\w+) (\w+)")
        .unwrap()
        .parse("now match", "");
    assert_eq!(result.name, "now");
    assert_eq!(result.version, "match");
}

#[test]
fn handles_regex_with_one_matching_group() {
    let result = NameVersionParser::new(r"(\w+)").unwrap().parse("name", "1.1");
    assert_eq!(result.name, "name");
    assert_eq!(result.version, "1.1");
}

#[test]
fn empty_version_capture_uses_default() {
    let result = NameVersionParser::new(r"(\w+)-(\d*)\.ear")
        .unwrap()
        .parse("app-.ear", "2.0");
    assert_eq!(result.name, "app");
    assert_eq!(result.version, "2.0");
}

#[test]
fn unmatched_optional_version_group_uses_default() {
    let result = NameVersionParser::new(r"(\w+)(?:_v(\d+))?")
        .unwrap()
        .parse("app", "3");
    assert_eq!(result.name, "app");
    assert_eq!(result.version, "3");
}

#[test]
fn reports_pattern_and_group_count() {
    let parser = NameVersionParser::new(r"(\w+) (\w+)").unwrap();
    assert_eq!(parser.pattern(), r"(\w+) (\w+)");
    assert_eq!(parser.group_count(), 2);
    assert_eq!(NameVersionParser::default().group_count(), 2);
}

#[test]
fn convenience_constructors() {
    assert_eq!(
        NameAndVersion::from_filename("petclinic-2.0.war", "1.0"),
        NameAndVersion {
            name: "petclinic-2.0.war".to_string(),
            version: "1.0".to_string(),
        }
    );
    assert_eq!(
        NameAndVersion::from_filename("petclinic-2_0.war", "1.0").version,
        "2_0"
    );
    assert_eq!(
        NameAndVersion::from_filename_with_pattern("a b", "", r"(\w) (\w)")
            .unwrap()
            .version,
        "b"
    );
    assert!(NameAndVersion::from_filename_with_pattern("a", "", "a").is_err());
}
