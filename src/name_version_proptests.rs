//! NameVersionParser のプロパティテスト

use super::*;
use proptest::prelude::*;

/// デフォルトパターンの名前部分に使える文字列（英数字）
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,16}".prop_map(|s| s)
}

/// バージョン部分に使える文字列（ドット以外）
fn version_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}".prop_map(|s| s)
}

fn ext_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,4}".prop_map(|s| s)
}

proptest! {
    /// name-version.ext は (name, version) に分解される
    #[test]
    fn prop_name_version_ext_is_split(
        name in name_strategy(),
        version in version_strategy(),
        ext in ext_strategy(),
        default in "[0-9.]{0,5}",
    ) {
        let filename = format!("{}-{}.{}", name, version, ext);
        let result = NameVersionParser::default().parse(&filename, &default);
        prop_assert_eq!(result.name, name);
        prop_assert_eq!(result.version, version);
    }

    /// name.ext はデフォルトバージョンになる
    #[test]
    fn prop_name_ext_uses_default_version(
        name in name_strategy(),
        ext in ext_strategy(),
        default in "[0-9.]{0,5}",
    ) {
        let filename = format!("{}.{}", name, ext);
        let result = NameVersionParser::default().parse(&filename, &default);
        prop_assert_eq!(result.name, name);
        prop_assert_eq!(result.version, default);
    }

    /// 一致しないファイル名はそのまま名前になる
    #[test]
    fn prop_non_matching_filename_is_identity(
        prefix in "[A-Za-z0-9]{1,8}",
        suffix in "[A-Za-z0-9]{1,8}",
        default in "[0-9.]{0,5}",
    ) {
        // 空白を含むと名前部分に一致しない
        let filename = format!("{} {}.ear", prefix, suffix);
        let result = NameVersionParser::default().parse(&filename, &default);
        prop_assert_eq!(result.name, filename);
        prop_assert_eq!(result.version, default);
    }

    /// 単一グループのパターンは常にデフォルトバージョンを返す
    #[test]
    fn prop_single_group_always_uses_default(
        input in "[A-Za-z0-9]{1,16}",
        default in "[0-9.]{1,5}",
    ) {
        let parser = NameVersionParser::new(r"(\w+)").unwrap();
        let result = parser.parse(&input, &default);
        prop_assert_eq!(result.name, input);
        prop_assert_eq!(result.version, default);
    }

    /// グループを持たないパターンは構築に失敗する
    #[test]
    fn prop_group_free_pattern_is_rejected(literal in "[a-z]{1,10}") {
        prop_assert!(NameVersionParser::new(&literal).is_err());
        let dot_plus = format!("{}.+", literal);
        prop_assert!(NameVersionParser::new(&dot_plus).is_err());
    }
}
