//! cargo-leptos passes the workspace `bin-features` to this package, so each
//! of them must be declared in its `[features]` table.

const WORKSPACE_MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../Cargo.toml"));
const SERVER_MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));

fn quoted_list(line: &str) -> Vec<&str> {
    line.split('"').skip(1).step_by(2).collect()
}

fn declared_features(manifest: &str) -> Vec<&str> {
    manifest
        .lines()
        .skip_while(|l| l.trim() != "[features]")
        .skip(1)
        .take_while(|l| !l.trim_start().starts_with('['))
        .filter_map(|l| l.split_once('=').map(|(name, _)| name.trim()))
        .collect()
}

#[test]
fn workspace_bin_features_are_declared_by_server() {
    let bin_features: Vec<&str> = WORKSPACE_MANIFEST
        .lines()
        .find(|l| l.trim_start().starts_with("bin-features"))
        .map(quoted_list)
        .unwrap_or_default();
    assert!(bin_features.contains(&"ssr"));

    let declared = declared_features(SERVER_MANIFEST);
    for feature in bin_features {
        assert!(declared.contains(&feature), "server does not declare feature `{feature}`");
    }
}
