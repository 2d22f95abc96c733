use crate::tests::utils::path_arg;
use crate::tests::utils::run;
use libgraphql_codegen::render::CodegenConfig;

#[tokio::test]
async fn init_writes_the_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("codegen.json");

    let result = run(&["init", "--path", path_arg(&config_path)]).await;

    assert!(result.is_success(), "{result:?}");
    let json = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(
        CodegenConfig::from_json(json.as_str()).unwrap(),
        CodegenConfig::default_for_init(),
    );
}

#[tokio::test]
async fn init_refuses_to_overwrite_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("codegen.json");
    std::fs::write(&config_path, "keep me").unwrap();

    let result = run(&["init", "--path", path_arg(&config_path)]).await;

    assert!(!result.is_success());
    assert!(result.stderr.unwrap().contains("--overwrite"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "keep me");
}

#[tokio::test]
async fn init_overwrites_with_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("codegen.json");
    std::fs::write(&config_path, "replace me").unwrap();

    let result = run(&["init", "--path", path_arg(&config_path), "--overwrite"]).await;

    assert!(result.is_success(), "{result:?}");
    let json = std::fs::read_to_string(&config_path).unwrap();
    assert!(CodegenConfig::from_json(json.as_str()).is_ok());
}

#[tokio::test]
async fn init_can_print_instead_of_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("codegen.json");

    let result = run(&["init", "--output", "print", "--path", path_arg(&config_path)]).await;

    assert!(result.is_success());
    let printed = result.stdout.unwrap();
    assert_eq!(
        CodegenConfig::from_json(printed.as_str()).unwrap(),
        CodegenConfig::default_for_init(),
    );
    assert!(!config_path.exists());
}
