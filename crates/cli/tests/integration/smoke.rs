use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn zero_schema<I, S>(cwd: impl AsRef<Path>, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_zero-schema");

    Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env_remove("ZERO_SCHEMA_LOG")
        .output()
        .expect("Failed to run zero-schema")
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/integration")
        .join(name)
}

fn temp_dir() -> tempfile::TempDir {
    let cargo_tmp_dir = env!("CARGO_TARGET_TMPDIR");
    let tmp_dir = tempfile::tempdir_in(cargo_tmp_dir).expect("Failed to create tempdir");
    assert!(tmp_dir.path().exists(), "tempdir not found");
    tmp_dir
}

#[test]
fn generate_writes_schema_file() {
    let tmp_dir = temp_dir();
    let output = tmp_dir.path().join("src/zero/schema.gen.ts");

    let result = zero_schema(
        tmp_dir.path(),
        [
            "generate".into(),
            fixture("blog.json").into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
            "--remap-columns".into(),
            "--exclude-table".into(),
            "AuditLog".into(),
        ],
    );

    assert!(
        result.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(output.is_file(), "No schema file written");

    let schema = fs::read_to_string(&output).unwrap();

    assert!(schema.contains("export const userTable = table(\"User\")\n  .from(\"users\")"));
    assert!(schema.contains("firstName: string().from(\"first_name\"),"));
    assert!(schema.contains("publishedAt: number().optional().from(\"published_at\"),"));
    assert!(schema.contains("role: enumeration<Role>(),"));
    assert!(schema.contains("export enum Role {\n  ADMIN = \"admin\",\n  MEMBER = \"member\",\n}"));
    assert!(!schema.contains("AuditLog"));
    assert!(schema.contains("export type Schema = typeof schema;"));
}

#[test]
fn generate_reads_config_file_from_working_directory() {
    let tmp_dir = temp_dir();

    fs::write(
        tmp_dir.path().join("zero-schema.toml"),
        "enumAsUnion = true\nexcludeTables = [\"AuditLog\"]\n",
    )
    .unwrap();

    let result = zero_schema(
        tmp_dir.path(),
        ["generate".into(), fixture("blog.json").into_os_string()],
    );

    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("export type Role = \"admin\" | \"member\";"));
    assert!(!stdout.contains("auditLogTable"));
}

#[test]
fn generate_prints_intermediate_representation() {
    let tmp_dir = temp_dir();

    let result = zero_schema(
        tmp_dir.path(),
        [
            "generate".into(),
            fixture("blog.json").into_os_string(),
            "--ir".into(),
        ],
    );

    assert!(result.status.success());

    let ir: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(ir["tables"][0]["tableName"], "User");
    assert_eq!(ir["tables"][0]["originalTableName"], "users");
    assert_eq!(ir["tables"][0]["primaryKey"], serde_json::json!(["id"]));
}

#[test]
fn failed_build_writes_nothing() {
    let tmp_dir = temp_dir();
    let output = tmp_dir.path().join("schema.gen.ts");

    let result = zero_schema(
        tmp_dir.path(),
        [
            "generate".into(),
            fixture("missing-primary-key.json").into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
        ],
    );

    assert!(!result.status.success());
    assert!(!output.exists(), "Schema file written despite the failure");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Orphan"), "{stderr}");
}

#[test]
fn unknown_config_keys_are_rejected() {
    let tmp_dir = temp_dir();
    let config = tmp_dir.path().join("custom.toml");
    fs::write(&config, "remapEverything = true\n").unwrap();

    let result = zero_schema(
        tmp_dir.path(),
        [
            "generate".into(),
            fixture("blog.json").into_os_string(),
            "--config".into(),
            config.into_os_string(),
        ],
    );

    assert!(!result.status.success());
}
