use super::*;

#[test]
fn denylist_matches_known_prefixes() {
    assert!(is_denylisted("/etc/passwd"));
    assert!(is_denylisted("/bin/rm"));
    assert!(is_denylisted("/sbin/reboot"));
    assert!(is_denylisted("/usr/bin/env"));
    assert!(is_denylisted("/usr/sbin/useradd"));
    assert!(!is_denylisted("/home/user/scripts/check.sh"));
}

#[test]
fn denylisted_path_fails_validation_without_touching_disk() {
    let err = validate_script_path("/bin/rm").unwrap_err();
    assert!(matches!(err, SubprocessError::Denylisted(p) if p == "/bin/rm"));
}

#[test]
fn nonexistent_path_is_not_executable() {
    assert!(!is_executable(std::path::Path::new("/nonexistent/script.sh")));
}

#[cfg(unix)]
#[test]
fn non_executable_regular_file_fails_validation() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.sh");
    std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    let err = validate_script_path(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, SubprocessError::NotExecutable(_)));
}

#[cfg(unix)]
#[test]
fn executable_regular_file_passes_validation() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.sh");
    std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(validate_script_path(path.to_str().unwrap()).is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn run_with_timeout_captures_stdout_on_success() {
    let mut cmd = tokio::process::Command::new("sh");
    cmd.arg("-c").arg("echo ok");
    let output = run_with_timeout(cmd, Duration::from_secs(5), "test").await.unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ok");
}

#[cfg(unix)]
#[tokio::test]
async fn run_with_timeout_captures_nonzero_exit_and_stderr() {
    let mut cmd = tokio::process::Command::new("sh");
    cmd.arg("-c").arg("echo nope 1>&2; exit 3");
    let output = run_with_timeout(cmd, Duration::from_secs(5), "test").await.unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "nope");
}

#[cfg(unix)]
#[tokio::test]
async fn run_with_timeout_fails_on_timeout() {
    let mut cmd = tokio::process::Command::new("sh");
    cmd.arg("-c").arg("sleep 5");
    let err = run_with_timeout(cmd, Duration::from_millis(50), "test").await.unwrap_err();
    assert!(matches!(err, SubprocessError::TimedOut("test")));
}
